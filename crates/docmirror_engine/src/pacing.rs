use std::time::Duration;

/// Wait inserted between two catalog items.
#[async_trait::async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self);
}

#[derive(Debug, Clone, Copy)]
pub struct SleepPacer {
    delay: Duration,
}

impl SleepPacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SleepPacer {
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}

#[async_trait::async_trait]
impl Pacer for SleepPacer {
    async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}
