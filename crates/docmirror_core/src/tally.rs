/// Counters and failures accumulated over one run.
///
/// `succeeded` includes entries skipped because their file already existed;
/// `attempted` only counts entries handed to the fetcher.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunTally {
    pub attempted: usize,
    pub succeeded: usize,
    pub skipped: usize,
    pub failed: usize,
    pub failed_urls: Vec<String>,
}

impl RunTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_skipped(&mut self) {
        self.skipped += 1;
        self.succeeded += 1;
    }

    pub fn record_success(&mut self) {
        self.attempted += 1;
        self.succeeded += 1;
    }

    pub fn record_failure(&mut self, url: impl Into<String>) {
        self.attempted += 1;
        self.failed += 1;
        self.failed_urls.push(url.into());
    }

    /// Number of entries accounted for so far.
    pub fn processed(&self) -> usize {
        self.succeeded + self.failed
    }
}
