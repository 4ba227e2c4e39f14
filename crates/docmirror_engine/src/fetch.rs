use std::path::Path;
use std::time::Duration;

use bytes::Bytes;
use engine_logging::engine_debug;
use futures_util::StreamExt;
use url::Url;

use crate::persist::{PersistError, StagedFile};
use crate::{FailureKind, FetchError, FetchOutcome};

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub user_agent: String,
    /// Upper bound for a single write when streaming a body to disk.
    pub chunk_size: usize,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            chunk_size: 8192,
        }
    }
}

/// Downloads one URL into `destination`.
///
/// On error nothing is left at `destination`.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str, destination: &Path) -> Result<FetchOutcome, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn write_bounded(&self, staged: &mut StagedFile, chunk: &Bytes) -> Result<(), FetchError> {
        for piece in chunk.chunks(self.settings.chunk_size.max(1)) {
            staged.write_chunk(piece).map_err(map_persist_error)?;
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str, destination: &Path) -> Result<FetchOutcome, FetchError> {
        let parsed = Url::parse(url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let final_url = response.url().to_string();
        let advertised = response.content_length().filter(|len| *len > 0);
        let mut staged = StagedFile::create(destination).map_err(map_persist_error)?;

        match advertised {
            Some(len) => {
                engine_debug!("streaming {} bytes from {}", len, final_url);
                let mut stream = response.bytes_stream();
                while let Some(chunk) = stream.next().await {
                    let chunk = chunk.map_err(map_reqwest_error)?;
                    self.write_bounded(&mut staged, &chunk)?;
                }
            }
            None => {
                engine_debug!("no content-length from {}, buffering body", final_url);
                let body = response.bytes().await.map_err(map_reqwest_error)?;
                staged.write_chunk(&body).map_err(map_persist_error)?;
            }
        }

        let bytes_written = staged.commit().map_err(map_persist_error)?;
        Ok(FetchOutcome {
            final_url,
            bytes_written,
            streamed: advertised.is_some(),
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}

fn map_persist_error(err: PersistError) -> FetchError {
    FetchError::new(FailureKind::Io, err.to_string())
}
