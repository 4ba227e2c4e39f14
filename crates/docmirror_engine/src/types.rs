use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    pub final_url: String,
    pub bytes_written: u64,
    /// True when the body was streamed chunk by chunk (content-length advertised).
    pub streamed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    Io,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Io => write!(f, "io error"),
        }
    }
}

/// Progress notifications emitted by the orchestrator while it walks the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent {
    RunStarted {
        total: usize,
    },
    DirectoryFailed {
        path: PathBuf,
        reason: String,
    },
    SourceStarted {
        source: String,
    },
    CategoryStarted {
        source: String,
        category: String,
    },
    Skipped {
        number: usize,
        total: usize,
        filename: String,
    },
    Downloading {
        number: usize,
        total: usize,
        url: String,
    },
    Saved {
        number: usize,
        filename: String,
        bytes: u64,
    },
    Failed {
        number: usize,
        url: String,
        reason: String,
    },
}
