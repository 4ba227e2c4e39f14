//! Docmirror engine: fetching, persistence and the download loop.
mod fetch;
mod orchestrator;
mod pacing;
mod persist;
mod progress;
mod report;
mod types;

pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher, DEFAULT_USER_AGENT};
pub use orchestrator::{Orchestrator, OrchestratorSettings, RunError};
pub use pacing::{Pacer, SleepPacer};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError, StagedFile};
pub use progress::{ChannelProgressSink, NullProgressSink, ProgressSink};
pub use report::{render_log, render_summary, write_log, RunSummary, LOG_FILENAME};
pub use types::{FailureKind, FetchError, FetchOutcome, RunEvent};
