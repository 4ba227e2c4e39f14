//! Fixed run configuration. There is no config file or command line; every
//! tunable lives here.

use std::path::PathBuf;
use std::time::Duration;

use docmirror_engine::{FetchSettings, OrchestratorSettings, SleepPacer, DEFAULT_USER_AGENT};

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub base_dir: PathBuf,
    pub delay: Duration,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub user_agent: String,
    /// Diagnostic log, separate from the run log written into `base_dir`.
    pub engine_log_file: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("Digital_Forensics_Documents"),
            delay: Duration::from_secs(2),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            engine_log_file: PathBuf::from("./engine.log"),
        }
    }
}

impl RunConfig {
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: self.connect_timeout,
            request_timeout: self.request_timeout,
            user_agent: self.user_agent.clone(),
            ..FetchSettings::default()
        }
    }

    pub fn orchestrator_settings(&self) -> OrchestratorSettings {
        OrchestratorSettings {
            base_dir: self.base_dir.clone(),
        }
    }

    pub fn pacer(&self) -> SleepPacer {
        SleepPacer::new(self.delay)
    }
}
