mod app;
mod config;
mod console;
mod logging;

use std::process::ExitCode;

use engine_logging::engine_error;

use app::Completion;
use config::RunConfig;

/// Conventional exit status for a process stopped by SIGINT.
const EXIT_INTERRUPTED: u8 = 130;

fn main() -> ExitCode {
    let config = RunConfig::default();
    logging::initialize(&config.engine_log_file);

    match app::run(config) {
        Ok(Completion::Finished) => ExitCode::SUCCESS,
        Ok(Completion::Interrupted) => {
            println!("\n\nDownload interrupted by user.");
            ExitCode::from(EXIT_INTERRUPTED)
        }
        Err(err) => {
            engine_error!("run failed: {:#}", err);
            println!("\n\nUnexpected error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
