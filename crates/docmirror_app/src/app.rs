use std::future::Future;

use anyhow::Context;
use docmirror_core::{forensics_catalog, Catalog};
use docmirror_engine::{
    render_summary, write_log, Orchestrator, ProgressSink, ReqwestFetcher, RunSummary,
};
use engine_logging::{engine_info, engine_warn};

use crate::config::RunConfig;
use crate::console::{self, ConsoleSink};

/// How a run ended when no error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Finished,
    Interrupted,
}

/// Mirrors the built-in catalog on a single-threaded runtime, racing against Ctrl-C.
pub fn run(config: RunConfig) -> anyhow::Result<Completion> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(async move {
        let catalog = forensics_catalog();
        run_until(&config, &catalog, &ConsoleSink, ctrl_c()).await
    })
}

/// Mirrors `catalog` until it is done or `shutdown` resolves, whichever comes first.
///
/// An interrupted run leaves already saved files in place and writes no run log.
pub async fn run_until(
    config: &RunConfig,
    catalog: &Catalog,
    sink: &dyn ProgressSink,
    shutdown: impl Future<Output = ()>,
) -> anyhow::Result<Completion> {
    tokio::select! {
        result = mirror(config, catalog, sink) => result.map(|()| Completion::Finished),
        () = shutdown => {
            engine_warn!("interrupted by user");
            Ok(Completion::Interrupted)
        }
    }
}

/// Resolves on Ctrl-C; never resolves if the signal handler cannot be installed.
async fn ctrl_c() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        engine_warn!("cannot listen for Ctrl-C: {}", err);
        std::future::pending::<()>().await;
    }
}

async fn mirror(
    config: &RunConfig,
    catalog: &Catalog,
    sink: &dyn ProgressSink,
) -> anyhow::Result<()> {
    let started = timestamp();
    print!("{}", console::banner(&started));

    let fetcher =
        ReqwestFetcher::new(config.fetch_settings()).context("failed to build HTTP client")?;
    let orchestrator = Orchestrator::new(config.orchestrator_settings(), fetcher, config.pacer());

    println!(
        "Creating directory structure in '{}/'...\n",
        config.base_dir.display()
    );
    let tally = orchestrator
        .run(catalog, sink)
        .await
        .context("download run aborted")?;

    let summary = RunSummary {
        total: catalog.len(),
        tally,
        started,
        completed: timestamp(),
        base_dir: config.base_dir.clone(),
    };
    print!("{}", render_summary(&summary));

    match write_log(&summary) {
        Ok(path) => {
            engine_info!("run log written to {:?}", path);
            println!("\nLog file created: {}", path.display());
        }
        Err(err) => {
            engine_warn!("failed to write run log: {}", err);
            println!("\nCould not write log file: {err}");
        }
    }
    Ok(())
}

fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
