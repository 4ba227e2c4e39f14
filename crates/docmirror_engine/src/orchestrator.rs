//! Single pass over the catalog: directory setup, skip-if-present, fetch, pace.

use std::path::PathBuf;

use docmirror_core::{Catalog, CatalogEntry, DownloadTarget, RunTally};
use engine_logging::{clear_current_item, engine_info, engine_warn, set_current_item};
use thiserror::Error;

use crate::fetch::Fetcher;
use crate::pacing::Pacer;
use crate::persist::{ensure_output_dir, PersistError};
use crate::progress::ProgressSink;
use crate::RunEvent;

#[derive(Debug, Clone)]
pub struct OrchestratorSettings {
    pub base_dir: PathBuf,
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("cannot prepare base directory {path}: {source}")]
    BaseDir {
        path: PathBuf,
        #[source]
        source: PersistError,
    },
}

pub struct Orchestrator<F, P> {
    settings: OrchestratorSettings,
    fetcher: F,
    pacer: P,
}

impl<F: Fetcher, P: Pacer> Orchestrator<F, P> {
    pub fn new(settings: OrchestratorSettings, fetcher: F, pacer: P) -> Self {
        Self {
            settings,
            fetcher,
            pacer,
        }
    }

    /// Walks `catalog` once. Item failures end up in the tally; only an unusable
    /// base directory aborts the run.
    pub async fn run(
        &self,
        catalog: &Catalog,
        sink: &dyn ProgressSink,
    ) -> Result<RunTally, RunError> {
        let base_dir = &self.settings.base_dir;
        ensure_output_dir(base_dir).map_err(|source| RunError::BaseDir {
            path: base_dir.clone(),
            source,
        })?;
        self.prepare_directories(catalog, sink);

        let total = catalog.len();
        sink.emit(RunEvent::RunStarted { total });
        engine_info!("starting run over {} documents into {:?}", total, base_dir);

        let mut tally = RunTally::new();
        let mut number = 0;
        for source in catalog.sources() {
            sink.emit(RunEvent::SourceStarted {
                source: source.name.clone(),
            });
            for category in &source.categories {
                sink.emit(RunEvent::CategoryStarted {
                    source: source.name.clone(),
                    category: category.name.clone(),
                });
                for url in &category.urls {
                    number += 1;
                    set_current_item(number, total);
                    let entry = CatalogEntry {
                        source: &source.name,
                        category: &category.name,
                        url,
                    };
                    let target = DownloadTarget::resolve(base_dir, &entry);
                    self.process(&target, number, total, &mut tally, sink).await;

                    if number < total {
                        self.pacer.pause().await;
                    }
                }
            }
        }
        clear_current_item();

        engine_info!(
            "run finished: {} succeeded ({} skipped), {} failed",
            tally.succeeded,
            tally.skipped,
            tally.failed
        );
        Ok(tally)
    }

    fn prepare_directories(&self, catalog: &Catalog, sink: &dyn ProgressSink) {
        for (source, category) in catalog.category_paths() {
            let dir = self.settings.base_dir.join(source).join(category);
            if let Err(err) = ensure_output_dir(&dir) {
                engine_warn!("failed to create {:?}: {}", dir, err);
                sink.emit(RunEvent::DirectoryFailed {
                    path: dir,
                    reason: err.to_string(),
                });
            }
        }
    }

    async fn process(
        &self,
        target: &DownloadTarget,
        number: usize,
        total: usize,
        tally: &mut RunTally,
        sink: &dyn ProgressSink,
    ) {
        if target.exists() {
            engine_info!("skipping existing {:?}", target.destination);
            tally.record_skipped();
            sink.emit(RunEvent::Skipped {
                number,
                total,
                filename: target.filename.clone(),
            });
            return;
        }

        sink.emit(RunEvent::Downloading {
            number,
            total,
            url: target.url.clone(),
        });
        match self.fetcher.fetch(&target.url, &target.destination).await {
            Ok(outcome) => {
                engine_info!(
                    "saved {} ({} bytes, final url {})",
                    target.filename,
                    outcome.bytes_written,
                    outcome.final_url
                );
                tally.record_success();
                sink.emit(RunEvent::Saved {
                    number,
                    filename: target.filename.clone(),
                    bytes: outcome.bytes_written,
                });
            }
            Err(err) => {
                engine_warn!("download of {} failed: {}", target.url, err);
                tally.record_failure(target.url.clone());
                sink.emit(RunEvent::Failed {
                    number,
                    url: target.url.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }
}
