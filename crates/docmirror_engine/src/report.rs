use std::fmt::Write;
use std::path::{Path, PathBuf};

use docmirror_core::RunTally;

use crate::persist::{AtomicFileWriter, PersistError};

pub const LOG_FILENAME: &str = "download_log.txt";

const RULE_WIDTH: usize = 80;

/// Everything the reporter needs about a finished run. Timestamps are
/// pre-formatted by the caller so rendering stays deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub tally: RunTally,
    pub started: String,
    pub completed: String,
    pub base_dir: PathBuf,
}

/// Console summary printed at the end of a run.
pub fn render_summary(summary: &RunSummary) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let tally = &summary.tally;
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "DOWNLOAD SUMMARY");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Total files:        {}", summary.total);
    let _ = writeln!(
        out,
        "Successfully saved: {} ({} already present)",
        tally.succeeded, tally.skipped
    );
    let _ = writeln!(out, "Failed:             {}", tally.failed);
    let _ = writeln!(out, "Started:            {}", summary.started);
    let _ = writeln!(out, "Completed:          {}", summary.completed);

    if !tally.failed_urls.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Failed URLs:");
        for url in &tally.failed_urls {
            let _ = writeln!(out, "  - {url}");
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "All documents saved to: {}",
        display_location(&summary.base_dir).display()
    );
    let _ = writeln!(out, "{rule}");
    out
}

/// Plain-text run log stored next to the mirrored tree.
pub fn render_log(summary: &RunSummary) -> String {
    let tally = &summary.tally;
    let mut out = String::new();
    let _ = writeln!(out, "Download Log - {}", summary.completed);
    let _ = writeln!(
        out,
        "Total: {} | Success: {} | Failed: {}",
        summary.total, tally.succeeded, tally.failed
    );
    let _ = writeln!(out);
    if !tally.failed_urls.is_empty() {
        let _ = writeln!(out, "Failed URLs:");
        for url in &tally.failed_urls {
            let _ = writeln!(out, "  {url}");
        }
    }
    out
}

/// Writes `download_log.txt` into the base directory.
pub fn write_log(summary: &RunSummary) -> Result<PathBuf, PersistError> {
    let writer = AtomicFileWriter::new(summary.base_dir.clone());
    writer.write(LOG_FILENAME, &render_log(summary))
}

fn display_location(dir: &Path) -> PathBuf {
    std::path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf())
}
