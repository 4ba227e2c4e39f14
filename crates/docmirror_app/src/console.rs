use docmirror_engine::{ProgressSink, RunEvent};

const RULE_WIDTH: usize = 80;

/// Prints run progress to stdout as it happens.
pub struct ConsoleSink;

impl ProgressSink for ConsoleSink {
    fn emit(&self, event: RunEvent) {
        print!("{}", format_event(&event));
    }
}

pub fn banner(started: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("{rule}\nDigital Forensics Documents Downloader\n{rule}\nStarted: {started}\n\n")
}

pub fn format_event(event: &RunEvent) -> String {
    match event {
        RunEvent::RunStarted { total } => {
            format!("Total documents to download: {total}\n\n{}\n\n", "=".repeat(RULE_WIDTH))
        }
        RunEvent::DirectoryFailed { path, reason } => {
            format!("  ✗ Could not create {}: {reason}\n", path.display())
        }
        RunEvent::SourceStarted { source } => {
            let rule = "=".repeat(RULE_WIDTH);
            format!("\n{rule}\nSOURCE: {source}\n{rule}\n\n")
        }
        RunEvent::CategoryStarted { category, .. } => {
            format!("\nCategory: {category}\n{}\n", "-".repeat(RULE_WIDTH))
        }
        RunEvent::Skipped {
            number,
            total,
            filename,
        } => format!("[{number}/{total}] Skipping (already exists): {filename}\n\n"),
        RunEvent::Downloading { number, total, url } => {
            format!("[{number}/{total}] Downloading: {url}\n")
        }
        RunEvent::Saved {
            filename, bytes, ..
        } => format!("  ✓ Saved: {filename} ({} bytes)\n\n", group_thousands(*bytes)),
        RunEvent::Failed { reason, .. } => format!("  ✗ Error downloading: {reason}\n\n"),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
