use std::path::Path;

use docmirror_core::{CatalogEntry, DownloadTarget, RunTally};

#[test]
fn skipped_entries_count_as_succeeded() {
    let mut tally = RunTally::new();
    tally.record_skipped();
    tally.record_success();
    tally.record_failure("https://example.org/missing");

    assert_eq!(tally.succeeded, 2);
    assert_eq!(tally.skipped, 1);
    assert_eq!(tally.attempted, 2);
    assert_eq!(tally.failed, 1);
    assert_eq!(tally.processed(), 3);
    assert_eq!(tally.failed_urls, vec!["https://example.org/missing".to_string()]);
}

#[test]
fn failures_keep_their_order() {
    let mut tally = RunTally::new();
    for url in ["https://a/1", "https://a/2", "https://a/1"] {
        tally.record_failure(url);
    }
    assert_eq!(tally.failed_urls, vec!["https://a/1", "https://a/2", "https://a/1"]);
}

#[test]
fn target_mirrors_source_and_category() {
    let entry = CatalogEntry {
        source: "SWGDE",
        category: "Video",
        url: "https://www.swgde.org/documents/published-by-committee/video/",
    };
    let target = DownloadTarget::resolve(Path::new("base"), &entry);
    assert_eq!(target.filename, "documents_published-by-committee_video.html");
    assert_eq!(
        target.destination,
        Path::new("base")
            .join("SWGDE")
            .join("Video")
            .join("documents_published-by-committee_video.html")
    );
    assert_eq!(target.url, entry.url);
    assert!(!target.exists());
}
