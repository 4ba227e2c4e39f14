use std::path::{Path, PathBuf};

use crate::{derive_filename, CatalogEntry};

/// Where one catalog entry is stored: `base/source/category/<derived filename>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    pub url: String,
    pub filename: String,
    pub destination: PathBuf,
}

impl DownloadTarget {
    pub fn resolve(base_dir: &Path, entry: &CatalogEntry<'_>) -> Self {
        let filename = derive_filename(entry.url);
        let destination = base_dir
            .join(entry.source)
            .join(entry.category)
            .join(&filename);
        Self {
            url: entry.url.to_string(),
            filename,
            destination,
        }
    }

    pub fn exists(&self) -> bool {
        self.destination.exists()
    }
}
