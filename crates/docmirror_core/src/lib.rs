//! Docmirror core: catalog data, filename derivation and run bookkeeping.
mod builtin;
mod catalog;
mod filename;
mod tally;
mod target;

pub use builtin::forensics_catalog;
pub use catalog::{Catalog, CatalogEntry, CategorySection, SourceSection, StaticCatalog};
pub use filename::{derive_filename, DEFAULT_EXTENSION};
pub use tally::RunTally;
pub use target::DownloadTarget;
