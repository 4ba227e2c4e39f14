use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("destination has no parent directory: {0}")]
    NoParent(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure output directory exists; create it (and parents) if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::OutputDir(format!(
                "{} is not a directory",
                dir.display()
            )));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    }
    // Basic writability probe: try creating a temp file.
    NamedTempFile::new_in(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    Ok(())
}

/// A download in progress: bytes land in a temp file next to `destination`
/// and only appear under the final name after [`StagedFile::commit`].
///
/// Dropping an uncommitted `StagedFile` removes the temp file.
pub struct StagedFile {
    tmp: NamedTempFile,
    destination: PathBuf,
    written: u64,
}

impl StagedFile {
    pub fn create(destination: &Path) -> Result<Self, PersistError> {
        let dir = destination
            .parent()
            .ok_or_else(|| PersistError::NoParent(destination.to_path_buf()))?;
        let tmp = NamedTempFile::new_in(dir)?;
        Ok(Self {
            tmp,
            destination: destination.to_path_buf(),
            written: 0,
        })
    }

    pub fn write_chunk(&mut self, chunk: &[u8]) -> Result<(), PersistError> {
        self.tmp.write_all(chunk)?;
        self.written += chunk.len() as u64;
        Ok(())
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    /// Flushes, syncs and renames into place, replacing an existing file.
    pub fn commit(mut self) -> Result<u64, PersistError> {
        self.tmp.flush()?;
        self.tmp.as_file_mut().sync_all()?;
        self.tmp
            .persist(&self.destination)
            .map_err(|e| PersistError::Io(e.error))?;
        Ok(self.written)
    }
}

/// Atomically write text to `{dir}/{filename}` by writing a temp file then renaming.
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn write(&self, filename: &str, content: &str) -> Result<PathBuf, PersistError> {
        ensure_output_dir(&self.dir)?;

        let target = self.dir.join(filename);
        let mut staged = StagedFile::create(&target)?;
        staged.write_chunk(content.as_bytes())?;
        staged.commit()?;
        Ok(target)
    }
}
