//! Local orb document loader

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// The orb document could not be read from disk
#[derive(Error, Debug)]
#[error("Could not load orb file at {}: {source}", .path.display())]
pub struct DocumentError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Reads orb documents from the local file system.
#[derive(Debug, Clone, Default)]
pub struct LocalDocumentLoader;

impl LocalDocumentLoader {
    pub fn new() -> Self {
        Self
    }

    /// Read the whole file as UTF-8 text.
    pub fn load(&self, path: &Path) -> Result<String, DocumentError> {
        let content = fs::read_to_string(path).map_err(|source| DocumentError {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded {} ({} bytes)", path.display(), content.len());
        Ok(content)
    }
}
