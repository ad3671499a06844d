//! File system repository

use crate::domain::PostRecord;
use crate::error::{PostStoreError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract source of post records
pub trait PostRepository {
    /// Where the records come from, for diagnostics
    fn location(&self) -> &Path;

    /// Read and parse every record, in document order
    fn load(&self) -> Result<Vec<PostRecord>>;
}

/// Reads records from a JSON array on disk
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    pub path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: PathBuf) -> Self {
        JsonFileRepository { path }
    }

    /// Parse a JSON document; `path` is only used in the error
    pub fn parse(path: &Path, contents: &str) -> Result<Vec<PostRecord>> {
        serde_json::from_str(contents).map_err(|e| PostStoreError::malformed(path, e))
    }
}

impl PostRepository for JsonFileRepository {
    fn location(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<PostRecord>> {
        let contents =
            fs::read_to_string(&self.path).map_err(|source| PostStoreError::SourceUnavailable {
                path: self.path.clone(),
                source,
            })?;

        let records = Self::parse(&self.path, &contents)?;
        tracing::debug!(
            path = %self.path.display(),
            count = records.len(),
            "loaded post records"
        );
        Ok(records)
    }
}
