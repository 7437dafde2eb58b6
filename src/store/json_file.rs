//! Flat-file JSON persistence.
//!
//! # Responsibilities
//! - Read a resource collection from `<data_dir>/<resource>.json`
//! - Write a full collection back, pretty-printed
//! - Treat a missing file as an empty collection
//!
//! # Design Decisions
//! - Whole-file read/write, no record-level access
//! - No locking: concurrent read-modify-write is the caller's risk
//! - Pretty-printed output keeps the files hand-editable

use std::io::ErrorKind;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Flat-file JSON store rooted at a data directory.
///
/// Each resource is one JSON file holding an array of records.
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    /// Create a store rooted at the given directory.
    ///
    /// The directory is created lazily on first write.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn resource_path(&self, resource: &str) -> PathBuf {
        self.data_dir.join(format!("{resource}.json"))
    }

    /// Read every record of a resource collection.
    ///
    /// A missing file is an empty collection, not an error.
    pub async fn read_all<T>(&self, resource: &str) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        let path = self.resource_path(resource);
        let data = match tokio::fs::read(&path).await {
            Ok(data) => data,
            Err(source) if source.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Resource file absent, treating as empty");
                return Ok(Vec::new());
            }
            Err(source) => return Err(StoreError::Read { path, source }),
        };

        serde_json::from_slice(&data).map_err(|source| StoreError::Json { path, source })
    }

    /// Replace a resource collection with the given records.
    pub async fn write_all<T>(&self, resource: &str, records: &[T]) -> Result<(), StoreError>
    where
        T: Serialize,
    {
        let path = self.resource_path(resource);
        let data = serde_json::to_vec_pretty(records).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;

        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|source| StoreError::Write {
                path: path.clone(),
                source,
            })?;

        tokio::fs::write(&path, data)
            .await
            .map_err(|source| StoreError::Write { path, source })
    }
}
