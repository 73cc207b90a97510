//! Dataset source abstraction and metadata.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::{CompetentiesError, Result};

/// Metadata about a dataset file that has been read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
}

impl SourceMetadata {
    fn new(path: PathBuf, hash: String, size_bytes: u64) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
        }
    }
}

/// A dataset together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedDataset<T> {
    pub data: T,
    pub source: SourceMetadata,
}

/// A read-only JSON dataset file.
#[derive(Debug, Clone)]
pub struct DatasetSource {
    path: PathBuf,
}

impl DatasetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The resolved location of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and deserialize the whole file.
    ///
    /// The contents are trusted to follow the dataset shape; anything that does
    /// not deserialize is reported as [`CompetentiesError::InvalidDataFile`].
    pub fn load<T: DeserializeOwned>(&self) -> Result<LoadedDataset<T>> {
        let path = self.path.as_path();

        let mut file = File::open(path).map_err(|e| self.read_error(e))?;
        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .map_err(|e| self.read_error(e))?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let data = serde_json::from_slice(&contents).map_err(|source| {
            CompetentiesError::InvalidDataFile {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let source = SourceMetadata::new(path.to_path_buf(), hash, contents.len() as u64);
        debug!(
            path = %source.path.display(),
            hash = %source.hash,
            size_bytes = source.size_bytes,
            "loaded dataset"
        );

        Ok(LoadedDataset { data, source })
    }

    fn read_error(&self, source: std::io::Error) -> CompetentiesError {
        match source.kind() {
            ErrorKind::NotFound => CompetentiesError::DataFileNotFound {
                path: self.path.clone(),
            },
            _ => CompetentiesError::Io {
                path: self.path.clone(),
                source,
            },
        }
    }
}
