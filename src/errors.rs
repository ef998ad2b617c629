// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error taxonomy for a formatting run.
//!
//! Every variant is fatal to the run that produced it. Nothing is retried and
//! nothing already written is rolled back.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    /// Unsupported locale code, unknown record type or unusable config file.
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("input file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("malformed input in {}: {detail}", path.display())]
    MalformedInput { path: PathBuf, detail: String },
    #[error("i/o failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FormatError {
    /// Classify an I/O failure on `path`, promoting a missing file to `NotFound`.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            FormatError::NotFound { path }
        } else {
            FormatError::Io { path, source }
        }
    }

    pub fn malformed(path: impl Into<PathBuf>, detail: impl ToString) -> Self {
        FormatError::MalformedInput {
            path: path.into(),
            detail: detail.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FormatError>;
