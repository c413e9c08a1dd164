// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error carried out of a document serializer
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised by paths, handles, backends and collections
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The path does not start with a root the naming strategy accepts
    #[error("Invalid path root: {0}")]
    InvalidRoot(String),

    /// A path segment or file name is not allowed by the naming strategy
    #[error("Invalid name: '{0}'")]
    InvalidName(String),

    /// A handle was passed to a backend rooted somewhere else
    #[error("Path is outside the file system root: {0}")]
    OutsideRoot(String),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to deserialize {path}: {source}")]
    Deserialize {
        path: String,
        #[source]
        source: BoxError,
    },

    #[error("Failed to serialize {path}: {source}")]
    Serialize {
        path: String,
        #[source]
        source: BoxError,
    },
}

impl Error {
    pub fn invalid_root<S: AsRef<str>>(path: S) -> Self {
        Error::InvalidRoot(path.as_ref().to_string())
    }

    pub fn invalid_name<S: AsRef<str>>(name: S) -> Self {
        Error::InvalidName(name.as_ref().to_string())
    }

    pub fn outside_root<S: AsRef<str>>(path: S) -> Self {
        Error::OutsideRoot(path.as_ref().to_string())
    }

    pub fn io<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn deserialize<S: AsRef<str>>(path: S, source: BoxError) -> Self {
        Error::Deserialize {
            path: path.as_ref().to_string(),
            source,
        }
    }

    pub fn serialize<S: AsRef<str>>(path: S, source: BoxError) -> Self {
        Error::Serialize {
            path: path.as_ref().to_string(),
            source,
        }
    }
}
