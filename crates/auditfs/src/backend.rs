// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Filesystem backend trait.
//!
//! Handles in [`crate::dir`] and [`crate::file`] carry an `AbsolutePath`
//! and an `Arc<dyn FileSystemBackend>`; every I/O call lands here.

use crate::error::Result;
use crate::path::AbsolutePath;
use async_trait::async_trait;
use std::pin::Pin;
use tokio::io::{AsyncRead, AsyncWrite};

/// Byte stream returned by `File::open_for_read`
pub type ReadStream = Pin<Box<dyn AsyncRead + Send>>;

/// Byte stream returned by `WritableFile::open_for_write`.
///
/// Call `shutdown()` before dropping it; writes are only guaranteed
/// visible after a successful shutdown.
pub type WriteStream = Pin<Box<dyn AsyncWrite + Send>>;

/// What a directory listing is asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// Storage substrate behind the handle types
#[async_trait]
pub trait FileSystemBackend: std::fmt::Debug + Send + Sync {
    /// Path every handle of this backend lives under
    fn root(&self) -> &AbsolutePath;

    async fn exists(&self, path: &AbsolutePath, kind: EntryKind) -> Result<bool>;

    /// Whether a file could be created or truncated at `path`.
    ///
    /// False when `path` is a directory or an ancestor is a file.
    async fn can_write(&self, path: &AbsolutePath) -> Result<bool>;

    /// Create or truncate the file, creating missing parents.
    async fn open_write(&self, path: &AbsolutePath) -> Result<WriteStream>;

    async fn open_read(&self, path: &AbsolutePath) -> Result<ReadStream>;

    /// Sorted names of the visible direct children of `path`.
    ///
    /// A missing directory lists as empty.
    async fn list(&self, path: &AbsolutePath, kind: EntryKind) -> Result<Vec<String>>;
}
