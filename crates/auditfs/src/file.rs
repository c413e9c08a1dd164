// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::backend::{EntryKind, FileSystemBackend, ReadStream, WriteStream};
use crate::dir::Directory;
use crate::error::{Error, Result};
use crate::path::AbsolutePath;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// A file location on some backend. Existence is checked explicitly.
#[derive(Clone, Debug)]
pub struct File {
    path: AbsolutePath,
    backend: Arc<dyn FileSystemBackend>,
}

/// Permission to write a file, granted by [`File::request_write_access`]
#[derive(Clone, Debug)]
pub struct WritableFile {
    file: File,
}

impl File {
    pub(crate) fn new(path: AbsolutePath, backend: Arc<dyn FileSystemBackend>) -> Self {
        Self { path, backend }
    }

    #[must_use]
    pub fn path(&self) -> &AbsolutePath {
        &self.path
    }

    #[must_use]
    pub fn full_name(&self) -> &str {
        self.path.full_name()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.path.name().unwrap_or_default()
    }

    /// Directory containing this file
    #[must_use]
    pub fn directory(&self) -> Option<Directory> {
        self.path
            .parent()
            .map(|parent| Directory::new(parent, self.backend.clone()))
    }

    pub async fn exists(&self) -> Result<bool> {
        self.backend.exists(&self.path, EntryKind::File).await
    }

    /// `None` when the backend will not allow writing here, for example
    /// because a directory already has this name.
    pub async fn request_write_access(&self) -> Result<Option<WritableFile>> {
        if self.backend.can_write(&self.path).await? {
            Ok(Some(WritableFile { file: self.clone() }))
        } else {
            diagnostics::debug!("Write access denied for {path}", path: self.full_name());
            Ok(None)
        }
    }

    pub async fn open_for_read(&self) -> Result<ReadStream> {
        self.backend.open_read(&self.path).await
    }

    /// Read the whole file into memory
    pub async fn read_to_end(&self) -> Result<Vec<u8>> {
        let mut reader = self.open_for_read().await?;
        let mut buffer = Vec::new();
        let _ = reader
            .read_to_end(&mut buffer)
            .await
            .map_err(|e| self.io_error(e))?;
        Ok(buffer)
    }

    fn io_error(&self, source: std::io::Error) -> Error {
        Error::io(PathBuf::from(self.full_name()), source)
    }
}

impl WritableFile {
    #[must_use]
    pub fn file(&self) -> &File {
        &self.file
    }

    /// Create or truncate the file and return a stream to it.
    ///
    /// The caller owns the stream and must `shutdown()` it;
    /// [`WritableFile::write_all`] does that on every path.
    pub async fn open_for_write(&self) -> Result<WriteStream> {
        self.file.backend.open_write(&self.file.path).await
    }

    /// Write `content` as the whole file.
    ///
    /// The stream is shut down before returning even if the write fails;
    /// the write error wins over a shutdown error.
    pub async fn write_all(&self, content: &[u8]) -> Result<()> {
        let mut stream = self.open_for_write().await?;
        let written = stream.write_all(content).await;
        let closed = stream.shutdown().await;
        drop(stream);

        written.map_err(|e| self.file.io_error(e))?;
        closed.map_err(|e| self.file.io_error(e))?;

        diagnostics::debug!("Wrote {size} bytes to {path}", size: content.len(), path: self.file.full_name());
        Ok(())
    }
}
