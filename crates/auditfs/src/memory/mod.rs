// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Memory-based file system backend
//!
//! The tree lives in process memory and starts empty. Directories and
//! files come into existence only when a file is opened for writing, so
//! an unwritten path reports absent exactly like an unwritten path on
//! disk. Used for tests and for auditing without touching real storage.

mod directory;
mod file;

pub use directory::{Blocked, MemoryDirectory, MemoryNode};
pub use file::MemoryFile;

use crate::backend::{EntryKind, FileSystemBackend, ReadStream, WriteStream};
use crate::dir::Directory;
use crate::error::{Error, Result};
use crate::naming;
use crate::path::AbsolutePath;
use async_trait::async_trait;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

/// In-process tree rooted at a virtual absolute path
pub struct MemoryFileSystem {
    root: AbsolutePath,
    tree: Mutex<MemoryDirectory>,
}

impl MemoryFileSystem {
    /// Root a new, empty tree at `path` in the host naming strategy.
    ///
    /// # Errors
    ///
    /// `InvalidRoot` or `InvalidName` if `path` is not a valid absolute path.
    pub fn for_directory(path: &str) -> Result<Directory> {
        Ok(Self::with_root(AbsolutePath::parse(naming::host(), path)?))
    }

    /// Root a new, empty tree at `root`, in whatever syntax it was built with.
    #[must_use]
    pub fn with_root(root: AbsolutePath) -> Directory {
        let fs = Arc::new(Self {
            root: root.clone(),
            tree: Mutex::new(MemoryDirectory::new()),
        });
        diagnostics::debug!("Created memory file system at {root}", root: root.full_name());
        Directory::new(root, fs)
    }

    fn relative<'a>(&self, path: &'a AbsolutePath) -> Result<&'a [String]> {
        path.relative_to(&self.root)
            .ok_or_else(|| Error::outside_root(path.full_name()))
    }

    fn tree(&self, path: &AbsolutePath) -> Result<MutexGuard<'_, MemoryDirectory>> {
        self.tree
            .lock()
            .map_err(|_| io_error(path, io::Error::other("memory tree lock poisoned")))
    }
}

fn io_error(path: &AbsolutePath, source: io::Error) -> Error {
    Error::io(PathBuf::from(path.full_name()), source)
}

impl std::fmt::Debug for MemoryFileSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MemoryFileSystem({})", self.root)
    }
}

#[async_trait]
impl FileSystemBackend for MemoryFileSystem {
    fn root(&self) -> &AbsolutePath {
        &self.root
    }

    async fn exists(&self, path: &AbsolutePath, kind: EntryKind) -> Result<bool> {
        let segments = self.relative(path)?;
        if segments.is_empty() {
            // The root is the one directory that always exists.
            return Ok(kind == EntryKind::Directory);
        }
        Ok(self
            .tree(path)?
            .find(segments)
            .is_some_and(|node| node.kind() == kind))
    }

    async fn can_write(&self, path: &AbsolutePath) -> Result<bool> {
        let segments = self.relative(path)?;
        Ok(self.tree(path)?.check_writable(segments).is_ok())
    }

    async fn open_write(&self, path: &AbsolutePath) -> Result<WriteStream> {
        let segments = self.relative(path)?;
        let file = self
            .tree(path)?
            .create_file(segments)
            .map_err(|blocked| {
                let kind = match blocked {
                    Blocked::AncestorIsFile(_) => io::ErrorKind::NotADirectory,
                    Blocked::TargetIsDirectory => io::ErrorKind::IsADirectory,
                };
                io_error(path, io::Error::new(kind, format!("{blocked:?}")))
            })?;
        diagnostics::debug!("Opened memory file {path} for write", path: path.full_name());
        Ok(Box::pin(file.writer()))
    }

    async fn open_read(&self, path: &AbsolutePath) -> Result<ReadStream> {
        let segments = self.relative(path)?;
        let content = match self.tree(path)?.find(segments) {
            Some(MemoryNode::File(file)) => file.content().map_err(|e| io_error(path, e))?,
            Some(MemoryNode::Directory(_)) => {
                return Err(io_error(path, io::ErrorKind::IsADirectory.into()));
            }
            None => return Err(io_error(path, io::ErrorKind::NotFound.into())),
        };
        Ok(Box::pin(io::Cursor::new(content)))
    }

    async fn list(&self, path: &AbsolutePath, kind: EntryKind) -> Result<Vec<String>> {
        let segments = self.relative(path)?;
        Ok(self
            .tree(path)?
            .find_directory(segments)
            .map(|dir| dir.names(kind))
            .unwrap_or_default())
    }
}
