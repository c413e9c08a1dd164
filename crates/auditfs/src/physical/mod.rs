// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Physical -- host file system as a backend
//!
//! Maps an `AbsolutePath` tree onto a host directory using `tokio::fs`.
//! The root handed to [`PhysicalFileSystem::for_directory`] becomes the
//! root of every handle; nothing outside it is reachable because path
//! segments can never be `..`.

#[cfg(test)]
mod tests;

use crate::backend::{EntryKind, FileSystemBackend, ReadStream, WriteStream};
use crate::dir::Directory;
use crate::error::{Error, Result};
use crate::naming;
use crate::path::AbsolutePath;
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A backend whose handles are thin references to host paths
#[derive(Debug)]
pub struct PhysicalFileSystem {
    root: AbsolutePath,
    host_root: PathBuf,
}

impl PhysicalFileSystem {
    /// Root a backend at an absolute host directory.
    ///
    /// The directory does not have to exist yet; it is created when the
    /// first file below it is written.
    ///
    /// # Errors
    ///
    /// `InvalidRoot` if the path is not absolute in the host syntax or is
    /// not valid UTF-8.
    pub fn for_directory<P: AsRef<Path>>(host_root: P) -> Result<Directory> {
        let host_root = host_root.as_ref();
        let text = host_root
            .to_str()
            .ok_or_else(|| Error::invalid_root(host_root.to_string_lossy()))?;
        let root = AbsolutePath::parse(naming::host(), text)?;

        diagnostics::debug!("Rooted physical file system at {root}", root: root.full_name());

        let fs = Arc::new(Self {
            root: root.clone(),
            host_root: host_root.to_path_buf(),
        });
        Ok(Directory::new(root, fs))
    }

    fn host_path(&self, path: &AbsolutePath) -> Result<PathBuf> {
        path.to_host_path(&self.root, &self.host_root)
    }

    /// Metadata, with "nothing there" folded into `None`
    async fn probe(path: &Path) -> Result<Option<std::fs::Metadata>> {
        match tokio::fs::metadata(path).await {
            Ok(metadata) => Ok(Some(metadata)),
            Err(e) if is_absent(&e) => Ok(None),
            Err(e) => Err(Error::io(path, e)),
        }
    }
}

fn is_absent(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

#[async_trait]
impl FileSystemBackend for PhysicalFileSystem {
    fn root(&self) -> &AbsolutePath {
        &self.root
    }

    async fn exists(&self, path: &AbsolutePath, kind: EntryKind) -> Result<bool> {
        let host = self.host_path(path)?;
        Ok(Self::probe(&host).await?.is_some_and(|m| match kind {
            EntryKind::File => m.is_file(),
            EntryKind::Directory => m.is_dir(),
        }))
    }

    async fn can_write(&self, path: &AbsolutePath) -> Result<bool> {
        if path.relative_to(&self.root).is_some_and(<[String]>::is_empty) {
            return Ok(false);
        }
        let host = self.host_path(path)?;
        if let Some(metadata) = Self::probe(&host).await? {
            return Ok(!metadata.is_dir());
        }

        // The nearest existing ancestor decides.
        let mut ancestor = host.parent();
        while let Some(dir) = ancestor {
            if let Some(metadata) = Self::probe(dir).await? {
                return Ok(metadata.is_dir());
            }
            if dir == self.host_root {
                break;
            }
            ancestor = dir.parent();
        }
        Ok(true)
    }

    async fn open_write(&self, path: &AbsolutePath) -> Result<WriteStream> {
        let host = self.host_path(path)?;
        if let Some(parent) = host.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| Error::io(parent, e))?;
        }
        let file = tokio::fs::File::create(&host)
            .await
            .map_err(|e| Error::io(&host, e))?;

        diagnostics::debug!("Opened {path} for write", path: host.display().to_string());
        Ok(Box::pin(file))
    }

    async fn open_read(&self, path: &AbsolutePath) -> Result<ReadStream> {
        let host = self.host_path(path)?;
        let file = tokio::fs::File::open(&host)
            .await
            .map_err(|e| Error::io(&host, e))?;
        Ok(Box::pin(file))
    }

    async fn list(&self, path: &AbsolutePath, kind: EntryKind) -> Result<Vec<String>> {
        let host = self.host_path(path)?;
        if !Self::probe(&host).await?.is_some_and(|m| m.is_dir()) {
            return Ok(Vec::new());
        }

        let mut read_dir = tokio::fs::read_dir(&host)
            .await
            .map_err(|e| Error::io(&host, e))?;

        let mut names = Vec::new();
        while let Some(entry) = read_dir
            .next_entry()
            .await
            .map_err(|e| Error::io(&host, e))?
        {
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                diagnostics::warn!("Skipping non UTF-8 entry in {dir}", dir: host.display().to_string());
                continue;
            };

            // Skip hidden files (dotfiles)
            if name.starts_with('.') {
                continue;
            }
            if !self.root.strategy().is_valid_name(&name) {
                diagnostics::warn!(
                    "Skipping invalid name '{name}' in {dir}",
                    name: name.as_str(),
                    dir: host.display().to_string()
                );
                continue;
            }

            // Follow symlinks, as `exists` does. Dangling links are skipped.
            let Some(metadata) = Self::probe(&entry.path()).await? else {
                continue;
            };
            let matches = match kind {
                EntryKind::File => metadata.is_file(),
                EntryKind::Directory => metadata.is_dir(),
            };
            if matches {
                names.push(name);
            }
        }

        // Sort by name for deterministic ordering
        names.sort();
        Ok(names)
    }
}
