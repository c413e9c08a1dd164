// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::backend::{EntryKind, FileSystemBackend};
use crate::error::{Error, Result};
use crate::file::File;
use crate::path::AbsolutePath;
use futures::stream::{self, Stream};
use std::pin::Pin;
use std::sync::Arc;

/// Stream of child handles returned by the `enumerate_*` methods
pub type Entries<T> = Pin<Box<dyn Stream<Item = Result<T>> + Send>>;

/// A directory location on some backend.
///
/// Does not imply the directory exists; nothing is created until a file
/// below it is written.
#[derive(Clone, Debug)]
pub struct Directory {
    path: AbsolutePath,
    backend: Arc<dyn FileSystemBackend>,
}

impl Directory {
    pub(crate) fn new(path: AbsolutePath, backend: Arc<dyn FileSystemBackend>) -> Self {
        Self { path, backend }
    }

    pub(crate) fn backend(&self) -> &Arc<dyn FileSystemBackend> {
        &self.backend
    }

    #[must_use]
    pub fn path(&self) -> &AbsolutePath {
        &self.path
    }

    #[must_use]
    pub fn full_name(&self) -> &str {
        self.path.full_name()
    }

    /// Last path segment, or the root's full name
    #[must_use]
    pub fn name(&self) -> &str {
        self.path.name().unwrap_or_else(|| self.path.full_name())
    }

    /// Handle for a directory below this one. Pure path computation.
    ///
    /// # Errors
    ///
    /// `InvalidName` if a segment of `relative` is invalid.
    pub fn get_directory(&self, relative: &str) -> Result<Directory> {
        Ok(Self::new(self.path.join(relative)?, self.backend.clone()))
    }

    /// Handle for a file directly in this directory. Pure path computation.
    ///
    /// # Errors
    ///
    /// `InvalidName` if `name` is not a single valid name.
    pub fn get_file(&self, name: &str) -> Result<File> {
        if !self.path.strategy().is_valid_name(name) {
            return Err(Error::invalid_name(name));
        }
        Ok(File::new(self.path.child(name)?, self.backend.clone()))
    }

    pub async fn exists(&self) -> Result<bool> {
        self.backend.exists(&self.path, EntryKind::Directory).await
    }

    pub async fn enumerate_files(&self) -> Result<Entries<File>> {
        let names = self.backend.list(&self.path, EntryKind::File).await?;
        let this = self.clone();
        Ok(Box::pin(stream::iter(
            names.into_iter().map(move |name| this.get_file(&name)),
        )))
    }

    pub async fn enumerate_directories(&self) -> Result<Entries<Directory>> {
        let names = self.backend.list(&self.path, EntryKind::Directory).await?;
        let this = self.clone();
        Ok(Box::pin(stream::iter(
            names.into_iter().map(move |name| this.get_directory(&name)),
        )))
    }
}
