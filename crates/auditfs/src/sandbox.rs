// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Disposable physical roots for tests and dry runs.

use crate::dir::Directory;
use crate::error::{Error, Result};
use crate::physical::PhysicalFileSystem;
use std::path::Path;
use tempfile::TempDir;

/// A temporary host directory with a physical file system rooted in it.
///
/// The directory and everything written below it are removed when the
/// sandbox is dropped, including while unwinding from a panic.
pub struct Sandbox {
    root: Directory,
    temp: TempDir,
}

impl Sandbox {
    /// # Errors
    ///
    /// Fails if the temporary directory cannot be created.
    pub fn create() -> Result<Self> {
        let temp = tempfile::Builder::new()
            .prefix("auditor-")
            .tempdir()
            .map_err(|e| Error::io(std::env::temp_dir(), e))?;
        let root = PhysicalFileSystem::for_directory(temp.path())?;
        Ok(Self { root, temp })
    }

    /// Host location of the sandbox
    #[must_use]
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    #[must_use]
    pub fn directory(&self) -> &Directory {
        &self.root
    }

    /// Remove the sandbox now, reporting any failure instead of ignoring it
    pub fn close(self) -> Result<()> {
        let path = self.temp.path().to_path_buf();
        self.temp.close().map_err(|e| Error::io(path, e))
    }
}

impl std::fmt::Debug for Sandbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sandbox({})", self.temp.path().display())
    }
}
