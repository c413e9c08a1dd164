// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Command implementations for the `auditor` binary.

pub mod commands;
pub mod config;

use anyhow::{Context, Result};
use auditfs::PhysicalFileSystem;
use model::{DocumentSerializerFactory, ModelRegistry, Repository};
use std::path::Path;
use std::sync::Arc;

/// Open the repository rooted at a host directory with every default model
pub fn open_repository(root: &Path) -> Result<Repository> {
    let directory = PhysicalFileSystem::for_directory(root)
        .with_context(|| format!("Invalid repository root {}", root.display()))?;
    let registry = ModelRegistry::with_default_models().context("Failed to build model registry")?;

    diagnostics::info!("Opened repository at {root}", root: directory.full_name());
    Ok(Repository::new(
        directory,
        DocumentSerializerFactory::new(Arc::new(registry)),
    ))
}
