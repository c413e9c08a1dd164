// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming the repository root
pub const ROOT_ENV: &str = "AUDITOR_ROOT";

/// Contents of an `auditor.yaml` file.
///
/// ```yaml
/// root: /data/repository
/// collections:
///   - talks
///   - speakers
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Groups to check. Empty means every registered group.
    #[serde(default)]
    pub collections: Vec<String>,
}

impl AuditConfig {
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml_ng::from_str(text).context("Invalid auditor config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("In {}", path.display()))
    }
}

/// Pick the repository root: `--root`, then `AUDITOR_ROOT`, then the config file
pub fn resolve_root(flag: Option<PathBuf>, config: &AuditConfig) -> Result<PathBuf> {
    resolve_root_from(flag, env::var(ROOT_ENV).ok(), config)
}

fn resolve_root_from(
    flag: Option<PathBuf>,
    env_value: Option<String>,
    config: &AuditConfig,
) -> Result<PathBuf> {
    let root = flag
        .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
        .or_else(|| config.root.clone())
        .ok_or_else(|| anyhow!("No repository root: pass --root or set {ROOT_ENV}"))?;

    // Physical roots must be absolute
    if root.is_absolute() {
        Ok(root)
    } else {
        let cwd = env::current_dir().context("Failed to read current directory")?;
        Ok(cwd.join(root))
    }
}
