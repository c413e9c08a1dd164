// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use super::with_record_type;
use anyhow::{Context, Result};
use auditfs::{Document, Entry};
use futures::TryStreamExt;
use model::{Model, Repository};
use std::io::Write;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CollectionReport {
    pub name: String,
    pub parsed: usize,
    /// File name and parse error of each malformed entry
    pub malformed: Vec<(String, String)>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub collections: Vec<CollectionReport>,
}

impl CheckReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.collections.iter().all(|c| c.malformed.is_empty())
    }

    #[must_use]
    pub fn malformed_count(&self) -> usize {
        self.collections.iter().map(|c| c.malformed.len()).sum()
    }
}

async fn check_collection<T: Model + Document>(repo: &Repository) -> Result<CollectionReport> {
    let collection = repo.collection::<T>()?;
    let mut report = CollectionReport {
        name: collection.name().to_string(),
        ..CollectionReport::default()
    };

    let entries: Vec<Entry<T>> = collection
        .scan()
        .try_collect()
        .await
        .with_context(|| format!("Failed to scan {}", collection.directory().full_name()))?;

    for entry in entries {
        match entry {
            Entry::Parsed(_) => report.parsed += 1,
            Entry::Malformed { name, reason } => report.malformed.push((name, reason.to_string())),
        }
    }
    Ok(report)
}

/// Scan each group and report malformed entries.
///
/// `groups` empty means every registered group.
pub async fn check_command(
    repo: &Repository,
    groups: &[String],
    out: &mut dyn Write,
) -> Result<CheckReport> {
    let groups: Vec<String> = if groups.is_empty() {
        repo.factory()
            .registry()
            .models()
            .map(|info| info.group_name.clone())
            .collect()
    } else {
        groups.to_vec()
    };

    let mut report = CheckReport::default();
    for group in &groups {
        diagnostics::info!("Checking {group}", group: group.as_str());
        let collection = with_record_type!(group.as_str(), check_collection(repo))?;

        writeln!(
            out,
            "{}: {} parsed, {} malformed",
            collection.name,
            collection.parsed,
            collection.malformed.len()
        )?;
        for (name, reason) in &collection.malformed {
            writeln!(out, "  {name}: {reason}")?;
        }
        report.collections.push(collection);
    }
    Ok(report)
}
