// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use super::with_record_type;
use anyhow::Result;
use auditfs::Document;
use futures::TryStreamExt;
use model::{Model, Repository};
use std::io::Write;

async fn list_collection<T: Model + Document>(
    repo: &Repository,
    out: &mut dyn Write,
) -> Result<usize> {
    let collection = repo.collection::<T>()?;
    let mut records = std::pin::pin!(collection.query());
    let mut count = 0;
    while let Some(record) = records.try_next().await? {
        let id = record.id().unwrap_or("<no id>");
        writeln!(out, "{id}\t{:016x}", record.content_checksum())?;
        count += 1;
    }
    Ok(count)
}

/// Print the id and content checksum of every parsed record in `group`
pub async fn list_command(repo: &Repository, group: &str, out: &mut dyn Write) -> Result<usize> {
    diagnostics::debug!("Listing {group}", group);
    with_record_type!(group, list_collection(repo, out))
}
