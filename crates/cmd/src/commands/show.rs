// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use super::with_record_type;
use anyhow::{Result, anyhow};
use auditfs::Document;
use model::{Model, Repository};
use std::io::Write;

async fn show_record<T: Model + Document>(
    repo: &Repository,
    id: &str,
    out: &mut dyn Write,
) -> Result<bool> {
    let collection = repo.collection::<T>()?;
    let Some(record) = collection.load(id).await? else {
        writeln!(out, "{id} not found in {}", collection.name())?;
        return Ok(false);
    };

    let serializer = repo.factory().create::<T>()?;
    let bytes = serializer
        .serialize(&record)
        .map_err(|e| anyhow!("Failed to serialize {id}: {e}"))?;
    out.write_all(&bytes)?;
    Ok(true)
}

/// Print one record as it would be written back. `false` if it does not exist.
pub async fn show_command(
    repo: &Repository,
    group: &str,
    id: &str,
    out: &mut dyn Write,
) -> Result<bool> {
    with_record_type!(group, show_record(repo, id, out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{memory_repository, write_raw};

    #[tokio::test]
    async fn test_show_normalizes_document() {
        let repo = memory_repository();
        write_raw(
            &repo,
            "friends",
            "dotnext.xml",
            "<Friend><Url>https://dotnext.ru</Url><Id>dotnext</Id><Logo>x.png</Logo></Friend>",
        )
        .await;

        let mut out = Vec::new();
        assert!(show_command(&repo, "friends", "dotnext", &mut out).await.unwrap());
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
             <Friend>\n  \
             <Id>dotnext</Id>\n  \
             <Url>https://dotnext.ru</Url>\n\
             </Friend>\n"
        );
    }

    #[tokio::test]
    async fn test_show_missing() {
        let repo = memory_repository();
        let mut out = Vec::new();
        assert!(!show_command(&repo, "talks", "nope", &mut out).await.unwrap());
        assert_eq!(String::from_utf8(out).unwrap(), "nope not found in talks\n");
    }

    #[tokio::test]
    async fn test_show_malformed_is_error() {
        let repo = memory_repository();
        write_raw(&repo, "talks", "t1.xml", "<Talk>").await;
        let mut out = Vec::new();
        assert!(show_command(&repo, "talks", "t1", &mut out).await.is_err());
    }
}
