// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Typed document collections over a backing directory.
//!
//! One file per record, named `<id>.<ext>`. Bulk scans tolerate corrupt
//! files; a single `load` does not.

#[cfg(test)]
mod tests;

use crate::dir::Directory;
use crate::error::{BoxError, Error, Result};
use crate::file::File;
use futures::stream::{Stream, StreamExt, TryStreamExt};
use std::any::TypeId;
use std::sync::Arc;

/// A record persisted as one file
pub trait Document {
    /// Identifier, which is also the file stem. May be missing in a
    /// malformed record.
    fn id(&self) -> Option<&str>;

    /// Cheap, order-sensitive hash of the record content for change detection
    fn content_checksum(&self) -> u64;
}

/// Converts records of one type to bytes and back
pub trait DocumentSerializer<T>: Send + Sync {
    /// Extension of the files this serializer reads and writes, without the dot
    fn file_extension(&self) -> &str;

    fn serialize(&self, document: &T) -> std::result::Result<Vec<u8>, BoxError>;

    fn deserialize(&self, content: &[u8]) -> std::result::Result<T, BoxError>;
}

/// Outcome of parsing one entry during a scan
#[derive(Debug)]
pub enum Entry<T> {
    Parsed(T),
    Malformed { name: String, reason: BoxError },
}

/// A named, typed store of records backed by one directory
pub struct Collection<T> {
    name: String,
    directory: Directory,
    serializer: Arc<dyn DocumentSerializer<T>>,
}

impl<T> Collection<T>
where
    T: Document + Send + 'static,
{
    pub fn new<S: Into<String>>(
        name: S,
        directory: Directory,
        serializer: Arc<dyn DocumentSerializer<T>>,
    ) -> Self {
        Self {
            name: name.into(),
            directory,
            serializer,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn collection_type(&self) -> TypeId {
        TypeId::of::<T>()
    }

    #[must_use]
    pub fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    #[must_use]
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Backing file of `id`. Dot-prefixed ids would be hidden from listings.
    fn file_for(&self, id: &str) -> Result<File> {
        if id.is_empty() || id.starts_with('.') {
            return Err(Error::invalid_name(id));
        }
        self.directory
            .get_file(&format!("{id}.{}", self.serializer.file_extension()))
    }

    fn id_of<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        file_name
            .strip_suffix(self.serializer.file_extension())
            .and_then(|stem| stem.strip_suffix('.'))
            .filter(|id| !id.is_empty())
    }

    /// Load exactly one record.
    ///
    /// `Ok(None)` when there is no such file. A file that exists but does
    /// not parse is an `Error::Deserialize`.
    pub async fn load(&self, id: &str) -> Result<Option<T>> {
        let file = self.file_for(id)?;
        if !file.exists().await? {
            return Ok(None);
        }

        let content = file.read_to_end().await?;
        self.serializer
            .deserialize(&content)
            .map(Some)
            .map_err(|e| Error::deserialize(file.full_name(), e))
    }

    /// Every entry of the collection with its parse outcome.
    ///
    /// Lists the directory when first polled; each call starts over.
    /// Files without the serializer's extension are not entries.
    pub fn scan(&self) -> impl Stream<Item = Result<Entry<T>>> + Send + '_ {
        async_stream::try_stream! {
            let mut files = self.directory.enumerate_files().await?;
            while let Some(file) = files.next().await {
                let file = file?;
                if self.id_of(file.name()).is_none() {
                    continue;
                }

                let content = file.read_to_end().await?;
                let entry = match self.serializer.deserialize(&content) {
                    Ok(document) => Entry::Parsed(document),
                    Err(reason) => Entry::Malformed {
                        name: file.name().to_string(),
                        reason,
                    },
                };
                yield entry;
            }
        }
    }

    /// All records that parse. Malformed entries are logged and skipped;
    /// only I/O failures come through as errors.
    pub fn query(&self) -> impl Stream<Item = Result<T>> + Send + '_ {
        let collection = self.name.clone();
        self.scan().try_filter_map(move |entry| {
            let outcome = match entry {
                Entry::Parsed(document) => Some(document),
                Entry::Malformed { name, reason } => {
                    diagnostics::warn!(
                        "Skipping {name} in {collection}: {reason}",
                        name,
                        collection: collection.as_str(),
                        reason: reason.to_string()
                    );
                    None
                }
            };
            futures::future::ready(Ok(outcome))
        })
    }

    /// Write `document` as `<id>.<ext>`.
    ///
    /// Returns `false` when write access is denied.
    pub async fn save(&self, document: &T) -> Result<bool> {
        let id = document.id().ok_or_else(|| Error::invalid_name(""))?;
        let file = self.file_for(id)?;

        let Some(writable) = file.request_write_access().await? else {
            return Ok(false);
        };
        let content = self
            .serializer
            .serialize(document)
            .map_err(|e| Error::serialize(file.full_name(), e))?;
        writable.write_all(&content).await?;

        diagnostics::debug!("Saved {id} to {collection}", id, collection: self.name.as_str());
        Ok(true)
    }
}

impl<T> std::fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection")
            .field("name", &self.name)
            .field("directory", &self.directory.full_name())
            .finish()
    }
}
