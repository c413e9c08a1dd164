// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use super::*;
use crate::memory::MemoryFileSystem;
use crate::naming::WindowsNamingStrategy;
use crate::path::AbsolutePath;
use futures::TryStreamExt;
use std::hash::{DefaultHasher, Hash, Hasher};

const KNOWN_ID: &str = "KnownId";

#[derive(Debug, Clone, PartialEq)]
struct Note {
    id: Option<String>,
    text: String,
}

impl Note {
    fn new(id: &str, text: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            text: text.to_string(),
        }
    }
}

impl Document for Note {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn content_checksum(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        (&self.id, &self.text).hash(&mut hasher);
        hasher.finish()
    }
}

/// `id` on the first line, text on the rest
struct LineSerializer;

impl DocumentSerializer<Note> for LineSerializer {
    fn file_extension(&self) -> &str {
        "note"
    }

    fn serialize(&self, note: &Note) -> std::result::Result<Vec<u8>, BoxError> {
        Ok(format!("{}\n{}", note.id.as_deref().unwrap_or_default(), note.text).into_bytes())
    }

    fn deserialize(&self, content: &[u8]) -> std::result::Result<Note, BoxError> {
        let text = std::str::from_utf8(content)?;
        let (id, body) = text.split_once('\n').ok_or("missing id line")?;
        Ok(Note::new(id, body))
    }
}

/// Refuses every record except the one whose id is exactly `KNOWN_ID`
struct PickySerializer;

impl DocumentSerializer<Note> for PickySerializer {
    fn file_extension(&self) -> &str {
        "note"
    }

    fn serialize(&self, note: &Note) -> std::result::Result<Vec<u8>, BoxError> {
        LineSerializer.serialize(note)
    }

    fn deserialize(&self, content: &[u8]) -> std::result::Result<Note, BoxError> {
        let note = LineSerializer.deserialize(content)?;
        if note.id.as_deref() == Some(KNOWN_ID) {
            Ok(note)
        } else {
            Err(format!("refusing {:?}", note.id).into())
        }
    }
}

async fn populated_root() -> Directory {
    let root = MemoryFileSystem::with_root(AbsolutePath::root(WindowsNamingStrategy::INSTANCE));
    let notes = root.get_directory("notes").unwrap();
    let collection = Collection::<Note>::new("notes", notes.clone(), Arc::new(LineSerializer));

    for id in [KNOWN_ID, "KnownId2", "KnownId3"] {
        assert!(collection.save(&Note::new(id, "text")).await.unwrap());
    }

    // Corrupt entry (no id line), an unrelated file, and a hidden one
    for (name, content) in [
        ("Broken.note", &b"no newline here"[..]),
        ("README.txt", &b"not a note"[..]),
        (".KnownId4.note", &b"KnownId4\nhidden"[..]),
    ] {
        notes
            .get_file(name)
            .unwrap()
            .request_write_access()
            .await
            .unwrap()
            .unwrap()
            .write_all(content)
            .await
            .unwrap();
    }

    root
}

async fn notes(serializer: Arc<dyn DocumentSerializer<Note>>) -> Collection<Note> {
    let root = populated_root().await;
    Collection::new("notes", root.get_directory("notes").unwrap(), serializer)
}

#[tokio::test]
async fn test_descriptive_accessors() {
    let collection = notes(Arc::new(LineSerializer)).await;
    assert_eq!(collection.name(), "notes");
    assert_eq!(collection.collection_type(), TypeId::of::<Note>());
    assert!(collection.type_name().ends_with("Note"));
    assert_eq!(collection.directory().full_name(), "C:\\notes");
}

#[tokio::test]
async fn test_load_single() {
    let collection = notes(Arc::new(LineSerializer)).await;
    let note = collection.load(KNOWN_ID).await.unwrap().unwrap();
    assert_eq!(note.id.as_deref(), Some(KNOWN_ID));
    assert_eq!(note.text, "text");
}

#[tokio::test]
async fn test_load_unknown_is_none() {
    let collection = notes(Arc::new(LineSerializer)).await;
    assert!(collection.load("unknown").await.unwrap().is_none());
}

#[tokio::test]
async fn test_load_corrupt_is_error() {
    let collection = notes(Arc::new(LineSerializer)).await;
    let err = collection.load("Broken").await.unwrap_err();
    assert!(matches!(err, Error::Deserialize { ref path, .. } if path == "C:\\notes\\Broken.note"));
}

#[tokio::test]
async fn test_load_invalid_id_is_error() {
    let collection = notes(Arc::new(LineSerializer)).await;
    assert!(matches!(
        collection.load("a|b").await,
        Err(Error::InvalidName(_))
    ));
}

#[tokio::test]
async fn test_query_skips_corrupt_entries() {
    let collection = notes(Arc::new(LineSerializer)).await;
    let documents: Vec<Note> = collection.query().try_collect().await.unwrap();

    assert_eq!(documents.len(), 3);
    for note in &documents {
        assert!(note.id.as_deref().unwrap().starts_with(KNOWN_ID));
    }
}

#[tokio::test]
async fn test_query_is_restartable() {
    let collection = notes(Arc::new(LineSerializer)).await;
    let first: Vec<Note> = collection.query().try_collect().await.unwrap();

    assert!(collection.save(&Note::new("KnownId5", "later")).await.unwrap());

    let second: Vec<Note> = collection.query().try_collect().await.unwrap();
    assert_eq!(first.len() + 1, second.len());
}

#[tokio::test]
async fn test_query_with_refusing_serializer() {
    let collection = notes(Arc::new(PickySerializer)).await;
    let documents: Vec<Note> = collection.query().try_collect().await.unwrap();

    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].id.as_deref(), Some(KNOWN_ID));
}

#[tokio::test]
async fn test_scan_reports_malformed() {
    let collection = notes(Arc::new(LineSerializer)).await;
    let entries: Vec<Entry<Note>> = collection.scan().try_collect().await.unwrap();

    let malformed: Vec<&str> = entries
        .iter()
        .filter_map(|entry| match entry {
            Entry::Malformed { name, .. } => Some(name.as_str()),
            Entry::Parsed(_) => None,
        })
        .collect();
    assert_eq!(entries.len(), 4);
    assert_eq!(malformed, vec!["Broken.note"]);
}

#[tokio::test]
async fn test_empty_collection() {
    let root = MemoryFileSystem::with_root(AbsolutePath::root(WindowsNamingStrategy::INSTANCE));
    let collection = Collection::new(
        "nothing",
        root.get_directory("nothing").unwrap(),
        Arc::new(LineSerializer) as Arc<dyn DocumentSerializer<Note>>,
    );
    let documents: Vec<Note> = collection.query().try_collect().await.unwrap();
    assert!(documents.is_empty());
}

#[tokio::test]
async fn test_save_requires_id() {
    let collection = notes(Arc::new(LineSerializer)).await;
    let anonymous = Note {
        id: None,
        text: "x".to_string(),
    };
    assert!(matches!(
        collection.save(&anonymous).await,
        Err(Error::InvalidName(_))
    ));
}

#[tokio::test]
async fn test_hidden_ids_rejected() {
    let collection = notes(Arc::new(LineSerializer)).await;
    assert!(matches!(
        collection.save(&Note::new(".secret", "x")).await,
        Err(Error::InvalidName(_))
    ));
    assert!(matches!(
        collection.load(".KnownId4").await,
        Err(Error::InvalidName(_))
    ));
}

#[cfg(unix)]
#[tokio::test]
async fn test_query_skips_invalid_host_names() {
    let sandbox = crate::sandbox::Sandbox::create().unwrap();
    let collection = Collection::<Note>::new(
        "notes",
        sandbox.directory().clone(),
        Arc::new(LineSerializer),
    );
    for id in [KNOWN_ID, "KnownId2"] {
        assert!(collection.save(&Note::new(id, "text")).await.unwrap());
    }
    std::fs::write(sandbox.path().join("   "), b"blank").unwrap();

    let documents: Vec<Note> = collection.query().try_collect().await.unwrap();
    assert_eq!(documents.len(), 2);
}

#[tokio::test]
async fn test_save_denied_when_directory_in_the_way() {
    let collection = notes(Arc::new(LineSerializer)).await;
    collection
        .directory()
        .get_directory("Blocker.note")
        .unwrap()
        .get_file("inside")
        .unwrap()
        .request_write_access()
        .await
        .unwrap()
        .unwrap()
        .write_all(b"")
        .await
        .unwrap();

    assert!(!collection.save(&Note::new("Blocker", "x")).await.unwrap());
}
