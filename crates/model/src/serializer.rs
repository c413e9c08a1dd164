// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::SchemaError;
use crate::registry::ModelRegistry;
use crate::schema::{Model, Schema};
use crate::xml;
use auditfs::{BoxError, DocumentSerializer};
use std::any::type_name;
use std::sync::Arc;

/// File extension of XML record documents
pub const XML_EXTENSION: &str = "xml";

/// Reads and writes one record type as an XML document
pub struct XmlDocumentSerializer<T> {
    schema: Arc<Schema<T>>,
}

impl<T: Model> XmlDocumentSerializer<T> {
    #[must_use]
    pub fn new(schema: Arc<Schema<T>>) -> Self {
        Self { schema }
    }

    #[must_use]
    pub fn schema(&self) -> &Schema<T> {
        &self.schema
    }
}

impl<T: Model> DocumentSerializer<T> for XmlDocumentSerializer<T> {
    fn file_extension(&self) -> &str {
        XML_EXTENSION
    }

    fn serialize(&self, document: &T) -> Result<Vec<u8>, BoxError> {
        Ok(self.schema.to_element(document).to_document()?.into_bytes())
    }

    fn deserialize(&self, content: &[u8]) -> Result<T, BoxError> {
        let root = xml::parse(content)?;
        Ok(self.schema.from_element(&root)?)
    }
}

/// Hands out serializers for registered record types
#[derive(Debug, Clone)]
pub struct DocumentSerializerFactory {
    registry: Arc<ModelRegistry>,
}

impl DocumentSerializerFactory {
    #[must_use]
    pub fn new(registry: Arc<ModelRegistry>) -> Self {
        Self { registry }
    }

    #[must_use]
    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    pub fn create<T: Model>(&self) -> Result<Arc<dyn DocumentSerializer<T>>, SchemaError> {
        let schema = self
            .registry
            .schema::<T>()
            .ok_or(SchemaError::NotRegistered(type_name::<T>()))?;
        Ok(Arc::new(XmlDocumentSerializer::new(schema)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Friend, Meetup, Session, Talk};
    use auditfs::Document;

    fn factory() -> DocumentSerializerFactory {
        DocumentSerializerFactory::new(Arc::new(ModelRegistry::with_default_models().unwrap()))
    }

    #[test]
    fn test_friend_document() {
        let friend = Friend {
            id: Some("jetbrains".to_string()),
            name: Some("JetBrains".to_string()),
            url: None,
            description: Some("Tools & IDEs".to_string()),
        };
        let serializer = factory().create::<Friend>().unwrap();
        assert_eq!(serializer.file_extension(), "xml");

        let bytes = serializer.serialize(&friend).unwrap();
        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(text.contains("<Description>Tools &amp; IDEs</Description>"));
        assert!(!text.contains("<Url"));

        assert_eq!(serializer.deserialize(&bytes).unwrap(), friend);
    }

    #[test]
    fn test_carriage_returns_survive() {
        let friend = Friend {
            id: Some("crlf".to_string()),
            description: Some("line1\r\nline2".to_string()),
            ..Friend::default()
        };
        let serializer = factory().create::<Friend>().unwrap();
        let read = serializer
            .deserialize(&serializer.serialize(&friend).unwrap())
            .unwrap();
        assert_eq!(read.description.as_deref(), Some("line1\r\nline2"));
        assert_eq!(read.content_checksum(), friend.content_checksum());
    }

    #[test]
    fn test_control_characters_refused() {
        let friend = Friend {
            id: Some("bell".to_string()),
            name: Some("ring\u{7}".to_string()),
            ..Friend::default()
        };
        let serializer = factory().create::<Friend>().unwrap();
        assert!(serializer.serialize(&friend).is_err());
    }

    #[test]
    fn test_meetup_sessions_survive() {
        let meetup = Meetup {
            id: Some("spb-42".to_string()),
            friend_ids: vec!["a".to_string(), "b".to_string()],
            sessions: vec![
                Session {
                    talk_id: Some("t1".to_string()),
                    start_time: Some("2024-05-01T19:00:00".to_string()),
                    end_time: Some("2024-05-01T20:00:00".to_string()),
                },
                Session {
                    talk_id: Some("t2".to_string()),
                    ..Session::default()
                },
            ],
            ..Meetup::default()
        };
        let serializer = factory().create::<Meetup>().unwrap();
        let read = serializer
            .deserialize(&serializer.serialize(&meetup).unwrap())
            .unwrap();
        assert_eq!(read, meetup);
    }

    #[test]
    fn test_reads_handwritten_document() {
        let content = r#"<?xml version="1.0" encoding="utf-8"?>
<Talk>
  <Id>span</Id>
  <Title>Span&lt;T&gt;</Title>
  <Speakers>
    <Speaker>alice</Speaker>
    <Speaker>bob</Speaker>
  </Speakers>
  <Rating>5</Rating>
</Talk>
"#;
        let talk = factory()
            .create::<Talk>()
            .unwrap()
            .deserialize(content.as_bytes())
            .unwrap();
        assert_eq!(talk.id.as_deref(), Some("span"));
        assert_eq!(talk.name.as_deref(), Some("Span<T>"));
        assert_eq!(talk.speaker_ids, vec!["alice", "bob"]);
        assert!(talk.see_also_talk_ids.is_empty());
    }

    #[test]
    fn test_format_errors() {
        let serializer = factory().create::<Talk>().unwrap();
        let documents: [&[u8]; 3] = [b"<Talk><Id>x</Talk>", b"", b"<Friend><Id>x</Id></Friend>"];
        for content in documents {
            assert!(serializer.deserialize(content).is_err());
        }
    }

    #[test]
    fn test_unregistered_type() {
        let factory = DocumentSerializerFactory::new(Arc::new(ModelRegistry::new()));
        assert!(matches!(
            factory.create::<Friend>(),
            Err(SchemaError::NotRegistered(_))
        ));
    }
}
