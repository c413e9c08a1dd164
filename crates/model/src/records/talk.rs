// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::checksum::Checksum;
use crate::error::SchemaError;
use crate::schema::{Member, Model, ModelBuilder, Schema};
use auditfs::Document;

type M = Member<Talk>;

/// A talk, referring to its speakers and related talks by id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Talk {
    pub id: Option<String>,
    pub speaker_ids: Vec<String>,
    /// Stored as `<Title>`
    pub name: Option<String>,
    pub description: Option<String>,
    pub see_also_talk_ids: Vec<String>,
    pub code_url: Option<String>,
    pub slides_url: Option<String>,
    pub video_url: Option<String>,
}

impl Talk {
    pub const ROOT: &'static str = "Talk";
    pub const GROUP: &'static str = "talks";

    pub fn schema() -> Result<Schema<Self>, SchemaError> {
        Ok(ModelBuilder::<Self>::map(Self::ROOT, Self::GROUP)
            .property("Id", "Id")?
            .collection("SpeakerIds", "Speakers", "Speaker")?
            .property("Name", "Title")?
            .property("Description", "Description")?
            .collection("SeeAlsoTalkIds", "SeeAlsoTalks", "Talk")?
            .property("CodeUrl", "CodeUrl")?
            .property("SlidesUrl", "SlidesUrl")?
            .property("VideoUrl", "VideoUrl")?
            .build())
    }
}

impl Model for Talk {
    fn members() -> Vec<Member<Self>> {
        vec![
            M::text("Id", |r| r.id.as_deref(), |r, v| r.id = Some(v)),
            M::list(
                "SpeakerIds",
                |r| r.speaker_ids.as_slice(),
                |r, v| r.speaker_ids.push(v),
            ),
            M::text("Name", |r| r.name.as_deref(), |r, v| r.name = Some(v)),
            M::text(
                "Description",
                |r| r.description.as_deref(),
                |r, v| r.description = Some(v),
            ),
            M::list(
                "SeeAlsoTalkIds",
                |r| r.see_also_talk_ids.as_slice(),
                |r, v| r.see_also_talk_ids.push(v),
            ),
            M::text("CodeUrl", |r| r.code_url.as_deref(), |r, v| r.code_url = Some(v)),
            M::text("SlidesUrl", |r| r.slides_url.as_deref(), |r, v| r.slides_url = Some(v)),
            M::text("VideoUrl", |r| r.video_url.as_deref(), |r, v| r.video_url = Some(v)),
        ]
    }
}

impl Document for Talk {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn content_checksum(&self) -> u64 {
        Checksum::new()
            .field(self.id.as_deref())
            .list(&self.speaker_ids)
            .field(self.name.as_deref())
            .field(self.description.as_deref())
            .list(&self.see_also_talk_ids)
            .field(self.code_url.as_deref())
            .field(self.slides_url.as_deref())
            .field(self.video_url.as_deref())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn talk() -> Talk {
        Talk {
            id: Some("talk-1".to_string()),
            speaker_ids: vec!["alice".to_string(), "bob".to_string()],
            name: Some("Spans and memory".to_string()),
            ..Talk::default()
        }
    }

    #[test]
    fn test_checksum_tracks_speaker_order() {
        let mut swapped = talk();
        swapped.speaker_ids.reverse();
        assert_ne!(talk().content_checksum(), swapped.content_checksum());
        assert_eq!(talk().content_checksum(), talk().content_checksum());
    }

    #[test]
    fn test_name_is_written_as_title() {
        let element = Talk::schema().unwrap().to_element(&talk());
        let names: Vec<&str> = element.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Id", "Speakers", "Title"]);
    }
}
