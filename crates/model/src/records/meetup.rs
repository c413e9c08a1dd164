// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::checksum::Checksum;
use crate::error::SchemaError;
use crate::schema::{Member, Model, ModelBuilder, Schema};
use auditfs::Document;

/// One meetup of a community, held at a venue
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Meetup {
    pub id: Option<String>,
    pub name: Option<String>,
    pub community_id: Option<String>,
    pub friend_ids: Vec<String>,
    pub venue_id: Option<String>,
    pub sessions: Vec<Session>,
}

/// A talk slot within a meetup. Times are kept as written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub talk_id: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl Meetup {
    pub const ROOT: &'static str = "Meetup";
    pub const GROUP: &'static str = "meetups";

    pub fn schema() -> Result<Schema<Self>, SchemaError> {
        Ok(ModelBuilder::<Self>::map(Self::ROOT, Self::GROUP)
            .property("Id", "Id")?
            .property("Name", "Name")?
            .property("CommunityId", "CommunityId")?
            .collection("FriendIds", "Friends", "Friend")?
            .property("VenueId", "VenueId")?
            .collection_with::<Session>("Sessions", "Sessions", "Session", |session| {
                session
                    .property("TalkId", "TalkId")?
                    .property("StartTime", "StartTime")?
                    .property("EndTime", "EndTime")
            })?
            .build())
    }
}

impl Model for Meetup {
    fn members() -> Vec<Member<Self>> {
        type M = Member<Meetup>;
        vec![
            M::text("Id", |r| r.id.as_deref(), |r, v| r.id = Some(v)),
            M::text("Name", |r| r.name.as_deref(), |r, v| r.name = Some(v)),
            M::text(
                "CommunityId",
                |r| r.community_id.as_deref(),
                |r, v| r.community_id = Some(v),
            ),
            M::list(
                "FriendIds",
                |r| r.friend_ids.as_slice(),
                |r, v| r.friend_ids.push(v),
            ),
            M::text("VenueId", |r| r.venue_id.as_deref(), |r, v| r.venue_id = Some(v)),
            M::records::<Session>("Sessions", |r| r.sessions.as_slice(), |r, v| r.sessions = v),
        ]
    }
}

impl Model for Session {
    fn members() -> Vec<Member<Self>> {
        type M = Member<Session>;
        vec![
            M::text("TalkId", |r| r.talk_id.as_deref(), |r, v| r.talk_id = Some(v)),
            M::text(
                "StartTime",
                |r| r.start_time.as_deref(),
                |r, v| r.start_time = Some(v),
            ),
            M::text("EndTime", |r| r.end_time.as_deref(), |r, v| r.end_time = Some(v)),
        ]
    }
}

impl Document for Meetup {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn content_checksum(&self) -> u64 {
        Checksum::new()
            .field(self.id.as_deref())
            .field(self.name.as_deref())
            .field(self.community_id.as_deref())
            .list(&self.friend_ids)
            .field(self.venue_id.as_deref())
            .nested(&self.sessions)
            .finish()
    }
}

// Sessions have no id of their own; they only feed the meetup checksum.
impl Document for Session {
    fn id(&self) -> Option<&str> {
        None
    }

    fn content_checksum(&self) -> u64 {
        Checksum::new()
            .field(self.talk_id.as_deref())
            .field(self.start_time.as_deref())
            .field(self.end_time.as_deref())
            .finish()
    }
}
