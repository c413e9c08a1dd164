// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::checksum::Checksum;
use crate::error::SchemaError;
use crate::schema::{Member, Model, ModelBuilder, Schema};
use auditfs::Document;

type M = Member<Community>;

/// A local user group and the channels it announces on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Community {
    pub id: Option<String>,
    pub name: Option<String>,
    pub city: Option<String>,
    /// IANA zone name, e.g. `Europe/Moscow`
    pub time_zone: Option<String>,
    pub vk_url: Option<String>,
    pub twitter_url: Option<String>,
    pub telegram_channel_url: Option<String>,
    pub telegram_chat_url: Option<String>,
    pub meetup_com_url: Option<String>,
    pub time_pad_url: Option<String>,
}

impl Community {
    pub const ROOT: &'static str = "Community";
    pub const GROUP: &'static str = "communities";

    pub fn schema() -> Result<Schema<Self>, SchemaError> {
        let mut builder = ModelBuilder::<Self>::map(Self::ROOT, Self::GROUP);
        for member in Self::members() {
            // Element names match member names one to one
            builder = builder.property(member.name(), member.name())?;
        }
        Ok(builder.build())
    }
}

impl Model for Community {
    fn members() -> Vec<Member<Self>> {
        vec![
            M::text("Id", |r| r.id.as_deref(), |r, v| r.id = Some(v)),
            M::text("Name", |r| r.name.as_deref(), |r, v| r.name = Some(v)),
            M::text("City", |r| r.city.as_deref(), |r, v| r.city = Some(v)),
            M::text("TimeZone", |r| r.time_zone.as_deref(), |r, v| r.time_zone = Some(v)),
            M::text("VkUrl", |r| r.vk_url.as_deref(), |r, v| r.vk_url = Some(v)),
            M::text(
                "TwitterUrl",
                |r| r.twitter_url.as_deref(),
                |r, v| r.twitter_url = Some(v),
            ),
            M::text(
                "TelegramChannelUrl",
                |r| r.telegram_channel_url.as_deref(),
                |r, v| r.telegram_channel_url = Some(v),
            ),
            M::text(
                "TelegramChatUrl",
                |r| r.telegram_chat_url.as_deref(),
                |r, v| r.telegram_chat_url = Some(v),
            ),
            M::text(
                "MeetupComUrl",
                |r| r.meetup_com_url.as_deref(),
                |r, v| r.meetup_com_url = Some(v),
            ),
            M::text(
                "TimePadUrl",
                |r| r.time_pad_url.as_deref(),
                |r, v| r.time_pad_url = Some(v),
            ),
        ]
    }
}

impl Document for Community {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn content_checksum(&self) -> u64 {
        Checksum::new()
            .field(self.id.as_deref())
            .field(self.name.as_deref())
            .field(self.city.as_deref())
            .field(self.time_zone.as_deref())
            .field(self.vk_url.as_deref())
            .field(self.twitter_url.as_deref())
            .field(self.telegram_channel_url.as_deref())
            .field(self.telegram_chat_url.as_deref())
            .field(self.meetup_com_url.as_deref())
            .field(self.time_pad_url.as_deref())
            .finish()
    }
}
