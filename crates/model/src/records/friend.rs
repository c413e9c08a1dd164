// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::checksum::Checksum;
use crate::error::SchemaError;
use crate::schema::{Member, Model, ModelBuilder, Schema};
use auditfs::Document;

type M = Member<Friend>;

/// A partner organization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Friend {
    pub id: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}

impl Friend {
    pub const ROOT: &'static str = "Friend";
    pub const GROUP: &'static str = "friends";

    pub fn schema() -> Result<Schema<Self>, SchemaError> {
        Ok(ModelBuilder::<Self>::map(Self::ROOT, Self::GROUP)
            .property("Id", "Id")?
            .property("Name", "Name")?
            .property("Url", "Url")?
            .property("Description", "Description")?
            .build())
    }
}

impl Model for Friend {
    fn members() -> Vec<Member<Self>> {
        vec![
            M::text("Id", |r| r.id.as_deref(), |r, v| r.id = Some(v)),
            M::text("Name", |r| r.name.as_deref(), |r, v| r.name = Some(v)),
            M::text("Url", |r| r.url.as_deref(), |r, v| r.url = Some(v)),
            M::text(
                "Description",
                |r| r.description.as_deref(),
                |r, v| r.description = Some(v),
            ),
        ]
    }
}

impl Document for Friend {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn content_checksum(&self) -> u64 {
        Checksum::new()
            .field(self.id.as_deref())
            .field(self.name.as_deref())
            .field(self.url.as_deref())
            .field(self.description.as_deref())
            .finish()
    }
}
