// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::checksum::Checksum;
use crate::error::SchemaError;
use crate::schema::{Member, Model, ModelBuilder, Schema};
use auditfs::Document;

type M = Member<Venue>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Venue {
    pub id: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub map_url: Option<String>,
}

impl Venue {
    pub const ROOT: &'static str = "Venue";
    pub const GROUP: &'static str = "venues";

    pub fn schema() -> Result<Schema<Self>, SchemaError> {
        Ok(ModelBuilder::<Self>::map(Self::ROOT, Self::GROUP)
            .property("Id", "Id")?
            .property("Name", "Name")?
            .property("Address", "Address")?
            .property("MapUrl", "MapUrl")?
            .build())
    }
}

impl Model for Venue {
    fn members() -> Vec<Member<Self>> {
        vec![
            M::text("Id", |r| r.id.as_deref(), |r, v| r.id = Some(v)),
            M::text("Name", |r| r.name.as_deref(), |r, v| r.name = Some(v)),
            M::text("Address", |r| r.address.as_deref(), |r, v| r.address = Some(v)),
            M::text("MapUrl", |r| r.map_url.as_deref(), |r, v| r.map_url = Some(v)),
        ]
    }
}

impl Document for Venue {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn content_checksum(&self) -> u64 {
        Checksum::new()
            .field(self.id.as_deref())
            .field(self.name.as_deref())
            .field(self.address.as_deref())
            .field(self.map_url.as_deref())
            .finish()
    }
}
