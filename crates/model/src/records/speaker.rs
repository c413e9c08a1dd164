// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::checksum::Checksum;
use crate::error::SchemaError;
use crate::schema::{Member, Model, ModelBuilder, Schema};
use auditfs::Document;

type M = Member<Speaker>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Speaker {
    pub id: Option<String>,
    pub name: Option<String>,
    pub company_name: Option<String>,
    pub company_url: Option<String>,
    pub description: Option<String>,
    pub blog_url: Option<String>,
    pub contacts_url: Option<String>,
    pub twitter_url: Option<String>,
    pub habr_url: Option<String>,
    pub git_hub_url: Option<String>,
}

impl Speaker {
    pub const ROOT: &'static str = "Speaker";
    pub const GROUP: &'static str = "speakers";

    pub fn schema() -> Result<Schema<Self>, SchemaError> {
        Ok(ModelBuilder::<Self>::map(Self::ROOT, Self::GROUP)
            .property("Id", "Id")?
            .property("Name", "Name")?
            .property("CompanyName", "CompanyName")?
            .property("CompanyUrl", "CompanyUrl")?
            .property("Description", "Description")?
            .property("BlogUrl", "BlogUrl")?
            .property("ContactsUrl", "ContactsUrl")?
            .property("TwitterUrl", "TwitterUrl")?
            .property("HabrUrl", "HabrUrl")?
            .property("GitHubUrl", "GitHubUrl")?
            .build())
    }
}

impl Model for Speaker {
    fn members() -> Vec<Member<Self>> {
        vec![
            M::text("Id", |r| r.id.as_deref(), |r, v| r.id = Some(v)),
            M::text("Name", |r| r.name.as_deref(), |r, v| r.name = Some(v)),
            M::text(
                "CompanyName",
                |r| r.company_name.as_deref(),
                |r, v| r.company_name = Some(v),
            ),
            M::text(
                "CompanyUrl",
                |r| r.company_url.as_deref(),
                |r, v| r.company_url = Some(v),
            ),
            M::text(
                "Description",
                |r| r.description.as_deref(),
                |r, v| r.description = Some(v),
            ),
            M::text("BlogUrl", |r| r.blog_url.as_deref(), |r, v| r.blog_url = Some(v)),
            M::text(
                "ContactsUrl",
                |r| r.contacts_url.as_deref(),
                |r, v| r.contacts_url = Some(v),
            ),
            M::text(
                "TwitterUrl",
                |r| r.twitter_url.as_deref(),
                |r, v| r.twitter_url = Some(v),
            ),
            M::text("HabrUrl", |r| r.habr_url.as_deref(), |r, v| r.habr_url = Some(v)),
            M::text(
                "GitHubUrl",
                |r| r.git_hub_url.as_deref(),
                |r, v| r.git_hub_url = Some(v),
            ),
        ]
    }
}

impl Document for Speaker {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn content_checksum(&self) -> u64 {
        Checksum::new()
            .field(self.id.as_deref())
            .field(self.name.as_deref())
            .field(self.company_name.as_deref())
            .field(self.company_url.as_deref())
            .field(self.description.as_deref())
            .field(self.blog_url.as_deref())
            .field(self.contacts_url.as_deref())
            .field(self.twitter_url.as_deref())
            .field(self.habr_url.as_deref())
            .field(self.git_hub_url.as_deref())
            .finish()
    }
}
