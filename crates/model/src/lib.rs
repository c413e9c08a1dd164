// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Domain records and their XML storage format.

mod checksum;
mod error;
pub mod records;
mod registry;
mod repository;
pub mod schema;
mod serializer;
pub mod xml;

pub use checksum::Checksum;
pub use error::{Error, Result, SchemaError};
pub use records::{Community, Friend, Meetup, Session, Speaker, Talk, Venue};
pub use registry::{ModelInfo, ModelRegistry};
pub use repository::Repository;
pub use schema::{Member, Model, ModelBuilder, Schema};
pub use serializer::{DocumentSerializerFactory, XML_EXTENSION, XmlDocumentSerializer};
pub use xml::FormatError;
