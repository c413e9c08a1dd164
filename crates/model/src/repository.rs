// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::{Result, SchemaError};
use crate::schema::Model;
use crate::serializer::DocumentSerializerFactory;
use auditfs::{Collection, Directory, Document};
use std::any::type_name;

/// A root directory with one subdirectory per record group
#[derive(Debug, Clone)]
pub struct Repository {
    root: Directory,
    factory: DocumentSerializerFactory,
}

impl Repository {
    #[must_use]
    pub fn new(root: Directory, factory: DocumentSerializerFactory) -> Self {
        Self { root, factory }
    }

    #[must_use]
    pub fn root(&self) -> &Directory {
        &self.root
    }

    #[must_use]
    pub fn factory(&self) -> &DocumentSerializerFactory {
        &self.factory
    }

    /// The collection of `T` records, stored in `root/<group>`
    pub fn collection<T: Model + Document>(&self) -> Result<Collection<T>> {
        let schema = self
            .factory
            .registry()
            .schema::<T>()
            .ok_or(SchemaError::NotRegistered(type_name::<T>()))?;
        let group = schema.group_name();
        let directory = self.root.get_directory(group)?;
        let serializer = self.factory.create::<T>()?;

        diagnostics::debug!(
            "Opened collection {group} at {path}",
            group,
            path: directory.full_name()
        );
        Ok(Collection::new(group, directory, serializer))
    }
}
