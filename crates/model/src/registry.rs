// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Registry of record schemas, keyed by record type.

use crate::error::SchemaError;
use crate::records::{Community, Friend, Meetup, Speaker, Talk, Venue};
use crate::schema::{Model, Schema};
use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::sync::Arc;

/// Summary of one registered record type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelInfo {
    pub type_name: &'static str,
    pub root_name: String,
    pub group_name: String,
}

/// Schemas for the record types a repository knows about.
///
/// Built once at startup and shared behind an `Arc`.
#[derive(Default)]
pub struct ModelRegistry {
    schemas: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
    order: Vec<ModelInfo>,
}

impl ModelRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every record type in this crate
    pub fn with_default_models() -> Result<Self, SchemaError> {
        let mut registry = Self::new();
        registry.register(Community::schema()?)?;
        registry.register(Friend::schema()?)?;
        registry.register(Meetup::schema()?)?;
        registry.register(Speaker::schema()?)?;
        registry.register(Talk::schema()?)?;
        registry.register(Venue::schema()?)?;
        Ok(registry)
    }

    pub fn register<T: Model>(&mut self, schema: Schema<T>) -> Result<(), SchemaError> {
        let key = TypeId::of::<T>();
        if self.schemas.contains_key(&key) {
            return Err(SchemaError::AlreadyRegistered(type_name::<T>()));
        }

        diagnostics::debug!(
            "Registered {model} as <{root}> in {group}",
            model: type_name::<T>(),
            root: schema.root_name(),
            group: schema.group_name()
        );

        self.order.push(ModelInfo {
            type_name: type_name::<T>(),
            root_name: schema.root_name().to_string(),
            group_name: schema.group_name().to_string(),
        });
        self.schemas.insert(key, Arc::new(schema));
        Ok(())
    }

    #[must_use]
    pub fn schema<T: Model>(&self) -> Option<Arc<Schema<T>>> {
        self.schemas
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|schema| schema.downcast::<Schema<T>>().ok())
    }

    #[must_use]
    pub fn contains<T: Model>(&self) -> bool {
        self.schemas.contains_key(&TypeId::of::<T>())
    }

    /// Registered types in registration order
    pub fn models(&self) -> impl Iterator<Item = &ModelInfo> {
        self.order.iter()
    }

    #[must_use]
    pub fn find_group(&self, group_name: &str) -> Option<&ModelInfo> {
        self.order.iter().find(|info| info.group_name == group_name)
    }
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.order.iter()).finish()
    }
}
