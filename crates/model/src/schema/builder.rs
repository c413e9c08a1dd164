// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use super::member::{MemberKind, RecordsAccessor};
use super::{Mapping, Member, Model, NestedSchema, Schema, Target};
use crate::error::SchemaError;
use std::any::type_name;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Builds a [`Schema`] for `T`.
///
/// Starts with every member excluded. Each `property`/`collection` call
/// maps one member; mapping a member again replaces its earlier mapping.
pub struct ModelBuilder<T> {
    root_name: String,
    group_name: String,
    members: Vec<Member<T>>,
    mappings: Vec<Mapping<T>>,
}

impl<T: Model> ModelBuilder<T> {
    /// Describe `T` as root element `root_name`, stored under `group_name`
    pub fn map<R: Into<String>, G: Into<String>>(root_name: R, group_name: G) -> Self {
        Self {
            root_name: root_name.into(),
            group_name: group_name.into(),
            members: T::members(),
            mappings: Vec::new(),
        }
    }

    /// Map a scalar member to a child element
    pub fn property(mut self, member: &str, element: &str) -> Result<Self, SchemaError> {
        let found = self.member(member)?;
        let MemberKind::Text { get, set } = found.kind else {
            return Err(SchemaError::NotAProperty {
                model: type_name::<T>(),
                member: member.to_string(),
            });
        };
        let name = found.name();
        self.insert(Mapping {
            member: name,
            target: Target::Property {
                element: element.to_string(),
                get,
                set,
            },
        });
        Ok(self)
    }

    /// Map a string list member to a container element of `item` elements
    pub fn collection(
        mut self,
        member: &str,
        container: &str,
        item: &str,
    ) -> Result<Self, SchemaError> {
        let found = self.member(member)?;
        let MemberKind::List { get, push } = found.kind else {
            return Err(SchemaError::NotACollection {
                model: type_name::<T>(),
                member: member.to_string(),
            });
        };
        let name = found.name();
        self.insert(Mapping {
            member: name,
            target: Target::List {
                container: container.to_string(),
                item: item.to_string(),
                get,
                push,
            },
        });
        Ok(self)
    }

    /// Map a nested record list. `configure` maps the members of `S`,
    /// which also start out excluded.
    pub fn collection_with<S: Model>(
        mut self,
        member: &str,
        container: &str,
        item: &str,
        configure: impl FnOnce(ModelBuilder<S>) -> Result<ModelBuilder<S>, SchemaError>,
    ) -> Result<Self, SchemaError> {
        let found = self.member(member)?;
        let MemberKind::Records(records) = &found.kind else {
            return Err(SchemaError::NotACollection {
                model: type_name::<T>(),
                member: member.to_string(),
            });
        };
        let Some(accessor) = records.as_any().downcast_ref::<RecordsAccessor<T, S>>() else {
            return Err(SchemaError::ItemTypeMismatch {
                model: type_name::<T>(),
                member: member.to_string(),
                actual: records.item_type_name(),
                requested: type_name::<S>(),
            });
        };
        let RecordsAccessor { get, set } = *accessor;
        let name = found.name();

        let schema = configure(ModelBuilder::<S>::map(item, ""))?.build();
        self.insert(Mapping {
            member: name,
            target: Target::Records {
                container: container.to_string(),
                nested: Arc::new(NestedSchema {
                    item: item.to_string(),
                    get,
                    set,
                    schema,
                }),
            },
        });
        Ok(self)
    }

    /// Finalize. Every member that was not mapped is excluded.
    #[must_use]
    pub fn build(&self) -> Schema<T> {
        let mapped: BTreeSet<&'static str> = self.mappings.iter().map(|m| m.member).collect();
        let excluded = self
            .members
            .iter()
            .map(Member::name)
            .filter(|name| !mapped.contains(name))
            .collect();

        Schema {
            root_name: self.root_name.clone(),
            group_name: self.group_name.clone(),
            mappings: self.mappings.clone(),
            excluded,
        }
    }

    fn member(&self, name: &str) -> Result<&Member<T>, SchemaError> {
        self.members
            .iter()
            .find(|member| member.name() == name)
            .ok_or_else(|| SchemaError::UnknownMember {
                model: type_name::<T>(),
                member: name.to_string(),
            })
    }

    fn insert(&mut self, mapping: Mapping<T>) {
        match self.mappings.iter_mut().find(|m| m.member == mapping.member) {
            Some(existing) => *existing = mapping,
            None => self.mappings.push(mapping),
        }
    }
}
