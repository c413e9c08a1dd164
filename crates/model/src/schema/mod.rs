// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Declarative mapping from record members to XML elements.
//!
//! A record lists its members once ([`Model::members`]). A
//! [`ModelBuilder`] then maps the members that are persisted, and
//! everything left unmapped is excluded from the document. The finished
//! [`Schema`] does the actual conversion to and from an [`Element`] tree.

mod builder;
mod member;


pub use builder::ModelBuilder;
pub use member::Member;

use crate::xml::{Element, FormatError};
use std::collections::BTreeSet;
use std::sync::Arc;

/// A record type that can be described by a schema
pub trait Model: Default + Send + Sync + 'static {
    /// Every member that could be serialized, in declaration order
    fn members() -> Vec<Member<Self>>;
}

/// Finished mapping for one record type
pub struct Schema<T> {
    root_name: String,
    group_name: String,
    mappings: Vec<Mapping<T>>,
    excluded: BTreeSet<&'static str>,
}

struct Mapping<T> {
    member: &'static str,
    target: Target<T>,
}

impl<T> Clone for Mapping<T> {
    fn clone(&self) -> Self {
        let target = match &self.target {
            Target::Property { element, get, set } => Target::Property {
                element: element.clone(),
                get: *get,
                set: *set,
            },
            Target::List {
                container,
                item,
                get,
                push,
            } => Target::List {
                container: container.clone(),
                item: item.clone(),
                get: *get,
                push: *push,
            },
            Target::Records { container, nested } => Target::Records {
                container: container.clone(),
                nested: Arc::clone(nested),
            },
        };
        Self {
            member: self.member,
            target,
        }
    }
}

enum Target<T> {
    Property {
        element: String,
        get: fn(&T) -> Option<&str>,
        set: fn(&mut T, String),
    },
    List {
        container: String,
        item: String,
        get: fn(&T) -> &[String],
        push: fn(&mut T, String),
    },
    Records {
        container: String,
        nested: Arc<dyn NestedRecords<T>>,
    },
}

/// Reads and writes a list of nested records whose type is erased
trait NestedRecords<T>: Send + Sync {
    fn write(&self, record: &T, container: &mut Element);
    fn read(&self, record: &mut T, container: &Element);
}

struct NestedSchema<T, S> {
    item: String,
    get: fn(&T) -> &[S],
    set: fn(&mut T, Vec<S>),
    schema: Schema<S>,
}

impl<T, S> NestedRecords<T> for NestedSchema<T, S>
where
    T: 'static,
    S: Model,
{
    fn write(&self, record: &T, container: &mut Element) {
        for nested in (self.get)(record) {
            container.push(self.schema.write_fields(nested, &self.item));
        }
    }

    fn read(&self, record: &mut T, container: &Element) {
        let items = container
            .children_named(&self.item)
            .map(|item| self.schema.read_fields(item))
            .collect();
        (self.set)(record, items);
    }
}

impl<T: Model> Schema<T> {
    #[must_use]
    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    #[must_use]
    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    /// Members left out of the document, sorted by name
    pub fn excluded(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.excluded.iter().copied()
    }

    /// Mapped members in document order
    pub fn mapped(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.mappings.iter().map(|mapping| mapping.member)
    }

    #[must_use]
    pub fn to_element(&self, record: &T) -> Element {
        self.write_fields(record, &self.root_name)
    }

    /// Build a record from a root element.
    ///
    /// Unknown children are ignored; missing ones leave the default.
    pub fn from_element(&self, root: &Element) -> Result<T, FormatError> {
        if root.name != self.root_name {
            return Err(FormatError::UnexpectedRoot {
                expected: self.root_name.clone(),
                found: root.name.clone(),
            });
        }
        Ok(self.read_fields(root))
    }

    fn write_fields(&self, record: &T, name: &str) -> Element {
        let mut element = Element::new(name);
        for mapping in &self.mappings {
            match &mapping.target {
                Target::Property { element: child, get, .. } => {
                    if let Some(value) = get(record) {
                        element.push(Element::with_text(child.as_str(), value));
                    }
                }
                Target::List {
                    container,
                    item,
                    get,
                    ..
                } => {
                    let values = get(record);
                    if !values.is_empty() {
                        let mut list = Element::new(container.as_str());
                        for value in values {
                            list.push(Element::with_text(item.as_str(), value.as_str()));
                        }
                        element.push(list);
                    }
                }
                Target::Records { container, nested } => {
                    let mut list = Element::new(container.as_str());
                    nested.write(record, &mut list);
                    if !list.children.is_empty() {
                        element.push(list);
                    }
                }
            }
        }
        element
    }

    fn read_fields(&self, element: &Element) -> T {
        let mut record = T::default();
        for child in &element.children {
            let Some(target) = self.target_for(&child.name) else {
                continue;
            };
            match target {
                Target::Property { set, .. } => set(&mut record, child.text.clone()),
                Target::List { item, push, .. } => {
                    for value in child.children_named(item) {
                        push(&mut record, value.text.clone());
                    }
                }
                Target::Records { nested, .. } => nested.read(&mut record, child),
            }
        }
        record
    }

    fn target_for(&self, name: &str) -> Option<&Target<T>> {
        self.mappings
            .iter()
            .map(|mapping| &mapping.target)
            .find(|target| match target {
                Target::Property { element, .. } => element == name,
                Target::List { container, .. } | Target::Records { container, .. } => {
                    container == name
                }
            })
    }
}

impl<T> std::fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Schema")
            .field("root_name", &self.root_name)
            .field("group_name", &self.group_name)
            .field(
                "mapped",
                &self.mappings.iter().map(|m| m.member).collect::<Vec<_>>(),
            )
            .field("excluded", &self.excluded)
            .finish()
    }
}
