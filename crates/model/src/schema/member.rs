// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use super::Model;
use std::any::{Any, TypeId};

/// One serializable member of a record type, with typed accessors.
///
/// Listed by [`Model::members`]; a schema maps some of them to elements.
pub struct Member<T> {
    name: &'static str,
    pub(super) kind: MemberKind<T>,
}

pub(super) enum MemberKind<T> {
    Text {
        get: fn(&T) -> Option<&str>,
        set: fn(&mut T, String),
    },
    List {
        get: fn(&T) -> &[String],
        push: fn(&mut T, String),
    },
    Records(Box<dyn RecordsMember<T>>),
}

/// Accessors for a list of nested records, with the item type erased
pub(super) trait RecordsMember<T>: Send + Sync {
    fn item_type(&self) -> TypeId;
    fn item_type_name(&self) -> &'static str;
    fn as_any(&self) -> &dyn Any;
}

pub(super) struct RecordsAccessor<T, S> {
    pub(super) get: fn(&T) -> &[S],
    pub(super) set: fn(&mut T, Vec<S>),
}

impl<T, S> Clone for RecordsAccessor<T, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, S> Copy for RecordsAccessor<T, S> {}

impl<T: 'static, S: Model> RecordsMember<T> for RecordsAccessor<T, S> {
    fn item_type(&self) -> TypeId {
        TypeId::of::<S>()
    }

    fn item_type_name(&self) -> &'static str {
        std::any::type_name::<S>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<T: 'static> Member<T> {
    /// An optional string scalar
    pub fn text(name: &'static str, get: fn(&T) -> Option<&str>, set: fn(&mut T, String)) -> Self {
        Self {
            name,
            kind: MemberKind::Text { get, set },
        }
    }

    /// An ordered list of strings
    pub fn list(name: &'static str, get: fn(&T) -> &[String], push: fn(&mut T, String)) -> Self {
        Self {
            name,
            kind: MemberKind::List { get, push },
        }
    }

    /// An ordered list of nested records
    pub fn records<S: Model>(
        name: &'static str,
        get: fn(&T) -> &[S],
        set: fn(&mut T, Vec<S>),
    ) -> Self {
        Self {
            name,
            kind: MemberKind::Records(Box::new(RecordsAccessor { get, set })),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn is_scalar(&self) -> bool {
        matches!(self.kind, MemberKind::Text { .. })
    }
}

impl<T> std::fmt::Debug for Member<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match &self.kind {
            MemberKind::Text { .. } => "text",
            MemberKind::List { .. } => "list",
            MemberKind::Records(_) => "records",
        };
        write!(f, "Member({}: {kind})", self.name)
    }
}
