// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

pub type Result<T> = std::result::Result<T, Error>;

/// Misuse of the schema builder or the model registry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("{model} has no member named '{member}'")]
    UnknownMember { model: &'static str, member: String },

    #[error("{model}.{member} is not a scalar property")]
    NotAProperty { model: &'static str, member: String },

    #[error("{model}.{member} is not a collection")]
    NotACollection { model: &'static str, member: String },

    #[error("{model}.{member} holds {actual}, not {requested}")]
    ItemTypeMismatch {
        model: &'static str,
        member: String,
        actual: &'static str,
        requested: &'static str,
    },

    #[error("{0} is already registered")]
    AlreadyRegistered(&'static str),

    #[error("{0} is not registered")]
    NotRegistered(&'static str),
}

/// Errors raised when binding registered models to storage
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    FileSystem(#[from] auditfs::Error),
}
