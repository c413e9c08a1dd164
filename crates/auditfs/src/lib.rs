// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! File system abstraction for the auditor.
//!
//! Code that reads or writes records talks to [`Directory`] and [`File`]
//! handles. Each handle carries an [`AbsolutePath`] and a shared backend,
//! so the same code runs against the host disk ([`PhysicalFileSystem`]),
//! an in-process tree ([`MemoryFileSystem`]) or a throwaway temporary
//! directory ([`Sandbox`]).

mod backend;
mod collection;
mod dir;
mod error;
mod file;
pub mod memory;
pub mod naming;
mod path;
mod physical;
mod sandbox;

pub use backend::{EntryKind, FileSystemBackend, ReadStream, WriteStream};
pub use collection::{Collection, Document, DocumentSerializer, Entry};
pub use dir::{Directory, Entries};
pub use error::{BoxError, Error, Result};
pub use file::{File, WritableFile};
pub use memory::MemoryFileSystem;
pub use naming::{NamingStrategy, UnixNamingStrategy, WindowsNamingStrategy};
pub use path::AbsolutePath;
pub use physical::PhysicalFileSystem;
pub use sandbox::Sandbox;
