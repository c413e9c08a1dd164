// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use super::file::MemoryFile;
use crate::backend::EntryKind;
use std::collections::BTreeMap;

/// A node of the in-memory tree
pub enum MemoryNode {
    Directory(MemoryDirectory),
    File(MemoryFile),
}

/// Represents a directory backed by a BTreeMap
#[derive(Default)]
pub struct MemoryDirectory {
    entries: BTreeMap<String, MemoryNode>,
}

/// Why a file could not be placed at a path
#[derive(Debug, PartialEq, Eq)]
pub enum Blocked {
    /// An ancestor segment names an existing file
    AncestorIsFile(usize),
    /// The target names an existing directory
    TargetIsDirectory,
}

impl MemoryNode {
    #[must_use]
    pub fn kind(&self) -> EntryKind {
        match self {
            MemoryNode::Directory(_) => EntryKind::Directory,
            MemoryNode::File(_) => EntryKind::File,
        }
    }
}

impl MemoryDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the node at `segments` below this directory
    #[must_use]
    pub fn find(&self, segments: &[String]) -> Option<&MemoryNode> {
        let (last, init) = segments.split_last()?;
        let mut dir = self;
        for name in init {
            match dir.entries.get(name)? {
                MemoryNode::Directory(child) => dir = child,
                MemoryNode::File(_) => return None,
            }
        }
        dir.entries.get(last)
    }

    /// Look up a directory; an empty path is this directory
    #[must_use]
    pub fn find_directory(&self, segments: &[String]) -> Option<&MemoryDirectory> {
        if segments.is_empty() {
            return Some(self);
        }
        match self.find(segments)? {
            MemoryNode::Directory(dir) => Some(dir),
            MemoryNode::File(_) => None,
        }
    }

    /// Check whether `create_file` would succeed, without changing anything
    pub fn check_writable(&self, segments: &[String]) -> Result<(), Blocked> {
        let Some((last, init)) = segments.split_last() else {
            return Err(Blocked::TargetIsDirectory);
        };
        let mut dir = self;
        for (depth, name) in init.iter().enumerate() {
            match dir.entries.get(name) {
                None => return Ok(()),
                Some(MemoryNode::File(_)) => return Err(Blocked::AncestorIsFile(depth)),
                Some(MemoryNode::Directory(child)) => dir = child,
            }
        }
        match dir.entries.get(last) {
            Some(MemoryNode::Directory(_)) => Err(Blocked::TargetIsDirectory),
            _ => Ok(()),
        }
    }

    /// Create or truncate the file at `segments`, materializing parents
    pub fn create_file(&mut self, segments: &[String]) -> Result<MemoryFile, Blocked> {
        self.check_writable(segments)?;
        let Some((last, init)) = segments.split_last() else {
            return Err(Blocked::TargetIsDirectory);
        };

        let mut dir = self;
        for (depth, name) in init.iter().enumerate() {
            let node = dir
                .entries
                .entry(name.clone())
                .or_insert_with(|| MemoryNode::Directory(MemoryDirectory::new()));
            dir = match node {
                MemoryNode::Directory(child) => child,
                MemoryNode::File(_) => return Err(Blocked::AncestorIsFile(depth)),
            };
        }

        let file = MemoryFile::new();
        let _ = dir
            .entries
            .insert(last.clone(), MemoryNode::File(file.clone()));
        Ok(file)
    }

    /// Visible child names of one kind, in name order
    #[must_use]
    pub fn names(&self, kind: EntryKind) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(name, node)| !name.starts_with('.') && node.kind() == kind)
            .map(|(name, _)| name.clone())
            .collect()
    }
}
