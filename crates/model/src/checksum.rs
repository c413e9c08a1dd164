// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use auditfs::Document;
use std::hash::{DefaultHasher, Hash, Hasher};

/// Order-sensitive content hash for change detection.
///
/// Feed members in declaration order. `DefaultHasher::new()` uses fixed
/// keys, so a checksum is stable across runs of the same build.
#[derive(Debug, Clone, Default)]
pub struct Checksum {
    hasher: DefaultHasher,
}

impl Checksum {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn field(mut self, value: Option<&str>) -> Self {
        value.hash(&mut self.hasher);
        self
    }

    /// Length-prefixed, so `["a", "b"]` then `[]` differs from `["a"]` then `["b"]`
    #[must_use]
    pub fn list(mut self, items: &[String]) -> Self {
        items.hash(&mut self.hasher);
        self
    }

    #[must_use]
    pub fn nested<S: Document>(mut self, items: &[S]) -> Self {
        items.len().hash(&mut self.hasher);
        for item in items {
            item.content_checksum().hash(&mut self.hasher);
        }
        self
    }

    #[must_use]
    pub fn finish(self) -> u64 {
        self.hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_equal_input_equal_checksum() {
        let a = Checksum::new().field(Some("x")).list(&strings(&["1", "2"])).finish();
        let b = Checksum::new().field(Some("x")).list(&strings(&["1", "2"])).finish();
        assert_eq!(a, b);
    }

    #[test]
    fn test_order_sensitive() {
        let forward = Checksum::new().list(&strings(&["1", "2"])).finish();
        let reverse = Checksum::new().list(&strings(&["2", "1"])).finish();
        assert_ne!(forward, reverse);

        let fields = Checksum::new().field(Some("a")).field(Some("b")).finish();
        let swapped = Checksum::new().field(Some("b")).field(Some("a")).finish();
        assert_ne!(fields, swapped);
    }

    #[test]
    fn test_list_boundaries() {
        let split = Checksum::new()
            .list(&strings(&["a", "b"]))
            .list(&[])
            .finish();
        let moved = Checksum::new()
            .list(&strings(&["a"]))
            .list(&strings(&["b"]))
            .finish();
        assert_ne!(split, moved);
    }

    #[test]
    fn test_missing_differs_from_empty() {
        let missing = Checksum::new().field(None).finish();
        let empty = Checksum::new().field(Some("")).finish();
        assert_ne!(missing, empty);
    }
}
