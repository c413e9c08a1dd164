// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::{Error, Result};
use crate::naming::NamingStrategy;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;

/// A verified root plus zero or more validated segments.
///
/// Never mutated; `join` and `child` return new paths.
#[derive(Clone)]
pub struct AbsolutePath {
    strategy: &'static dyn NamingStrategy,
    root: String,
    segments: Vec<String>,
    full_name: String,
}

impl AbsolutePath {
    /// The default root of `strategy`, e.g. `C:\` or `/`
    #[must_use]
    pub fn root(strategy: &'static dyn NamingStrategy) -> Self {
        Self::from_parts(strategy, strategy.default_root().to_string(), Vec::new())
    }

    /// Parse a rooted path string.
    ///
    /// # Errors
    ///
    /// `InvalidRoot` if `path` is not rooted, `InvalidName` if a segment
    /// after the root is not a valid name.
    pub fn parse(strategy: &'static dyn NamingStrategy, path: &str) -> Result<Self> {
        let (root, rest) = strategy
            .split_root(path)
            .ok_or_else(|| Error::invalid_root(path))?;
        Self::from_parts(strategy, root, Vec::new()).join(rest)
    }

    /// Build from a root and segments given separately.
    ///
    /// # Errors
    ///
    /// Same as [`AbsolutePath::parse`]; additionally the root must carry
    /// nothing beyond the root itself.
    pub fn new<I, S>(strategy: &'static dyn NamingStrategy, root: &str, segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let path = Self::parse(strategy, root)?;
        if !path.is_root() {
            return Err(Error::invalid_root(root));
        }
        segments
            .into_iter()
            .try_fold(path, |path, segment| path.child(segment.as_ref()))
    }

    fn from_parts(strategy: &'static dyn NamingStrategy, root: String, segments: Vec<String>) -> Self {
        let full_name = {
            let mut parts: Vec<&str> = Vec::with_capacity(segments.len() + 1);
            parts.push(&root);
            parts.extend(segments.iter().map(String::as_str));
            strategy.combine(&parts)
        };
        Self {
            strategy,
            root,
            segments,
            full_name,
        }
    }

    fn validate_segment(&self, segment: &str) -> Result<()> {
        if segment == "." || segment == ".." || !self.strategy.is_valid_name(segment) {
            return Err(Error::invalid_name(segment));
        }
        Ok(())
    }

    /// Append one segment.
    ///
    /// # Errors
    ///
    /// `InvalidName` if `name` is not a valid single segment.
    pub fn child(&self, name: &str) -> Result<Self> {
        self.validate_segment(name)?;
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Ok(Self::from_parts(self.strategy, self.root.clone(), segments))
    }

    /// Append a relative path, split on the strategy's separators.
    ///
    /// # Errors
    ///
    /// `InvalidName` on the first invalid segment.
    pub fn join(&self, relative: &str) -> Result<Self> {
        let pieces = self.strategy.split(relative);
        for piece in &pieces {
            self.validate_segment(piece)?;
        }
        let mut segments = self.segments.clone();
        segments.extend(pieces.into_iter().map(str::to_string));
        Ok(Self::from_parts(self.strategy, self.root.clone(), segments))
    }

    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let (_, init) = self.segments.split_last()?;
        Some(Self::from_parts(self.strategy, self.root.clone(), init.to_vec()))
    }

    /// Last segment, `None` for a root
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    #[must_use]
    pub fn root_name(&self) -> &str {
        &self.root
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn strategy(&self) -> &'static dyn NamingStrategy {
        self.strategy
    }

    /// Segments below `base`, if this path is `base` or lies under it
    #[must_use]
    pub fn relative_to(&self, base: &AbsolutePath) -> Option<&[String]> {
        if self.strategy.name() != base.strategy.name() || self.root != base.root {
            return None;
        }
        self.segments.strip_prefix(base.segments.as_slice())
    }

    /// Host path for this location, `host_root` standing in for `base`
    pub(crate) fn to_host_path(
        &self,
        base: &AbsolutePath,
        host_root: &std::path::Path,
    ) -> Result<PathBuf> {
        let relative = self
            .relative_to(base)
            .ok_or_else(|| Error::outside_root(&self.full_name))?;
        let mut path = host_root.to_path_buf();
        path.extend(relative);
        Ok(path)
    }
}

impl PartialEq for AbsolutePath {
    fn eq(&self, other: &Self) -> bool {
        self.full_name == other.full_name
    }
}

impl Eq for AbsolutePath {}

impl Hash for AbsolutePath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.full_name.hash(state);
    }
}

impl PartialOrd for AbsolutePath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AbsolutePath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.full_name.cmp(&other.full_name)
    }
}

impl fmt::Display for AbsolutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

impl fmt::Debug for AbsolutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AbsolutePath({})", self.full_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::{UnixNamingStrategy, WindowsNamingStrategy};

    fn windows() -> &'static dyn NamingStrategy {
        WindowsNamingStrategy::INSTANCE
    }

    #[test]
    fn test_parse_normalizes_separators() {
        let path = AbsolutePath::parse(windows(), "C:/temp//docs\\").unwrap();
        assert_eq!(path.full_name(), "C:\\temp\\docs");
        assert_eq!(path.root_name(), "C:\\");
        assert_eq!(path.segments(), ["temp", "docs"]);
        assert_eq!(path.name(), Some("docs"));
    }

    #[test]
    fn test_root_full_name() {
        let root = AbsolutePath::root(windows());
        assert!(root.is_root());
        assert_eq!(root.full_name(), "C:\\");
        assert_eq!(root.name(), None);
        assert_eq!(root.parent(), None);

        let unix = AbsolutePath::root(UnixNamingStrategy::INSTANCE);
        assert_eq!(unix.full_name(), "/");
    }

    #[test]
    fn test_parse_rejects_unrooted() {
        let err = AbsolutePath::parse(windows(), "temp\\docs").unwrap_err();
        assert!(matches!(err, Error::InvalidRoot(_)));
    }

    #[test]
    fn test_join_rejects_invalid_segment() {
        let root = AbsolutePath::root(windows());
        assert!(matches!(root.join("a/*.txt"), Err(Error::InvalidName(n)) if n == "*.txt"));
        assert!(matches!(root.join("a/../b"), Err(Error::InvalidName(_))));
        assert!(matches!(root.child("   "), Err(Error::InvalidName(_))));
    }

    #[test]
    fn test_new_from_parts() {
        let path = AbsolutePath::new(windows(), "D:", ["data", "talks"]).unwrap();
        assert_eq!(path.full_name(), "D:\\data\\talks");
        assert!(AbsolutePath::new(windows(), "D:\\data", ["talks"]).is_err());
    }

    #[test]
    fn test_relative_to() {
        let base = AbsolutePath::parse(windows(), "C:\\repo").unwrap();
        let file = base.join("talks/t1.xml").unwrap();
        assert_eq!(
            file.relative_to(&base),
            Some(&["talks".to_string(), "t1.xml".to_string()][..])
        );
        let other = AbsolutePath::parse(windows(), "C:\\elsewhere\\x").unwrap();
        assert_eq!(other.relative_to(&base), None);
        assert_eq!(file.parent().unwrap().parent().unwrap(), base);
    }
}
