// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Path syntax rules, one strategy per platform convention.
//!
//! Strategies are stateless and shared as `&'static dyn NamingStrategy`.
//! None of these functions fail: they return `bool`/`Option` and leave it
//! to [`crate::AbsolutePath`] to reject bad input.

use std::fmt::Debug;

/// Rules for one path syntax: root detection, combination and name validity
pub trait NamingStrategy: Debug + Send + Sync {
    /// Short identifier used to tell strategies apart
    fn name(&self) -> &'static str;

    /// Separator written between segments
    fn separator(&self) -> char;

    /// Whether `c` is accepted as a separator when parsing
    fn is_separator(&self, c: char) -> bool;

    /// Root that a fresh virtual file system starts at
    fn default_root(&self) -> &'static str;

    /// Split a path into its canonical root and the text after the root.
    fn split_root<'a>(&self, path: &'a str) -> Option<(String, &'a str)>;

    /// Split relative text into segments, dropping empty pieces.
    fn split<'a>(&self, path: &'a str) -> Vec<&'a str>;

    /// False for empty, all-whitespace, or reserved-character names
    fn is_valid_name(&self, name: &str) -> bool;

    fn try_get_path_root(&self, path: &str) -> Option<String> {
        self.split_root(path).map(|(root, _)| root)
    }

    fn is_path_rooted(&self, path: &str) -> bool {
        self.try_get_path_root(path).is_some()
    }

    /// Join segments with the canonical separator.
    ///
    /// Empty segments are skipped and no separator is doubled.
    fn combine(&self, segments: &[&str]) -> String {
        let separator = self.separator();
        let mut combined = String::new();

        for segment in segments.iter().filter(|s| !s.is_empty()) {
            if combined.is_empty() {
                combined.push_str(segment);
                continue;
            }

            let trimmed = segment.trim_start_matches(|c: char| self.is_separator(c));
            if trimmed.is_empty() {
                continue;
            }
            if !combined.ends_with(|c: char| self.is_separator(c)) {
                combined.push(separator);
            }
            combined.push_str(trimmed);
        }

        combined
    }
}

/// The naming strategy of the platform this process runs on
#[must_use]
pub fn host() -> &'static dyn NamingStrategy {
    #[cfg(windows)]
    {
        WindowsNamingStrategy::INSTANCE
    }
    #[cfg(not(windows))]
    {
        UnixNamingStrategy::INSTANCE
    }
}

const WINDOWS_SEPARATORS: [char; 2] = ['\\', '/'];
const WINDOWS_RESERVED: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Drive-letter paths: `C:`, `C:\temp`, `C:/temp/docs`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowsNamingStrategy;

impl WindowsNamingStrategy {
    pub const INSTANCE: &'static WindowsNamingStrategy = &WindowsNamingStrategy;
}

impl NamingStrategy for WindowsNamingStrategy {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn separator(&self) -> char {
        '\\'
    }

    fn is_separator(&self, c: char) -> bool {
        WINDOWS_SEPARATORS.contains(&c)
    }

    fn default_root(&self) -> &'static str {
        "C:\\"
    }

    fn split_root<'a>(&self, path: &'a str) -> Option<(String, &'a str)> {
        let mut chars = path.chars();
        let letter = chars.next().filter(char::is_ascii_alphabetic)?;
        if chars.next() != Some(':') {
            return None;
        }

        // Drive letter and colon are both ASCII.
        let rest = &path[2..];
        match rest.chars().next() {
            None => Some((format!("{letter}:\\"), rest)),
            Some(c) if self.is_separator(c) => {
                Some((format!("{letter}:\\"), &rest[c.len_utf8()..]))
            }
            Some(_) => None,
        }
    }

    fn split<'a>(&self, path: &'a str) -> Vec<&'a str> {
        path.split(WINDOWS_SEPARATORS)
            .filter(|s| !s.is_empty())
            .collect()
    }

    fn is_valid_name(&self, name: &str) -> bool {
        !name.is_empty()
            && !name.chars().all(char::is_whitespace)
            && !name
                .chars()
                .any(|c| c.is_control() || WINDOWS_RESERVED.contains(&c))
    }
}

/// Slash-rooted paths, enough to root a physical tree on a Unix host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnixNamingStrategy;

impl UnixNamingStrategy {
    pub const INSTANCE: &'static UnixNamingStrategy = &UnixNamingStrategy;
}

impl NamingStrategy for UnixNamingStrategy {
    fn name(&self) -> &'static str {
        "unix"
    }

    fn separator(&self) -> char {
        '/'
    }

    fn is_separator(&self, c: char) -> bool {
        c == '/'
    }

    fn default_root(&self) -> &'static str {
        "/"
    }

    fn split_root<'a>(&self, path: &'a str) -> Option<(String, &'a str)> {
        path.strip_prefix('/').map(|rest| ("/".to_string(), rest))
    }

    fn split<'a>(&self, path: &'a str) -> Vec<&'a str> {
        path.split('/').filter(|s| !s.is_empty()).collect()
    }

    fn is_valid_name(&self, name: &str) -> bool {
        !name.is_empty()
            && !name.chars().all(char::is_whitespace)
            && !name.chars().any(|c| c == '/' || c == '\0')
    }
}
