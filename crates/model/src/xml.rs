// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Minimal owned XML tree.
//!
//! Records only need elements, text and nesting. Parsing goes through
//! `roxmltree` and is copied into [`Element`] so schemas never deal with
//! borrowed document lifetimes. Writing is done here directly.

use std::fmt::Write;

const DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;
const INDENT: &str = "  ";

/// Errors reading or writing a record document
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("Document is not UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("Invalid XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Expected root element <{expected}>, found <{found}>")]
    UnexpectedRoot { expected: String, found: String },

    #[error("Element <{element}> holds {character:?}, which XML cannot represent")]
    UnrepresentableChar { element: String, character: char },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    /// Concatenated text content. Empty for container elements.
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_text<S: Into<String>, V: Into<String>>(name: S, text: V) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            children: Vec::new(),
        }
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Direct children with the given name, in document order
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Serialize as a complete document with declaration.
    ///
    /// # Errors
    ///
    /// `UnrepresentableChar` if some text holds a character XML 1.0 does
    /// not allow, such as most C0 control characters.
    pub fn to_document(&self) -> Result<String, FormatError> {
        let mut out = String::from(DECLARATION);
        out.push('\n');
        self.write_to(&mut out, 0)?;
        out.push('\n');
        Ok(out)
    }

    fn write_to(&self, out: &mut String, depth: usize) -> Result<(), FormatError> {
        let indent = INDENT.repeat(depth);
        if self.children.is_empty() {
            if self.text.is_empty() {
                let _ = write!(out, "{indent}<{} />", self.name);
            } else {
                let text = escape(&self.text).map_err(|character| {
                    FormatError::UnrepresentableChar {
                        element: self.name.clone(),
                        character,
                    }
                })?;
                let _ = write!(out, "{indent}<{0}>{1}</{0}>", self.name, text);
            }
            return Ok(());
        }

        let _ = writeln!(out, "{indent}<{}>", self.name);
        for child in &self.children {
            child.write_to(out, depth + 1)?;
            out.push('\n');
        }
        let _ = write!(out, "{indent}</{}>", self.name);
        Ok(())
    }

    fn from_node(node: roxmltree::Node<'_, '_>) -> Self {
        let mut element = Element::new(node.tag_name().name());
        for child in node.children() {
            if child.is_element() {
                element.children.push(Self::from_node(child));
            } else if child.is_text() {
                element.text.push_str(child.text().unwrap_or_default());
            }
        }
        if !element.children.is_empty() {
            // Whitespace between child elements is layout, not content
            element.text.clear();
        }
        element
    }
}

/// Parse a document and return its root element.
///
/// A leading byte order mark is accepted.
pub fn parse(content: &[u8]) -> Result<Element, FormatError> {
    let text = std::str::from_utf8(content)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let document = roxmltree::Document::parse(text)?;
    Ok(Element::from_node(document.root_element()))
}

/// Escape text for element content.
///
/// `\r` is written as a character reference so parsers do not fold it
/// into a line feed.
///
/// # Errors
///
/// The first character that XML 1.0 cannot carry at all.
pub fn escape(text: &str) -> Result<String, char> {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\r' => out.push_str("&#xD;"),
            c if is_xml_char(c) => out.push(c),
            c => return Err(c),
        }
    }
    Ok(out)
}

/// The `Char` production of XML 1.0
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}
