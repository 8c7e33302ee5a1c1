//! Template interpolation for localized strings.
//!
//! Localized sentences sometimes need a rich value in the middle of them, such
//! as an emphasized word or a link. Instead of formatting everything into a
//! `String`, [`interpolate`] splits the template into literal text and the
//! caller's own values, in order, so the presentation layer can render each
//! value however it likes.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use portfolio_i18n::i18n::{interpolate, render, Segment};
//!
//! let params = HashMap::from([("name", "World")]);
//! let segments = interpolate("Hello {name}!", &params);
//!
//! assert_eq!(
//!     segments,
//!     vec![Segment::Literal("Hello "), Segment::Value(&"World"), Segment::Literal("!")]
//! );
//! assert_eq!(render(&segments), "Hello World!");
//! ```

use regex::Regex;
use serde::{Serialize, Serializer};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::sync::OnceLock;

/// Matches `{identifier}` where the identifier is one or more ASCII word characters.
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").unwrap())
}

/// One unit of interpolated output.
///
/// Literal text borrows from the template; values borrow from the
/// substitution map and are never cloned or inspected.
#[derive(Debug, PartialEq, Eq)]
pub enum Segment<'a, V> {
    /// Template text outside any substituted placeholder.
    Literal(&'a str),

    /// A value taken from the substitution map.
    Value(&'a V),
}

// Manual impls: a segment is two pointers wide regardless of `V`.
impl<V> Clone for Segment<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Segment<'_, V> {}

impl<'a, V> Segment<'a, V> {
    /// The literal text, if this is a literal segment.
    pub fn as_literal(&self) -> Option<&'a str> {
        match self {
            Segment::Literal(text) => Some(*text),
            Segment::Value(_) => None,
        }
    }

    /// The substituted value, if this is a value segment.
    pub fn as_value(&self) -> Option<&'a V> {
        match self {
            Segment::Literal(_) => None,
            Segment::Value(value) => Some(*value),
        }
    }
}

impl<V: fmt::Display> fmt::Display for Segment<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(text) => f.write_str(text),
            Segment::Value(value) => fmt::Display::fmt(value, f),
        }
    }
}

/// Literals serialize as strings; values serialize as themselves, so an
/// opaque JSON fragment reaches the client untouched.
impl<V: Serialize> Serialize for Segment<'_, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Segment::Literal(text) => serializer.serialize_str(text),
            Segment::Value(value) => value.serialize(serializer),
        }
    }
}

/// Split `template` into literal text and substituted values.
///
/// Placeholders are scanned once, left to right, without overlap. A
/// placeholder whose identifier is missing from `substitutions` is kept as
/// literal text, braces included, in its own segment. Substituted values are
/// never scanned for placeholders themselves.
///
/// The result is never empty: a template without placeholders (including the
/// empty template) comes back as a single literal segment.
pub fn interpolate<'a, K, V, S>(
    template: &'a str,
    substitutions: &'a HashMap<K, V, S>,
) -> Vec<Segment<'a, V>>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    let mut segments = Vec::new();
    let mut cursor = 0;

    for captures in placeholder_regex().captures_iter(template) {
        let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
            continue;
        };

        if whole.start() > cursor {
            segments.push(Segment::Literal(&template[cursor..whole.start()]));
        }

        match substitutions.get(name.as_str()) {
            Some(value) => segments.push(Segment::Value(value)),
            None => segments.push(Segment::Literal(whole.as_str())),
        }

        cursor = whole.end();
    }

    if cursor < template.len() {
        segments.push(Segment::Literal(&template[cursor..]));
    }

    if segments.is_empty() {
        segments.push(Segment::Literal(template));
    }

    segments
}

/// Concatenate segments into plain text.
pub fn render<V: fmt::Display>(segments: &[Segment<'_, V>]) -> String {
    segments.iter().map(ToString::to_string).collect()
}

/// Placeholder identifiers in `template`, in order of appearance (duplicates kept).
pub fn placeholders(template: &str) -> Vec<&str> {
    placeholder_regex()
        .captures_iter(template)
        .filter_map(|captures| captures.get(1).map(|m| m.as_str()))
        .collect()
}
