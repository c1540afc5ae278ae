//! Field projection for API responses
//!
//! The `fields` query parameter trims response objects down to a requested
//! subset of keys. Projection is columnar: it filters keys, never rows,
//! and it operates on the serialized form of a record so open-ended
//! tutorial metadata participates like any fixed field.

use serde_json::Value;
use std::collections::HashSet;

/// Parsed form of the `fields` query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldDirective {
    /// No `fields` parameter, or an empty value: full representation
    Default,
    /// `fields=*`: full representation, byte-equivalent to [`Self::Default`]
    Wildcard,
    /// Comma-separated names; duplicates collapse, order is irrelevant,
    /// matching is case-sensitive
    Explicit(HashSet<String>),
}

impl FieldDirective {
    /// Parse the raw (already percent-decoded) `fields` value.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => Self::Default,
            Some("*") => Self::Wildcard,
            Some(value) => Self::Explicit(
                value
                    .split(',')
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
        }
    }

    /// Force a field into an explicit selection.
    ///
    /// Used by the tutorial list endpoint, where every element keeps its
    /// `id` so the list stays addressable. Default and Wildcard already
    /// include every field and pass through unchanged.
    pub fn with_required(self, field: &str) -> Self {
        match self {
            Self::Explicit(mut names) => {
                names.insert(field.to_string());
                Self::Explicit(names)
            }
            other => other,
        }
    }
}

/// Apply a directive to a serialized record.
///
/// Objects keep exactly the requested keys that exist; requested names
/// with no matching key are silently ignored. Arrays project each element
/// independently and never drop elements.
pub fn project(value: Value, directive: &FieldDirective) -> Value {
    match directive {
        FieldDirective::Default | FieldDirective::Wildcard => value,
        FieldDirective::Explicit(names) => match value {
            Value::Object(map) => Value::Object(
                map.into_iter()
                    .filter(|(key, _)| names.contains(key))
                    .collect(),
            ),
            Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(|item| project(item, directive))
                    .collect(),
            ),
            other => other,
        },
    }
}
