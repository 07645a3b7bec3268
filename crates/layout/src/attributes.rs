//! Declarative Attributes
//!
//! Already-resolved attribute values, looked up by name. Parsing is
//! lenient: an absent or malformed value keeps the caller's default.

use std::collections::{BTreeMap, HashMap};

use crate::view::Dimension;

/// A source of named attribute values
pub trait AttributeSource {
    /// Get the raw value of an attribute
    fn get(&self, name: &str) -> Option<&str>;
}

impl<K: AsRef<str>, V: AsRef<str>> AttributeSource for [(K, V)] {
    fn get(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| key.as_ref() == name)
            .map(|(_, value)| value.as_ref())
    }
}

impl AttributeSource for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<&str> {
        HashMap::get(self, name).map(String::as_str)
    }
}

impl AttributeSource for BTreeMap<String, String> {
    fn get(&self, name: &str) -> Option<&str> {
        BTreeMap::get(self, name).map(String::as_str)
    }
}

/// Parse an attribute with `parse`, keeping `default` when it is absent or
/// not understood
pub fn parse_with<A, T, F>(attrs: &A, name: &str, default: T, parse: F) -> T
where
    A: AttributeSource + ?Sized,
    F: FnOnce(&str) -> Option<T>,
{
    let raw = match attrs.get(name) {
        Some(raw) => raw,
        None => return default,
    };

    match parse(raw.trim()) {
        Some(value) => value,
        None => {
            log::debug!("Ignoring malformed attribute {}={:?}", name, raw);
            default
        }
    }
}

/// Parse a float attribute
pub fn parse_float<A: AttributeSource + ?Sized>(attrs: &A, name: &str, default: f32) -> f32 {
    parse_with(attrs, name, default, |s| s.parse::<f32>().ok())
}

/// Parse an integer attribute
pub fn parse_int<A: AttributeSource + ?Sized>(attrs: &A, name: &str, default: i32) -> i32 {
    parse_with(attrs, name, default, |s| s.parse::<i32>().ok())
}

/// Parse a dimension attribute: `match_parent`, `wrap_content` or a pixel count
pub fn parse_dimension<A: AttributeSource + ?Sized>(
    attrs: &A,
    name: &str,
    default: Dimension,
) -> Dimension {
    parse_with(attrs, name, default, |s| match s.to_ascii_lowercase().as_str() {
        "match_parent" | "fill_parent" => Some(Dimension::MatchParent),
        "wrap_content" => Some(Dimension::WrapContent),
        other => other
            .strip_suffix("px")
            .unwrap_or(other)
            .parse::<i32>()
            .ok()
            .map(Dimension::Pixels),
    })
}
