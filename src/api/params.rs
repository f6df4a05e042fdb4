//
//  gh-rest
//  api/params.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/14.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Request parameter builder.
//!
//! [`Params`] accumulates loosely-typed name/value pairs for a single call and
//! renders them either as a URL query string (for reads) or as a flat JSON
//! object (for writes). Names are unique: adding a name that is already
//! present replaces its value in place, so insertion order is that of the
//! first `add`.
//!
//! # Example
//!
//! ```rust
//! use gh_rest::api::Params;
//!
//! let params = Params::new().with("page", 2).with("per_page", 50);
//! assert_eq!(params.to_query_string(), "?page=2&per_page=50");
//! ```

use serde_json::{Map, Number, Value};
use url::form_urlencoded;

/// A single parameter value.
///
/// Collections are kept as a list so that query strings can render them
/// comma-joined while request bodies keep them as JSON arrays.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// A string value.
    Str(String),
    /// An integral number.
    Int(i64),
    /// An unsigned number above `i64::MAX`.
    UInt(u64),
    /// A floating point number.
    Float(f64),
    /// A boolean flag.
    Bool(bool),
    /// A collection of strings.
    List(Vec<String>),
    /// The "absent" marker produced by `None`. Never rendered.
    Absent,
}

impl ParamValue {
    /// Returns `true` for the absent marker.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Renders the value as it appears in a query string, before encoding.
    pub fn to_query_value(&self) -> Option<String> {
        match self {
            Self::Str(s) => Some(s.clone()),
            Self::Int(n) => Some(n.to_string()),
            Self::UInt(n) => Some(n.to_string()),
            Self::Float(n) => Some(n.to_string()),
            Self::Bool(b) => Some(b.to_string()),
            Self::List(items) => Some(items.join(",")),
            Self::Absent => None,
        }
    }

    /// Renders the value as a JSON value for a request body.
    pub fn to_json(&self) -> Option<Value> {
        match self {
            Self::Str(s) => Some(Value::String(s.clone())),
            Self::Int(n) => Some(Value::Number((*n).into())),
            Self::UInt(n) => Some(Value::Number((*n).into())),
            // Non-finite floats have no JSON form
            Self::Float(n) => Some(Number::from_f64(*n).map_or(Value::Null, Value::Number)),
            Self::Bool(b) => Some(Value::Bool(*b)),
            Self::List(items) => Some(Value::Array(
                items.iter().cloned().map(Value::String).collect(),
            )),
            Self::Absent => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ParamValue {
                fn from(value: $t) -> Self {
                    Self::Int(value.into())
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(n) => Self::Int(n),
            Err(_) => Self::UInt(value),
        }
    }
}

impl From<usize> for ParamValue {
    fn from(value: usize) -> Self {
        Self::from(value as u64)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<&[&str]> for ParamValue {
    fn from(value: &[&str]) -> Self {
        Self::List(value.iter().map(|s| s.to_string()).collect())
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.into_iter().map(str::to_string).collect())
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// Ordered set of named request parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `name`, or overwrites its value if already present.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    /// Chaining form of [`add`](Self::add).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.add(name, value);
        self
    }

    /// Removes `name`; does nothing when it is not present.
    pub fn remove_if_present(&mut self, name: &str) -> &mut Self {
        self.entries.retain(|(k, _)| k != name);
        self
    }

    /// Adds every entry of `other`, overwriting shared names.
    pub fn extend_from(&mut self, other: &Params) -> &mut Self {
        for (name, value) in &other.entries {
            self.add(name.clone(), value.clone());
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Renders `?name=value&...` in insertion order, or `""` when nothing
    /// renderable was added. Absent values are skipped.
    pub fn to_query_string(&self) -> String {
        let pairs: Vec<String> = self
            .entries
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_query_value()
                    .map(|v| format!("{}={}", encode(name), encode(&v)))
            })
            .collect();

        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }

    /// Renders the parameters as a flat JSON object, omitting absent values.
    pub fn to_body_payload(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .filter_map(|(name, value)| value.to_json().map(|v| (name.clone(), v)))
            .collect();
        Value::Object(map)
    }
}

fn encode(input: &str) -> String {
    form_urlencoded::byte_serialize(input.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(query: &str) -> Vec<(String, String)> {
        let raw = query.strip_prefix('?').unwrap_or(query);
        form_urlencoded::parse(raw.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_empty_query_string() {
        assert_eq!(Params::new().to_query_string(), "");
    }

    #[test]
    fn test_pagination_query_keeps_insertion_order() {
        let mut params = Params::new();
        params.add("page", 2).add("per_page", 50);
        assert_eq!(params.to_query_string(), "?page=2&per_page=50");
    }

    #[test]
    fn test_query_round_trip_decodes_values() {
        let params = Params::new()
            .with("q", "is:open label:\"good first issue\"")
            .with("sort", "created")
            .with("draft", false)
            .with("since", "2024-01-01T00:00:00+00:00")
            .with("path", "a/b&c=d");

        let decoded = decode(&params.to_query_string());
        let expected: Vec<(String, String)> = [
            ("q", "is:open label:\"good first issue\""),
            ("sort", "created"),
            ("draft", "false"),
            ("since", "2024-01-01T00:00:00+00:00"),
            ("path", "a/b&c=d"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        assert_eq!(decoded.len(), params.len());
        assert_eq!(decoded, expected);
    }

    #[test]
    fn test_add_overwrites_existing_name() {
        let mut params = Params::new();
        params.add("state", "open").add("base", "main");
        params.add("state", "closed");

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("state"), Some(&ParamValue::Str("closed".into())));
        assert_eq!(params.to_query_string(), "?state=closed&base=main");
    }

    #[test]
    fn test_remove_if_present() {
        let mut params = Params::new().with("page", 1);
        params.remove_if_present("per_page");
        assert_eq!(params.len(), 1);
        params.remove_if_present("page");
        assert!(params.is_empty());
    }

    #[test]
    fn test_list_is_comma_joined_in_query() {
        let params = Params::new().with("labels", vec!["bug", "ui"]);
        assert_eq!(
            decode(&params.to_query_string()),
            vec![("labels".to_string(), "bug,ui".to_string())]
        );
    }

    #[test]
    fn test_body_payload_omits_absent_values() {
        let params = Params::new()
            .with("name", "core")
            .with("description", None::<String>)
            .with("privacy", Some("closed"))
            .with("repo_names", vec!["acme/api".to_string()]);

        assert_eq!(
            params.to_body_payload(),
            serde_json::json!({
                "name": "core",
                "privacy": "closed",
                "repo_names": ["acme/api"]
            })
        );
    }

    #[test]
    fn test_large_unsigned_stays_numeric() {
        let params = Params::new().with("since", u64::MAX).with("page", 3u64);
        assert_eq!(params.get("since"), Some(&ParamValue::UInt(u64::MAX)));
        assert_eq!(params.get("page"), Some(&ParamValue::Int(3)));
        assert_eq!(
            params.to_body_payload(),
            serde_json::json!({"since": u64::MAX, "page": 3})
        );
        assert_eq!(
            params.to_query_string(),
            format!("?since={}&page=3", u64::MAX)
        );
    }

    #[test]
    fn test_absent_values_are_skipped_in_query() {
        let params = Params::new().with("head", None::<&str>);
        assert_eq!(params.to_query_string(), "");
    }

    #[test]
    fn test_extend_from_overwrites() {
        let mut params = Params::new().with("page", 1);
        params.extend_from(&Params::new().with("page", 3).with("per_page", 10));
        assert_eq!(params.to_query_string(), "?page=3&per_page=10");
    }
}
