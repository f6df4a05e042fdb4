//
//  gh-rest
//  api/format.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/14.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Output shapes for API responses.
//!
//! A caller picks one [`Format`] per call; the request sent over the wire is
//! the same for all three; only the interpretation of a successful body
//! differs. The result comes back as a [`Payload`], a tagged union whose
//! variant always matches the requested format.
//!
//! # Example
//!
//! ```rust
//! use gh_rest::api::{Format, Payload};
//! use serde_json::Value;
//!
//! let payload: Payload<Value> = Payload::Raw("{}".to_string());
//! assert_eq!(payload.format(), Format::Raw);
//! assert_eq!(payload.into_raw().as_deref(), Some("{}"));
//! ```

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

/// The representation a caller wants a successful response in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// The response body, verbatim.
    Raw,
    /// A generic JSON tree.
    #[default]
    Structured,
    /// A domain object built from the JSON tree.
    Typed,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Raw => "raw",
            Self::Structured => "json",
            Self::Typed => "typed",
        };
        f.write_str(name)
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "raw" | "text" => Ok(Self::Raw),
            "json" | "structured" => Ok(Self::Structured),
            "typed" | "object" => Ok(Self::Typed),
            other => Err(format!("unknown format '{other}' (expected raw, json or typed)")),
        }
    }
}

/// A successful response in the shape selected by a [`Format`].
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<T> {
    Raw(String),
    Structured(Value),
    Typed(T),
}

impl<T> Payload<T> {
    /// The format this payload was produced for.
    pub fn format(&self) -> Format {
        match self {
            Self::Raw(_) => Format::Raw,
            Self::Structured(_) => Format::Structured,
            Self::Typed(_) => Format::Typed,
        }
    }

    pub fn into_raw(self) -> Option<String> {
        match self {
            Self::Raw(body) => Some(body),
            _ => None,
        }
    }

    pub fn into_structured(self) -> Option<Value> {
        match self {
            Self::Structured(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_typed(self) -> Option<T> {
        match self {
            Self::Typed(value) => Some(value),
            _ => None,
        }
    }

    /// Maps the typed variant, leaving the other shapes untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Payload<U> {
        match self {
            Self::Raw(body) => Payload::Raw(body),
            Self::Structured(value) => Payload::Structured(value),
            Self::Typed(value) => Payload::Typed(f(value)),
        }
    }
}
