//
//  spotify-web-api
//  api/query.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Query parameter mapping and encoding.
//!
//! Every endpoint method builds a [`Params`] mapping holding its own base
//! parameters, and callers layer their options on top with [`Params::merge`].
//! The merge is first-writer-wins: a key that is already present is never
//! overwritten, so an option can't clobber something the endpoint requires.
//!
//! Rendering follows URI-component rules. Letters, digits and
//! `- _ . ! ~ * ' ( )` pass through and everything else is percent-encoded
//! as UTF-8, so a space becomes `%20` and a comma becomes `%2C`.
//!
//! ```rust
//! use spotify_web_api::api::query::Params;
//!
//! let params = Params::new()
//!     .with("q", "The Best Of Keane")
//!     .with("type", "album")
//!     .merged(Params::new().with("type", "track").with("limit", 1));
//!
//! assert_eq!(
//!     params.to_query_string(),
//!     "?q=The%20Best%20Of%20Keane&type=album&limit=1"
//! );
//! ```

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except letters, digits and `-_.!~*'()` is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// A single query parameter value.
///
/// Numbers and booleans are kept typed until rendering so that `false` and
/// `0` still produce `state=false` and `offset=0`.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::UInt(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
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

impl From<f32> for ParamValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

macro_rules! int_param {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

int_param!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<usize> for ParamValue {
    fn from(value: usize) -> Self {
        // usize is at most 64 bits on every supported target
        Self::UInt(value as u64)
    }
}

/// An insertion-ordered set of query parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Vec<(String, ParamValue)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, replacing the value in place if this mapping already has it.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets `key` to the comma-joined `values`.
    ///
    /// The encoder has no list type of its own; this is how id lists and
    /// seed lists reach the wire (`ids=a%2Cb`).
    pub fn with_list<I, S>(self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.with(key, join_ids(values))
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Appends the keys of `other` that are not already present.
    pub fn merge(&mut self, other: Params) {
        for (key, value) in other.0 {
            if !self.contains_key(&key) {
                self.0.push((key, value));
            }
        }
    }

    pub fn merged(mut self, other: Params) -> Self {
        self.merge(other);
        self
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let index = self.0.iter().position(|(k, _)| k == key)?;
        Some(self.0.remove(index).1)
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders the mapping as `?k=v&k2=v2`, or `""` when empty.
    pub fn to_query_string(&self) -> String {
        if self.0.is_empty() {
            return String::new();
        }

        let pairs: Vec<String> = self
            .0
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    encode_component(key),
                    encode_component(&value.to_string())
                )
            })
            .collect();

        format!("?{}", pairs.join("&"))
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Joins identifiers with a comma.
pub fn join_ids<I, S>(ids: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ids.into_iter()
        .map(|id| id.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(",")
}

pub(crate) fn collect_ids<I, S>(ids: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ids.into_iter().map(|id| id.as_ref().to_string()).collect()
}

/// Percent-encodes a caller-supplied path segment such as a user id.
pub fn encode_segment(segment: &str) -> String {
    encode_component(segment)
}
