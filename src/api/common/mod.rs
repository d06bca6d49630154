//
//  spotify-web-api
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types
//!
//! Shared types used across every endpoint module: the [`ApiError`] failure
//! type, the paging envelopes the service wraps collections in, and the small
//! objects (images, external links, follower counts) embedded in most
//! catalog entities.
//!
//! # Example
//!
//! ```rust
//! use spotify_web_api::api::common::ApiError;
//!
//! fn describe<T>(result: Result<T, ApiError>) -> String {
//!     match result {
//!         Ok(_) => "ok".to_string(),
//!         Err(e) if e.is_not_found() => "missing".to_string(),
//!         Err(e) => format!("failed: {e}"),
//!     }
//! }
//! ```

use std::collections::HashMap;

use reqwest::StatusCode;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

mod pagination;

pub use pagination::*;

/// Errors produced while building, executing or decoding a request.
///
/// Cancellation is not an error: an aborted request never delivers anything.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    ///
    /// `body` holds the raw response text and `message` the human-readable
    /// message extracted from the error document, when there was one.
    #[error("{status_text} ({status}): {message}")]
    Status {
        status: u16,
        status_text: String,
        body: String,
        message: String,
    },

    /// A 2xx response carried a body that is not valid JSON.
    #[error("Malformed response body (status {status}): {source}")]
    MalformedBody {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// The JSON response did not match the expected model.
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Connection or transport failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The request task was dropped before it could deliver an outcome,
    /// usually because its runtime shut down.
    #[error("Request was interrupted before completing")]
    Interrupted,
}

impl ApiError {
    /// Builds a [`ApiError::Status`] from a failed response.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        let status_text = status.canonical_reason().unwrap_or("Unknown").to_string();
        let message = error_message(&body).unwrap_or_else(|| body.clone());

        Self::Status {
            status: status.as_u16(),
            status_text,
            body,
            message,
        }
    }

    /// HTTP status of the failed response, if the failure came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } | Self::MalformedBody { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn status_text(&self) -> Option<&str> {
        match self {
            Self::Status { status_text, .. } => Some(status_text),
            _ => None,
        }
    }

    /// Raw body of a failed response.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }
}

/// Extracts the message from a Web API error document.
///
/// Regular endpoints answer with `{"error": {"status": 404, "message": "..."}}`,
/// the accounts service with `{"error": "...", "error_description": "..."}`.
pub fn error_message(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;

    if let Some(message) = json
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
    {
        return Some(message.to_string());
    }

    if let Some(description) = json.get("error_description").and_then(|m| m.as_str()) {
        return Some(description.to_string());
    }

    if let Some(error) = json.get("error").and_then(|m| m.as_str()) {
        return Some(error.to_string());
    }

    json.get("message")
        .and_then(|m| m.as_str())
        .map(str::to_string)
}

/// Deserializes `null` as the type's default, for fields the service
/// sometimes sends as `null` instead of an empty list.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Cover art or profile picture.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Image {
    pub url: String,

    #[serde(default)]
    pub height: Option<u32>,

    #[serde(default)]
    pub width: Option<u32>,
}

/// Known external URLs for an object, keyed by service (`spotify`).
pub type ExternalUrls = HashMap<String, String>;

/// Known external identifiers, keyed by scheme (`isrc`, `ean`, `upc`).
pub type ExternalIds = HashMap<String, String>;

/// Follower information for an artist, user or playlist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Followers {
    /// Not supported by the service yet, always null.
    #[serde(default)]
    pub href: Option<String>,

    #[serde(default)]
    pub total: u64,
}

/// Copyright statement attached to an album.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Copyright {
    pub text: String,

    /// `C` for copyright, `P` for sound recording (performance) copyright.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Market restriction applied to a track or album.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restrictions {
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_extracts_message() {
        let err = ApiError::from_status(
            StatusCode::NOT_FOUND,
            r#"{"error":{"status":404,"message":"non existing id"}}"#.to_string(),
        );

        assert_eq!(err.status(), Some(404));
        assert_eq!(err.status_text(), Some("Not Found"));
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Not Found (404): non existing id");
        assert_eq!(
            err.body(),
            Some(r#"{"error":{"status":404,"message":"non existing id"}}"#)
        );
    }

    #[test]
    fn test_status_error_falls_back_to_body() {
        let err = ApiError::from_status(StatusCode::BAD_GATEWAY, "upstream down".to_string());
        assert_eq!(err.to_string(), "Bad Gateway (502): upstream down");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_error_message_formats() {
        assert_eq!(
            error_message(r#"{"error":"invalid_client","error_description":"Invalid client"}"#),
            Some("Invalid client".to_string())
        );
        assert_eq!(
            error_message(r#"{"message":"plain"}"#),
            Some("plain".to_string())
        );
        assert_eq!(error_message("<html>"), None);
    }

    #[test]
    fn test_status_classification() {
        let unauthorized = ApiError::from_status(StatusCode::UNAUTHORIZED, String::new());
        let limited = ApiError::from_status(StatusCode::TOO_MANY_REQUESTS, String::new());

        assert!(unauthorized.is_unauthorized());
        assert!(limited.is_rate_limited());
        assert!(ApiError::Interrupted.status().is_none());
    }
}
