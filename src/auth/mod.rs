//
//  spotify-web-api
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication
//!
//! The client never acquires tokens itself. Callers run whatever
//! authorization flow they need (authorization code, client credentials,
//! implicit grant) and hand the resulting access token to
//! [`SpotifyClient::set_access_token`](crate::api::SpotifyClient::set_access_token).
//!
//! Once set, the token is attached as `Authorization: Bearer <token>` to
//! every request, catalog reads included.
//!
//! ## Example
//!
//! ```rust
//! use spotify_web_api::auth::AccessToken;
//!
//! let token = AccessToken::new("BQD...");
//! assert_eq!(token.as_str(), "BQD...");
//! assert_eq!(format!("{token:?}"), "AccessToken(<redacted>)");
//! ```

use std::fmt;

use reqwest::RequestBuilder;

/// An OAuth bearer token for the Web API.
///
/// `Debug` never prints the secret so tokens can't leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Attaches the bearer header to an outgoing request.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(&self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

impl From<&str> for AccessToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header_applied() {
        let client = reqwest::Client::new();
        let request = AccessToken::new("secret-token")
            .apply_to_request(client.get("http://localhost/me"))
            .build()
            .unwrap();

        assert_eq!(
            request.headers().get("authorization").unwrap(),
            "Bearer secret-token"
        );
    }

    #[test]
    fn test_debug_is_redacted() {
        let token = AccessToken::from("secret-token".to_string());
        assert!(!format!("{token:?}").contains("secret"));
    }
}
