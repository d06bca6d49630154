//
//  spotify-web-api
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client for the Spotify Web API
//!
//! [`SpotifyClient`] is the session object every endpoint method hangs off.
//! It holds the bearer token and, optionally, a tokio runtime that requests
//! should be spawned onto. Both are captured by each [`Call`] when it is
//! built, so changing them later never affects requests already in flight.
//!
//! ## Features
//!
//! - Bearer token injection on every request
//! - Executor selection (registered runtime, ambient runtime, or dedicated thread)
//! - Configurable base URL for proxies and test servers
//! - Custom User-Agent header

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::runtime::{Handle, RuntimeFlavor};
use tracing::{debug, warn};
use url::Url;

use super::common::ApiError;
use super::query::Params;
use super::request::{Call, HttpMethod, RequestDescriptor};
use super::transport::Transport;
use crate::auth::AccessToken;

/// Base URL of the Web API.
pub const DEFAULT_BASE_URL: &str = "https://api.spotify.com/v1";

/// Client configuration.
///
/// ```rust
/// use spotify_web_api::api::ClientConfig;
///
/// let config = ClientConfig::default();
/// assert_eq!(config.base_url, "https://api.spotify.com/v1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix for every endpoint path. Trailing slashes are ignored.
    pub base_url: String,

    /// `User-Agent` header; defaults to `spotify-web-api/<version>`.
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: None,
        }
    }
}

/// The main client for the Spotify Web API.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use spotify_web_api::api::SpotifyClient;
///
/// let client = SpotifyClient::new()?.with_access_token("BQD...");
/// # Ok::<(), spotify_web_api::api::ApiError>(())
/// ```
///
/// # Choosing an Executor
///
/// Inside a tokio runtime, requests are spawned onto it. Outside one, each
/// request gets a short-lived thread of its own. To pin requests to a
/// specific multi-threaded runtime, register its handle:
///
/// ```rust,no_run
/// use spotify_web_api::api::SpotifyClient;
///
/// let runtime = tokio::runtime::Runtime::new().unwrap();
/// let mut client = SpotifyClient::new()?;
/// client.set_runtime(runtime.handle().clone())?;
/// # Ok::<(), spotify_web_api::api::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    base_url: String,
    token: Option<AccessToken>,
    runtime: Option<Handle>,
}

impl SpotifyClient {
    /// Creates a client for the public Web API with no token set.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the base URL is not an absolute
    /// http(s) URL or the HTTP client could not be built.
    pub fn with_config(config: ClientConfig) -> Result<Self, ApiError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url)
            .map_err(|e| ApiError::Config(format!("Invalid base URL '{}': {}", base_url, e)))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::Config(format!(
                "Base URL must use http or https: {}",
                base_url
            )));
        }

        let user_agent = config
            .user_agent
            .unwrap_or_else(|| format!("spotify-web-api/{}", crate::VERSION));

        // Each request gets its own connection; the host runtime owns scheduling.
        let http = Client::builder()
            .user_agent(user_agent)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HTTP client: {}", e)))?;

        debug!(base_url = %base_url, "Created client");

        Ok(Self {
            http,
            base_url,
            token: None,
            runtime: None,
        })
    }

    /// Sets the access token, builder style.
    pub fn with_access_token(mut self, token: impl Into<AccessToken>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Replaces the access token. `None` clears it.
    pub fn set_access_token(&mut self, token: Option<impl Into<AccessToken>>) {
        self.token = token.map(Into::into);
    }

    pub fn clear_access_token(&mut self) {
        self.token = None;
    }

    /// The current access token, `None` until one is set.
    pub fn access_token(&self) -> Option<&str> {
        self.token.as_ref().map(AccessToken::as_str)
    }

    /// Registers the runtime requests are spawned onto.
    ///
    /// # Errors
    ///
    /// A current-thread runtime only makes progress while its owner blocks
    /// on it, so it is rejected with [`ApiError::Config`]. The client is left
    /// unchanged in that case.
    pub fn set_runtime(&mut self, runtime: Handle) -> Result<(), ApiError> {
        if runtime.runtime_flavor() == RuntimeFlavor::CurrentThread {
            warn!("Rejected current-thread runtime registration");
            return Err(ApiError::Config(
                "A current-thread runtime cannot drive requests spawned from other threads; \
                 register a multi-thread runtime instead"
                    .to_string(),
            ));
        }
        self.runtime = Some(runtime);
        Ok(())
    }

    /// Goes back to the ambient runtime or dedicated-thread fallback.
    pub fn clear_runtime(&mut self) {
        self.runtime = None;
    }

    pub fn runtime(&self) -> Option<&Handle> {
        self.runtime.as_ref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds a call to any endpoint path under the base URL.
    ///
    /// ```rust,no_run
    /// use spotify_web_api::api::{HttpMethod, SpotifyClient};
    ///
    /// # async fn example() -> Result<(), spotify_web_api::api::ApiError> {
    /// let client = SpotifyClient::new()?.with_access_token("BQD...");
    /// let markets = client.request(HttpMethod::Get, "/markets").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn request(&self, method: HttpMethod, path: &str) -> Call {
        self.call(method, path)
    }

    /// Fetches an absolute URL, typically a `next` link from a page.
    ///
    /// The link's own query parameters become the call's base parameters, so
    /// options added afterwards never override them.
    pub fn get_generic(&self, url: &str) -> Call {
        let request = match Url::parse(url) {
            Ok(mut parsed) => {
                let params: Params = parsed.query_pairs().into_owned().collect();
                parsed.set_query(None);
                parsed.set_fragment(None);

                let mut request = RequestDescriptor::new(HttpMethod::Get, parsed.as_str());
                request.params = params;
                request
            }
            Err(e) => {
                debug!(url = %url, error = %e, "Fetching unparsed URL as given");
                RequestDescriptor::new(HttpMethod::Get, url)
            }
        };
        self.call_url(request)
    }

    pub(crate) fn call<T>(&self, method: HttpMethod, path: &str) -> Call<T> {
        let url = format!("{}{}", self.base_url, path);
        self.call_url(RequestDescriptor::new(method, url))
    }

    fn call_url<T>(&self, request: RequestDescriptor) -> Call<T> {
        let transport = Transport::new(self.http.clone(), self.token.clone());
        Call::new(transport, self.runtime.clone(), request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let client = SpotifyClient::new().unwrap();
        assert_eq!(client.base_url(), "https://api.spotify.com/v1");
        assert_eq!(client.access_token(), None);
        assert!(client.runtime().is_none());
    }

    #[test]
    fn test_token_lifecycle() {
        let mut client = SpotifyClient::new().unwrap();
        client.set_access_token(Some("token-1"));
        assert_eq!(client.access_token(), Some("token-1"));

        client.set_access_token(None::<String>);
        assert_eq!(client.access_token(), None);

        let client = client.with_access_token("token-2");
        assert_eq!(client.access_token(), Some("token-2"));
    }

    #[test]
    fn test_base_url_validation() {
        let config = ClientConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            SpotifyClient::with_config(config),
            Err(ApiError::Config(_))
        ));

        let config = ClientConfig {
            base_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(SpotifyClient::with_config(config).is_err());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig {
            base_url: "http://127.0.0.1:9000/v1/".to_string(),
            user_agent: Some("tests".to_string()),
        };
        let client = SpotifyClient::with_config(config).unwrap();
        let call = client.get_me();

        assert_eq!(
            call.descriptor().unwrap().full_url(),
            "http://127.0.0.1:9000/v1/me"
        );
    }

    #[test]
    fn test_generic_url_used_verbatim() {
        let client = SpotifyClient::new().unwrap();
        let call = client.get_generic("https://api.spotify.com/v1/me/tracks?offset=20&limit=20");

        assert_eq!(
            call.descriptor().unwrap().full_url(),
            "https://api.spotify.com/v1/me/tracks?offset=20&limit=20"
        );
    }

    #[test]
    fn test_generic_url_keeps_link_query_first() {
        let client = SpotifyClient::new().unwrap();
        let call = client
            .get_generic("https://api.spotify.com/v1/me/tracks?offset=20&limit=20")
            .options(Params::new().with("market", "ES").with("limit", 50));
        let request = call.descriptor().unwrap();

        assert_eq!(request.url, "https://api.spotify.com/v1/me/tracks");
        assert_eq!(
            request.full_url(),
            "https://api.spotify.com/v1/me/tracks?offset=20&limit=20&market=ES"
        );
    }

    #[test]
    fn test_current_thread_runtime_rejected() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let mut client = SpotifyClient::new().unwrap();

        assert!(matches!(
            client.set_runtime(runtime.handle().clone()),
            Err(ApiError::Config(_))
        ));
        assert!(client.runtime().is_none());
    }

    #[test]
    fn test_multi_thread_runtime_registered() {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .build()
            .unwrap();
        let mut client = SpotifyClient::new().unwrap();

        client.set_runtime(runtime.handle().clone()).unwrap();
        assert!(client.runtime().is_some());

        client.clear_runtime();
        assert!(client.runtime().is_none());
    }
}
