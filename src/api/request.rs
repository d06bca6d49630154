//
//  spotify-web-api
//  api/request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Request descriptors and the [`Call`] builder.
//!
//! Every endpoint method returns a [`Call`]: a fully described request that
//! has not been sent yet. Options are layered on with [`Call::options`] or
//! [`Call::option`], and the call is then delivered in one of two ways:
//!
//! - as a future, through [`Call::send`] or by awaiting the call directly;
//! - to a callback, through [`Call::send_with`] or [`Call::spawn_with`].
//!
//! [`Call::dispatch`] exposes the same choice as a single entry point: pass a
//! callback and get `None` back, or pass `None` and get the [`Pending`]
//! future.
//!
//! ```rust,no_run
//! use spotify_web_api::api::{Params, SpotifyClient};
//!
//! # async fn example() -> Result<(), spotify_web_api::api::ApiError> {
//! let client = SpotifyClient::new()?.with_access_token("BQD...");
//!
//! // Await the result.
//! let albums = client
//!     .get_artist_albums("43ZHCT0cAZBISjO8DG9PnE")
//!     .options(Params::new().with("limit", 2))
//!     .await?;
//! println!("{} albums", albums.total);
//!
//! // Or hand it to a callback.
//! client.get_me().send_with(|result| match result {
//!     Ok(user) => println!("hello {}", user.id),
//!     Err(e) => eprintln!("{e}"),
//! });
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::future::IntoFuture;
use std::marker::PhantomData;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::runtime::Handle;

use super::bridge::{self, Callback, Pending, RequestHandle, Sink};
use super::common::ApiError;
use super::query::{ParamValue, Params};
use super::transport::Transport;

/// HTTP verbs used by the Web API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HttpMethod {
    #[default]
    Get,
    Put,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HttpMethod {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "PUT" => Ok(Self::Put),
            "POST" => Ok(Self::Post),
            "DELETE" => Ok(Self::Delete),
            other => Err(ApiError::Config(format!("Unsupported HTTP method: {other}"))),
        }
    }
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Post => Method::POST,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

/// One concrete HTTP request.
///
/// `url` excludes the query string; [`RequestDescriptor::full_url`] appends
/// the rendered `params`. The body is kept as serialized JSON text so its key
/// order is exactly what went on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: HttpMethod,
    pub url: String,
    pub params: Params,
    pub body: Option<String>,
}

impl RequestDescriptor {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            params: Params::new(),
            body: None,
        }
    }

    /// `url` plus the rendered `params`, joined with `&` when `url` already
    /// carries a query string.
    pub fn full_url(&self) -> String {
        let query = self.params.to_query_string();
        match query.strip_prefix('?') {
            Some(pairs) if self.url.contains('?') => format!("{}&{}", self.url, pairs),
            _ => format!("{}{}", self.url, query),
        }
    }
}

/// A request that has been built but not sent.
///
/// `T` is the type the JSON response is decoded into. Mutating endpoints use
/// [`serde_json::Value`], which is `""` for empty success responses.
#[must_use = "a call does nothing until it is sent or awaited"]
pub struct Call<T = Value> {
    transport: Transport,
    runtime: Option<Handle>,
    request: Result<RequestDescriptor, ApiError>,
    _response: PhantomData<fn() -> T>,
}

impl<T> Call<T> {
    pub(crate) fn new(
        transport: Transport,
        runtime: Option<Handle>,
        request: RequestDescriptor,
    ) -> Self {
        Self {
            transport,
            runtime,
            request: Ok(request),
            _response: PhantomData,
        }
    }

    /// Serializes `body` as the JSON request body.
    ///
    /// A serialization failure is held and delivered as [`ApiError::Encode`]
    /// once the call is sent.
    pub(crate) fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        if let Ok(request) = &mut self.request {
            match serde_json::to_string(body) {
                Ok(text) => request.body = Some(text),
                Err(e) => self.request = Err(ApiError::Encode(e)),
            }
        }
        self
    }

    /// Merges caller options into the query.
    ///
    /// Keys that are already set, including the endpoint's own parameters,
    /// keep their value.
    pub fn options(mut self, options: Params) -> Self {
        if let Ok(request) = &mut self.request {
            request.params.merge(options);
        }
        self
    }

    /// Adds a single option; see [`Call::options`].
    pub fn option(self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.options(Params::new().with(key, value))
    }

    /// The request this call will send, or `None` if building it failed.
    pub fn descriptor(&self) -> Option<&RequestDescriptor> {
        self.request.as_ref().ok()
    }

    /// Reinterprets the response type.
    pub fn decode_as<U>(self) -> Call<U> {
        Call {
            transport: self.transport,
            runtime: self.runtime,
            request: self.request,
            _response: PhantomData,
        }
    }
}

impl<T> Call<T>
where
    T: DeserializeOwned + Send + 'static,
{
    /// Sends the call, delivering to `callback` when one is given.
    ///
    /// Returns `None` when a callback was supplied and the [`Pending`]
    /// future otherwise. Exactly one of the two receives the outcome.
    pub fn dispatch(self, callback: Option<Callback<T>>) -> Option<Pending<T>> {
        match callback {
            Some(callback) => {
                bridge::spawn(self.runtime, self.transport, self.request, Sink::Callback(callback));
                None
            }
            None => Some(self.send()),
        }
    }

    /// Sends the call and returns a future for its outcome.
    pub fn send(self) -> Pending<T> {
        bridge::pending(self.runtime, self.transport, self.request)
    }

    /// Sends the call and delivers the outcome to `callback`.
    pub fn send_with<F>(self, callback: F)
    where
        F: FnOnce(Result<T, ApiError>) + Send + 'static,
    {
        self.spawn_with(callback);
    }

    /// Like [`Call::send_with`], returning a handle that can abort the request.
    pub fn spawn_with<F>(self, callback: F) -> RequestHandle
    where
        F: FnOnce(Result<T, ApiError>) + Send + 'static,
    {
        bridge::spawn(
            self.runtime,
            self.transport,
            self.request,
            Sink::Callback(Box::new(callback)),
        )
    }
}

impl<T> IntoFuture for Call<T>
where
    T: DeserializeOwned + Send + 'static,
{
    type Output = Result<T, ApiError>;
    type IntoFuture = Pending<T>;

    fn into_future(self) -> Self::IntoFuture {
        self.send()
    }
}

impl<T> fmt::Debug for Call<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Call")
            .field("request", &self.request)
            .field("runtime", &self.runtime.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SpotifyClient;

    fn client() -> SpotifyClient {
        SpotifyClient::new().unwrap()
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!("delete".parse::<HttpMethod>().unwrap(), HttpMethod::Delete);
        assert_eq!(HttpMethod::default(), HttpMethod::Get);
        assert!("PATCH".parse::<HttpMethod>().is_err());
    }

    #[test]
    fn test_options_never_override_base_params() {
        let call = client()
            .search("muse", &[crate::api::SearchType::Track])
            .options(Params::new().with("type", "album").with("limit", 1))
            .option("q", "other");

        let request = call.descriptor().unwrap();
        assert_eq!(
            request.full_url(),
            "https://api.spotify.com/v1/search/?q=muse&type=track&limit=1"
        );
    }

    #[test]
    fn test_full_url_appends_to_existing_query() {
        let call = client()
            .request(HttpMethod::Get, "/browse/new-releases?country=SE")
            .option("limit", 5);

        assert_eq!(
            call.descriptor().unwrap().full_url(),
            "https://api.spotify.com/v1/browse/new-releases?country=SE&limit=5"
        );
    }

    #[test]
    fn test_body_is_kept_as_serialized_text() {
        let call = client().add_to_my_saved_tracks(&["a", "b"]);
        let request = call.descriptor().unwrap();

        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.body.as_deref(), Some(r#"["a","b"]"#));
    }

    #[test]
    fn test_decode_as_keeps_request() {
        let call = client().get_track("3Qm86XLflmIXVm1wcwkgDK");
        let expected = call.descriptor().cloned();
        let raw: Call<Value> = call.decode_as();

        assert_eq!(raw.descriptor().cloned(), expected);
    }
}
