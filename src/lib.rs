//
//  spotify-web-api
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Spotify Web API Library
//!
//! An async client for the Spotify Web API, plus the `spotify-api`
//! command-line tool built on it.
//!
//! ## Overview
//!
//! Each REST endpoint is a method on [`SpotifyClient`] that returns an unsent
//! [`Call`](api::Call). A call can be awaited, or handed a callback, and it
//! runs on whatever executor is available: a registered tokio runtime, the
//! runtime the caller is on, or a dedicated thread when there is none.
//!
//! ## Features
//!
//! - **Full endpoint coverage**: catalog, search, browse, library, follows, playlists, player
//! - **Callback or future delivery**: the same call serves both styles
//! - **Cancellation**: abort in-flight requests through a [`RequestHandle`](api::RequestHandle)
//! - **Typed models**: serde models for every response, raw JSON where the shape is open
//!
//! ## Module Structure
//!
//! - [`api`]: client, endpoints, request dispatch
//! - [`auth`]: bearer token handling
//! - [`cli`]: command-line interface definitions using clap
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use spotify_web_api::SpotifyClient;
//!
//! # async fn example() -> Result<(), spotify_web_api::api::ApiError> {
//! let client = SpotifyClient::new()?.with_access_token("BQD...");
//!
//! let results = client.search_artists("Muse").option("limit", 1).await?;
//! if let Some(artists) = results.artists {
//!     for artist in artists.items {
//!         println!("{}", artist.name);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Without a runtime, deliver to a callback:
//!
//! ```rust,no_run
//! use spotify_web_api::SpotifyClient;
//!
//! let client = SpotifyClient::new().unwrap();
//! client.get_track("3Qm86XLflmIXVm1wcwkgDK").send_with(|result| {
//!     if let Ok(track) = result {
//!         println!("{}", track.name);
//!     }
//! });
//! ```

/// Client, endpoints and request dispatch.
///
/// The [`SpotifyClient`](api::SpotifyClient) session object, every endpoint
/// method and the machinery that sends requests and delivers their outcomes.
pub mod api;

/// Bearer token handling.
pub mod auth;

/// Command-line interface definitions.
///
/// Contains the `spotify-api` commands defined using the clap derive API.
pub mod cli;

pub use api::{ApiError, SpotifyClient};
pub use auth::AccessToken;
pub use cli::Cli;

/// Application name constant.
pub const APP_NAME: &str = "spotify-api";

/// Application version constant.
///
/// Derived from Cargo.toml at compile time, also used in the default
/// `User-Agent` header.
///
/// # Example
///
/// ```rust
/// use spotify_web_api::VERSION;
///
/// println!("spotify-api version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `32+`: External service issues
pub mod exit_codes {
    use crate::api::ApiError;

    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    ///
    /// An unspecified error occurred during execution.
    /// Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// Missing, expired or insufficiently scoped access token.
    ///
    /// # Value
    ///
    /// `4`
    pub const AUTH_ERROR: i32 = 4;

    /// Resource not found.
    ///
    /// # Value
    ///
    /// `8`
    pub const NOT_FOUND: i32 = 8;

    /// API rate limit exceeded.
    ///
    /// The Web API answered `429 Too Many Requests`. Wait for the period in
    /// its `Retry-After` header before trying again.
    ///
    /// # Value
    ///
    /// `32`
    pub const RATE_LIMIT: i32 = 32;

    /// Maps an error to the exit code the CLI reports for it.
    pub fn for_error(error: &anyhow::Error) -> i32 {
        match error.downcast_ref::<ApiError>() {
            Some(e) if e.is_unauthorized() => AUTH_ERROR,
            Some(e) if e.is_not_found() => NOT_FOUND,
            Some(e) if e.is_rate_limited() => RATE_LIMIT,
            Some(ApiError::Config(_)) => USAGE,
            _ => ERROR,
        }
    }

}
