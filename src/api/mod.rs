//
//  spotify-web-api
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! Maps method calls onto the Spotify Web API at `https://api.spotify.com/v1`.
//!
//! ## Architecture
//!
//! - [`query`]: ordered query parameters and URI-component encoding
//! - [`request`]: request descriptors and the unsent [`Call`]
//! - [`transport`]: executes one HTTP request and maps the response
//! - [`bridge`]: picks an executor and delivers to a callback or a future
//! - [`client`]: the [`SpotifyClient`] session (token, runtime, base URL)
//! - [`catalog`]: albums, artists, tracks, audio features, browse, search
//! - [`user`]: profile, library, follows, playlists, player
//! - [`common`]: errors, paging envelopes and shared objects
//!
//! ## Usage
//!
//! ```rust,no_run
//! use spotify_web_api::api::SpotifyClient;
//!
//! # async fn example() -> Result<(), spotify_web_api::api::ApiError> {
//! let client = SpotifyClient::new()?.with_access_token("BQD...");
//!
//! let track = client.get_track("3Qm86XLflmIXVm1wcwkgDK").await?;
//! println!("{} ({} ms)", track.name, track.duration_ms);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every failure is an [`ApiError`]. HTTP failures keep the status code,
//! status text and raw body:
//!
//! - `Status`: the server answered with a non-2xx status
//! - `MalformedBody`: a 2xx answer that isn't JSON
//! - `Decode`: JSON that doesn't match the expected type
//! - `Network`: connection failures

pub mod bridge;
pub mod catalog;
pub mod client;
pub mod common;
pub mod query;
pub mod request;
pub mod transport;
pub mod user;

pub use bridge::{Callback, Pending, RequestHandle, RequestState};
pub use catalog::*;
pub use client::{ClientConfig, SpotifyClient, DEFAULT_BASE_URL};
pub use common::{ApiError, CursorPaging, Cursors, Followers, Image, Paging};
pub use query::{ParamValue, Params};
pub use request::{Call, HttpMethod, RequestDescriptor};
pub use user::*;
