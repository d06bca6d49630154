//
//  spotify-web-api
//  api/user/player.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Playback state and remote control.
//!
//! Control endpoints act on the user's active device unless a `device_id`
//! option is given:
//!
//! ```rust,no_run
//! use spotify_web_api::api::SpotifyClient;
//!
//! # async fn example() -> Result<(), spotify_web_api::api::ApiError> {
//! let client = SpotifyClient::new()?.with_access_token("BQD...");
//! client.pause().option("device_id", "74ASZWbe4lXaubB36ztrGX").await?;
//! client.set_volume(80).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Player mutations usually answer `204 No Content`, which resolves to an
//! empty string. A user with no active device gets `None` from the state
//! endpoints.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::catalog::Track;
use crate::api::common::ExternalUrls;
use crate::api::query::{collect_ids, Params};
use crate::api::request::{Call, HttpMethod};
use crate::api::SpotifyClient;

/// A device that can play music.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub is_active: bool,

    #[serde(default)]
    pub is_private_session: bool,

    /// Restricted devices don't accept Web API commands.
    #[serde(default)]
    pub is_restricted: bool,

    pub name: String,

    /// `Computer`, `Smartphone`, `Speaker`, ...
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub volume_percent: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Devices {
    pub devices: Vec<Device>,
}

/// What playback was started from: an album, artist or playlist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub href: Option<String>,

    #[serde(default)]
    pub external_urls: ExternalUrls,

    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackState {
    pub device: Device,

    /// `off`, `track` or `context`.
    pub repeat_state: String,

    pub shuffle_state: bool,

    #[serde(default)]
    pub context: Option<Context>,

    pub timestamp: u64,

    #[serde(default)]
    pub progress_ms: Option<u64>,

    pub is_playing: bool,

    #[serde(default)]
    pub item: Option<Track>,

    /// `track`, `episode`, `ad` or `unknown`.
    #[serde(default)]
    pub currently_playing_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentlyPlaying {
    #[serde(default)]
    pub context: Option<Context>,

    pub timestamp: u64,

    #[serde(default)]
    pub progress_ms: Option<u64>,

    pub is_playing: bool,

    #[serde(default)]
    pub item: Option<Track>,

    #[serde(default)]
    pub currently_playing_type: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatState {
    Track,
    Context,
    Off,
}

impl RepeatState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Track => "track",
            Self::Context => "context",
            Self::Off => "off",
        }
    }
}

impl fmt::Display for RepeatState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where to start within a context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlayOffset {
    Position { position: u32 },
    Uri { uri: String },
}

/// Options for [`SpotifyClient::play`].
///
/// `device_id` is sent as a query parameter, everything else in the body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayOptions {
    #[serde(skip)]
    pub device_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_uri: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uris: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<PlayOffset>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_ms: Option<u32>,
}

#[derive(Serialize)]
struct TransferBody {
    device_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    play: Option<bool>,
}

impl SpotifyClient {
    /// `GET /me/player/devices`
    pub fn get_my_devices(&self) -> Call<Devices> {
        self.call(HttpMethod::Get, "/me/player/devices")
    }

    /// `GET /me/player`
    pub fn get_my_current_playback_state(&self) -> Call<Option<PlaybackState>> {
        self.call(HttpMethod::Get, "/me/player")
    }

    /// `GET /me/player/currently-playing`
    pub fn get_my_current_playing_track(&self) -> Call<Option<CurrentlyPlaying>> {
        self.call(HttpMethod::Get, "/me/player/currently-playing")
    }

    /// `PUT /me/player`
    ///
    /// `play: Some(true)` starts playback on the new device; otherwise the
    /// current playback state is kept.
    pub fn transfer_my_playback<I, S>(&self, device_ids: I, play: Option<bool>) -> Call<Value>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.call(HttpMethod::Put, "/me/player").json(&TransferBody {
            device_ids: collect_ids(device_ids),
            play,
        })
    }

    /// `PUT /me/player/play`
    pub fn play(&self, options: &PlayOptions) -> Call<Value> {
        let call = self.call(HttpMethod::Put, "/me/player/play").json(options);
        match &options.device_id {
            Some(device_id) => call.option("device_id", device_id),
            None => call,
        }
    }

    /// `PUT /me/player/pause`
    pub fn pause(&self) -> Call<Value> {
        self.call(HttpMethod::Put, "/me/player/pause")
    }

    /// `POST /me/player/next`
    pub fn skip_to_next(&self) -> Call<Value> {
        self.call(HttpMethod::Post, "/me/player/next")
    }

    /// `POST /me/player/previous`
    pub fn skip_to_previous(&self) -> Call<Value> {
        self.call(HttpMethod::Post, "/me/player/previous")
    }

    /// `PUT /me/player/seek?position_ms=...`
    pub fn seek(&self, position_ms: u64) -> Call<Value> {
        self.call(HttpMethod::Put, "/me/player/seek")
            .options(Params::new().with("position_ms", position_ms))
    }

    /// `PUT /me/player/repeat?state=...`
    pub fn set_repeat(&self, state: RepeatState) -> Call<Value> {
        self.call(HttpMethod::Put, "/me/player/repeat")
            .options(Params::new().with("state", state.as_str()))
    }

    /// `PUT /me/player/volume?volume_percent=...`
    pub fn set_volume(&self, volume_percent: u8) -> Call<Value> {
        self.call(HttpMethod::Put, "/me/player/volume")
            .options(Params::new().with("volume_percent", volume_percent))
    }

    /// `PUT /me/player/shuffle?state=...`
    pub fn set_shuffle(&self, state: bool) -> Call<Value> {
        self.call(HttpMethod::Put, "/me/player/shuffle")
            .options(Params::new().with("state", state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SpotifyClient {
        SpotifyClient::new().unwrap()
    }

    #[test]
    fn test_play_splits_device_and_body() {
        let options = PlayOptions {
            device_id: Some("my_device_id".to_string()),
            context_uri: Some("spotify:album:5ht7ItJgpBH7W6vJ5BqpPr".to_string()),
            offset: Some(PlayOffset::Position { position: 5 }),
            ..Default::default()
        };
        let call = client().play(&options);
        let request = call.descriptor().unwrap();

        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(
            request.full_url(),
            "https://api.spotify.com/v1/me/player/play?device_id=my_device_id"
        );
        assert_eq!(
            request.body.as_deref(),
            Some(r#"{"context_uri":"spotify:album:5ht7ItJgpBH7W6vJ5BqpPr","offset":{"position":5}}"#)
        );
    }

    #[test]
    fn test_play_without_options_sends_empty_object() {
        let call = client().play(&PlayOptions::default());
        let request = call.descriptor().unwrap();

        assert_eq!(request.full_url(), "https://api.spotify.com/v1/me/player/play");
        assert_eq!(request.body.as_deref(), Some("{}"));
    }

    #[test]
    fn test_transfer_body() {
        let call = client().transfer_my_playback(["74ASZWbe4lXaubB36ztrGX"], Some(true));
        assert_eq!(
            call.descriptor().unwrap().body.as_deref(),
            Some(r#"{"device_ids":["74ASZWbe4lXaubB36ztrGX"],"play":true}"#)
        );

        let call = client().transfer_my_playback(["74ASZWbe4lXaubB36ztrGX"], None);
        assert_eq!(
            call.descriptor().unwrap().body.as_deref(),
            Some(r#"{"device_ids":["74ASZWbe4lXaubB36ztrGX"]}"#)
        );
    }

    #[test]
    fn test_player_query_controls() {
        let client = client();
        let cases = [
            (
                client.seek(2000).option("device_id", "my_device_id"),
                HttpMethod::Put,
                "https://api.spotify.com/v1/me/player/seek?position_ms=2000&device_id=my_device_id",
            ),
            (
                client.set_repeat(RepeatState::Track),
                HttpMethod::Put,
                "https://api.spotify.com/v1/me/player/repeat?state=track",
            ),
            (
                client.set_volume(80),
                HttpMethod::Put,
                "https://api.spotify.com/v1/me/player/volume?volume_percent=80",
            ),
            (
                client.set_shuffle(false),
                HttpMethod::Put,
                "https://api.spotify.com/v1/me/player/shuffle?state=false",
            ),
            (
                client.pause().option("device_id", "my_device_id"),
                HttpMethod::Put,
                "https://api.spotify.com/v1/me/player/pause?device_id=my_device_id",
            ),
            (
                client.skip_to_next(),
                HttpMethod::Post,
                "https://api.spotify.com/v1/me/player/next",
            ),
            (
                client.skip_to_previous(),
                HttpMethod::Post,
                "https://api.spotify.com/v1/me/player/previous",
            ),
        ];

        for (call, method, url) in &cases {
            let request = call.descriptor().unwrap();
            assert_eq!(request.method, *method);
            assert_eq!(request.full_url(), *url);
        }
    }

    #[test]
    fn test_no_active_device_is_none() {
        let state: Option<PlaybackState> = serde_json::from_value(Value::Null).unwrap();
        assert!(state.is_none());
    }
}
