//
//  spotify-web-api
//  api/user/playlists.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Playlist types and endpoints.
//!
//! Playlists are addressed through their owner: `/users/{owner}/playlists/{id}`.
//!
//! # Modifying Tracks
//!
//! | Method | Verb | Body |
//! |--------|------|------|
//! | [`add_tracks_to_playlist`](SpotifyClient::add_tracks_to_playlist) | POST | `{"uris": [...]}` |
//! | [`replace_tracks_in_playlist`](SpotifyClient::replace_tracks_in_playlist) | PUT | `{"uris": [...]}` |
//! | [`reorder_tracks_in_playlist`](SpotifyClient::reorder_tracks_in_playlist) | PUT | [`ReorderTracks`] |
//! | [`remove_tracks_from_playlist`](SpotifyClient::remove_tracks_from_playlist) | DELETE | `{"tracks": [...]}` |
//!
//! Every modification answers with the playlist's new `snapshot_id`, which
//! can be passed to later modifications to guard against concurrent edits.
//!
//! # Example
//!
//! ```rust,no_run
//! use spotify_web_api::api::{NewPlaylist, SpotifyClient};
//!
//! # async fn example() -> Result<(), spotify_web_api::api::ApiError> {
//! let client = SpotifyClient::new()?.with_access_token("BQD...");
//! let playlist = client
//!     .create_playlist("jmperezperez", &NewPlaylist::new("Road trip").public(false))
//!     .await?;
//!
//! client
//!     .add_tracks_to_playlist(
//!         "jmperezperez",
//!         &playlist.id,
//!         ["spotify:track:4iV5W9uYEdYUVa79Axb7Rh"],
//!     )
//!     .option("position", 0)
//!     .await?;
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::profile::User;
use crate::api::catalog::Track;
use crate::api::common::{nullable, ExternalUrls, Followers, Image, Paging};
use crate::api::query::{collect_ids, encode_segment};
use crate::api::request::{Call, HttpMethod};
use crate::api::SpotifyClient;

/// Link to a playlist's tracks, as embedded in simplified playlists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksRef {
    pub href: String,

    pub total: u32,
}

/// Playlist as listed in collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimplifiedPlaylist {
    #[serde(default)]
    pub collaborative: bool,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub external_urls: ExternalUrls,

    pub href: String,

    pub id: String,

    #[serde(default, deserialize_with = "nullable")]
    pub images: Vec<Image>,

    pub name: String,

    pub owner: User,

    /// `None` when the playlist status is not relevant.
    #[serde(default)]
    pub public: Option<bool>,

    pub snapshot_id: String,

    pub tracks: PlaylistTracksRef,

    pub uri: String,
}

/// Full playlist object with the first page of its tracks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    #[serde(default)]
    pub collaborative: bool,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub external_urls: ExternalUrls,

    #[serde(default)]
    pub followers: Option<Followers>,

    pub href: String,

    pub id: String,

    #[serde(default, deserialize_with = "nullable")]
    pub images: Vec<Image>,

    pub name: String,

    pub owner: User,

    #[serde(default)]
    pub public: Option<bool>,

    pub snapshot_id: String,

    pub tracks: Paging<PlaylistTrack>,

    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrack {
    /// `None` for very old playlists.
    #[serde(default)]
    pub added_at: Option<String>,

    #[serde(default)]
    pub added_by: Option<User>,

    #[serde(default)]
    pub is_local: bool,

    /// `None` when the track is no longer available.
    #[serde(default)]
    pub track: Option<Track>,
}

/// Body of [`SpotifyClient::create_playlist`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPlaylist {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborative: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewPlaylist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn public(mut self, public: bool) -> Self {
        self.public = Some(public);
        self
    }

    pub fn collaborative(mut self, collaborative: bool) -> Self {
        self.collaborative = Some(collaborative);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Body of [`SpotifyClient::change_playlist_details`]; unset fields are left alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborative: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Moves `range_length` tracks starting at `range_start` to before
/// `insert_before`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderTracks {
    pub range_start: u32,

    pub insert_before: u32,

    /// Defaults to a single track.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_length: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
}

impl ReorderTracks {
    pub fn new(range_start: u32, insert_before: u32) -> Self {
        Self {
            range_start,
            insert_before,
            range_length: None,
            snapshot_id: None,
        }
    }

    pub fn range_length(mut self, range_length: u32) -> Self {
        self.range_length = Some(range_length);
        self
    }

    pub fn snapshot_id(mut self, snapshot_id: impl Into<String>) -> Self {
        self.snapshot_id = Some(snapshot_id.into());
        self
    }
}

/// A track to remove, optionally only at specific positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackToRemove {
    pub uri: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub positions: Option<Vec<u32>>,
}

impl TrackToRemove {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            positions: None,
        }
    }

    pub fn at(mut self, positions: &[u32]) -> Self {
        self.positions = Some(positions.to_vec());
        self
    }
}

#[derive(Serialize)]
struct UrisBody {
    uris: Vec<String>,
}

#[derive(Serialize)]
struct RemoveTracksBody<'a> {
    tracks: &'a [TrackToRemove],
    #[serde(skip_serializing_if = "Option::is_none")]
    snapshot_id: Option<&'a str>,
}

#[derive(Serialize)]
struct RemovePositionsBody<'a> {
    positions: &'a [u32],
    snapshot_id: &'a str,
}

fn playlist_path(user_id: &str, playlist_id: &str) -> String {
    format!(
        "/users/{}/playlists/{}",
        encode_segment(user_id),
        encode_segment(playlist_id)
    )
}

impl SpotifyClient {
    /// `GET /users/{id}/playlists`, or `GET /me/playlists` without a user.
    pub fn get_user_playlists(&self, user_id: Option<&str>) -> Call<Paging<SimplifiedPlaylist>> {
        match user_id {
            Some(user_id) => self.call(
                HttpMethod::Get,
                &format!("/users/{}/playlists", encode_segment(user_id)),
            ),
            None => self.call(HttpMethod::Get, "/me/playlists"),
        }
    }

    /// `GET /users/{user}/playlists/{id}`
    pub fn get_playlist(&self, user_id: &str, playlist_id: &str) -> Call<Playlist> {
        self.call(HttpMethod::Get, &playlist_path(user_id, playlist_id))
    }

    /// `GET /users/{user}/playlists/{id}/tracks`
    pub fn get_playlist_tracks(
        &self,
        user_id: &str,
        playlist_id: &str,
    ) -> Call<Paging<PlaylistTrack>> {
        self.call(
            HttpMethod::Get,
            &format!("{}/tracks", playlist_path(user_id, playlist_id)),
        )
    }

    /// `POST /users/{user}/playlists`
    pub fn create_playlist(&self, user_id: &str, playlist: &NewPlaylist) -> Call<Playlist> {
        self.call(
            HttpMethod::Post,
            &format!("/users/{}/playlists", encode_segment(user_id)),
        )
        .json(playlist)
    }

    /// `PUT /users/{user}/playlists/{id}`
    pub fn change_playlist_details(
        &self,
        user_id: &str,
        playlist_id: &str,
        details: &PlaylistDetails,
    ) -> Call<Value> {
        self.call(HttpMethod::Put, &playlist_path(user_id, playlist_id))
            .json(details)
    }

    /// `POST /users/{user}/playlists/{id}/tracks`
    ///
    /// `position` is accepted as an option and goes into the query string.
    pub fn add_tracks_to_playlist<I, S>(
        &self,
        user_id: &str,
        playlist_id: &str,
        uris: I,
    ) -> Call<Value>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.call(
            HttpMethod::Post,
            &format!("{}/tracks", playlist_path(user_id, playlist_id)),
        )
        .json(&UrisBody {
            uris: collect_ids(uris),
        })
    }

    /// `PUT /users/{user}/playlists/{id}/tracks`
    pub fn replace_tracks_in_playlist<I, S>(
        &self,
        user_id: &str,
        playlist_id: &str,
        uris: I,
    ) -> Call<Value>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.call(
            HttpMethod::Put,
            &format!("{}/tracks", playlist_path(user_id, playlist_id)),
        )
        .json(&UrisBody {
            uris: collect_ids(uris),
        })
    }

    /// `PUT /users/{user}/playlists/{id}/tracks`
    pub fn reorder_tracks_in_playlist(
        &self,
        user_id: &str,
        playlist_id: &str,
        reorder: &ReorderTracks,
    ) -> Call<Value> {
        self.call(
            HttpMethod::Put,
            &format!("{}/tracks", playlist_path(user_id, playlist_id)),
        )
        .json(reorder)
    }

    /// `DELETE /users/{user}/playlists/{id}/tracks`
    pub fn remove_tracks_from_playlist(
        &self,
        user_id: &str,
        playlist_id: &str,
        tracks: &[TrackToRemove],
    ) -> Call<Value> {
        self.remove_tracks(user_id, playlist_id, tracks, None)
    }

    /// Like [`remove_tracks_from_playlist`](Self::remove_tracks_from_playlist),
    /// against a specific playlist snapshot.
    pub fn remove_tracks_from_playlist_with_snapshot_id(
        &self,
        user_id: &str,
        playlist_id: &str,
        tracks: &[TrackToRemove],
        snapshot_id: &str,
    ) -> Call<Value> {
        self.remove_tracks(user_id, playlist_id, tracks, Some(snapshot_id))
    }

    /// Removes whatever sits at `positions` in the given snapshot.
    pub fn remove_tracks_from_playlist_in_positions(
        &self,
        user_id: &str,
        playlist_id: &str,
        positions: &[u32],
        snapshot_id: &str,
    ) -> Call<Value> {
        self.call(
            HttpMethod::Delete,
            &format!("{}/tracks", playlist_path(user_id, playlist_id)),
        )
        .json(&RemovePositionsBody {
            positions,
            snapshot_id,
        })
    }

    fn remove_tracks(
        &self,
        user_id: &str,
        playlist_id: &str,
        tracks: &[TrackToRemove],
        snapshot_id: Option<&str>,
    ) -> Call<Value> {
        self.call(
            HttpMethod::Delete,
            &format!("{}/tracks", playlist_path(user_id, playlist_id)),
        )
        .json(&RemoveTracksBody { tracks, snapshot_id })
    }
}
