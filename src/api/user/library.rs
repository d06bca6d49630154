//
//  spotify-web-api
//  api/user/library.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! The current user's library and listening history.
//!
//! Saving and removing send the ids as a JSON array body; the `contains`
//! checks take them as a comma-joined `ids` query parameter and return one
//! boolean per id, in order.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::player::Context;
use crate::api::catalog::{Album, Artist, SimplifiedTrack, Track};
use crate::api::common::{CursorPaging, Paging};
use crate::api::query::{collect_ids, Params};
use crate::api::request::{Call, HttpMethod};
use crate::api::SpotifyClient;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTrack {
    /// ISO 8601 timestamp of when the track was saved.
    pub added_at: String,

    pub track: Track,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedAlbum {
    pub added_at: String,

    pub album: Album,
}

/// A recently played track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayHistory {
    pub track: SimplifiedTrack,

    pub played_at: String,

    #[serde(default)]
    pub context: Option<Context>,
}

impl SpotifyClient {
    /// `GET /me/tracks`
    pub fn get_my_saved_tracks(&self) -> Call<Paging<SavedTrack>> {
        self.call(HttpMethod::Get, "/me/tracks")
    }

    /// `PUT /me/tracks`
    pub fn add_to_my_saved_tracks<I, S>(&self, track_ids: I) -> Call<Value>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.call(HttpMethod::Put, "/me/tracks")
            .json(&collect_ids(track_ids))
    }

    /// `DELETE /me/tracks`
    pub fn remove_from_my_saved_tracks<I, S>(&self, track_ids: I) -> Call<Value>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.call(HttpMethod::Delete, "/me/tracks")
            .json(&collect_ids(track_ids))
    }

    /// `GET /me/tracks/contains?ids=...`
    pub fn contains_my_saved_tracks<I, S>(&self, track_ids: I) -> Call<Vec<bool>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.call(HttpMethod::Get, "/me/tracks/contains")
            .options(Params::new().with_list("ids", track_ids))
    }

    /// `GET /me/albums`
    pub fn get_my_saved_albums(&self) -> Call<Paging<SavedAlbum>> {
        self.call(HttpMethod::Get, "/me/albums")
    }

    /// `PUT /me/albums`
    pub fn add_to_my_saved_albums<I, S>(&self, album_ids: I) -> Call<Value>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.call(HttpMethod::Put, "/me/albums")
            .json(&collect_ids(album_ids))
    }

    /// `DELETE /me/albums`
    pub fn remove_from_my_saved_albums<I, S>(&self, album_ids: I) -> Call<Value>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.call(HttpMethod::Delete, "/me/albums")
            .json(&collect_ids(album_ids))
    }

    /// `GET /me/albums/contains?ids=...`
    pub fn contains_my_saved_albums<I, S>(&self, album_ids: I) -> Call<Vec<bool>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.call(HttpMethod::Get, "/me/albums/contains")
            .options(Params::new().with_list("ids", album_ids))
    }

    /// `GET /me/top/artists`
    pub fn get_my_top_artists(&self) -> Call<Paging<Artist>> {
        self.call(HttpMethod::Get, "/me/top/artists")
    }

    /// `GET /me/top/tracks`
    pub fn get_my_top_tracks(&self) -> Call<Paging<Track>> {
        self.call(HttpMethod::Get, "/me/top/tracks")
    }

    /// `GET /me/player/recently-played`
    ///
    /// Page with the `before` and `after` cursor options.
    pub fn get_my_recently_played_tracks(&self) -> Call<CursorPaging<PlayHistory>> {
        self.call(HttpMethod::Get, "/me/player/recently-played")
    }
}

#[cfg(test)]
mod tests {
    use crate::api::{HttpMethod, Params, SpotifyClient};

    #[test]
    fn test_saved_tracks_mutations_send_id_array() {
        let client = SpotifyClient::new().unwrap();

        let add =
            client.add_to_my_saved_tracks(["4iV5W9uYEdYUVa79Axb7Rh", "1301WleyT98MSxVHPZCA6M"]);
        let request = add.descriptor().unwrap();
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.full_url(), "https://api.spotify.com/v1/me/tracks");
        assert_eq!(
            request.body.as_deref(),
            Some(r#"["4iV5W9uYEdYUVa79Axb7Rh","1301WleyT98MSxVHPZCA6M"]"#)
        );

        let remove = client.remove_from_my_saved_albums(vec!["6akEvsycLGftJxYudPjmqK".to_string()]);
        let request = remove.descriptor().unwrap();
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.full_url(), "https://api.spotify.com/v1/me/albums");
        assert_eq!(request.body.as_deref(), Some(r#"["6akEvsycLGftJxYudPjmqK"]"#));
    }

    #[test]
    fn test_contains_uses_query() {
        let client = SpotifyClient::new().unwrap();
        let call = client.contains_my_saved_tracks(["a", "b"]);
        let request = call.descriptor().unwrap();

        assert_eq!(request.method, HttpMethod::Get);
        assert!(request.body.is_none());
        assert_eq!(
            request.full_url(),
            "https://api.spotify.com/v1/me/tracks/contains?ids=a%2Cb"
        );
    }

    #[test]
    fn test_history_and_top() {
        let client = SpotifyClient::new().unwrap();

        assert_eq!(
            client
                .get_my_recently_played_tracks()
                .options(Params::new().with("limit", 10))
                .descriptor()
                .unwrap()
                .full_url(),
            "https://api.spotify.com/v1/me/player/recently-played?limit=10"
        );
        assert_eq!(
            client.get_my_top_artists().descriptor().unwrap().full_url(),
            "https://api.spotify.com/v1/me/top/artists"
        );
        assert_eq!(
            client.get_my_top_tracks().descriptor().unwrap().full_url(),
            "https://api.spotify.com/v1/me/top/tracks"
        );
    }
}
