//
//  spotify-web-api
//  api/catalog/tracks.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Track endpoints and types.
//!
//! When a `market` option is given, the service relinks tracks that are not
//! available there to an equivalent playable track. The original is then
//! described by [`Track::linked_from`].

use serde::{Deserialize, Serialize};

use super::albums::SimplifiedAlbum;
use super::artists::SimplifiedArtist;
use crate::api::common::{nullable, ExternalIds, ExternalUrls, Restrictions};
use crate::api::query::{encode_segment, Params};
use crate::api::request::{Call, HttpMethod};
use crate::api::SpotifyClient;

/// Reference to the track a relinked track replaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackLink {
    #[serde(default)]
    pub external_urls: ExternalUrls,

    #[serde(default)]
    pub href: Option<String>,

    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub uri: Option<String>,
}

/// Track as listed on an album.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimplifiedTrack {
    #[serde(default)]
    pub artists: Vec<SimplifiedArtist>,

    #[serde(default, deserialize_with = "nullable")]
    pub available_markets: Vec<String>,

    #[serde(default)]
    pub disc_number: u32,

    pub duration_ms: u64,

    #[serde(default)]
    pub explicit: bool,

    #[serde(default)]
    pub external_urls: ExternalUrls,

    #[serde(default)]
    pub href: Option<String>,

    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub is_local: bool,

    #[serde(default)]
    pub is_playable: Option<bool>,

    #[serde(default)]
    pub linked_from: Option<TrackLink>,

    pub name: String,

    #[serde(default)]
    pub preview_url: Option<String>,

    #[serde(default)]
    pub track_number: u32,

    #[serde(default)]
    pub uri: Option<String>,
}

/// Full track object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub album: SimplifiedAlbum,

    pub artists: Vec<SimplifiedArtist>,

    #[serde(default, deserialize_with = "nullable")]
    pub available_markets: Vec<String>,

    #[serde(default)]
    pub disc_number: u32,

    pub duration_ms: u64,

    #[serde(default)]
    pub explicit: bool,

    #[serde(default)]
    pub external_ids: ExternalIds,

    #[serde(default)]
    pub external_urls: ExternalUrls,

    #[serde(default)]
    pub href: Option<String>,

    /// `None` for local files.
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub is_local: bool,

    #[serde(default)]
    pub is_playable: Option<bool>,

    #[serde(default)]
    pub linked_from: Option<TrackLink>,

    #[serde(default)]
    pub restrictions: Option<Restrictions>,

    pub name: String,

    #[serde(default)]
    pub popularity: u32,

    #[serde(default)]
    pub preview_url: Option<String>,

    #[serde(default)]
    pub track_number: u32,

    #[serde(default)]
    pub uri: Option<String>,
}

/// Several tracks; unknown ids come back as `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tracks {
    pub tracks: Vec<Option<Track>>,
}

impl SpotifyClient {
    /// `GET /tracks/{id}`
    pub fn get_track(&self, track_id: &str) -> Call<Track> {
        self.call(HttpMethod::Get, &format!("/tracks/{}", encode_segment(track_id)))
    }

    /// `GET /tracks/?ids=...`
    pub fn get_tracks<I, S>(&self, track_ids: I) -> Call<Tracks>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.call(HttpMethod::Get, "/tracks/")
            .options(Params::new().with_list("ids", track_ids))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_tracks_joins_ids() {
        let client = SpotifyClient::new().unwrap();
        let call = client
            .get_tracks(["0eGsygTp906u18L0Oimnem", "1lDWb6b6ieDQ2xT7ewTC3G"])
            .option("market", "ES");

        assert_eq!(
            call.descriptor().unwrap().full_url(),
            "https://api.spotify.com/v1/tracks/?ids=0eGsygTp906u18L0Oimnem%2C1lDWb6b6ieDQ2xT7ewTC3G&market=ES"
        );
    }

    #[test]
    fn test_unknown_ids_decode_as_none() {
        let tracks: Tracks = serde_json::from_str(r#"{"tracks": [null]}"#).unwrap();
        assert!(tracks.tracks[0].is_none());
    }
}
