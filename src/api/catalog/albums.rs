//
//  spotify-web-api
//  api/catalog/albums.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Album endpoints and types.
//!
//! # Album Types
//!
//! * `album` - A regular studio or live album
//! * `single` - A single or EP
//! * `compilation` - A compilation of previously released tracks
//!
//! `release_date_precision` tells how much of `release_date` is meaningful:
//! `year` (`"1981"`), `month` (`"1981-12"`) or `day` (`"1981-12-15"`).

use serde::{Deserialize, Serialize};

use super::artists::SimplifiedArtist;
use super::tracks::SimplifiedTrack;
use crate::api::common::{
    nullable, Copyright, ExternalIds, ExternalUrls, Image, Paging, Restrictions,
};
use crate::api::query::{encode_segment, Params};
use crate::api::request::{Call, HttpMethod};
use crate::api::SpotifyClient;

/// Album as embedded in tracks, search results and artist discographies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimplifiedAlbum {
    #[serde(default)]
    pub album_type: Option<String>,

    /// Relationship to the artist when listed under `/artists/{id}/albums`.
    #[serde(default)]
    pub album_group: Option<String>,

    #[serde(default)]
    pub artists: Vec<SimplifiedArtist>,

    #[serde(default, deserialize_with = "nullable")]
    pub available_markets: Vec<String>,

    #[serde(default)]
    pub external_urls: ExternalUrls,

    #[serde(default)]
    pub href: Option<String>,

    #[serde(default)]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "nullable")]
    pub images: Vec<Image>,

    pub name: String,

    #[serde(default)]
    pub release_date: Option<String>,

    #[serde(default)]
    pub release_date_precision: Option<String>,

    #[serde(default)]
    pub total_tracks: Option<u32>,

    #[serde(default)]
    pub uri: Option<String>,
}

/// Full album object, including the first page of its tracks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub album_type: String,

    pub artists: Vec<SimplifiedArtist>,

    #[serde(default, deserialize_with = "nullable")]
    pub available_markets: Vec<String>,

    #[serde(default)]
    pub copyrights: Vec<Copyright>,

    #[serde(default)]
    pub external_ids: ExternalIds,

    #[serde(default)]
    pub external_urls: ExternalUrls,

    #[serde(default)]
    pub genres: Vec<String>,

    pub href: String,

    pub id: String,

    #[serde(default, deserialize_with = "nullable")]
    pub images: Vec<Image>,

    #[serde(default)]
    pub label: Option<String>,

    pub name: String,

    #[serde(default)]
    pub popularity: Option<u32>,

    pub release_date: String,

    pub release_date_precision: String,

    #[serde(default)]
    pub restrictions: Option<Restrictions>,

    #[serde(default)]
    pub total_tracks: Option<u32>,

    pub tracks: Paging<SimplifiedTrack>,

    pub uri: String,
}

/// Several albums; unknown ids come back as `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Albums {
    pub albums: Vec<Option<Album>>,
}

impl SpotifyClient {
    /// `GET /albums/{id}`
    pub fn get_album(&self, album_id: &str) -> Call<Album> {
        self.call(HttpMethod::Get, &format!("/albums/{}", encode_segment(album_id)))
    }

    /// `GET /albums/{id}/tracks`
    pub fn get_album_tracks(&self, album_id: &str) -> Call<Paging<SimplifiedTrack>> {
        self.call(
            HttpMethod::Get,
            &format!("/albums/{}/tracks", encode_segment(album_id)),
        )
    }

    /// `GET /albums/?ids=...`
    pub fn get_albums<I, S>(&self, album_ids: I) -> Call<Albums>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.call(HttpMethod::Get, "/albums/")
            .options(Params::new().with_list("ids", album_ids))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_urls() {
        let client = SpotifyClient::new().unwrap();

        assert_eq!(
            client.get_album("0sNOF9WDwhWunNAHPD3Baj").descriptor().unwrap().full_url(),
            "https://api.spotify.com/v1/albums/0sNOF9WDwhWunNAHPD3Baj"
        );
        assert_eq!(
            client
                .get_album_tracks("0sNOF9WDwhWunNAHPD3Baj")
                .descriptor()
                .unwrap()
                .full_url(),
            "https://api.spotify.com/v1/albums/0sNOF9WDwhWunNAHPD3Baj/tracks"
        );
        assert_eq!(
            client
                .get_albums(vec![
                    "41MnTivkwTO3UUJ8DrqEJJ".to_string(),
                    "6JWc4iAiJ9FjyK0B59ABb4".to_string(),
                ])
                .descriptor()
                .unwrap()
                .full_url(),
            "https://api.spotify.com/v1/albums/?ids=41MnTivkwTO3UUJ8DrqEJJ%2C6JWc4iAiJ9FjyK0B59ABb4"
        );
    }

    #[test]
    fn test_album_decodes_nested_tracks() {
        let album: Album = serde_json::from_value(serde_json::json!({
            "album_type": "album",
            "artists": [{"name": "Muse", "id": "12Chz98pHFMPJEknJQMWvI"}],
            "href": "https://api.spotify.com/v1/albums/0eFHYz8NmK75zSplL5qlfM",
            "id": "0eFHYz8NmK75zSplL5qlfM",
            "images": null,
            "name": "The Resistance",
            "release_date": "2009-09-10",
            "release_date_precision": "day",
            "tracks": {
                "href": "https://api.spotify.com/v1/albums/0eFHYz8NmK75zSplL5qlfM/tracks",
                "items": [],
                "limit": 50,
                "offset": 0,
                "total": 11
            },
            "uri": "spotify:album:0eFHYz8NmK75zSplL5qlfM"
        }))
        .unwrap();

        assert!(album.images.is_empty());
        assert_eq!(album.tracks.total, 11);
        assert_eq!(album.artists[0].name, "Muse");
    }
}
