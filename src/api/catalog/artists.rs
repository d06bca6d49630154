//
//  spotify-web-api
//  api/catalog/artists.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Artist endpoints.

use serde::{Deserialize, Serialize};

use super::albums::SimplifiedAlbum;
use super::tracks::Track;
use crate::api::common::{nullable, ExternalUrls, Followers, Image, Paging};
use crate::api::query::{encode_segment, Params};
use crate::api::request::{Call, HttpMethod};
use crate::api::SpotifyClient;

/// Artist as embedded in tracks and albums.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimplifiedArtist {
    #[serde(default)]
    pub external_urls: ExternalUrls,

    #[serde(default)]
    pub href: Option<String>,

    /// `None` for artists of local files.
    #[serde(default)]
    pub id: Option<String>,

    pub name: String,

    #[serde(default)]
    pub uri: Option<String>,
}

/// Full artist object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    #[serde(default)]
    pub external_urls: ExternalUrls,

    #[serde(default)]
    pub followers: Option<Followers>,

    #[serde(default, deserialize_with = "nullable")]
    pub genres: Vec<String>,

    pub href: String,

    pub id: String,

    #[serde(default, deserialize_with = "nullable")]
    pub images: Vec<Image>,

    pub name: String,

    /// 0 to 100, derived from the popularity of the artist's tracks.
    #[serde(default)]
    pub popularity: Option<u32>,

    pub uri: String,
}

/// Several artists; unknown ids come back as `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artists {
    pub artists: Vec<Option<Artist>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedArtists {
    pub artists: Vec<Artist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistTopTracks {
    pub tracks: Vec<Track>,
}

impl SpotifyClient {
    /// `GET /artists/{id}`
    pub fn get_artist(&self, artist_id: &str) -> Call<Artist> {
        self.call(
            HttpMethod::Get,
            &format!("/artists/{}", encode_segment(artist_id)),
        )
    }

    /// `GET /artists/?ids=...`
    pub fn get_artists<I, S>(&self, artist_ids: I) -> Call<Artists>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.call(HttpMethod::Get, "/artists/")
            .options(Params::new().with_list("ids", artist_ids))
    }

    /// `GET /artists/{id}/albums`
    ///
    /// Filter with the `include_groups`, `market`, `limit` and `offset` options.
    pub fn get_artist_albums(&self, artist_id: &str) -> Call<Paging<SimplifiedAlbum>> {
        self.call(
            HttpMethod::Get,
            &format!("/artists/{}/albums", encode_segment(artist_id)),
        )
    }

    /// `GET /artists/{id}/top-tracks?country=...`
    pub fn get_artist_top_tracks(&self, artist_id: &str, country: &str) -> Call<ArtistTopTracks> {
        self.call(
            HttpMethod::Get,
            &format!("/artists/{}/top-tracks", encode_segment(artist_id)),
        )
        .options(Params::new().with("country", country))
    }

    /// `GET /artists/{id}/related-artists`
    pub fn get_artist_related_artists(&self, artist_id: &str) -> Call<RelatedArtists> {
        self.call(
            HttpMethod::Get,
            &format!("/artists/{}/related-artists", encode_segment(artist_id)),
        )
    }
}
