//
//  spotify-web-api
//  api/catalog/search.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Catalog search.
//!
//! `q` and `type` are always the first two query parameters; `limit`,
//! `offset` and `market` go in as options.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::albums::SimplifiedAlbum;
use super::artists::Artist;
use super::tracks::Track;
use crate::api::common::{ApiError, Paging};
use crate::api::query::Params;
use crate::api::request::{Call, HttpMethod};
use crate::api::user::SimplifiedPlaylist;
use crate::api::SpotifyClient;

/// Object types a search can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchType {
    Album,
    Artist,
    Playlist,
    Track,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Album => "album",
            Self::Artist => "artist",
            Self::Playlist => "playlist",
            Self::Track => "track",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchType {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "album" => Ok(Self::Album),
            "artist" => Ok(Self::Artist),
            "playlist" => Ok(Self::Playlist),
            "track" => Ok(Self::Track),
            other => Err(ApiError::Config(format!("Unknown search type: {other}"))),
        }
    }
}

/// One page per requested type; types that weren't requested are `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub albums: Option<Paging<SimplifiedAlbum>>,

    #[serde(default)]
    pub artists: Option<Paging<Artist>>,

    #[serde(default)]
    pub playlists: Option<Paging<Option<SimplifiedPlaylist>>>,

    #[serde(default)]
    pub tracks: Option<Paging<Track>>,
}

impl SpotifyClient {
    /// `GET /search/?q=...&type=...`
    pub fn search(&self, query: &str, types: &[SearchType]) -> Call<SearchResults> {
        let types: Vec<&str> = types.iter().map(SearchType::as_str).collect();
        self.call(HttpMethod::Get, "/search/").options(
            Params::new()
                .with("q", query)
                .with_list("type", types),
        )
    }

    pub fn search_albums(&self, query: &str) -> Call<SearchResults> {
        self.search(query, &[SearchType::Album])
    }

    pub fn search_artists(&self, query: &str) -> Call<SearchResults> {
        self.search(query, &[SearchType::Artist])
    }

    pub fn search_tracks(&self, query: &str) -> Call<SearchResults> {
        self.search(query, &[SearchType::Track])
    }

    pub fn search_playlists(&self, query: &str) -> Call<SearchResults> {
        self.search(query, &[SearchType::Playlist])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_base_params_first() {
        let client = SpotifyClient::new().unwrap();
        let call = client
            .search("muse", &[SearchType::Track, SearchType::Artist])
            .option("limit", 1);

        assert_eq!(
            call.descriptor().unwrap().full_url(),
            "https://api.spotify.com/v1/search/?q=muse&type=track%2Cartist&limit=1"
        );
    }

    #[test]
    fn test_single_type_searches() {
        let client = SpotifyClient::new().unwrap();
        let urls: Vec<String> = [
            client.search_albums("The Best Of Keane"),
            client.search_artists("The Best Of Keane"),
            client.search_tracks("The Best Of Keane"),
            client.search_playlists("The Best Of Keane"),
        ]
        .iter()
        .map(|call| call.descriptor().unwrap().full_url())
        .collect();

        assert_eq!(
            urls,
            [
                "https://api.spotify.com/v1/search/?q=The%20Best%20Of%20Keane&type=album",
                "https://api.spotify.com/v1/search/?q=The%20Best%20Of%20Keane&type=artist",
                "https://api.spotify.com/v1/search/?q=The%20Best%20Of%20Keane&type=track",
                "https://api.spotify.com/v1/search/?q=The%20Best%20Of%20Keane&type=playlist",
            ]
        );
    }

    #[test]
    fn test_search_type_parsing() {
        assert_eq!("Track".parse::<SearchType>().unwrap(), SearchType::Track);
        assert!("episode".parse::<SearchType>().is_err());
    }
}
