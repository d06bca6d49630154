//
//  spotify-web-api
//  api/catalog/browse.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Browse and recommendation endpoints.
//!
//! Most browse endpoints are localized through the `country`, `locale` and
//! `timestamp` options:
//!
//! ```rust,no_run
//! use spotify_web_api::api::{Params, SpotifyClient};
//!
//! # async fn example() -> Result<(), spotify_web_api::api::ApiError> {
//! let client = SpotifyClient::new()?.with_access_token("BQD...");
//! let featured = client
//!     .get_featured_playlists()
//!     .options(
//!         Params::new()
//!             .with("locale", "sv_SE")
//!             .with("country", "SE")
//!             .with("timestamp", "2014-10-23T09:00:00"),
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! Recommendation seeds are lists; join them with [`Params::with_list`](crate::api::Params::with_list).

use serde::{Deserialize, Serialize};

use super::albums::SimplifiedAlbum;
use super::tracks::Track;
use crate::api::common::{nullable, Image, Paging};
use crate::api::query::encode_segment;
use crate::api::request::{Call, HttpMethod};
use crate::api::user::SimplifiedPlaylist;
use crate::api::SpotifyClient;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturedPlaylists {
    #[serde(default)]
    pub message: Option<String>,

    pub playlists: Paging<SimplifiedPlaylist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReleases {
    pub albums: Paging<SimplifiedAlbum>,
}

/// A browse category such as "Mood" or "Top Lists".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub href: String,

    #[serde(default, deserialize_with = "nullable")]
    pub icons: Vec<Image>,

    pub id: String,

    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Categories {
    pub categories: Paging<Category>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryPlaylists {
    pub playlists: Paging<SimplifiedPlaylist>,
}

/// How a recommendation seed narrowed the candidate pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSeed {
    pub after_filtering_size: u32,

    pub after_relinking_size: u32,

    #[serde(default)]
    pub href: Option<String>,

    pub id: String,

    pub initial_pool_size: u32,

    /// `artist`, `track` or `genre`.
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendations {
    pub seeds: Vec<RecommendationSeed>,

    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreSeeds {
    pub genres: Vec<String>,
}

impl SpotifyClient {
    /// `GET /browse/featured-playlists`
    pub fn get_featured_playlists(&self) -> Call<FeaturedPlaylists> {
        self.call(HttpMethod::Get, "/browse/featured-playlists")
    }

    /// `GET /browse/new-releases`
    pub fn get_new_releases(&self) -> Call<NewReleases> {
        self.call(HttpMethod::Get, "/browse/new-releases")
    }

    /// `GET /browse/categories`
    pub fn get_categories(&self) -> Call<Categories> {
        self.call(HttpMethod::Get, "/browse/categories")
    }

    /// `GET /browse/categories/{id}`
    pub fn get_category(&self, category_id: &str) -> Call<Category> {
        self.call(
            HttpMethod::Get,
            &format!("/browse/categories/{}", encode_segment(category_id)),
        )
    }

    /// `GET /browse/categories/{id}/playlists`
    pub fn get_category_playlists(&self, category_id: &str) -> Call<CategoryPlaylists> {
        self.call(
            HttpMethod::Get,
            &format!("/browse/categories/{}/playlists", encode_segment(category_id)),
        )
    }

    /// `GET /recommendations`
    ///
    /// Seeds (`seed_artists`, `seed_tracks`, `seed_genres`) and tunable
    /// attributes (`min_energy`, `target_tempo`, ...) are all options.
    pub fn get_recommendations(&self) -> Call<Recommendations> {
        self.call(HttpMethod::Get, "/recommendations")
    }

    /// `GET /recommendations/available-genre-seeds`
    pub fn get_available_genre_seeds(&self) -> Call<GenreSeeds> {
        self.call(HttpMethod::Get, "/recommendations/available-genre-seeds")
    }
}
