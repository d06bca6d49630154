//
//  spotify-web-api
//  api/catalog/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Catalog endpoints.
//!
//! Read-only access to the public catalog. None of these require user
//! scopes, though the service still expects a bearer token (a client
//! credentials token is enough).
//!
//! | Module | Endpoints |
//! |--------|-----------|
//! | [`albums`] | `/albums` |
//! | [`artists`] | `/artists` |
//! | [`tracks`] | `/tracks` |
//! | [`audio`] | `/audio-features`, `/audio-analysis` |
//! | [`browse`] | `/browse`, `/recommendations` |
//! | [`search`] | `/search` |

pub mod albums;
pub mod artists;
pub mod audio;
pub mod browse;
pub mod search;
pub mod tracks;

pub use albums::{Album, Albums, SimplifiedAlbum};
pub use artists::{Artist, ArtistTopTracks, Artists, RelatedArtists, SimplifiedArtist};
pub use audio::{AudioFeatures, AudioFeaturesList};
pub use browse::{
    Categories, Category, CategoryPlaylists, FeaturedPlaylists, GenreSeeds, NewReleases,
    RecommendationSeed, Recommendations,
};
pub use search::{SearchResults, SearchType};
pub use tracks::{SimplifiedTrack, Track, TrackLink, Tracks};
