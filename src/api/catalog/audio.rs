//
//  spotify-web-api
//  api/catalog/audio.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Audio features and analysis.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::query::{encode_segment, Params};
use crate::api::request::{Call, HttpMethod};
use crate::api::SpotifyClient;

/// High-level acoustic attributes of a track.
///
/// The ratio fields (`acousticness`, `danceability`, `energy`,
/// `instrumentalness`, `liveness`, `speechiness`, `valence`) range from
/// 0.0 to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub acousticness: f32,
    pub analysis_url: String,
    pub danceability: f32,
    pub duration_ms: u64,
    pub energy: f32,
    pub id: String,
    pub instrumentalness: f32,
    /// Pitch class, `-1` when no key was detected.
    pub key: i32,
    pub liveness: f32,
    /// Overall loudness in decibels.
    pub loudness: f32,
    /// `1` major, `0` minor.
    pub mode: i32,
    pub speechiness: f32,
    pub tempo: f32,
    pub time_signature: i32,
    pub track_href: String,
    pub uri: String,
    pub valence: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeaturesList {
    pub audio_features: Vec<Option<AudioFeatures>>,
}

impl SpotifyClient {
    /// `GET /audio-features/{id}`
    pub fn get_audio_features_for_track(&self, track_id: &str) -> Call<AudioFeatures> {
        self.call(
            HttpMethod::Get,
            &format!("/audio-features/{}", encode_segment(track_id)),
        )
    }

    /// `GET /audio-features?ids=...`
    pub fn get_audio_features_for_tracks<I, S>(&self, track_ids: I) -> Call<AudioFeaturesList>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.call(HttpMethod::Get, "/audio-features")
            .options(Params::new().with_list("ids", track_ids))
    }

    /// `GET /audio-analysis/{id}`
    ///
    /// The analysis document (bars, beats, sections, segments, tatums) is
    /// returned as raw JSON.
    pub fn get_audio_analysis_for_track(&self, track_id: &str) -> Call<Value> {
        self.call(
            HttpMethod::Get,
            &format!("/audio-analysis/{}", encode_segment(track_id)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_urls() {
        let client = SpotifyClient::new().unwrap();

        assert_eq!(
            client
                .get_audio_features_for_track("3Qm86XLflmIXVm1wcwkgDK")
                .descriptor()
                .unwrap()
                .full_url(),
            "https://api.spotify.com/v1/audio-features/3Qm86XLflmIXVm1wcwkgDK"
        );
        assert_eq!(
            client
                .get_audio_features_for_tracks(["4iV5W9uYEdYUVa79Axb7Rh", "3Qm86XLflmIXVm1wcwkgDK"])
                .descriptor()
                .unwrap()
                .full_url(),
            "https://api.spotify.com/v1/audio-features?ids=4iV5W9uYEdYUVa79Axb7Rh%2C3Qm86XLflmIXVm1wcwkgDK"
        );
        assert_eq!(
            client
                .get_audio_analysis_for_track("3Qm86XLflmIXVm1wcwkgDK")
                .descriptor()
                .unwrap()
                .full_url(),
            "https://api.spotify.com/v1/audio-analysis/3Qm86XLflmIXVm1wcwkgDK"
        );
    }
}
