//
//  spotify-web-api
//  api/user/profile.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User profiles.

use serde::{Deserialize, Serialize};

use crate::api::common::{nullable, ExternalUrls, Followers, Image};
use crate::api::query::encode_segment;
use crate::api::request::{Call, HttpMethod};
use crate::api::SpotifyClient;

/// A user profile.
///
/// `country`, `email`, `product` and `birthdate` are only present on the
/// current user's own profile, and only with the matching scopes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub external_urls: ExternalUrls,

    #[serde(default)]
    pub followers: Option<Followers>,

    #[serde(default)]
    pub href: Option<String>,

    pub id: String,

    #[serde(default, deserialize_with = "nullable")]
    pub images: Vec<Image>,

    #[serde(default)]
    pub uri: Option<String>,

    #[serde(default)]
    pub country: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    /// `premium`, `free` or `open`.
    #[serde(default)]
    pub product: Option<String>,

    #[serde(default)]
    pub birthdate: Option<String>,
}

impl SpotifyClient {
    /// `GET /me`
    pub fn get_me(&self) -> Call<User> {
        self.call(HttpMethod::Get, "/me")
    }

    /// `GET /users/{id}`
    pub fn get_user(&self, user_id: &str) -> Call<User> {
        self.call(HttpMethod::Get, &format!("/users/{}", encode_segment(user_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_is_encoded() {
        let client = SpotifyClient::new().unwrap();
        assert_eq!(
            client.get_user("#matze23").descriptor().unwrap().full_url(),
            "https://api.spotify.com/v1/users/%23matze23"
        );
        assert_eq!(
            client.get_me().descriptor().unwrap().full_url(),
            "https://api.spotify.com/v1/me"
        );
    }

    #[test]
    fn test_public_profile_decodes() {
        let user: User = serde_json::from_str(
            r#"{"display_name": null, "id": "wizzler", "images": [], "uri": "spotify:user:wizzler"}"#,
        )
        .unwrap();

        assert_eq!(user.id, "wizzler");
        assert!(user.email.is_none());
    }
}
