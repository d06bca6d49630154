//
//  spotify-web-api
//  api/user/follow.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Following users, artists and playlists.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::catalog::Artist;
use crate::api::common::CursorPaging;
use crate::api::query::{encode_segment, Params};
use crate::api::request::{Call, HttpMethod};
use crate::api::SpotifyClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FollowType {
    User,
    Artist,
}

impl FollowType {
    fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Artist => "artist",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowedArtists {
    pub artists: CursorPaging<Artist>,
}

#[derive(Serialize)]
struct FollowPlaylistBody {
    public: bool,
}

impl SpotifyClient {
    fn following<I, S>(
        &self,
        method: HttpMethod,
        path: &str,
        kind: FollowType,
        ids: I,
    ) -> Call<Value>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.call(method, path).options(
            Params::new()
                .with_list("ids", ids)
                .with("type", kind.as_str()),
        )
    }

    /// `PUT /me/following/?ids=...&type=user`
    pub fn follow_users<I, S>(&self, user_ids: I) -> Call<Value>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.following(HttpMethod::Put, "/me/following/", FollowType::User, user_ids)
    }

    /// `PUT /me/following/?ids=...&type=artist`
    pub fn follow_artists<I, S>(&self, artist_ids: I) -> Call<Value>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.following(HttpMethod::Put, "/me/following/", FollowType::Artist, artist_ids)
    }

    /// `DELETE /me/following/?ids=...&type=user`
    pub fn unfollow_users<I, S>(&self, user_ids: I) -> Call<Value>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.following(HttpMethod::Delete, "/me/following/", FollowType::User, user_ids)
    }

    /// `DELETE /me/following/?ids=...&type=artist`
    pub fn unfollow_artists<I, S>(&self, artist_ids: I) -> Call<Value>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.following(HttpMethod::Delete, "/me/following/", FollowType::Artist, artist_ids)
    }

    /// `GET /me/following/contains?ids=...&type=user`
    pub fn is_following_users<I, S>(&self, user_ids: I) -> Call<Vec<bool>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.following(HttpMethod::Get, "/me/following/contains", FollowType::User, user_ids)
            .decode_as()
    }

    /// `GET /me/following/contains?ids=...&type=artist`
    pub fn is_following_artists<I, S>(&self, artist_ids: I) -> Call<Vec<bool>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.following(
            HttpMethod::Get,
            "/me/following/contains",
            FollowType::Artist,
            artist_ids,
        )
        .decode_as()
    }

    /// `PUT /users/{owner}/playlists/{id}/followers`
    ///
    /// `public` controls whether the playlist shows on the user's profile;
    /// the service defaults to public when it is omitted.
    pub fn follow_playlist(
        &self,
        owner_id: &str,
        playlist_id: &str,
        public: Option<bool>,
    ) -> Call<Value> {
        let call = self.call(HttpMethod::Put, &followers_path(owner_id, playlist_id));
        match public {
            Some(public) => call.json(&FollowPlaylistBody { public }),
            None => call,
        }
    }

    /// `DELETE /users/{owner}/playlists/{id}/followers`
    pub fn unfollow_playlist(&self, owner_id: &str, playlist_id: &str) -> Call<Value> {
        self.call(HttpMethod::Delete, &followers_path(owner_id, playlist_id))
    }

    /// `GET /users/{owner}/playlists/{id}/followers/contains?ids=...`
    pub fn are_following_playlist<I, S>(
        &self,
        owner_id: &str,
        playlist_id: &str,
        user_ids: I,
    ) -> Call<Vec<bool>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.call(
            HttpMethod::Get,
            &format!("{}/contains", followers_path(owner_id, playlist_id)),
        )
        .options(Params::new().with_list("ids", user_ids))
    }

    /// `GET /me/following?type=artist`
    pub fn get_followed_artists(&self) -> Call<FollowedArtists> {
        self.call(HttpMethod::Get, "/me/following")
            .options(Params::new().with("type", FollowType::Artist.as_str()))
    }
}

fn followers_path(owner_id: &str, playlist_id: &str) -> String {
    format!(
        "/users/{}/playlists/{}/followers",
        encode_segment(owner_id),
        encode_segment(playlist_id)
    )
}

#[cfg(test)]
mod tests {
    use crate::api::{HttpMethod, SpotifyClient};

    #[test]
    fn test_follow_users_and_artists() {
        let client = SpotifyClient::new().unwrap();

        let follow = client.follow_users(["userid01", "userid02"]);
        let request = follow.descriptor().unwrap();
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(
            request.full_url(),
            "https://api.spotify.com/v1/me/following/?ids=userid01%2Cuserid02&type=user"
        );

        let unfollow = client.unfollow_artists(["artistid01"]);
        let request = unfollow.descriptor().unwrap();
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(
            request.full_url(),
            "https://api.spotify.com/v1/me/following/?ids=artistid01&type=artist"
        );

        let check = client.is_following_artists(["artistid01", "artistid02"]);
        assert_eq!(
            check.descriptor().unwrap().full_url(),
            "https://api.spotify.com/v1/me/following/contains?ids=artistid01%2Cartistid02&type=artist"
        );
    }

    #[test]
    fn test_follow_playlist_body() {
        let client = SpotifyClient::new().unwrap();

        let private = client.follow_playlist("jmperezperez", "7AWUBX0Z4xWr1gyoR2Ko0V", Some(false));
        let request = private.descriptor().unwrap();
        assert_eq!(
            request.full_url(),
            "https://api.spotify.com/v1/users/jmperezperez/playlists/7AWUBX0Z4xWr1gyoR2Ko0V/followers"
        );
        assert_eq!(request.body.as_deref(), Some(r#"{"public":false}"#));

        let default = client.follow_playlist("jmperezperez", "7AWUBX0Z4xWr1gyoR2Ko0V", None);
        assert!(default.descriptor().unwrap().body.is_none());
    }

    #[test]
    fn test_playlist_follower_check() {
        let client = SpotifyClient::new().unwrap();
        let call = client.are_following_playlist(
            "jmperezperez",
            "7AWUBX0Z4xWr1gyoR2Ko0V",
            ["possan", "elogain"],
        );

        assert_eq!(
            call.descriptor().unwrap().full_url(),
            "https://api.spotify.com/v1/users/jmperezperez/playlists/7AWUBX0Z4xWr1gyoR2Ko0V/followers/contains?ids=possan%2Celogain"
        );
    }

    #[test]
    fn test_followed_artists() {
        let client = SpotifyClient::new().unwrap();
        assert_eq!(
            client.get_followed_artists().descriptor().unwrap().full_url(),
            "https://api.spotify.com/v1/me/following?type=artist"
        );
    }
}
