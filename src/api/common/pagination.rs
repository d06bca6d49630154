//
//  spotify-web-api
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Paging envelopes.
//!
//! Collections come back wrapped in one of two envelopes:
//!
//! | Type | Used by | Strategy |
//! |------|---------|----------|
//! | [`Paging`] | most collections | offset-based, with `next`/`previous` URLs |
//! | [`CursorPaging`] | recently played, followed artists | cursor-based |
//!
//! The client passes these through as-is. To fetch the following page,
//! hand [`Paging::next_url`] to
//! [`SpotifyClient::get_generic`](crate::api::SpotifyClient::get_generic).

use serde::{Deserialize, Serialize};

/// Offset-based page of items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging<T> {
    /// Link to the full result of the request that produced this page.
    pub href: String,

    pub items: Vec<T>,

    pub limit: u32,

    #[serde(default)]
    pub next: Option<String>,

    pub offset: u32,

    #[serde(default)]
    pub previous: Option<String>,

    pub total: u32,
}

impl<T> Paging<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn next_url(&self) -> Option<&str> {
        self.next.as_deref()
    }
}

/// Cursor-based page of items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CursorPaging<T> {
    pub href: String,

    pub items: Vec<T>,

    pub limit: u32,

    #[serde(default)]
    pub next: Option<String>,

    #[serde(default)]
    pub cursors: Option<Cursors>,

    /// Absent on some cursor-paged collections such as recently played.
    #[serde(default)]
    pub total: Option<u32>,
}

impl<T> CursorPaging<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn next_url(&self) -> Option<&str> {
        self.next.as_deref()
    }
}

/// Position markers of a [`CursorPaging`] page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cursors {
    #[serde(default)]
    pub after: Option<String>,

    #[serde(default)]
    pub before: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paging_next() {
        let page: Paging<String> = serde_json::from_str(
            r#"{
                "href": "https://api.spotify.com/v1/me/tracks?offset=0&limit=2",
                "items": ["a", "b"],
                "limit": 2,
                "next": "https://api.spotify.com/v1/me/tracks?offset=2&limit=2",
                "offset": 0,
                "previous": null,
                "total": 5
            }"#,
        )
        .unwrap();

        assert!(page.has_next());
        assert_eq!(
            page.next_url(),
            Some("https://api.spotify.com/v1/me/tracks?offset=2&limit=2")
        );
        assert_eq!(page.items.len(), 2);
    }

    #[test]
    fn test_cursor_paging_without_total() {
        let page: CursorPaging<u32> = serde_json::from_str(
            r#"{
                "href": "https://api.spotify.com/v1/me/player/recently-played",
                "items": [1],
                "limit": 20,
                "next": null,
                "cursors": {"after": "1484811043508", "before": "1484811043500"}
            }"#,
        )
        .unwrap();

        assert!(!page.has_next());
        assert_eq!(page.total, None);
        assert_eq!(
            page.cursors.and_then(|c| c.after),
            Some("1484811043508".to_string())
        );
    }
}
