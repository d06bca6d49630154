//
//  spotify-web-api
//  api/user/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User-scoped endpoints.
//!
//! Everything here acts on behalf of the user who granted the access token,
//! so most methods need the matching authorization scopes (for example
//! `user-library-modify` to save tracks, `user-modify-playback-state` to
//! control playback).

pub mod follow;
pub mod library;
pub mod player;
pub mod playlists;
pub mod profile;

pub use follow::FollowedArtists;
pub use library::{PlayHistory, SavedAlbum, SavedTrack};
pub use player::{
    Context, CurrentlyPlaying, Device, Devices, PlayOffset, PlayOptions, PlaybackState,
    RepeatState,
};
pub use playlists::{
    NewPlaylist, Playlist, PlaylistDetails, PlaylistTrack, PlaylistTracksRef, ReorderTracks,
    SimplifiedPlaylist, TrackToRemove,
};
pub use profile::User;
