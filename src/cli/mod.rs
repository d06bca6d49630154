//
//  spotify-web-api
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod api;
mod catalog;
mod player;

pub use api::ApiCommand;
pub use catalog::{AlbumCommand, ArtistCommand, MeCommand, SearchCommand, TrackCommand};
pub use player::PlayerCommand;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;

use crate::api::{ClientConfig, SpotifyClient, DEFAULT_BASE_URL};

#[derive(Parser, Debug)]
#[command(
    name = "spotify-api",
    version,
    about = "Work with the Spotify Web API from the command line",
    long_about = "spotify-api is a CLI for the Spotify Web API.\n\n\
                  It looks up catalog entries, searches, and controls playback on your devices.",
    propagate_version = true,
    after_help = "Use 'spotify-api <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// OAuth access token
    #[arg(long, global = true, env = "SPOTIFY_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true, env = "SPOTIFY_API_BASE_URL")]
    pub base_url: Option<String>,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    pub compact: bool,
}

impl GlobalOptions {
    /// Builds a client from the global flags.
    pub fn client(&self) -> Result<SpotifyClient> {
        let config = ClientConfig {
            base_url: self
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            ..Default::default()
        };

        let client = SpotifyClient::with_config(config).context("Failed to create client")?;

        Ok(match &self.token {
            Some(token) => client.with_access_token(token.as_str()),
            None => {
                tracing::warn!("No access token set; requests will be unauthenticated");
                client
            }
        })
    }

    /// Prints `value` as JSON. Empty responses print nothing.
    pub fn print<T: Serialize>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_value(value)?;
        if json == Value::String(String::new()) {
            return Ok(());
        }

        if self.compact {
            println!("{}", serde_json::to_string(&json)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        Ok(())
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Make a request to any endpoint
    Api(ApiCommand),

    /// Look up a track
    Track(TrackCommand),

    /// Look up an album
    Album(AlbumCommand),

    /// Look up an artist
    Artist(ArtistCommand),

    /// Search the catalog
    #[command(visible_alias = "s")]
    Search(SearchCommand),

    /// Show the current user's profile
    Me(MeCommand),

    /// Inspect and control playback
    Player(PlayerCommand),

    /// Print the version
    Version,
}
