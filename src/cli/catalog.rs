//
//  spotify-web-api
//  cli/catalog.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Catalog lookup and search commands

use anyhow::Result;
use clap::Args;

use crate::api::{Params, SearchType};

use super::GlobalOptions;

/// Look up a track by id
#[derive(Args, Debug)]
pub struct TrackCommand {
    /// Track id
    pub id: String,

    /// Relink to a track playable in this market (ISO 3166-1 alpha-2)
    #[arg(long, short = 'm')]
    pub market: Option<String>,

    /// Print the track's audio features instead
    #[arg(long)]
    pub features: bool,
}

impl TrackCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;

        if self.features {
            let features = client.get_audio_features_for_track(&self.id).await?;
            return global.print(&features);
        }

        let track = client
            .get_track(&self.id)
            .options(market_option(self.market.as_deref()))
            .await?;
        global.print(&track)
    }
}

/// Look up an album by id
#[derive(Args, Debug)]
pub struct AlbumCommand {
    /// Album id
    pub id: String,

    /// List only the album's tracks
    #[arg(long)]
    pub tracks: bool,

    #[arg(long, short = 'm')]
    pub market: Option<String>,
}

impl AlbumCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let options = market_option(self.market.as_deref());

        if self.tracks {
            let tracks = client.get_album_tracks(&self.id).options(options).await?;
            return global.print(&tracks);
        }

        let album = client.get_album(&self.id).options(options).await?;
        global.print(&album)
    }
}

/// Look up an artist by id
#[derive(Args, Debug)]
pub struct ArtistCommand {
    /// Artist id
    pub id: String,

    /// Show the artist's top tracks in this country
    #[arg(long, value_name = "COUNTRY", conflicts_with_all = ["albums", "related"])]
    pub top_tracks: Option<String>,

    /// List the artist's albums
    #[arg(long)]
    pub albums: bool,

    /// List related artists
    #[arg(long, conflicts_with = "albums")]
    pub related: bool,

    /// Maximum number of albums to list
    #[arg(long, short = 'l', default_value = "20")]
    pub limit: u32,
}

impl ArtistCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;

        if let Some(country) = &self.top_tracks {
            let top = client.get_artist_top_tracks(&self.id, country).await?;
            return global.print(&top);
        }

        if self.albums {
            let albums = client
                .get_artist_albums(&self.id)
                .option("limit", self.limit)
                .await?;
            return global.print(&albums);
        }

        if self.related {
            let related = client.get_artist_related_artists(&self.id).await?;
            return global.print(&related);
        }

        let artist = client.get_artist(&self.id).await?;
        global.print(&artist)
    }
}

/// Search the catalog
#[derive(Args, Debug)]
pub struct SearchCommand {
    /// Search query (supports field filters such as `artist:muse year:2009`)
    pub query: String,

    /// Object types to search for
    #[arg(
        long = "type",
        short = 't',
        value_delimiter = ',',
        default_value = "track",
        value_parser = ["album", "artist", "playlist", "track"]
    )]
    pub types: Vec<String>,

    /// Maximum number of results per type
    #[arg(long, short = 'l', default_value = "10")]
    pub limit: u32,

    #[arg(long)]
    pub offset: Option<u32>,

    #[arg(long, short = 'm')]
    pub market: Option<String>,
}

impl SearchCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let types = self
            .types
            .iter()
            .map(|t| t.parse::<SearchType>())
            .collect::<Result<Vec<_>, _>>()?;

        let mut options = Params::new().with("limit", self.limit);
        if let Some(offset) = self.offset {
            options.insert("offset", offset);
        }
        options.merge(market_option(self.market.as_deref()));

        let results = client.search(&self.query, &types).options(options).await?;
        global.print(&results)
    }
}

/// Show the current user's profile
#[derive(Args, Debug)]
pub struct MeCommand {
    /// Show another user's public profile instead
    #[arg(long, short = 'u')]
    pub user: Option<String>,
}

impl MeCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let user = match &self.user {
            Some(id) => client.get_user(id).await?,
            None => client.get_me().await?,
        };
        global.print(&user)
    }
}

fn market_option(market: Option<&str>) -> Params {
    match market {
        Some(market) => Params::new().with("market", market),
        None => Params::new(),
    }
}
