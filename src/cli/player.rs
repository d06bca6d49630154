//
//  spotify-web-api
//  cli/player.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Playback commands
//!
//! Requires a token with the `user-read-playback-state` and
//! `user-modify-playback-state` scopes. Control commands need a Premium
//! account.

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};

use crate::api::{Call, PlayOffset, PlayOptions, RepeatState, SpotifyClient};

use super::GlobalOptions;

/// Inspect and control playback
#[derive(Args, Debug)]
pub struct PlayerCommand {
    #[command(subcommand)]
    pub command: PlayerSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PlayerSubcommand {
    /// List available devices
    Devices,

    /// Show the current playback state
    Status,

    /// Start or resume playback
    Play(PlayArgs),

    /// Pause playback
    Pause(DeviceArgs),

    /// Skip to the next track
    Next(DeviceArgs),

    /// Skip to the previous track
    Previous(DeviceArgs),

    /// Seek to a position in the current track
    Seek {
        /// Position in milliseconds
        position_ms: u64,

        #[command(flatten)]
        device: DeviceArgs,
    },

    /// Set the volume
    Volume {
        /// Volume from 0 to 100
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        percent: u8,

        #[command(flatten)]
        device: DeviceArgs,
    },

    /// Toggle shuffle
    Shuffle {
        #[arg(action = clap::ArgAction::Set)]
        state: bool,

        #[command(flatten)]
        device: DeviceArgs,
    },

    /// Set the repeat mode
    Repeat {
        state: RepeatMode,

        #[command(flatten)]
        device: DeviceArgs,
    },

    /// Move playback to another device
    Transfer {
        /// Target device id
        device_id: String,

        /// Start playing on the new device
        #[arg(long)]
        play: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct DeviceArgs {
    /// Target device id (defaults to the active device)
    #[arg(long, short = 'd')]
    pub device: Option<String>,
}

#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Album, artist or playlist URI to play
    #[arg(long, conflicts_with = "uris")]
    pub context: Option<String>,

    /// Track URIs to play
    #[arg(long = "uri", action = clap::ArgAction::Append)]
    pub uris: Vec<String>,

    /// Start at this position within the context
    #[arg(long, requires = "context")]
    pub offset: Option<u32>,

    #[arg(long)]
    pub position_ms: Option<u32>,

    #[command(flatten)]
    pub device: DeviceArgs,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum RepeatMode {
    Track,
    Context,
    Off,
}

impl From<RepeatMode> for RepeatState {
    fn from(mode: RepeatMode) -> Self {
        match mode {
            RepeatMode::Track => RepeatState::Track,
            RepeatMode::Context => RepeatState::Context,
            RepeatMode::Off => RepeatState::Off,
        }
    }
}

impl DeviceArgs {
    fn apply(&self, call: Call) -> Call {
        match &self.device {
            Some(device) => call.option("device_id", device),
            None => call,
        }
    }
}

impl PlayerCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;

        match &self.command {
            PlayerSubcommand::Devices => global.print(&client.get_my_devices().await?),
            PlayerSubcommand::Status => {
                match client.get_my_current_playback_state().await? {
                    Some(state) => global.print(&state),
                    None => {
                        eprintln!("Nothing is playing");
                        Ok(())
                    }
                }
            }
            PlayerSubcommand::Play(args) => {
                let options = PlayOptions {
                    device_id: args.device.device.clone(),
                    context_uri: args.context.clone(),
                    uris: (!args.uris.is_empty()).then(|| args.uris.clone()),
                    offset: args.offset.map(|position| PlayOffset::Position { position }),
                    position_ms: args.position_ms,
                };
                global.print(&client.play(&options).await?)
            }
            PlayerSubcommand::Pause(device) => send(global, device.apply(client.pause())).await,
            PlayerSubcommand::Next(device) => {
                send(global, device.apply(client.skip_to_next())).await
            }
            PlayerSubcommand::Previous(device) => {
                send(global, device.apply(client.skip_to_previous())).await
            }
            PlayerSubcommand::Seek { position_ms, device } => {
                send(global, device.apply(client.seek(*position_ms))).await
            }
            PlayerSubcommand::Volume { percent, device } => {
                send(global, device.apply(client.set_volume(*percent))).await
            }
            PlayerSubcommand::Shuffle { state, device } => {
                send(global, device.apply(client.set_shuffle(*state))).await
            }
            PlayerSubcommand::Repeat { state, device } => {
                send(global, device.apply(client.set_repeat((*state).into()))).await
            }
            PlayerSubcommand::Transfer { device_id, play } => {
                transfer(&client, global, device_id, *play).await
            }
        }
    }
}

async fn send(global: &GlobalOptions, call: Call) -> Result<()> {
    let response = call.await?;
    global.print(&response)
}

async fn transfer(
    client: &SpotifyClient,
    global: &GlobalOptions,
    device_id: &str,
    play: bool,
) -> Result<()> {
    let response = client
        .transfer_my_playback([device_id], play.then_some(true))
        .await?;
    global.print(&response)
}
