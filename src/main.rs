//
//  spotify-web-api
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use spotify_web_api::cli::{Cli, Commands};
use spotify_web_api::exit_codes;

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();

    let code = match run(cli).await {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_codes::for_error(&e)
        }
    };
    std::process::exit(code);
}

/// Logs go to stderr so JSON output on stdout stays pipeable.
/// `SPOTIFY_API_LOG=spotify_web_api=debug` traces every request.
fn init_logging() {
    let filter = EnvFilter::try_from_env("SPOTIFY_API_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let global = &cli.global;

    match &cli.command {
        Commands::Api(cmd) => cmd.run(global).await,
        Commands::Track(cmd) => cmd.run(global).await,
        Commands::Album(cmd) => cmd.run(global).await,
        Commands::Artist(cmd) => cmd.run(global).await,
        Commands::Search(cmd) => cmd.run(global).await,
        Commands::Me(cmd) => cmd.run(global).await,
        Commands::Player(cmd) => cmd.run(global).await,
        Commands::Version => {
            println!("{} version {}", spotify_web_api::APP_NAME, spotify_web_api::VERSION);
            Ok(())
        }
    }
}
