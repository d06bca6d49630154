//
//  spotify-web-api
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use assert_cmd::Command;
use mockito::{Matcher, Server};
use predicates::prelude::*;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("spotify-api").unwrap();
    cmd.env_remove("SPOTIFY_ACCESS_TOKEN")
        .env_remove("SPOTIFY_API_BASE_URL")
        .env_remove("SPOTIFY_API_LOG");
    cmd
}

#[test]
fn test_help_lists_commands() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Spotify Web API"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("player"))
        .stdout(predicate::str::contains("Print the version"));
}

#[test]
fn test_version_command() {
    cli()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("spotify-api version"));
}

#[test]
fn test_unknown_command_is_usage_error() {
    cli().arg("playlist-magic").assert().failure().code(2);
}

#[test]
fn test_track_prints_json() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/v1/tracks/3Qm86XLflmIXVm1wcwkgDK")
        .match_header("authorization", "Bearer tok")
        .match_query(Matcher::UrlEncoded("market".into(), "SE".into()))
        .with_status(200)
        .with_body(
            r#"{"album": {"name": "Origin of Symmetry"}, "artists": [{"name": "Muse"}],
                "duration_ms": 366213, "name": "Plug In Baby"}"#,
        )
        .create();

    cli()
        .args(["track", "3Qm86XLflmIXVm1wcwkgDK", "--market", "SE", "--compact"])
        .arg("--base-url")
        .arg(format!("{}/v1", server.url()))
        .env("SPOTIFY_ACCESS_TOKEN", "tok")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name":"Plug In Baby""#));

    mock.assert();
}

#[test]
fn test_not_found_exit_code() {
    let mut server = Server::new();
    server
        .mock("GET", "/v1/albums/missing")
        .with_status(404)
        .with_body(r#"{"error": {"status": 404, "message": "non existing id"}}"#)
        .create();

    cli()
        .args(["album", "missing", "--token", "tok"])
        .env("SPOTIFY_API_BASE_URL", format!("{}/v1", server.url()))
        .assert()
        .code(8)
        .stderr(predicate::str::contains("non existing id"));
}

#[test]
fn test_unauthorized_exit_code() {
    let mut server = Server::new();
    server
        .mock("GET", "/v1/me")
        .with_status(401)
        .with_body(r#"{"error": {"status": 401, "message": "No token provided"}}"#)
        .create();

    cli()
        .arg("me")
        .env("SPOTIFY_API_BASE_URL", format!("{}/v1", server.url()))
        .assert()
        .code(4)
        .stderr(predicate::str::contains("No token provided"));
}

#[test]
fn test_player_pause_prints_nothing() {
    let mut server = Server::new();
    let mock = server
        .mock("PUT", "/v1/me/player/pause")
        .match_query(Matcher::UrlEncoded("device_id".into(), "kitchen".into()))
        .with_status(204)
        .create();

    cli()
        .args(["player", "pause", "--device", "kitchen", "--token", "tok"])
        .env("SPOTIFY_API_BASE_URL", format!("{}/v1", server.url()))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    mock.assert();
}

#[test]
fn test_api_command_sends_body() {
    let mut server = Server::new();
    let mock = server
        .mock("PUT", "/v1/me/tracks")
        .match_body(Matcher::Json(serde_json::json!(["4iV5W9uYEdYUVa79Axb7Rh"])))
        .with_status(200)
        .create();

    cli()
        .args(["api", "-X", "PUT", "/me/tracks", "--body", r#"["4iV5W9uYEdYUVa79Axb7Rh"]"#])
        .args(["--token", "tok"])
        .env("SPOTIFY_API_BASE_URL", format!("{}/v1", server.url()))
        .assert()
        .success();

    mock.assert();
}

#[test]
fn test_api_command_extends_next_link() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/v1/me/tracks?offset=20&limit=20&market=ES")
        .with_status(200)
        .with_body(r#"{"items": [], "offset": 20}"#)
        .create();

    let next = format!("{}/v1/me/tracks?offset=20&limit=20", server.url());
    cli()
        .args(["api", next.as_str(), "-q", "market=ES", "--token", "tok", "--compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""offset":20"#));

    mock.assert();
}

#[test]
fn test_invalid_base_url_fails() {
    cli()
        .args(["me", "--base-url", "ftp://example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}
