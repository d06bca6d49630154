//
//  spotify-web-api
//  cli/api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Direct API access command
//!
//! Sends a request to any Web API endpoint, for endpoints without a
//! dedicated command or for debugging.
//!
//! ## Examples
//!
//! ```bash
//! # Get a track
//! spotify-api api /tracks/3Qm86XLflmIXVm1wcwkgDK
//!
//! # Query parameters
//! spotify-api api /browse/new-releases -q country=SE -q limit=5
//!
//! # Save tracks with a JSON body
//! spotify-api api -X PUT /me/tracks --body '["4iV5W9uYEdYUVa79Axb7Rh"]'
//!
//! # Follow a next link from a previous page
//! spotify-api api 'https://api.spotify.com/v1/me/tracks?offset=20&limit=20'
//! ```

use anyhow::{bail, Context, Result};
use clap::Args;
use serde_json::Value;

use crate::api::{HttpMethod, Params};

use super::GlobalOptions;

/// Make direct API requests
#[derive(Args, Debug)]
pub struct ApiCommand {
    /// API path (e.g., /me/player) or absolute URL
    pub endpoint: String,

    /// HTTP method (GET, POST, PUT, DELETE)
    #[arg(long, short = 'X', default_value = "GET")]
    pub method: String,

    /// Query parameters as key=value (can be specified multiple times)
    #[arg(long = "query", short = 'q', action = clap::ArgAction::Append)]
    pub query: Vec<String>,

    /// JSON request body
    #[arg(long)]
    pub body: Option<String>,
}

impl ApiCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let method: HttpMethod = self.method.parse()?;
        let params = self.parse_query()?;

        let absolute =
            self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://");

        let mut call = if absolute {
            if method != HttpMethod::Get {
                bail!("Absolute URLs can only be fetched with GET");
            }
            client.get_generic(&self.endpoint)
        } else {
            let path = if self.endpoint.starts_with('/') {
                self.endpoint.clone()
            } else {
                format!("/{}", self.endpoint)
            };
            client.request(method, &path)
        };

        if let Some(body) = &self.body {
            let value: Value =
                serde_json::from_str(body).context("Request body is not valid JSON")?;
            call = call.json(&value);
        }

        let response = call.options(params).await?;
        global.print(&response)
    }

    fn parse_query(&self) -> Result<Params> {
        let mut params = Params::new();
        for field in &self.query {
            let Some((key, value)) = field.split_once('=') else {
                bail!("Invalid query format: {}. Expected key=value", field);
            };
            params.insert(key, value);
        }
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(query: &[&str]) -> ApiCommand {
        ApiCommand {
            endpoint: "/search".to_string(),
            method: "GET".to_string(),
            query: query.iter().map(|q| q.to_string()).collect(),
            body: None,
        }
    }

    #[test]
    fn test_parse_query() {
        let params = command(&["q=name:abba", "type=album"]).parse_query().unwrap();
        assert_eq!(params.to_query_string(), "?q=name%3Aabba&type=album");
    }

    #[test]
    fn test_parse_query_rejects_missing_value() {
        assert!(command(&["limit"]).parse_query().is_err());
    }
}
