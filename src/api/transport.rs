//
//  spotify-web-api
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! HTTP execution of a single [`RequestDescriptor`].
//!
//! Response mapping:
//!
//! | Response | Outcome |
//! |----------|---------|
//! | 2xx, empty body | `Ok(Value::String(""))` |
//! | 2xx, JSON body | `Ok(parsed)` |
//! | 2xx, non-JSON body | [`ApiError::MalformedBody`] |
//! | anything else | [`ApiError::Status`] |

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::common::ApiError;
use super::request::RequestDescriptor;
use crate::auth::AccessToken;

/// Executes requests with the token captured when the call was built.
#[derive(Debug, Clone)]
pub struct Transport {
    http: Client,
    token: Option<AccessToken>,
}

impl Transport {
    pub(crate) fn new(http: Client, token: Option<AccessToken>) -> Self {
        Self { http, token }
    }

    /// Sends `request` once and maps the response.
    pub async fn execute(&self, request: RequestDescriptor) -> Result<Value, ApiError> {
        let url = request.full_url();
        debug!(
            method = %request.method,
            url = %url,
            authorized = self.token.is_some(),
            "Sending request"
        );

        let mut builder = self.http.request(request.method.into(), &url);

        if let Some(token) = &self.token {
            builder = token.apply_to_request(builder);
        }

        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        debug!(status = status.as_u16(), bytes = text.len(), "Received response");

        if !status.is_success() {
            return Err(ApiError::from_status(status, text));
        }

        if text.trim().is_empty() {
            return Ok(Value::String(String::new()));
        }

        serde_json::from_str(&text).map_err(|source| ApiError::MalformedBody {
            status: status.as_u16(),
            source,
        })
    }
}
