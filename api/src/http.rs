// SPDX-FileCopyrightText: 2025-2026 tick contributors
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with timeout and status mapping.

use reqwest::{Client, RequestBuilder, Response, StatusCode};

use crate::config::ApiConfig;
use crate::error::ApiError;

/// HTTP client for todo backend operations.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        Ok(Self { client })
    }

    /// Builds a request for the given method and URL.
    pub fn build_request(&self, method: reqwest::Method, url: &str) -> RequestBuilder {
        self.client.request(method, url)
    }

    /// Executes a request and maps non-2xx responses to typed errors.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Network` on transport failure, `ApiError::Validation`
    /// for a 400/422 body, and `ApiError::Status` for any other non-2xx status.
    pub async fn execute(&self, req: RequestBuilder) -> Result<Response, ApiError> {
        let resp = req.send().await?;

        match resp.status() {
            StatusCode::OK | StatusCode::CREATED | StatusCode::NO_CONTENT => Ok(resp),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                Err(ApiError::Validation(read_detail(resp).await))
            }
            status => Err(ApiError::Status {
                status: status.as_u16(),
                detail: read_detail(resp).await,
            }),
        }
    }
}

async fn read_detail(resp: Response) -> String {
    resp.text()
        .await
        .unwrap_or_else(|_| "Unable to read response".to_string())
}
