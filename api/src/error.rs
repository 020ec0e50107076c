// SPDX-FileCopyrightText: 2025-2026 tick contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::types::TodoId;

/// Todo backend client errors.
#[non_exhaustive]
#[derive(Debug)]
pub enum ApiError {
    /// Transport-level failure: connection refused, timeout, DNS.
    Network(String),

    /// Non-2xx response carrying the status code.
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, if readable.
        detail: String,
    },

    /// Input rejected by the backend or before dispatch (e.g. empty title).
    Validation(String),

    /// Todo not found on the backend.
    NotFound(TodoId),

    /// Response body could not be parsed.
    InvalidResponse(String),

    /// Configuration error.
    Config(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "Network error: {e}"),
            Self::Status { status, detail } => write!(f, "HTTP {status}: {detail}"),
            Self::Validation(e) => write!(f, "Validation failed: {e}"),
            Self::NotFound(id) => write!(f, "Todo not found: {id}"),
            Self::InvalidResponse(e) => write!(f, "Invalid server response: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidResponse(e.to_string())
    }
}
