// SPDX-FileCopyrightText: 2025-2026 tick contributors
//
// SPDX-License-Identifier: Apache-2.0

/// Todo backend configuration.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend, e.g. `http://localhost:3001`.
    ///
    /// Defaults to the empty string, which resolves the collection to the
    /// same-origin relative path `/api/todos`. Point it at a host for local
    /// development against a separately-hosted backend.
    #[serde(default)]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("tick-api/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Resolves the URL of the todo collection.
    #[must_use]
    pub fn todos_url(&self) -> String {
        format!("{}/api/todos", self.base_url.trim_end_matches('/'))
    }

    /// Resolves the URL of a single todo.
    #[must_use]
    pub fn todo_url(&self, id: &crate::types::TodoId) -> String {
        format!("{}/{id}", self.todos_url())
    }
}
