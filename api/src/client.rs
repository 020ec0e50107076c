// SPDX-FileCopyrightText: 2025-2026 tick contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Client for the todo REST surface.

use std::sync::Arc;

use reqwest::Method;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::HttpClient;
use crate::types::{Todo, TodoId};

/// Client for a single-list todo backend.
///
/// Consumes the REST surface verbatim:
///
/// - `GET /api/todos` → JSON array of todos
/// - `POST /api/todos` with `{title}` → created todo
/// - `PATCH /api/todos/{id}` with `{completed}` → updated todo
/// - `DELETE /api/todos/{id}` → empty
///
/// # Example
///
/// ```ignore
/// use tick_api::{ApiConfig, TodoApi};
///
/// # async fn example() -> Result<(), tick_api::ApiError> {
/// let config = ApiConfig {
///     base_url: "http://localhost:3001".to_string(),
///     ..Default::default()
/// };
///
/// let api = TodoApi::new(config)?;
/// let todos = api.list().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TodoApi {
    http: Arc<HttpClient>,
    config: ApiConfig,
}

impl TodoApi {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = HttpClient::new(&config)?;
        Ok(Self {
            http: Arc::new(http),
            config,
        })
    }

    /// Resolved URL of the todo collection.
    #[must_use]
    pub fn todos_url(&self) -> String {
        self.config.todos_url()
    }

    /// Fetches the whole todo list in server order.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a body that
    /// is not a JSON array of todos.
    pub async fn list(&self) -> Result<Vec<Todo>, ApiError> {
        let url = self.config.todos_url();
        tracing::debug!(%url, "listing todos");

        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, &url))
            .await?;

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Creates a new todo with the given title.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for an empty title, or a transport /
    /// status error from the backend.
    pub async fn create(&self, title: &str) -> Result<Todo, ApiError> {
        if title.trim().is_empty() {
            return Err(ApiError::Validation("title must not be empty".to_string()));
        }

        let url = self.config.todos_url();
        tracing::debug!(%url, title, "creating todo");

        let resp = self
            .http
            .execute(
                self.http
                    .build_request(Method::POST, &url)
                    .json(&serde_json::json!({ "title": title })),
            )
            .await?;

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Sets the completion flag of a todo.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the backend does not know the id.
    pub async fn set_completed(&self, id: &TodoId, completed: bool) -> Result<Todo, ApiError> {
        let url = self.config.todo_url(id);
        tracing::debug!(%url, completed, "updating todo");

        let resp = self
            .http
            .execute(
                self.http
                    .build_request(Method::PATCH, &url)
                    .json(&serde_json::json!({ "completed": completed })),
            )
            .await
            .map_err(|e| not_found_or(e, id))?;

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Deletes a todo.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the backend does not know the id.
    pub async fn remove(&self, id: &TodoId) -> Result<(), ApiError> {
        let url = self.config.todo_url(id);
        tracing::debug!(%url, "deleting todo");

        self.http
            .execute(self.http.build_request(Method::DELETE, &url))
            .await
            .map_err(|e| not_found_or(e, id))?;

        Ok(())
    }
}

fn not_found_or(e: ApiError, id: &TodoId) -> ApiError {
    match e {
        ApiError::Status { status: 404, .. } => ApiError::NotFound(id.clone()),
        other => other,
    }
}
