// SPDX-FileCopyrightText: 2025-2026 tick contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::{Arc, Mutex, PoisonError};

use tick_api::{TodoApi, TodoId};

use crate::state::{ListStatus, TodoList};

/// The client-side authoritative todo cache.
///
/// One store per view session, constructed by the composition root; views
/// read [`TodoStore::snapshot`] and never talk to the network directly. Every
/// mutation reconciles by refetching the canonical server state instead of
/// patching the cache optimistically.
///
/// Operations take `&self` and may race; the state reflects whichever
/// refresh completed last. Failures never corrupt the cached items: they
/// collapse into [`ListStatus::Error`] while the last successfully fetched
/// items stay in the snapshot until the next successful refresh.
#[derive(Debug, Clone)]
pub struct TodoStore {
    api: TodoApi,
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug)]
struct Inner {
    list: TodoList,
    closed: bool,
}

impl TodoStore {
    /// Creates a store with an empty list in the loading state.
    #[must_use]
    pub fn new(api: TodoApi) -> Self {
        Self {
            api,
            inner: Arc::new(Mutex::new(Inner {
                list: TodoList::new(),
                closed: false,
            })),
        }
    }

    /// Returns a copy of the current list state.
    #[must_use]
    pub fn snapshot(&self) -> TodoList {
        self.lock().list.clone()
    }

    /// Marks the store closed.
    ///
    /// An operation completing after `close` applies no further state
    /// mutation, so a response arriving after the owning view is torn down
    /// cannot update a discarded view.
    pub fn close(&self) {
        self.lock().closed = true;
    }

    /// Refetches the list, replacing the items wholesale on success.
    pub async fn refresh(&self) {
        self.apply(|list| list.status = ListStatus::Loading);

        match self.api.list().await {
            Ok(items) => self.apply(|list| {
                list.items = items;
                list.status = ListStatus::Success;
            }),
            Err(e) => {
                tracing::warn!(error = %e, "refresh failed");
                self.apply(|list| list.status = ListStatus::Error(e.to_string()));
            }
        }
    }

    /// Creates a todo, then refreshes to re-derive the canonical state.
    ///
    /// No optimistic local insert: the server assigns the id, and refetching
    /// avoids drift between client- and server-assigned fields.
    pub async fn add(&self, title: &str) {
        match self.api.create(title).await {
            Ok(_) => self.refresh().await,
            Err(e) => {
                tracing::warn!(error = %e, "create failed");
                self.apply(|list| list.status = ListStatus::Error(e.to_string()));
            }
        }
    }

    /// Flips the completion flag of a cached todo, then refreshes.
    ///
    /// The cached snapshot is the only source for the current flag; an id
    /// not present in it sets the error state without a network call.
    pub async fn toggle(&self, id: &TodoId) {
        let completed = self.lock().list.find(id).map(|t| t.completed);
        let Some(completed) = completed else {
            self.apply(|list| list.status = ListStatus::Error(format!("Todo not found: {id}")));
            return;
        };

        match self.api.set_completed(id, !completed).await {
            Ok(_) => self.refresh().await,
            Err(e) => {
                tracing::warn!(error = %e, "update failed");
                self.apply(|list| list.status = ListStatus::Error(e.to_string()));
            }
        }
    }

    /// Deletes a todo, then refreshes. Issues exactly one DELETE request.
    pub async fn delete_item(&self, id: &TodoId) {
        match self.api.remove(id).await {
            Ok(()) => self.refresh().await,
            Err(e) => {
                tracing::warn!(error = %e, "delete failed");
                self.apply(|list| list.status = ListStatus::Error(e.to_string()));
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn apply(&self, f: impl FnOnce(&mut TodoList)) {
        let mut inner = self.lock();
        if !inner.closed {
            f(&mut inner.list);
        }
    }
}
