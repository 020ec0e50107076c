// SPDX-FileCopyrightText: 2025-2026 tick contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Client-side todo cache: the single authoritative list state per view
//! session, reconciled with the backend by refetching after every mutation.

mod state;
mod store;

pub use crate::state::{ListStatus, TodoList};
pub use crate::store::TodoStore;

pub use tick_api::{ApiConfig, ApiError, Todo, TodoApi, TodoId};
