// SPDX-FileCopyrightText: 2025-2026 tick contributors
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client for the tick todo REST backend.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]

mod client;
mod config;
mod error;
mod http;
mod types;

pub use crate::client::TodoApi;
pub use crate::config::ApiConfig;
pub use crate::error::ApiError;
pub use crate::types::{Todo, TodoId};
