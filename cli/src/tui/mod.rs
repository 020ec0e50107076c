// SPDX-FileCopyrightText: 2025-2026 tick contributors
//
// SPDX-License-Identifier: Apache-2.0

mod app;
mod board;

pub use app::CmdBoard;
