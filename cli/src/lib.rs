// SPDX-FileCopyrightText: 2025-2026 tick contributors
//
// SPDX-License-Identifier: Apache-2.0

mod cli;
mod cmd_todo;
mod config;
mod parser;
mod todo_formatter;
mod tui;
mod view;

pub use crate::{
    cli::{Cli, Commands, run},
    config::Config,
};
