// SPDX-FileCopyrightText: 2025-2026 tick contributors
//
// SPDX-License-Identifier: Apache-2.0

use colored::Colorize;
use tick_core::TodoList;

use crate::parser::ArgOutputFormat;
use crate::view;

/// Formats a list snapshot for terminal output.
#[derive(Debug, Clone, Copy)]
pub struct TodoFormatter {
    output_format: ArgOutputFormat,
}

impl TodoFormatter {
    pub fn new() -> Self {
        Self {
            output_format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(self, output_format: ArgOutputFormat) -> Self {
        Self { output_format }
    }

    pub fn format(&self, list: &TodoList) -> String {
        match self.output_format {
            ArgOutputFormat::Table => Self::format_table(list),
            ArgOutputFormat::Json => Self::format_json(list),
        }
    }

    fn format_table(list: &TodoList) -> String {
        if let Some(message) = view::message(list) {
            return match list.error_detail() {
                Some(_) => message.red().to_string(),
                None => message.italic().to_string(),
            };
        }

        let mut lines: Vec<String> = list.items.iter().map(view::row).collect();
        if let Some((left, done)) = view::summary(list) {
            lines.push(String::new());
            lines.push(format!("{left}, {done}"));
        }
        lines.join("\n")
    }

    fn format_json(list: &TodoList) -> String {
        let value = match list.error_detail() {
            Some(detail) => serde_json::json!({ "error": detail }),
            None => serde_json::json!(list.items),
        };
        serde_json::to_string_pretty(&value).unwrap_or_else(|e| format!("\"{e}\""))
    }
}

impl Default for TodoFormatter {
    fn default() -> Self {
        Self::new()
    }
}
