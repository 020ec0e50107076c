// SPDX-FileCopyrightText: 2025-2026 tick contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Derived rendering rules, shared by the list command and the TUI board.
//!
//! Everything here is a pure function of a [`TodoList`] snapshot. The
//! summary counts are recomputed from the items on every render and never
//! cached separately.

use tick_core::{ListStatus, Todo, TodoList};

/// Message shown when the list loaded successfully but is empty.
pub const EMPTY_MESSAGE: &str = "No todos yet";

/// Message shown while the initial fetch is in flight.
pub const LOADING_MESSAGE: &str = "Loading todos...";

/// The error message shown when the last network operation failed.
#[must_use]
pub fn error_message(detail: &str) -> String {
    format!("Error loading todos: {detail}")
}

/// The message replacing the list area, if any.
///
/// Returns `Some` for the loading, empty, and error states; `None` when the
/// item rows should render. The error message replaces the list so a partial
/// list and an error are never shown simultaneously.
#[must_use]
pub fn message(list: &TodoList) -> Option<String> {
    match &list.status {
        ListStatus::Loading => Some(LOADING_MESSAGE.to_string()),
        ListStatus::Error(detail) => Some(error_message(detail)),
        ListStatus::Success if list.items.is_empty() => Some(EMPTY_MESSAGE.to_string()),
        ListStatus::Success => None,
    }
}

/// Completion marker for one item row.
#[must_use]
pub fn marker(todo: &Todo) -> &'static str {
    match todo.completed {
        true => "[x]",
        false => "[ ]",
    }
}

/// One rendered item row: marker plus title.
#[must_use]
pub fn row(todo: &Todo) -> String {
    format!("{} {}", marker(todo), todo.title)
}

/// Aggregate summary: `("N items left", "M completed")`.
///
/// `None` when there is nothing to summarize (no items to render).
#[must_use]
pub fn summary(list: &TodoList) -> Option<(String, String)> {
    if list.status != ListStatus::Success || list.items.is_empty() {
        return None;
    }

    Some((
        format!("{} items left", list.items_left()),
        format!("{} completed", list.completed()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tick_core::TodoId;

    fn todo(id: &str, title: &str, completed: bool) -> Todo {
        Todo {
            id: TodoId::from(id),
            title: title.to_string(),
            completed,
        }
    }

    fn success(items: Vec<Todo>) -> TodoList {
        TodoList {
            items,
            status: ListStatus::Success,
        }
    }

    #[test]
    fn loading_list_renders_indicator_only() {
        let list = TodoList::new();
        assert_eq!(message(&list).as_deref(), Some(LOADING_MESSAGE));
        assert!(summary(&list).is_none());
    }

    #[test]
    fn empty_list_renders_one_empty_state_and_no_counts() {
        let list = success(vec![]);
        assert_eq!(message(&list).as_deref(), Some(EMPTY_MESSAGE));
        assert!(summary(&list).is_none());
    }

    #[test]
    fn fetched_list_renders_rows_and_counts() {
        let list = success(vec![
            todo("1", "Todo 1", false),
            todo("2", "Todo 2", true),
            todo("3", "Todo 3", false),
        ]);

        assert!(message(&list).is_none());
        assert_eq!(row(&list.items[0]), "[ ] Todo 1");
        assert_eq!(row(&list.items[1]), "[x] Todo 2");

        let (left, done) = summary(&list).unwrap();
        assert_eq!(left, "2 items left");
        assert_eq!(done, "1 completed");
    }

    #[test]
    fn counts_sum_to_total_for_any_list() {
        let cases = [
            vec![],
            vec![todo("1", "a", true)],
            vec![todo("1", "a", false), todo("2", "b", false)],
            vec![todo("1", "a", true), todo("2", "b", false), todo("3", "c", true)],
        ];

        for items in cases {
            let total = items.len();
            let list = success(items);
            assert_eq!(list.items_left() + list.completed(), total);
        }
    }

    #[test]
    fn error_replaces_the_list_area() {
        let list = TodoList {
            items: vec![todo("1", "Todo 1", false)],
            status: ListStatus::Error("API Error".to_string()),
        };

        assert_eq!(
            message(&list).as_deref(),
            Some("Error loading todos: API Error")
        );
        // No summary next to an error message.
        assert!(summary(&list).is_none());
    }

    #[test]
    fn error_message_is_distinct_from_empty_state() {
        assert_ne!(error_message("x"), EMPTY_MESSAGE);
    }
}
