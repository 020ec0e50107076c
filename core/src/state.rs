// SPDX-FileCopyrightText: 2025-2026 tick contributors
//
// SPDX-License-Identifier: Apache-2.0

use tick_api::{Todo, TodoId};

/// Status of the cached todo list.
///
/// A closed variant rather than independent booleans, so loading+error and
/// error-without-detail are unrepresentable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListStatus {
    /// A fetch is in flight and no result has been applied yet.
    #[default]
    Loading,

    /// The items reflect the last successful fetch.
    Success,

    /// The last network operation failed; carries a human-readable detail.
    Error(String),
}

/// The cached todo list and its status.
///
/// Items are kept in server response order and replaced wholesale on every
/// successful fetch. On failure the previously fetched items are retained as
/// the fallback source until the next successful refresh.
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    /// Last-known todos, in server order.
    pub items: Vec<Todo>,

    /// Current status of the list.
    pub status: ListStatus,
}

impl TodoList {
    /// Creates an empty list in the loading state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count of items not yet completed.
    ///
    /// Recomputed from `items` on every call; never cached separately.
    #[must_use]
    pub fn items_left(&self) -> usize {
        self.items.iter().filter(|t| !t.completed).count()
    }

    /// Count of completed items.
    #[must_use]
    pub fn completed(&self) -> usize {
        self.items.iter().filter(|t| t.completed).count()
    }

    /// Looks up a cached todo by id.
    #[must_use]
    pub fn find(&self, id: &TodoId) -> Option<&Todo> {
        self.items.iter().find(|t| &t.id == id)
    }

    /// The error detail, when the list is in the error state.
    #[must_use]
    pub fn error_detail(&self) -> Option<&str> {
        match &self.status {
            ListStatus::Error(detail) => Some(detail),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: &str, title: &str, completed: bool) -> Todo {
        Todo {
            id: TodoId::from(id),
            title: title.to_string(),
            completed,
        }
    }

    #[test]
    fn new_list_is_empty_and_loading() {
        let list = TodoList::new();
        assert!(list.items.is_empty());
        assert_eq!(list.status, ListStatus::Loading);
    }

    #[test]
    fn counts_partition_the_list() {
        let lists = [
            vec![],
            vec![todo("1", "Todo 1", false)],
            vec![
                todo("1", "Todo 1", false),
                todo("2", "Todo 2", true),
                todo("3", "Todo 3", false),
            ],
            vec![todo("1", "Todo 1", true), todo("2", "Todo 2", true)],
        ];

        for items in lists {
            let total = items.len();
            let list = TodoList {
                items,
                status: ListStatus::Success,
            };
            assert_eq!(list.items_left() + list.completed(), total);
        }
    }

    #[test]
    fn counts_follow_completed_flags() {
        let list = TodoList {
            items: vec![
                todo("1", "Todo 1", false),
                todo("2", "Todo 2", true),
                todo("3", "Todo 3", false),
            ],
            status: ListStatus::Success,
        };
        assert_eq!(list.items_left(), 2);
        assert_eq!(list.completed(), 1);
    }

    #[test]
    fn find_matches_on_id() {
        let list = TodoList {
            items: vec![todo("1", "Todo 1", false), todo("2", "Todo 2", true)],
            status: ListStatus::Success,
        };
        assert_eq!(list.find(&TodoId::from("2")).map(|t| t.completed), Some(true));
        assert!(list.find(&TodoId::from("9")).is_none());
    }

    #[test]
    fn error_detail_only_in_error_state() {
        let mut list = TodoList::new();
        assert_eq!(list.error_detail(), None);

        list.status = ListStatus::Error("boom".to_string());
        assert_eq!(list.error_detail(), Some("boom"));

        list.status = ListStatus::Success;
        assert_eq!(list.error_detail(), None);
    }
}
