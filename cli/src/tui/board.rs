// SPDX-FileCopyrightText: 2025-2026 tick contributors
//
// SPDX-License-Identifier: Apache-2.0

use ratatui::Frame;
use ratatui::crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Paragraph};
use tick_core::{TodoId, TodoList};

use crate::view;

/// What the user asked the store to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Refresh,
    Toggle(TodoId),
    Delete(TodoId),
    Add(String),
    Quit,
}

/// View state of the todo board: cursor position and the add-input buffer.
///
/// Rendering is a pure function of this state plus a [`TodoList`] snapshot;
/// key presses map to [`Intent`]s and never touch the store directly.
#[derive(Debug, Default)]
pub struct Board {
    selected: usize,
    input: Option<String>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the cursor within the current snapshot after items change.
    pub fn clamp_selection(&mut self, list: &TodoList) {
        let max = list.items.len().saturating_sub(1);
        if self.selected > max {
            self.selected = max;
        }
    }

    /// Maps a key press to an intent, updating local view state.
    pub fn on_key(&mut self, key: KeyCode, list: &TodoList) -> Option<Intent> {
        if let Some(buf) = &mut self.input {
            return match key {
                KeyCode::Esc => {
                    self.input = None;
                    None
                }
                KeyCode::Enter => {
                    let title = self.input.take().unwrap_or_default();
                    match title.trim().is_empty() {
                        true => None,
                        false => Some(Intent::Add(title)),
                    }
                }
                KeyCode::Backspace => {
                    buf.pop();
                    None
                }
                KeyCode::Char(c) => {
                    buf.push(c);
                    None
                }
                _ => None,
            };
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => Some(Intent::Quit),
            KeyCode::Char('r') => Some(Intent::Refresh),
            KeyCode::Char('a') => {
                self.input = Some(String::new());
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < list.items.len() {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Char(' ') => self.selected_id(list).map(Intent::Toggle),
            KeyCode::Char('d') => self.selected_id(list).map(Intent::Delete),
            _ => None,
        }
    }

    fn selected_id(&self, list: &TodoList) -> Option<TodoId> {
        list.items.get(self.selected).map(|t| t.id.clone())
    }

    pub fn render(&self, list: &TodoList, frame: &mut Frame) {
        let area = frame.area();
        let title = Line::from(" tick ".bold());
        let block = Block::bordered()
            .border_set(border::ROUNDED)
            .title(title.centered())
            .title_bottom(instructions().centered());

        let inner_area = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(self.body_text(list)), inner_area);
    }

    fn body_text(&self, list: &TodoList) -> Text<'static> {
        let mut lines: Vec<Line> = match view::message(list) {
            // The message replaces the list area, never both at once.
            Some(msg) if list.error_detail().is_some() => vec![Line::from(msg.red())],
            Some(msg) => vec![Line::from(msg.italic())],
            None => {
                let mut lines: Vec<Line> = list
                    .items
                    .iter()
                    .enumerate()
                    .map(|(i, todo)| {
                        let line = Line::from(view::row(todo));
                        match i == self.selected {
                            true => line.reversed(),
                            false => line,
                        }
                    })
                    .collect();

                if let Some((left, done)) = view::summary(list) {
                    lines.push(Line::default());
                    lines.push(Line::from(format!("{left}, {done}").dim()));
                }
                lines
            }
        };

        if let Some(input) = &self.input {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                "New todo: ".bold(),
                input.clone().into(),
                "▌".into(),
            ]));
        }

        Text::from(lines)
    }
}

fn instructions() -> Line<'static> {
    Line::from(vec![
        " Add ".into(),
        "<a>".blue().bold(),
        " Toggle ".into(),
        "<Space>".blue().bold(),
        " Delete ".into(),
        "<d>".blue().bold(),
        " Retry ".into(),
        "<r>".blue().bold(),
        " Quit ".into(),
        "<q> ".blue().bold(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tick_core::{ListStatus, Todo};

    fn three_todos() -> TodoList {
        TodoList {
            items: vec![
                Todo {
                    id: TodoId::from("1"),
                    title: "Todo 1".to_string(),
                    completed: false,
                },
                Todo {
                    id: TodoId::from("2"),
                    title: "Todo 2".to_string(),
                    completed: true,
                },
                Todo {
                    id: TodoId::from("3"),
                    title: "Todo 3".to_string(),
                    completed: false,
                },
            ],
            status: ListStatus::Success,
        }
    }

    #[test]
    fn space_toggles_the_selected_item() {
        let list = three_todos();
        let mut board = Board::new();

        board.on_key(KeyCode::Down, &list);
        let intent = board.on_key(KeyCode::Char(' '), &list);
        assert_eq!(intent, Some(Intent::Toggle(TodoId::from("2"))));
    }

    #[test]
    fn d_deletes_the_selected_item() {
        let list = three_todos();
        let mut board = Board::new();

        let intent = board.on_key(KeyCode::Char('d'), &list);
        assert_eq!(intent, Some(Intent::Delete(TodoId::from("1"))));
    }

    #[test]
    fn selection_stays_in_bounds() {
        let list = three_todos();
        let mut board = Board::new();

        for _ in 0..10 {
            board.on_key(KeyCode::Down, &list);
        }
        let intent = board.on_key(KeyCode::Char(' '), &list);
        assert_eq!(intent, Some(Intent::Toggle(TodoId::from("3"))));

        for _ in 0..10 {
            board.on_key(KeyCode::Up, &list);
        }
        let intent = board.on_key(KeyCode::Char(' '), &list);
        assert_eq!(intent, Some(Intent::Toggle(TodoId::from("1"))));
    }

    #[test]
    fn clamp_follows_a_shrinking_list() {
        let mut list = three_todos();
        let mut board = Board::new();
        board.on_key(KeyCode::Down, &list);
        board.on_key(KeyCode::Down, &list);

        list.items.truncate(1);
        board.clamp_selection(&list);
        let intent = board.on_key(KeyCode::Char(' '), &list);
        assert_eq!(intent, Some(Intent::Toggle(TodoId::from("1"))));
    }

    #[test]
    fn toggle_on_empty_list_is_a_no_op() {
        let list = TodoList {
            items: vec![],
            status: ListStatus::Success,
        };
        let mut board = Board::new();
        assert_eq!(board.on_key(KeyCode::Char(' '), &list), None);
        assert_eq!(board.on_key(KeyCode::Char('d'), &list), None);
    }

    #[test]
    fn typed_title_is_submitted_on_enter() {
        let list = three_todos();
        let mut board = Board::new();

        assert_eq!(board.on_key(KeyCode::Char('a'), &list), None);
        for c in "Buy milk".chars() {
            assert_eq!(board.on_key(KeyCode::Char(c), &list), None);
        }
        let intent = board.on_key(KeyCode::Enter, &list);
        assert_eq!(intent, Some(Intent::Add("Buy milk".to_string())));
    }

    #[test]
    fn backspace_edits_the_input() {
        let list = three_todos();
        let mut board = Board::new();

        board.on_key(KeyCode::Char('a'), &list);
        for c in "abc".chars() {
            board.on_key(KeyCode::Char(c), &list);
        }
        board.on_key(KeyCode::Backspace, &list);
        let intent = board.on_key(KeyCode::Enter, &list);
        assert_eq!(intent, Some(Intent::Add("ab".to_string())));
    }

    #[test]
    fn esc_cancels_the_input_without_adding() {
        let list = three_todos();
        let mut board = Board::new();

        board.on_key(KeyCode::Char('a'), &list);
        board.on_key(KeyCode::Char('x'), &list);
        assert_eq!(board.on_key(KeyCode::Esc, &list), None);

        // Back in browse mode, Esc quits.
        assert_eq!(board.on_key(KeyCode::Esc, &list), Some(Intent::Quit));
    }

    #[test]
    fn empty_title_is_not_submitted() {
        let list = three_todos();
        let mut board = Board::new();

        board.on_key(KeyCode::Char('a'), &list);
        board.on_key(KeyCode::Char(' '), &list);
        assert_eq!(board.on_key(KeyCode::Enter, &list), None);
    }

    #[test]
    fn r_retries_after_an_error() {
        let list = TodoList {
            items: vec![],
            status: ListStatus::Error("API Error".to_string()),
        };
        let mut board = Board::new();
        assert_eq!(board.on_key(KeyCode::Char('r'), &list), Some(Intent::Refresh));
    }
}
