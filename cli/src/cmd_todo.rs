// SPDX-FileCopyrightText: 2025-2026 tick contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{Arg, ArgMatches, Command, arg};
use tick_core::{TodoId, TodoStore};

use crate::parser::ArgOutputFormat;
use crate::todo_formatter::TodoFormatter;

/// List the todos.
#[derive(Debug, Clone, Copy)]
pub struct CmdTodoList {
    pub output_format: ArgOutputFormat,
}

impl CmdTodoList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List todos")
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, store: &TodoStore) -> Result<(), Box<dyn Error>> {
        tracing::debug!("Listing todos...");
        store.refresh().await;
        print_list(store, self.output_format);
        Ok(())
    }
}

/// Add a new todo.
#[derive(Debug, Clone)]
pub struct CmdTodoNew {
    pub title: String,
    pub output_format: ArgOutputFormat,
}

impl CmdTodoNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Add a new todo")
            .arg(arg_title())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            title: get_title(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, store: &TodoStore) -> Result<(), Box<dyn Error>> {
        tracing::debug!("Adding new todo...");
        store.add(&self.title).await;
        print_list(store, self.output_format);
        Ok(())
    }
}

/// Mark todos as completed.
#[derive(Debug, Clone)]
pub struct CmdTodoDone {
    pub ids: Vec<TodoId>,
    pub output_format: ArgOutputFormat,
}

impl CmdTodoDone {
    pub const NAME: &str = "done";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Mark a todo item as done")
            .arg(arg_ids())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            ids: get_ids(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, store: &TodoStore) -> Result<(), Box<dyn Error>> {
        set_completed(store, &self.ids, true).await;
        print_list(store, self.output_format);
        Ok(())
    }
}

/// Mark todos as not completed.
#[derive(Debug, Clone)]
pub struct CmdTodoUndo {
    pub ids: Vec<TodoId>,
    pub output_format: ArgOutputFormat,
}

impl CmdTodoUndo {
    pub const NAME: &str = "undo";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Mark a todo item as undone")
            .arg(arg_ids())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            ids: get_ids(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, store: &TodoStore) -> Result<(), Box<dyn Error>> {
        set_completed(store, &self.ids, false).await;
        print_list(store, self.output_format);
        Ok(())
    }
}

/// Delete todos.
#[derive(Debug, Clone)]
pub struct CmdTodoDelete {
    pub ids: Vec<TodoId>,
    pub output_format: ArgOutputFormat,
}

impl CmdTodoDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete a todo item")
            .arg(arg_ids())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            ids: get_ids(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, store: &TodoStore) -> Result<(), Box<dyn Error>> {
        for id in &self.ids {
            tracing::debug!(%id, "Deleting todo");
            store.delete_item(id).await;
        }
        print_list(store, self.output_format);
        Ok(())
    }
}

/// Brings each id to the wanted completion state via the store's toggle,
/// skipping items already there. The store refetches after every mutation,
/// so the snapshot stays canonical between ids.
async fn set_completed(store: &TodoStore, ids: &[TodoId], completed: bool) {
    store.refresh().await;
    for id in ids {
        tracing::debug!(%id, completed, "Updating todo");
        match store.snapshot().find(id).map(|t| t.completed) {
            Some(current) if current == completed => {}
            _ => store.toggle(id).await,
        }
    }
}

fn print_list(store: &TodoStore, output_format: ArgOutputFormat) {
    let formatter = TodoFormatter::new().with_output_format(output_format);
    println!("{}", formatter.format(&store.snapshot()));
}

fn arg_ids() -> Arg {
    arg!(id: <ID> "The id of the todo").num_args(1..)
}

fn get_ids(matches: &ArgMatches) -> Vec<TodoId> {
    matches
        .get_many::<String>("id")
        .expect("id is required")
        .map(|a| TodoId::from(a.as_str()))
        .collect()
}

fn arg_title() -> Arg {
    arg!(title: <TITLE> "Title of the todo")
}

fn get_title(matches: &ArgMatches) -> String {
    matches
        .get_one::<String>("title")
        .expect("title is required")
        .clone()
}
