// SPDX-FileCopyrightText: 2025-2026 tick contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use tick_core::{TodoApi, TodoStore};

use crate::cmd_todo::{CmdTodoDelete, CmdTodoDone, CmdTodoList, CmdTodoNew, CmdTodoUndo};
use crate::config::{APP_NAME, parse_config};
use crate::tui::CmdBoard;

/// Run the tick command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("A minimal todo list client for a REST backend.")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to the board
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/tick/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/tick/config.toml on Windows; overridable via the TICK_CONFIG environment variable.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdBoard::command())
            .subcommand(
                Command::new("todo")
                    .alias("t")
                    .about("Manage your todo list")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdTodoList::command())
                    .subcommand(CmdTodoNew::command())
                    .subcommand(CmdTodoDone::command())
                    .subcommand(CmdTodoUndo::command())
                    .subcommand(CmdTodoDelete::command()),
            )
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdBoard::NAME, matches)) => Board(CmdBoard::from(matches)),
            Some(("todo", matches)) => match matches.subcommand() {
                Some((CmdTodoList::NAME, matches)) => TodoList(CmdTodoList::from(matches)),
                Some((CmdTodoNew::NAME, matches)) => TodoNew(CmdTodoNew::from(matches)),
                Some((CmdTodoDone::NAME, matches)) => TodoDone(CmdTodoDone::from(matches)),
                Some((CmdTodoUndo::NAME, matches)) => TodoUndo(CmdTodoUndo::from(matches)),
                Some((CmdTodoDelete::NAME, matches)) => TodoDelete(CmdTodoDelete::from(matches)),
                _ => unreachable!(),
            },
            None => Board(CmdBoard),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Open the interactive todo board
    Board(CmdBoard),

    /// List todos
    TodoList(CmdTodoList),

    /// Add a new todo
    TodoNew(CmdTodoNew),

    /// Mark a todo as done
    TodoDone(CmdTodoDone),

    /// Mark a todo as undone
    TodoUndo(CmdTodoUndo),

    /// Delete a todo
    TodoDelete(CmdTodoDelete),
}

impl Commands {
    /// Run the command with the given configuration
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        tracing::debug!("Parsing configuration...");
        let config = parse_config(config).await?;
        let api = TodoApi::new(config.api)?;

        // One store per session, owned here; commands only borrow it.
        let store = TodoStore::new(api);

        use Commands::*;
        let result = match self {
            Board(a) => a.run(&store).await,
            TodoList(a) => a.run(&store).await,
            TodoNew(a) => a.run(&store).await,
            TodoDone(a) => a.run(&store).await,
            TodoUndo(a) => a.run(&store).await,
            TodoDelete(a) => a.run(&store).await,
        };

        store.close();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ArgOutputFormat;
    use tick_core::TodoId;

    #[test]
    fn test_parse_config() {
        let cli = Cli::try_parse_from(vec!["test", "-c", "/tmp/config.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.toml")));
        assert!(matches!(cli.command, Commands::Board(_)));
    }

    #[test]
    fn test_parse_default_board() {
        let cli = Cli::try_parse_from(vec!["test"]).unwrap();
        assert!(matches!(cli.command, Commands::Board(_)));
    }

    #[test]
    fn test_parse_board() {
        let cli = Cli::try_parse_from(vec!["test", "board"]).unwrap();
        assert!(matches!(cli.command, Commands::Board(_)));
    }

    #[test]
    fn test_parse_todo_list() {
        let args = vec!["test", "todo", "list", "--output-format", "json"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::TodoList(cmd) => {
                assert_eq!(cmd.output_format, ArgOutputFormat::Json);
            }
            _ => panic!("Expected TodoList command"),
        }
    }

    #[test]
    fn test_parse_todo_new() {
        let cli = Cli::try_parse_from(vec!["test", "todo", "new", "a new todo"]).unwrap();
        match cli.command {
            Commands::TodoNew(cmd) => assert_eq!(cmd.title, "a new todo"),
            _ => panic!("Expected TodoNew command"),
        }
    }

    #[test]
    fn test_parse_todo_add_alias() {
        let cli = Cli::try_parse_from(vec!["test", "todo", "add", "a new todo"]).unwrap();
        assert!(matches!(cli.command, Commands::TodoNew(_)));
    }

    #[test]
    fn test_parse_todo_done() {
        let cli = Cli::try_parse_from(vec!["test", "todo", "done", "id1", "id2"]).unwrap();
        match cli.command {
            Commands::TodoDone(cmd) => {
                assert_eq!(cmd.ids, vec![TodoId::from("id1"), TodoId::from("id2")]);
            }
            _ => panic!("Expected TodoDone command"),
        }
    }

    #[test]
    fn test_parse_todo_undo() {
        let cli = Cli::try_parse_from(vec!["test", "todo", "undo", "id1"]).unwrap();
        match cli.command {
            Commands::TodoUndo(cmd) => {
                assert_eq!(cmd.ids, vec![TodoId::from("id1")]);
            }
            _ => panic!("Expected TodoUndo command"),
        }
    }

    #[test]
    fn test_parse_todo_delete() {
        let cli = Cli::try_parse_from(vec!["test", "todo", "rm", "id1"]).unwrap();
        match cli.command {
            Commands::TodoDelete(cmd) => {
                assert_eq!(cmd.ids, vec![TodoId::from("id1")]);
            }
            _ => panic!("Expected TodoDelete command"),
        }
    }
}
