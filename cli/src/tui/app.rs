// SPDX-FileCopyrightText: 2025-2026 tick contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::time::Duration;

use clap::{ArgMatches, Command};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tick_core::TodoStore;

use crate::tui::board::{Board, Intent};

/// Open the interactive todo board.
#[derive(Debug, Clone, Copy)]
pub struct CmdBoard;

impl CmdBoard {
    pub const NAME: &str = "board";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("tui")
            .about("Open the interactive todo board")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        Self
    }

    pub async fn run(self, store: &TodoStore) -> Result<(), Box<dyn Error>> {
        // Spawn the initial fetch so the first frames render the loading
        // state instead of blocking on the network.
        let fetcher = store.clone();
        tokio::spawn(async move { fetcher.refresh().await });

        let mut terminal = ratatui::init();
        let result = event_loop(store, &mut terminal).await;

        // Closed before the terminal goes back, so a fetch still in flight
        // cannot update the torn-down view.
        store.close();
        ratatui::restore();
        result
    }
}

async fn event_loop(
    store: &TodoStore,
    terminal: &mut DefaultTerminal,
) -> Result<(), Box<dyn Error>> {
    let mut board = Board::new();

    loop {
        let list = store.snapshot();
        board.clamp_selection(&list);
        terminal.draw(|frame| board.render(&list, frame))?;

        if !event::poll(Duration::from_millis(100))? {
            continue; // render the next frame; the spawned fetch may have landed
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // Each intent is awaited before the next key is handled, so at most
        // one user-initiated network call is in flight at a time.
        match board.on_key(key.code, &list) {
            Some(Intent::Quit) => break Ok(()),
            Some(Intent::Refresh) => store.refresh().await,
            Some(Intent::Toggle(id)) => store.toggle(&id).await,
            Some(Intent::Delete(id)) => store.delete_item(&id).await,
            Some(Intent::Add(title)) => store.add(&title).await,
            None => {}
        }
    }
}
