// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Cassette Player TUI.
//!
//! A terminal front-end for a cassette server: it lists the server's catalog
//! of cassettes and asks the server to play or stop them.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background processing layer.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * **Background Workers** perform the blocking HTTP requests to the server.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even when the run fails. Communication between
//! the UI and background workers is handled via `std::sync::mpsc` channels.

mod api;
mod commander;
mod components;
mod config;
mod events;
mod model;
mod render;
mod status;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::{
        Arc,
        mpsc::{self, Receiver, Sender},
    },
    thread,
    time::Duration,
};

use crate::{
    api::HttpCassetteApi,
    commander::Commander,
    components::CassetteBrowser,
    config::AppConfig,
    events::{AppEvent, process_events},
    status::StatusLine,
    tasks::{AppTask, TaskContext},
    theme::Theme,
};

const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub browser: CassetteBrowser,
    pub commander: Commander,
    pub status: StatusLine,
}

impl App {
    /// Create a new instance of application state with a freshly mounted
    /// browser view.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            task_tx,
            browser: CassetteBrowser::new(),
            commander: Commander::new(),
            status: StatusLine::new(),
        }
    }
}

/// The entry point of the application.
///
/// Sets up the communication channels, initializes the application state,
/// manages the terminal lifecycle, and returns an error if any part of the
/// execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    match config::init_logging(&config) {
        Ok(path) => info!("Logging to {}", path.display()),
        Err(e) => eprintln!("Logging disabled: {:#}", e),
    }

    let api = HttpCassetteApi::new(&config.api_url, config.request_timeout())
        .context("Invalid api_url in configuration")?;
    info!("Using cassette server at {}", config.api_url);

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, Arc::new(api), task_rx);
    app.browser.unmount();
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();

    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&mut stdout, &hex).ok();
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg(terminal.backend_mut()).ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to perform [`AppTask`]s against the server.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// It then issues the catalog request for the initial mount of the browser
/// view and hands control to [`process_events`].
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    api: Arc<HttpCassetteApi>,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    let task_ctx = TaskContext::new(api, app.event_tx.clone());
    tasks::spawn_task_worker(task_ctx, task_rx);

    let tx_keys = app.event_tx.clone();
    thread::spawn(move || forward_terminal_events(event::read, tx_keys));

    // Periodic tick, effectively the minimum "frame rate" and the clock for
    // status line notifications.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    app.task_tx
        .send(AppTask::LoadCatalog(app.browser.mount_token()))
        .context("Failed to request the catalog")?;

    process_events(terminal, app)
}

/// Translates raw terminal events to application events until either the
/// terminal or the event channel goes away. Resizes only need a redraw, which
/// any event triggers.
fn forward_terminal_events(
    mut read: impl FnMut() -> io::Result<event::Event>,
    tx: Sender<AppEvent>,
) {
    loop {
        let app_event = match read() {
            Ok(event::Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
            Ok(event::Event::Resize(..)) => AppEvent::Tick,
            Ok(_) => continue,
            Err(e) => {
                warn!("Terminal input closed: {}", e);
                break;
            }
        };
        if tx.send(app_event).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    use super::*;

    #[test]
    fn input_forwarding_stops_when_the_terminal_fails() {
        let (tx, rx) = mpsc::channel();
        let mut reads = vec![
            Err(io::Error::other("stdin closed")),
            Ok(Event::FocusGained),
            Ok(Event::Key(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE))),
        ];

        forward_terminal_events(move || reads.pop().unwrap(), tx);

        assert!(matches!(rx.try_recv(), Ok(AppEvent::Key(key)) if key.code == KeyCode::Char('j')));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn resizes_become_ticks() {
        let (tx, rx) = mpsc::channel();
        let mut reads = vec![Err(io::Error::other("done")), Ok(Event::Resize(80, 24))];

        forward_terminal_events(move || reads.pop().unwrap(), tx);

        assert!(matches!(rx.try_recv(), Ok(AppEvent::Tick)));
    }
}
