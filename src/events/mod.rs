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

//! Application event definitions and the main event loop.
//!
//! Every state change in the application is driven by an [`AppEvent`]
//! arriving on the event channel: key presses from the input thread, ticks
//! from the tick thread, and results from the task worker. Only the main
//! thread mutates application state, and it redraws after every event.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::*;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, api::ApiError, model::Catalog, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Tick,

    CatalogLoaded {
        mount_id: u64,
        result: Result<Catalog, ApiError>,
    },
    ActionFailed(String),

    Reload,
    Stop,
    PlayNamed(String),
    Notify(String),

    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}

fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::Tick => handle_tick(app),
        AppEvent::CatalogLoaded { mount_id, result } => {
            handle_catalog_loaded(app, mount_id, result)
        }
        AppEvent::ActionFailed(message) => handle_action_failed(app, message),
        AppEvent::Reload => handle_reload(app)?,
        AppEvent::Stop => handle_stop(app)?,
        AppEvent::PlayNamed(name) => handle_play_named(app, name)?,
        AppEvent::Notify(message) => handle_notify(app, message),
        AppEvent::ExitApplication => {}
    }
    Ok(())
}
