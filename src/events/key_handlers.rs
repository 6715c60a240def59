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

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::{App, components::BrowserAction, events::AppEvent, tasks::AppTask};

/// Maps keyboard input to application actions.
///
/// Keys are offered, in order, to the command line, the browser view, and
/// finally the global bindings:
///
/// * **Application Control**: `q` quits, `r` reloads the catalog.
/// * **Playback**: handled by the browser, which turns play and stop into
///   tasks for the worker.
///
/// # Errors
///
/// Returns an error if a task or event cannot be queued, which only happens
/// once the receiving side has shut down.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);

    if app.commander.handle_event(&event, &app.event_tx)? {
        return Ok(());
    }

    if let Some(action) = app.browser.process_event(&event) {
        let task = match action {
            BrowserAction::Play(uuid) => AppTask::Play(uuid),
            BrowserAction::Stop => AppTask::Stop,
            BrowserAction::OpenLink(url) => AppTask::OpenLink(url),
        };
        app.task_tx.send(task)?;
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE)
        | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        (KeyCode::Char('r'), KeyModifiers::NONE) => {
            app.event_tx.send(AppEvent::Reload)?;
        }

        _ => {}
    }

    Ok(())
}
