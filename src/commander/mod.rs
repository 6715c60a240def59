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

//! Command-line input logic and state management.
//!
//! This module implements the `:` command line. It owns a text input while
//! active and dispatches the corresponding application event when a command
//! is submitted.
//!
//! | command | effect |
//! |---|---|
//! | `q`, `quit` | exit |
//! | `stop` | stop playback |
//! | `reload` | remount the browser and fetch the catalog again |
//! | `play <name>` | play the loaded cassette with that name |

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::events::AppEvent;

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Offers a terminal event to the command line.
    ///
    /// Returns `true` if the event was consumed, which is every key event
    /// while the command line is open, plus the `:` that opens it.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return Ok(true);
            }
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Esc => {
                self.input.reset();
                self.active = false;
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.input.reset();
                self.active = false;
                self.run_command(&buffer, event_tx)?;
            }

            _ => {
                // Delegate everything else to the managed input component.
                self.input.handle_event(event);
            }
        }

        Ok(true)
    }

    fn run_command(&self, buffer: &str, event_tx: &Sender<AppEvent>) -> Result<()> {
        let parts: Vec<&str> = buffer.split_whitespace().collect();

        match parts.as_slice() {
            [] => {}

            ["q"] | ["quit"] => event_tx.send(AppEvent::ExitApplication)?,

            ["stop"] => event_tx.send(AppEvent::Stop)?,

            ["reload"] => event_tx.send(AppEvent::Reload)?,

            ["play", name_parts @ ..] if !name_parts.is_empty() => {
                event_tx.send(AppEvent::PlayNamed(name_parts.join(" ")))?
            }

            ["play"] => event_tx.send(AppEvent::Notify("Usage: play <name>".to_string()))?,

            _ => event_tx.send(AppEvent::Notify(format!("Unknown command: {}", buffer)))?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn submit(text: &str) -> AppEvent {
        let (event_tx, event_rx) = mpsc::channel();
        let mut commander = Commander::new();

        assert!(commander.handle_event(&key(KeyCode::Char(':')), &event_tx).unwrap());
        for c in text.chars() {
            assert!(commander.handle_event(&key(KeyCode::Char(c)), &event_tx).unwrap());
        }
        assert!(commander.handle_event(&key(KeyCode::Enter), &event_tx).unwrap());

        event_rx.try_recv().unwrap()
    }

    #[test]
    fn inactive_commander_ignores_keys() {
        let (event_tx, _event_rx) = mpsc::channel();
        let mut commander = Commander::new();
        assert!(!commander.handle_event(&key(KeyCode::Char('s')), &event_tx).unwrap());
    }

    #[test]
    fn play_joins_the_name() {
        assert!(matches!(submit("play Nero Tape"), AppEvent::PlayNamed(name) if name == "Nero Tape"));
    }

    #[test]
    fn known_commands() {
        assert!(matches!(submit("quit"), AppEvent::ExitApplication));
        assert!(matches!(submit("stop"), AppEvent::Stop));
        assert!(matches!(submit("reload"), AppEvent::Reload));
    }

    #[test]
    fn unknown_commands_are_reported() {
        assert!(matches!(submit("rewind"), AppEvent::Notify(m) if m == "Unknown command: rewind"));
        assert!(matches!(submit("play"), AppEvent::Notify(m) if m == "Usage: play <name>"));
    }

    #[test]
    fn escape_closes_without_running() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut commander = Commander::new();

        commander.handle_event(&key(KeyCode::Char(':')), &event_tx).unwrap();
        commander.handle_event(&key(KeyCode::Char('q')), &event_tx).unwrap();
        commander.handle_event(&key(KeyCode::Esc), &event_tx).unwrap();

        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");
        assert!(event_rx.try_recv().is_err());
    }
}
