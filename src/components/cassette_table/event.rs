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

//! Input handling for the cassette table.
//!
//! This module maps raw terminal keyboard events to cursor movement and to
//! row actions.

use crossterm::event::{Event, KeyCode, KeyModifiers};

use crate::components::{CassetteTable, CassetteTableAction};

impl CassetteTable {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<CassetteTableAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('j'), _) | (KeyCode::Down, _) => self.goto_next(),
            (KeyCode::Char('k'), _) | (KeyCode::Up, _) => self.goto_previous(),
            (KeyCode::Char('g'), _) | (KeyCode::Home, _) => self.goto_first(),
            (KeyCode::Char('G'), _) | (KeyCode::End, _) => self.goto_last(),

            (KeyCode::Char('f'), KeyModifiers::CONTROL) | (KeyCode::PageDown, _) => {
                self.goto_page_forward()
            }
            (KeyCode::Char('b'), KeyModifiers::CONTROL) | (KeyCode::PageUp, _) => {
                self.goto_page_back()
            }
            (KeyCode::Char('d'), KeyModifiers::CONTROL) => self.goto_half_page_forward(),
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => self.goto_half_page_back(),

            (KeyCode::Enter, _) | (KeyCode::Char('p'), KeyModifiers::NONE) => {
                return self
                    .current()
                    .map(|c| CassetteTableAction::Play(c.uuid.clone()));
            }

            (KeyCode::Char('o'), KeyModifiers::NONE) => {
                return self
                    .current()
                    .map(|c| CassetteTableAction::OpenLink(c.url.clone()));
            }

            _ => {}
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEvent;

    use super::*;
    use crate::model::cassette;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn table() -> CassetteTable {
        let mut table = CassetteTable::new();
        table.set_rows(vec![
            cassette("u1", "One", "2022-01-01T00:00:00Z"),
            cassette("u2", "Two", "2021-01-01T00:00:00Z"),
        ]);
        table
    }

    #[test]
    fn enter_plays_the_cursor_row() {
        let mut table = table();
        assert_eq!(
            table.process_event(&key(KeyCode::Enter)),
            Some(CassetteTableAction::Play("u1".into()))
        );

        assert_eq!(table.process_event(&key(KeyCode::Char('j'))), None);
        assert_eq!(
            table.process_event(&key(KeyCode::Char('p'))),
            Some(CassetteTableAction::Play("u2".into()))
        );
    }

    #[test]
    fn o_opens_the_link() {
        let mut table = table();
        assert_eq!(
            table.process_event(&key(KeyCode::Char('o'))),
            Some(CassetteTableAction::OpenLink("http://example.com/u1".into()))
        );
    }

    #[test]
    fn empty_table_has_no_actions() {
        let mut table = CassetteTable::new();
        assert_eq!(table.process_event(&key(KeyCode::Enter)), None);
    }
}
