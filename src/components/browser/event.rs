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

//! Event routing for the browser view.
//!
//! Input is only accepted once the catalog has loaded; while loading or after
//! a failure the view offers no controls.

use crossterm::event::{Event, KeyCode, KeyModifiers};

use crate::components::{BrowserAction, BrowserState, CassetteBrowser, CassetteTableAction};

impl CassetteBrowser {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<BrowserAction> {
        if self.state != BrowserState::Loaded {
            return None;
        }

        if let Event::Key(key_event) = event {
            if let (KeyCode::Char('s'), KeyModifiers::NONE) = (key_event.code, key_event.modifiers)
            {
                return Some(BrowserAction::Stop);
            }
        }

        self.table.process_event(event).map(|action| match action {
            CassetteTableAction::Play(uuid) => BrowserAction::Play(uuid),
            CassetteTableAction::OpenLink(url) => BrowserAction::OpenLink(url),
        })
    }
}
