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

//! Status line notifications.
//!
//! A notification replaces the key hints for a few seconds, counted in
//! application ticks, then disappears on its own.

// 250ms per tick, so about four seconds.
const NOTIFICATION_TICKS: u32 = 16;

pub(crate) struct StatusLine {
    message: Option<String>,
    remaining_ticks: u32,
}

impl StatusLine {
    pub(crate) fn new() -> Self {
        Self {
            message: None,
            remaining_ticks: 0,
        }
    }

    pub(crate) fn notify(&mut self, message: String) {
        self.message = Some(message);
        self.remaining_ticks = NOTIFICATION_TICKS;
    }

    pub(crate) fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub(crate) fn tick(&mut self) {
        if self.message.is_none() {
            return;
        }
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        if self.remaining_ticks == 0 {
            self.message = None;
        }
    }
}
