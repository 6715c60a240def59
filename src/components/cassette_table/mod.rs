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

//! Interactive cassette table widget and state management.
//!
//! This module provides the table listing the loaded catalog, one row per
//! cassette, with a row cursor. The table does not talk to the server itself:
//! activating a row yields a [`CassetteTableAction`] for the owning view to
//! act upon.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::model::Cassette;

// Rows visible before the first render tells us the real height.
const DEFAULT_PAGE_ROWS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CassetteTableAction {
    Play(String),
    OpenLink(String),
}

pub(crate) struct CassetteTable {
    rows: Vec<Cassette>,
    table_state: TableState,
    page_rows: usize,
}

impl CassetteTable {
    pub(crate) fn new() -> Self {
        Self {
            rows: vec![],
            table_state: TableState::new(),
            page_rows: DEFAULT_PAGE_ROWS,
        }
    }

    /// Replaces the rows, which must already be in display order, and puts
    /// the cursor on the first row.
    pub(crate) fn set_rows(&mut self, rows: Vec<Cassette>) {
        self.rows = rows;
        self.table_state = TableState::new();
        if !self.rows.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    pub(crate) fn clear(&mut self) {
        self.set_rows(vec![]);
    }

    pub(crate) fn rows(&self) -> &[Cassette] {
        &self.rows
    }

    pub(crate) fn current(&self) -> Option<&Cassette> {
        self.table_state.selected().and_then(|i| self.rows.get(i))
    }

    fn goto_next(&mut self) {
        let len = self.rows.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.rows.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i > 0 && i < len => i - 1,
            _ => len - 1,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.rows.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if !self.rows.is_empty() {
            self.table_state.select(Some(self.rows.len() - 1));
        }
    }

    // Paging clamps at either end rather than wrapping.
    fn move_by(&mut self, delta: isize) {
        let len = self.rows.len();
        if len == 0 {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0) as isize;
        let target = (current + delta).clamp(0, len as isize - 1);
        self.table_state.select(Some(target as usize));
    }

    fn goto_page_forward(&mut self) {
        self.move_by(self.page_rows as isize);
    }

    fn goto_page_back(&mut self) {
        self.move_by(-(self.page_rows as isize));
    }

    fn goto_half_page_forward(&mut self) {
        self.move_by((self.page_rows / 2).max(1) as isize);
    }

    fn goto_half_page_back(&mut self) {
        self.move_by(-((self.page_rows / 2).max(1) as isize));
    }
}
