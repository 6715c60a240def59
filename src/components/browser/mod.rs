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

//! The cassette browser view.
//!
//! This is the application's root screen. Each mount of the view issues a
//! single catalog request and then settles in one of three states:
//!
//! * [`BrowserState::Loading`] until the catalog request completes.
//! * [`BrowserState::Failed`] if it failed, carrying the failure message.
//! * [`BrowserState::Loaded`] with the catalog shown in the cassette table.
//!
//! Failed and loaded are final for the mount; only a remount goes back to
//! loading. Play and stop never change the state, they are handed to the
//! caller as [`BrowserAction`]s.

mod event;
mod render;

use log::{info, warn};

use crate::{
    api::ApiError,
    components::CassetteTable,
    model::{Cassette, Catalog, display_order, mount::MountToken},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BrowserState {
    Loading,
    Failed(String),
    Loaded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BrowserAction {
    Play(String),
    Stop,
    OpenLink(String),
}

pub(crate) struct CassetteBrowser {
    state: BrowserState,
    table: CassetteTable,
    mount: MountToken,
}

impl CassetteBrowser {
    /// Creates a freshly mounted view in the loading state.
    ///
    /// The caller is expected to issue the catalog request with
    /// [`CassetteBrowser::mount_token`].
    pub(crate) fn new() -> Self {
        Self {
            state: BrowserState::Loading,
            table: CassetteTable::new(),
            mount: MountToken::new(0),
        }
    }

    pub(crate) fn state(&self) -> &BrowserState {
        &self.state
    }

    pub(crate) fn cassettes(&self) -> &[Cassette] {
        self.table.rows()
    }

    pub(crate) fn mount_token(&self) -> MountToken {
        self.mount.clone()
    }

    /// Ends the current mount. Any catalog result still in flight for it will
    /// be ignored.
    pub(crate) fn unmount(&self) {
        self.mount.cancel();
    }

    /// Unmounts and mounts the view again, returning the token for the new
    /// catalog request.
    pub(crate) fn remount(&mut self) -> MountToken {
        self.unmount();
        self.mount = MountToken::new(self.mount.id() + 1);
        self.state = BrowserState::Loading;
        self.table.clear();
        self.mount_token()
    }

    /// Applies the outcome of a catalog request.
    ///
    /// Returns `false` if the result was discarded because it belongs to a
    /// mount that has ended, or because this mount already settled.
    pub(crate) fn apply_catalog(
        &mut self,
        mount_id: u64,
        result: Result<Catalog, ApiError>,
    ) -> bool {
        if mount_id != self.mount.id() || self.mount.is_cancelled() {
            info!("Discarding catalog for stale mount {}", mount_id);
            return false;
        }
        if self.state != BrowserState::Loading {
            return false;
        }

        match result {
            Ok(catalog) => {
                info!("Loaded {} cassettes", catalog.len());
                self.table.set_rows(display_order(catalog));
                self.state = BrowserState::Loaded;
            }
            Err(e) => {
                warn!("Catalog request failed: {}", e);
                self.state = BrowserState::Failed(e.to_string());
            }
        }
        true
    }

    /// Finds a loaded cassette by name, ignoring case.
    pub(crate) fn find_by_name(&self, name: &str) -> Option<&Cassette> {
        let name = name.trim().to_lowercase();
        self.table
            .rows()
            .iter()
            .find(|c| c.name.to_lowercase() == name)
    }
}

#[cfg(test)]
pub(crate) fn loaded_browser(cassettes: Vec<Cassette>) -> CassetteBrowser {
    let mut browser = CassetteBrowser::new();
    let catalog = cassettes.into_iter().map(|c| (c.uuid.clone(), c)).collect();
    assert!(browser.apply_catalog(0, Ok(catalog)));
    browser
}
