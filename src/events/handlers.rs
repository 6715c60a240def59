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
use log::info;

use crate::{
    App,
    api::ApiError,
    components::BrowserState,
    model::Catalog,
    tasks::AppTask,
};

pub(super) fn handle_tick(app: &mut App) {
    app.status.tick();
}

pub(super) fn handle_catalog_loaded(
    app: &mut App,
    mount_id: u64,
    result: Result<Catalog, ApiError>,
) {
    app.browser.apply_catalog(mount_id, result);
}

pub(super) fn handle_action_failed(app: &mut App, message: String) {
    app.status.notify(message);
}

pub(super) fn handle_notify(app: &mut App, message: String) {
    app.status.notify(message);
}

pub(super) fn handle_reload(app: &mut App) -> Result<()> {
    let token = app.browser.remount();
    info!("Remounted browser as mount {}", token.id());
    app.task_tx.send(AppTask::LoadCatalog(token))?;

    Ok(())
}

pub(super) fn handle_stop(app: &mut App) -> Result<()> {
    app.task_tx.send(AppTask::Stop)?;

    Ok(())
}

pub(super) fn handle_play_named(app: &mut App, name: String) -> Result<()> {
    if app.browser.state() != &BrowserState::Loaded {
        app.status.notify("The catalog has not loaded".to_string());
        return Ok(());
    }

    match app.browser.find_by_name(&name) {
        Some(cassette) => app.task_tx.send(AppTask::Play(cassette.uuid.clone()))?,
        None => app.status.notify(format!("No cassette named {}", name)),
    }

    Ok(())
}
