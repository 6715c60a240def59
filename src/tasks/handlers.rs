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
use log::{debug, info, warn};

use crate::{events::AppEvent, model::mount::MountToken, tasks::TaskContext};

pub(super) fn load_catalog(ctx: &TaskContext, token: MountToken) -> Result<()> {
    info!("Loading catalog for mount {}", token.id());
    let result = ctx.api.fetch_catalog();

    if token.is_cancelled() {
        debug!("Mount {} ended before its catalog arrived", token.id());
        return Ok(());
    }

    ctx.event_tx.send(AppEvent::CatalogLoaded {
        mount_id: token.id(),
        result,
    })?;

    Ok(())
}

pub(super) fn play(ctx: &TaskContext, uuid: String) -> Result<()> {
    info!("Playing {}", uuid);
    if let Err(e) = ctx.api.play(&uuid) {
        warn!("Play request for {} failed: {}", uuid, e);
        ctx.event_tx
            .send(AppEvent::ActionFailed(format!("Play failed: {}", e)))?;
    }

    Ok(())
}

pub(super) fn stop(ctx: &TaskContext) -> Result<()> {
    info!("Stopping playback");
    if let Err(e) = ctx.api.stop() {
        warn!("Stop request failed: {}", e);
        ctx.event_tx
            .send(AppEvent::ActionFailed(format!("Stop failed: {}", e)))?;
    }

    Ok(())
}

pub(super) fn open_link(ctx: &TaskContext, url: String) -> Result<()> {
    debug!("Opening {}", url);
    if let Err(e) = (ctx.link_opener)(&url) {
        warn!("Opening {} failed: {}", url, e);
        ctx.event_tx
            .send(AppEvent::ActionFailed(format!("Could not open {}: {}", url, e)))?;
    }

    Ok(())
}
