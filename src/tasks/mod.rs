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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to keep blocking HTTP
//! requests off the main UI thread. A dispatcher thread receives [`AppTask`]s
//! and runs each one on its own short-lived thread, so a catalog request that
//! never returns cannot hold up a stop or play request behind it. Results are
//! broadcast back to the application as [`AppEvent`]s.
//!
//! Only actions that may block should be implemented as tasks. Everything
//! else is handled directly by events.

mod handlers;
use handlers::*;

use std::{
    io,
    sync::{
        Arc,
        mpsc::{Receiver, Sender},
    },
    thread::{self, JoinHandle},
};

use anyhow::Result;
use log::debug;

use crate::{api::CassetteApi, events::AppEvent, model::mount::MountToken};

#[derive(Debug)]
pub(crate) enum AppTask {
    LoadCatalog(MountToken),
    Play(String),
    Stop,
    OpenLink(String),
}

/// Shared resources required by task handlers.
#[derive(Clone)]
pub(crate) struct TaskContext {
    api: Arc<dyn CassetteApi>,
    event_tx: Sender<AppEvent>,
    link_opener: fn(&str) -> io::Result<()>,
}

impl TaskContext {
    pub(crate) fn new(api: Arc<dyn CassetteApi>, event_tx: Sender<AppEvent>) -> Self {
        Self {
            api,
            event_tx,
            link_opener: open_in_desktop,
        }
    }
}

fn open_in_desktop(url: &str) -> io::Result<()> {
    open::that_detached(url)
}

/// Spawns the dispatcher thread that processes application tasks.
///
/// The dispatcher ends once every task sender has been dropped.
///
/// # Arguments
///
/// * `ctx` - The resources handed to every task.
/// * `task_rx` - The receiving end of the task channel.
pub(crate) fn spawn_task_worker(ctx: TaskContext, task_rx: Receiver<AppTask>) -> JoinHandle<()> {
    thread::spawn(move || {
        while let Ok(task) = task_rx.recv() {
            let ctx = ctx.clone();
            thread::spawn(move || {
                if let Err(e) = handle_task(task, &ctx) {
                    // Only a closed event channel ends up here, i.e. shutdown.
                    debug!("Task result dropped: {:#}", e);
                }
            });
        }
    })
}

/// Orchestrates the execution of a single task.
fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::LoadCatalog(token) => load_catalog(ctx, token),
        AppTask::Play(uuid) => play(ctx, uuid),
        AppTask::Stop => stop(ctx),
        AppTask::OpenLink(url) => open_link(ctx, url),
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{Mutex, mpsc},
        time::Duration,
    };

    use super::*;
    use crate::{
        api::ApiError,
        model::{Catalog, cassette},
    };

    struct FakeApi {
        requests: Mutex<Vec<String>>,
        catalog: Result<Catalog, ApiError>,
        fail_actions: bool,
    }

    impl FakeApi {
        fn new(catalog: Result<Catalog, ApiError>) -> Self {
            Self {
                requests: Mutex::new(vec![]),
                catalog,
                fail_actions: false,
            }
        }

        fn failing() -> Self {
            Self {
                fail_actions: true,
                ..Self::new(Err(ApiError::Transport("Network down".into())))
            }
        }

        fn record(&self, path: String) -> Result<(), ApiError> {
            self.requests.lock().unwrap().push(path);
            if self.fail_actions {
                Err(ApiError::Transport("Network down".into()))
            } else {
                Ok(())
            }
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl CassetteApi for FakeApi {
        fn fetch_catalog(&self) -> Result<Catalog, ApiError> {
            self.requests.lock().unwrap().push("/api/cassettes".into());
            self.catalog.clone()
        }

        fn play(&self, uuid: &str) -> Result<(), ApiError> {
            self.record(format!("/api/play/{}", uuid))
        }

        fn stop(&self) -> Result<(), ApiError> {
            self.record("/api/stop".into())
        }
    }

    fn context(api: Arc<FakeApi>) -> (TaskContext, mpsc::Receiver<AppEvent>) {
        let (event_tx, event_rx) = mpsc::channel();
        (TaskContext::new(api, event_tx), event_rx)
    }

    fn one_cassette() -> Catalog {
        let c = cassette("a-1", "Tape A", "2021-01-01T00:00:00Z");
        [(c.uuid.clone(), c)].into_iter().collect()
    }

    #[test]
    fn catalog_result_is_tagged_with_the_mount() {
        let api = Arc::new(FakeApi::new(Ok(one_cassette())));
        let (ctx, event_rx) = context(api.clone());

        handle_task(AppTask::LoadCatalog(MountToken::new(3)), &ctx).unwrap();

        match event_rx.try_recv().unwrap() {
            AppEvent::CatalogLoaded { mount_id, result } => {
                assert_eq!(mount_id, 3);
                assert_eq!(result.unwrap().len(), 1);
            }
            other => panic!("unexpected event {:?}", other),
        }
        assert_eq!(api.requests(), vec!["/api/cassettes"]);
    }

    #[test]
    fn cancelled_mount_gets_no_catalog_event() {
        let api = Arc::new(FakeApi::new(Ok(one_cassette())));
        let (ctx, event_rx) = context(api);

        let token = MountToken::new(0);
        token.cancel();
        handle_task(AppTask::LoadCatalog(token), &ctx).unwrap();

        assert!(event_rx.try_recv().is_err());
    }

    #[test]
    fn play_and_stop_hit_their_endpoints_silently() {
        let api = Arc::new(FakeApi::new(Ok(Catalog::new())));
        let (ctx, event_rx) = context(api.clone());

        handle_task(AppTask::Play("u1".into()), &ctx).unwrap();
        handle_task(AppTask::Stop, &ctx).unwrap();

        assert_eq!(api.requests(), vec!["/api/play/u1", "/api/stop"]);
        assert!(event_rx.try_recv().is_err());
    }

    #[test]
    fn failed_actions_are_reported() {
        let api = Arc::new(FakeApi::failing());
        let (ctx, event_rx) = context(api);

        handle_task(AppTask::Stop, &ctx).unwrap();

        match event_rx.try_recv().unwrap() {
            AppEvent::ActionFailed(message) => assert_eq!(message, "Stop failed: Network down"),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn links_go_to_the_opener() {
        let api = Arc::new(FakeApi::new(Ok(Catalog::new())));
        let (mut ctx, event_rx) = context(api);
        ctx.link_opener = |_| Err(io::Error::other("no browser"));

        handle_task(AppTask::OpenLink("http://x/a".into()), &ctx).unwrap();

        match event_rx.try_recv().unwrap() {
            AppEvent::ActionFailed(message) => {
                assert_eq!(message, "Could not open http://x/a: no browser")
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn worker_runs_tasks_in_the_background() {
        let api = Arc::new(FakeApi::new(Err(ApiError::Status(500))));
        let (ctx, event_rx) = context(api);
        let (task_tx, task_rx) = mpsc::channel();

        let worker = spawn_task_worker(ctx, task_rx);
        task_tx.send(AppTask::LoadCatalog(MountToken::new(0))).unwrap();

        match event_rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            AppEvent::CatalogLoaded { result, .. } => {
                assert_eq!(result, Err(ApiError::Status(500)))
            }
            other => panic!("unexpected event {:?}", other),
        }

        drop(task_tx);
        worker.join().unwrap();
    }
}
