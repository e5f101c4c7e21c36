//! Background worker running searches off the UI thread.

use marquee_core::{Movie, SearchProvider, SearchRequest};
use std::sync::mpsc::{Receiver, Sender};

pub enum WorkerCommand {
    Search(SearchRequest),
    Quit,
}

pub enum WorkerEvent {
    SearchResults {
        id: u64,
        outcome: marquee_core::Result<Vec<Movie>>,
    },
}

pub fn start_worker(
    provider: Box<dyn SearchProvider>,
    cmd_rx: Receiver<WorkerCommand>,
    evt_tx: Sender<WorkerEvent>,
) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || worker_loop(provider.as_ref(), cmd_rx, evt_tx))
}

fn worker_loop(
    provider: &dyn SearchProvider,
    cmd_rx: Receiver<WorkerCommand>,
    evt_tx: Sender<WorkerEvent>,
) {
    loop {
        let mut pending = match cmd_rx.recv() {
            Ok(WorkerCommand::Search(request)) => request,
            Ok(WorkerCommand::Quit) | Err(_) => break,
        };

        // Coalesce bursts: keep only the latest search request.
        while let Ok(cmd) = cmd_rx.try_recv() {
            match cmd {
                WorkerCommand::Search(request) => {
                    tracing::debug!(skipped = pending.id, "Superseded queued search");
                    pending = request;
                }
                WorkerCommand::Quit => return,
            }
        }

        let outcome = provider.search(&pending);
        if evt_tx
            .send(WorkerEvent::SearchResults {
                id: pending.id,
                outcome,
            })
            .is_err()
        {
            break;
        }
    }

    tracing::debug!("Search worker stopped");
}
