//! Dedicated search worker
//!
//! The combination search is the only part of the engine expensive enough
//! to move off the interactive thread. The worker owns one OS thread and
//! communicates purely by message passing: a request carries a fully
//! self-contained snapshot, the response comes back on a per-request
//! channel. Dropping the response receiver abandons that request;
//! dropping the worker handle shuts the thread down.

use crate::core::config::ForgeSettings;
use crate::core::error::{ForgeError, Result};
use crate::optimizer::objective::Objective;
use crate::optimizer::process::SlotCandidates;
use crate::optimizer::search::{search, SearchOutcome};
use crate::stats::StatVector;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread::JoinHandle;

/// Self-contained search snapshot
///
/// Owns everything the search reads; nothing here aliases caller state,
/// so a request can never observe a pool mutated mid-run.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub candidates: SlotCandidates,
    pub deltas: StatVector,
    pub objective: Objective,
    pub settings: ForgeSettings,
}

struct Job {
    request: SearchRequest,
    reply: Sender<SearchOutcome>,
}

/// Handle to the search thread
pub struct SearchWorker {
    tx: Option<Sender<Job>>,
    handle: Option<JoinHandle<()>>,
}

impl SearchWorker {
    /// Spawn the worker thread
    pub fn spawn() -> Result<Self> {
        let (tx, rx) = channel::<Job>();
        let handle = std::thread::Builder::new()
            .name("loadout-search".to_string())
            .spawn(move || {
                while let Ok(job) = rx.recv() {
                    let outcome = search(
                        &job.request.candidates,
                        &job.request.deltas,
                        &job.request.objective,
                        &job.request.settings,
                    );
                    // A closed reply channel means the caller abandoned
                    // this request; the outcome is simply discarded.
                    if job.reply.send(outcome).is_err() {
                        tracing::debug!("search request abandoned by caller");
                    }
                }
                tracing::debug!("search worker shutting down");
            })?;
        Ok(Self { tx: Some(tx), handle: Some(handle) })
    }

    /// Submit a search; the single response arrives on the returned
    /// receiver
    pub fn submit(&self, request: SearchRequest) -> Result<Receiver<SearchOutcome>> {
        let (reply, rx) = channel();
        let tx = self.tx.as_ref().ok_or(ForgeError::WorkerGone)?;
        tx.send(Job { request, reply }).map_err(|_| ForgeError::WorkerGone)?;
        Ok(rx)
    }
}

impl Drop for SearchWorker {
    fn drop(&mut self) {
        // Closing the job channel lets the thread drain and exit.
        self.tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
