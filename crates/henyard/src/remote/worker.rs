//! Background exchange with the decision service
//!
//! The simulation thread never waits on the network. Reports go out
//! through a capacity-1 channel with `try_send` (dropped when the worker
//! is still busy), and replies come back through a [`LatestSlot`] that
//! keeps only the newest goal update.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, SyncSender, TrySendError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use henyard_core::protocol::{GoalUpdate, StateReport};

use super::http::DecisionService;
use super::slot::LatestSlot;

/// Handle owned by the simulation thread
pub struct RemoteLink {
    outbound: Option<SyncSender<StateReport>>,
    inbound: Arc<LatestSlot<GoalUpdate>>,
    running: Arc<AtomicBool>,
    worker: Option<thread::JoinHandle<()>>,
    dropped: u64,
}

impl RemoteLink {
    /// Start the worker thread. `poll_timeout` bounds how long shutdown
    /// can take to be noticed.
    pub fn spawn<S: DecisionService>(mut service: S, poll_timeout: Duration) -> Result<Self> {
        let (tx, rx) = mpsc::sync_channel::<StateReport>(1);
        let inbound = Arc::new(LatestSlot::new());
        let running = Arc::new(AtomicBool::new(true));

        let worker_inbound = Arc::clone(&inbound);
        let worker_flag = Arc::clone(&running);

        let worker = thread::Builder::new()
            .name("henyard-remote".to_string())
            .spawn(move || {
                while worker_flag.load(Ordering::Relaxed) {
                    let report = match rx.recv_timeout(poll_timeout) {
                        Ok(report) => report,
                        Err(RecvTimeoutError::Timeout) => continue,
                        Err(RecvTimeoutError::Disconnected) => break,
                    };

                    match service.exchange(&report) {
                        Ok(Some(update)) => {
                            if worker_inbound.put(update) {
                                log::trace!("Unread goal update replaced");
                            }
                        }
                        Ok(None) => {}
                        Err(e) => log::debug!("Decision service exchange failed: {e:#}"),
                    }
                }
                log::debug!("Remote worker stopped");
            })
            .context("Failed to spawn remote worker thread")?;

        Ok(Self {
            outbound: Some(tx),
            inbound,
            running,
            worker: Some(worker),
            dropped: 0,
        })
    }

    /// Hand a report to the worker without blocking. Returns false if it
    /// was dropped because the previous one is still in flight.
    pub fn offer(&mut self, report: StateReport) -> bool {
        let Some(outbound) = &self.outbound else {
            return false;
        };

        match outbound.try_send(report) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                self.dropped += 1;
                log::debug!("Remote worker busy, dropped report for tick {}", report.tick);
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                log::warn!("Remote worker is gone, report for tick {} lost", report.tick);
                false
            }
        }
    }

    /// Newest goal update received since the last poll
    pub fn poll(&self) -> Option<GoalUpdate> {
        self.inbound.take()
    }

    /// Reports dropped because the worker was busy
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// Stop the worker and wait for it. Waits at most one poll timeout
    /// plus any exchange already in progress.
    pub fn shutdown(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        self.outbound = None;
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::warn!("Remote worker panicked");
            }
        }
    }
}

impl Drop for RemoteLink {
    fn drop(&mut self) {
        self.shutdown();
    }
}
