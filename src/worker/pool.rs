//! Worker pool for salt mining.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver};
use log::{debug, warn};

use crate::config::SearchParams;

use super::cpu::{CpuWorker, WorkerExit, WorkerStats};
use super::StopFlag;

/// The winning salt and the address it derives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaltMatch {
    pub salt: [u8; 32],
    pub address: [u8; 20],
    /// Worker ID that found it.
    pub worker_id: usize,
}

impl SaltMatch {
    /// Salt as lowercase hex (no 0x).
    pub fn salt_hex(&self) -> String {
        hex::encode(self.salt)
    }

    /// Address as lowercase hex (no 0x).
    pub fn address_hex(&self) -> String {
        hex::encode(self.address)
    }
}

/// Owns the workers and the stop flag of one search.
///
/// At most one [`SaltMatch`] is ever published: the result channel holds a
/// single slot and only the worker that claims the [`StopFlag`] sends.
pub struct WorkerPool {
    num_workers: usize,
    handles: Option<Vec<JoinHandle<WorkerExit>>>,
    result_rx: Receiver<SaltMatch>,
    stop_flag: Arc<StopFlag>,
    stats: Arc<WorkerStats>,
    start_time: Instant,
}

impl WorkerPool {
    /// Spawns `num_workers` search threads. Workers already started are
    /// stopped and joined if a later spawn fails.
    pub fn spawn(num_workers: usize, params: &SearchParams) -> io::Result<Self> {
        let (result_tx, result_rx) = bounded(1);
        let stop_flag = Arc::new(StopFlag::new());
        let stats = Arc::new(WorkerStats::new());

        let mut handles = Vec::with_capacity(num_workers);
        for id in 0..num_workers {
            let params = params.clone();
            let result_tx = result_tx.clone();
            let worker_flag = stop_flag.clone();
            let stats = stats.clone();

            let spawned = thread::Builder::new()
                .name(format!("salt-vanity-worker-{}", id))
                .spawn(move || {
                    CpuWorker::new(id, &params, result_tx, worker_flag, stats).run()
                });

            match spawned {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    warn!("failed to spawn worker {}: {}", id, e);
                    stop_flag.raise();
                    for handle in handles {
                        let _ = handle.join();
                    }
                    return Err(e);
                }
            }
        }

        drop(result_tx);
        debug!("spawned {} workers", num_workers);

        Ok(Self {
            num_workers,
            handles: Some(handles),
            result_rx,
            stop_flag,
            stats,
            start_time: Instant::now(),
        })
    }

    /// Waits up to `timeout` for the winning result.
    pub fn wait_for_result(&self, timeout: Duration) -> Option<SaltMatch> {
        self.result_rx.recv_timeout(timeout).ok()
    }

    pub fn try_recv(&self) -> Option<SaltMatch> {
        self.result_rx.try_recv().ok()
    }

    /// Blocks until a result arrives or every worker has exited without one.
    pub fn wait(&self) -> Option<SaltMatch> {
        self.result_rx.recv().ok()
    }

    /// Raises the stop flag without publishing a result.
    pub fn stop(&self) {
        self.stop_flag.raise();
    }

    /// Stops and joins every worker, then returns a result that was claimed
    /// but not yet received, if any.
    pub fn finish(&mut self) -> Option<SaltMatch> {
        self.stop();
        if let Some(handles) = self.handles.take() {
            let winners = handles
                .into_iter()
                .filter_map(|h| h.join().ok())
                .filter(|exit| *exit == WorkerExit::Won)
                .count();
            debug!("workers joined, {} winner(s)", winners);
        }
        self.try_recv()
    }

    pub fn num_workers(&self) -> usize {
        self.num_workers
    }
    pub fn total_salts(&self) -> u64 {
        self.stats.total_salts()
    }
    pub fn total_matches(&self) -> u64 {
        self.stats.total_matches()
    }
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
    pub fn salts_per_second(&self) -> f64 {
        let t = self.elapsed().as_secs_f64();
        if t > 0.0 {
            self.total_salts() as f64 / t
        } else {
            0.0
        }
    }
    /// Shared handle for signal handlers.
    pub fn stop_flag_clone(&self) -> Arc<StopFlag> {
        self.stop_flag.clone()
    }
    pub fn is_stopped(&self) -> bool {
        self.stop_flag.is_raised()
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.stop();
        if let Some(h) = self.handles.take() {
            for handle in h {
                let _ = handle.join();
            }
        }
    }
}
