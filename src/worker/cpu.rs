//! CPU worker for salt mining.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crossbeam_channel::Sender;
use log::debug;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::config::SearchParams;
use crate::crypto::Create2Preimage;
use crate::matcher::{Address, Suffix};

use super::{SaltMatch, StopFlag};

/// Counters shared by all workers of a pool.
#[derive(Debug, Default)]
pub struct WorkerStats {
    pub salts_tried: AtomicU64,
    pub matches_found: AtomicU64,
}

impl WorkerStats {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn total_salts(&self) -> u64 {
        self.salts_tried.load(Ordering::Relaxed)
    }
    pub fn total_matches(&self) -> u64 {
        self.matches_found.load(Ordering::Relaxed)
    }
}

/// Why a worker left its loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerExit {
    /// This worker claimed the flag and published its match.
    Won,
    /// The flag was raised by someone else.
    Stopped,
}

pub struct CpuWorker {
    id: usize,
    suffix: Suffix,
    preimage: Create2Preimage,
    rng: StdRng,
    result_tx: Sender<SaltMatch>,
    stop_flag: Arc<StopFlag>,
    stats: Arc<WorkerStats>,
}

impl CpuWorker {
    /// Creates a worker with its own generator seeded from OS entropy.
    pub fn new(
        id: usize,
        params: &SearchParams,
        result_tx: Sender<SaltMatch>,
        stop_flag: Arc<StopFlag>,
        stats: Arc<WorkerStats>,
    ) -> Self {
        Self::with_rng(id, params, StdRng::from_entropy(), result_tx, stop_flag, stats)
    }

    pub fn with_rng(
        id: usize,
        params: &SearchParams,
        rng: StdRng,
        result_tx: Sender<SaltMatch>,
        stop_flag: Arc<StopFlag>,
        stats: Arc<WorkerStats>,
    ) -> Self {
        Self {
            id,
            suffix: params.suffix.clone(),
            preimage: Create2Preimage::new(&params.deployer, &params.bytecode_hash),
            rng,
            result_tx,
            stop_flag,
            stats,
        }
    }

    /// Runs the search loop until this worker wins or the stop flag is raised.
    ///
    /// The flag is checked before every attempt. No sleep or yield: hashing
    /// is pure CPU work and the OS scheduler preempts between attempts.
    pub fn run(mut self) -> WorkerExit {
        const BATCH_SIZE: u64 = 1000;

        debug!("worker {} started", self.id);
        let mut salt = [0u8; 32];
        let mut pending = 0u64;

        let exit = loop {
            if self.stop_flag.is_raised() {
                break WorkerExit::Stopped;
            }

            self.rng.fill_bytes(&mut salt);
            let address = Address::from_bytes(self.preimage.derive(&salt));
            pending += 1;

            if self.suffix.matches(&address).is_match() {
                if !self.stop_flag.try_claim() {
                    break WorkerExit::Stopped;
                }
                self.stats.matches_found.fetch_add(1, Ordering::Relaxed);
                debug!("worker {} claimed match {}", self.id, address);
                let _ = self.result_tx.send(SaltMatch {
                    salt,
                    address: *address.as_bytes(),
                    worker_id: self.id,
                });
                break WorkerExit::Won;
            }

            if pending == BATCH_SIZE {
                self.stats.salts_tried.fetch_add(BATCH_SIZE, Ordering::Relaxed);
                pending = 0;
            }
        };

        self.stats.salts_tried.fetch_add(pending, Ordering::Relaxed);
        debug!("worker {} exiting ({:?})", self.id, exit);
        exit
    }
}
