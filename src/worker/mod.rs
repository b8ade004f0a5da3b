//! Worker pool and CPU worker for salt mining.

mod cpu;
mod flag;
mod pool;

pub use cpu::{CpuWorker, WorkerExit, WorkerStats};
pub use flag::StopFlag;
pub use pool::{SaltMatch, WorkerPool};
