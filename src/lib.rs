//! # salt_vanity
//!
//! CREATE2 salt miner. Draws random 32-byte salts until the derived
//! deployment address ends with a desired hex suffix.
//!
//! Address = sha3_256(0xff || deployer || salt || bytecodeHash)[12..32].
//!
//! ## Architecture
//!
//! - `crypto`: hashing and address derivation
//! - `matcher`: suffix matching
//! - `worker`: stop flag, CPU workers and the pool that races them
//! - `config`: CLI options and validated search inputs

pub mod config;
pub mod crypto;
pub mod matcher;
pub mod worker;

pub use config::{Config, ConfigError, SearchParams};
pub use crypto::create2::{derive_address, Create2Preimage};
pub use matcher::{suffix_matches, Address, MatchResult, Suffix};
pub use worker::{SaltMatch, StopFlag, WorkerPool};
