//! Runtime configuration for CREATE2 salt mining.

use clap::Parser;

use crate::matcher::{Suffix, SuffixError};

/// Suffix searched for when none is given on the command line.
pub const DEFAULT_SUFFIX: &str = "2400";

/// CREATE2 Salt Miner
///
/// Searches random 32-byte salts until sha3_256(0xff || deployer || salt || bytecode_hash)[12..32]
/// ends with the desired hex suffix.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Deployer address: 20 bytes as 40 hex chars, no 0x prefix
    #[arg(value_name = "DEPLOYER_ADDRESS_HEX")]
    pub deployer: String,

    /// Contract bytecode hash: 32 bytes as 64 hex chars, no 0x prefix
    #[arg(value_name = "BYTECODE_HASH_HEX")]
    pub bytecode_hash: String,

    /// Hex suffix the derived address must end with (case insensitive)
    #[arg(value_name = "DESIRED_SUFFIX", default_value = DEFAULT_SUFFIX)]
    pub suffix: String,

    /// Number of worker threads (default: number of CPU cores)
    #[arg(short = 'w', long)]
    pub workers: Option<usize>,

    /// Progress report interval in seconds
    #[arg(short = 'r', long, default_value = "5")]
    pub report_interval: u64,

    /// Recompute the address for a known salt (64 hex chars) instead of searching
    #[arg(short = 's', long, value_name = "SALT_HEX")]
    pub check_salt: Option<String>,
}

impl Config {
    /// Returns the number of workers, defaulting to CPU count.
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get)
    }

    /// Validates every option and decodes the search inputs.
    pub fn resolve(&self) -> Result<SearchParams, ConfigError> {
        if self.worker_count() == 0 {
            return Err(ConfigError::InvalidWorkers);
        }
        if self.report_interval == 0 {
            return Err(ConfigError::InvalidReportInterval);
        }
        SearchParams::from_hex(&self.deployer, &self.bytecode_hash, &self.suffix)
    }

    /// Decodes `--check-salt`, if given.
    pub fn salt_to_check(&self) -> Result<Option<[u8; 32]>, ConfigError> {
        self.check_salt
            .as_deref()
            .map(|salt| decode_fixed::<32>("salt", salt))
            .transpose()
    }
}

/// Validated, immutable inputs shared read-only by every worker.
#[derive(Debug, Clone)]
pub struct SearchParams {
    pub deployer: [u8; 20],
    pub bytecode_hash: [u8; 32],
    pub suffix: Suffix,
}

impl SearchParams {
    /// Decodes hex arguments as given on the command line (no 0x prefix).
    pub fn from_hex(deployer: &str, bytecode_hash: &str, suffix: &str) -> Result<Self, ConfigError> {
        let deployer = decode_fixed::<20>("deployer address", deployer)?;
        let bytecode_hash = decode_fixed::<32>("bytecode hash", bytecode_hash)?;
        let suffix = Suffix::parse(suffix)?;
        Ok(Self {
            deployer,
            bytecode_hash,
            suffix,
        })
    }
}

fn decode_fixed<const N: usize>(field: &'static str, hex_str: &str) -> Result<[u8; N], ConfigError> {
    if hex_str.len() != N * 2 {
        return Err(ConfigError::InvalidLength {
            field,
            expected: N * 2,
            actual: hex_str.len(),
        });
    }
    let mut out = [0u8; N];
    hex::decode_to_slice(hex_str, &mut out)
        .map_err(|source| ConfigError::MalformedHex { field, source })?;
    Ok(out)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be {expected} hex chars, got {actual}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("{field} is not valid hex: {source}")]
    MalformedHex {
        field: &'static str,
        #[source]
        source: hex::FromHexError,
    },
    #[error("Invalid suffix: {0}")]
    InvalidSuffix(#[from] SuffixError),
    #[error("worker count must be at least 1")]
    InvalidWorkers,
    #[error("report interval must be at least 1 second")]
    InvalidReportInterval,
}
