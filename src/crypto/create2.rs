//! Deployment address computation.
//!
//! Preimage layout: 0xff (1) || deployer (20) || salt (32) || bytecode_hash (32) = 85 bytes.
//! Address = sha3_256(preimage)[12..32].

use crate::crypto::sha3_256;

/// Length of the hashed preimage in bytes.
pub const PREIMAGE_LEN: usize = 1 + 20 + 32 + 32;

const SALT_RANGE: std::ops::Range<usize> = 21..53;

/// Computes the derived 20-byte address for a single salt.
pub fn derive_address(deployer: &[u8; 20], salt: &[u8; 32], bytecode_hash: &[u8; 32]) -> [u8; 20] {
    Create2Preimage::new(deployer, bytecode_hash).derive(salt)
}

/// Preimage buffer with the fixed fields filled in once.
///
/// Workers keep one of these for their whole run and only overwrite the salt
/// field per attempt.
#[derive(Clone)]
pub struct Create2Preimage {
    buf: [u8; PREIMAGE_LEN],
}

impl Create2Preimage {
    pub fn new(deployer: &[u8; 20], bytecode_hash: &[u8; 32]) -> Self {
        let mut buf = [0u8; PREIMAGE_LEN];
        buf[0] = 0xff;
        buf[1..21].copy_from_slice(deployer);
        buf[53..85].copy_from_slice(bytecode_hash);
        Self { buf }
    }

    /// Writes `salt` into the preimage and returns the derived address.
    #[inline]
    pub fn derive(&mut self, salt: &[u8; 32]) -> [u8; 20] {
        self.buf[SALT_RANGE].copy_from_slice(salt);
        let hash = sha3_256(&self.buf);
        let mut addr = [0u8; 20];
        addr.copy_from_slice(&hash[12..32]);
        addr
    }

    pub fn as_bytes(&self) -> &[u8; PREIMAGE_LEN] {
        &self.buf
    }
}
