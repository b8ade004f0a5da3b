//! CREATE2-style address derivation.
//!
//! - address = sha3_256(0xff || deployer || salt || bytecodeHash)[12..32]  [85 bytes -> 20 bytes]

pub mod create2;

pub use create2::{derive_address, Create2Preimage, PREIMAGE_LEN};
use tiny_keccak::{Hasher, Sha3};

/// SHA3-256 (FIPS 202) of arbitrary bytes (output 32 bytes).
pub fn sha3_256(input: &[u8]) -> [u8; 32] {
    let mut hasher = Sha3::v256();
    hasher.update(input);
    let mut out = [0u8; 32];
    hasher.finalize(&mut out);
    out
}
