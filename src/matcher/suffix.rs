//! Trailing-nibble matching for derived addresses.

use std::fmt;

/// Number of hex characters in a rendered address.
pub const ADDRESS_HEX_LEN: usize = 40;

/// A 20-byte derived address.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address(pub [u8; 20]);

impl Address {
    #[inline]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Lowercase hex (no 0x).
    #[inline]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Match,
    NoMatch,
}

impl MatchResult {
    #[inline]
    pub fn is_match(self) -> bool {
        matches!(self, MatchResult::Match)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SuffixError {
    #[error("suffix cannot be empty")]
    Empty,
    #[error("suffix must contain only hex characters (0-9, a-f), got {0:?}")]
    NonHex(String),
    #[error("suffix cannot be longer than 40 characters (got {0})")]
    TooLong(usize),
}

/// The target suffix, lowercased and pre-parsed into nibbles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suffix {
    hex: String,
    nibbles: Vec<u8>,
}

fn hex_to_nibbles(hex: &str) -> Vec<u8> {
    hex.bytes()
        .map(|b| match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            b'A'..=b'F' => b - b'A' + 10,
            _ => 0,
        })
        .collect()
}

/// Convert 20-byte address to 40 nibbles on the stack (no heap allocation).
#[inline]
fn addr_to_nibbles(bytes: &[u8; 20]) -> [u8; ADDRESS_HEX_LEN] {
    let mut nibbles = [0u8; ADDRESS_HEX_LEN];
    for (i, b) in bytes.iter().enumerate() {
        nibbles[i * 2] = b >> 4;
        nibbles[i * 2 + 1] = b & 0x0f;
    }
    nibbles
}

#[inline]
fn nibbles_end_with(haystack: &[u8; ADDRESS_HEX_LEN], needle: &[u8]) -> bool {
    needle.len() <= ADDRESS_HEX_LEN && haystack[ADDRESS_HEX_LEN - needle.len()..] == *needle
}

impl Suffix {
    /// Parses and normalizes a suffix. Rejects empty, non-hex and over-long input.
    pub fn parse(suffix: &str) -> Result<Self, SuffixError> {
        if suffix.is_empty() {
            return Err(SuffixError::Empty);
        }
        if !suffix.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SuffixError::NonHex(suffix.to_string()));
        }
        if suffix.len() > ADDRESS_HEX_LEN {
            return Err(SuffixError::TooLong(suffix.len()));
        }
        let hex = suffix.to_ascii_lowercase();
        let nibbles = hex_to_nibbles(&hex);
        Ok(Self { hex, nibbles })
    }

    pub fn as_str(&self) -> &str {
        &self.hex
    }

    /// Zero-allocation match on raw address bytes.
    ///
    /// Equivalent to `suffix_matches(&address.to_hex(), self.as_str())`.
    #[inline]
    pub fn matches(&self, address: &Address) -> MatchResult {
        let nibbles = addr_to_nibbles(address.as_bytes());
        if nibbles_end_with(&nibbles, &self.nibbles) {
            MatchResult::Match
        } else {
            MatchResult::NoMatch
        }
    }

    pub fn estimated_difficulty(&self) -> u64 {
        16u64.saturating_pow(self.nibbles.len() as u32)
    }

    pub fn difficulty_description(&self) -> String {
        let d = self.estimated_difficulty();
        match d {
            0..=1_000 => "Very Easy (< 1 second)".into(),
            1_001..=100_000 => "Easy (seconds)".into(),
            100_001..=10_000_000 => "Medium (minutes)".into(),
            10_000_001..=1_000_000_000 => "Hard (hours)".into(),
            _ => "Very Hard (days or more)".into(),
        }
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

/// String-level success predicate: true iff the trailing `suffix.len()`
/// characters of `address_hex` equal `suffix`, both compared in lowercase.
/// A suffix longer than the address never matches.
pub fn suffix_matches(address_hex: &str, suffix: &str) -> bool {
    if suffix.len() > address_hex.len() {
        return false;
    }
    address_hex.as_bytes()[address_hex.len() - suffix.len()..]
        .iter()
        .zip(suffix.as_bytes())
        .all(|(a, s)| a.to_ascii_lowercase() == s.to_ascii_lowercase())
}
