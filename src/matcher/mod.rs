//! Suffix matching for 20-byte derived addresses (hex nibbles).

mod suffix;

pub use suffix::{suffix_matches, Address, MatchResult, Suffix, SuffixError, ADDRESS_HEX_LEN};
