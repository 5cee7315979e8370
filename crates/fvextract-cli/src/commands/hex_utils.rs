//! Hex offset parsing utilities.

use fvextract_core::{Error, Result};

/// Parse a hex offset string (with or without 0x prefix).
///
/// `"0x1000"`, `"0X1000"` and `"1000"` all parse to `0x1000`.
pub fn parse_hex_offset(s: &str) -> Result<u64> {
    let digits = s.trim_start_matches("0x").trim_start_matches("0X");
    u64::from_str_radix(digits, 16)
        .map_err(|e| Error::InvalidArgument(format!("Invalid hex offset '{}': {}", s, e)))
}
