//! On-disk constants for FVE metadata detection
//!
//! # Scan Layout
//!
//! ```text
//!  offset 0x0000       0x1000       0x2000       0x3000
//!         │            │            │            │
//!         ▼            ▼            ▼            ▼
//!         [-FVE-FS-]...[--------]...[-FVE-FS-]...
//!         └──────── BLOCK_SIZE (0x4000) ────────┘
//! ```
//!
//! Only the first `FVE_SIGNATURE.len()` bytes at each stride boundary are
//! compared. A signature that does not start on a boundary is never reported.

/// Signature at the start of an FVE metadata block
pub const FVE_SIGNATURE: &[u8; 8] = b"-FVE-FS-";

/// Distance between successive signature probes (4KB)
pub const SCAN_STRIDE: u64 = 0x1000;

/// Bytes extracted per matched offset (16KB)
pub const BLOCK_SIZE: usize = 0x4000;

/// File extension of raw disk images, without the dot
pub const IMAGE_EXTENSION: &str = "dd";
