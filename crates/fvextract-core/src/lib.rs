//! # fvextract-core
//!
//! Core library for locating and extracting BitLocker FVE metadata blocks
//! from raw disk images.
//!
//! This crate provides:
//! - Disk image discovery behind a pluggable directory source
//! - Strided signature scanning for `-FVE-FS-`
//! - Extraction of fixed-size metadata blocks to individual files
//! - Progress reporting hooks and a JSON run report

pub mod dump;
pub mod error;
pub mod locate;
pub mod report;
pub mod scan;

pub use dump::{DumpedBlock, block_file_name, dump_blocks, read_block};
pub use error::{Error, Result};
pub use locate::{FixedPath, PathProvider, find_image, locate_image};
pub use report::{ExtractionReport, NoopReporter, ScanReporter, TracingReporter, format_offset};
pub use scan::{
    BLOCK_SIZE, FVE_SIGNATURE, IMAGE_EXTENSION, SCAN_STRIDE, scan_image, scan_reader,
};
