//! Progress reporting for scan and dump phases

use std::path::Path;

use tracing::{debug, info};

use crate::dump::DumpedBlock;

/// Receives progress events from the scanner and dumper.
///
/// All methods default to no-ops so implementors only override what they need.
pub trait ScanReporter {
    fn scan_started(&self, _path: &Path, _size: u64) {}

    fn signature_found(&self, _offset: u64) {}

    fn scan_finished(&self, _count: usize) {}

    fn block_dumped(&self, _block: &DumpedBlock) {}
}

/// Reporter that discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ScanReporter for NoopReporter {}

/// Reporter that forwards events to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ScanReporter for TracingReporter {
    fn scan_started(&self, path: &Path, size: u64) {
        debug!("Scanning {} ({} bytes)", path.display(), size);
    }

    fn signature_found(&self, offset: u64) {
        info!("FVE metadata signature found at offset 0x{:x}", offset);
    }

    fn scan_finished(&self, count: usize) {
        debug!("Scan finished: {} signature(s)", count);
    }

    fn block_dumped(&self, block: &DumpedBlock) {
        info!(
            "Dumped block {} ({} bytes from 0x{:x}) to {}",
            block.index,
            block.len,
            block.offset,
            block.path.display()
        );
    }
}
