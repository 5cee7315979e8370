//! Strided signature scanner for disk images

mod constants;

use std::fs::File;
use std::io::{ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;

use crate::error::Result;
use crate::report::ScanReporter;

pub use constants::*;

/// Scan an image file for FVE metadata signatures.
///
/// Returns the matched offsets in ascending order.
pub fn scan_image<P: AsRef<Path>>(path: P, reporter: &dyn ScanReporter) -> Result<Vec<u64>> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let len = file.metadata()?.len();

    reporter.scan_started(path, len);
    scan_reader(&mut file, len, reporter)
}

/// Scan `len` bytes of `reader`, probing every `SCAN_STRIDE` bytes from offset 0.
pub fn scan_reader<R: Read + Seek>(
    reader: &mut R,
    len: u64,
    reporter: &dyn ScanReporter,
) -> Result<Vec<u64>> {
    let mut offsets = Vec::new();
    let mut window = [0u8; FVE_SIGNATURE.len()];
    let mut offset = 0u64;

    while offset < len {
        reader.seek(SeekFrom::Start(offset))?;
        let filled = read_up_to(reader, &mut window)?;

        // A short read near EOF never matches
        if filled == window.len() && &window == FVE_SIGNATURE {
            reporter.signature_found(offset);
            offsets.push(offset);
        }

        offset = match next_probe(offset) {
            Some(next) => next,
            None => break,
        };
    }

    reporter.scan_finished(offsets.len());
    Ok(offsets)
}

/// Next probe position, or `None` once the offset range is exhausted
fn next_probe(offset: u64) -> Option<u64> {
    offset.checked_add(SCAN_STRIDE)
}

/// Fill `buf` from `reader` until it is full or EOF is reached.
///
/// Returns the number of bytes read.
pub(crate) fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}
