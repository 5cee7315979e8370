//! Metadata block extraction

use std::fs::{self, File};
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::report::{ScanReporter, serialize_hex};
use crate::scan::{BLOCK_SIZE, read_up_to};

/// One metadata block written to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DumpedBlock {
    /// Position in the scan result, starting at 0
    pub index: usize,
    /// Source offset in the image
    #[serde(serialize_with = "serialize_hex")]
    pub offset: u64,
    pub path: PathBuf,
    /// Bytes written, at most `BLOCK_SIZE`
    pub len: usize,
}

/// Output file name for the block at `index` read from `offset`
pub fn block_file_name(index: usize, offset: u64) -> String {
    format!("fve_metadata_block_{:02}_0x{:x}.bin", index, offset)
}

/// Read up to `BLOCK_SIZE` bytes starting at `offset`; shorter near EOF
pub fn read_block<R: Read + Seek>(reader: &mut R, offset: u64) -> Result<Vec<u8>> {
    reader.seek(SeekFrom::Start(offset))?;
    let mut block = vec![0u8; BLOCK_SIZE];
    let len = read_up_to(reader, &mut block)?;
    block.truncate(len);
    Ok(block)
}

/// Extract one block per offset from the image into `output_dir`.
///
/// Existing files with the same name are overwritten.
pub fn dump_blocks<P: AsRef<Path>>(
    path: P,
    offsets: &[u64],
    output_dir: &Path,
    reporter: &dyn ScanReporter,
) -> Result<Vec<DumpedBlock>> {
    let mut file = File::open(path.as_ref())?;
    let mut blocks = Vec::with_capacity(offsets.len());

    for (index, &offset) in offsets.iter().enumerate() {
        let data = read_block(&mut file, offset)?;
        let out_path = output_dir.join(block_file_name(index, offset));
        fs::write(&out_path, &data)?;

        let block = DumpedBlock {
            index,
            offset,
            path: out_path,
            len: data.len(),
        };
        reporter.block_dumped(&block);
        blocks.push(block);
    }

    Ok(blocks)
}
