//! JSON summary of an extraction run

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use tracing::info;

use crate::dump::DumpedBlock;
use crate::error::Result;

/// Format an image offset as lowercase hex with 0x prefix
pub fn format_offset(offset: u64) -> String {
    format!("0x{:x}", offset)
}

pub(crate) fn serialize_hex<S: Serializer>(
    offset: &u64,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_offset(*offset))
}

fn serialize_hex_list<S: Serializer>(
    offsets: &[u64],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(offsets.iter().map(|&o| format_offset(o)))
}

/// Result of scanning and dumping one image
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionReport {
    pub image: PathBuf,
    pub image_size: u64,
    pub scanned_at: DateTime<Utc>,
    #[serde(serialize_with = "serialize_hex_list")]
    pub offsets: Vec<u64>,
    pub blocks: Vec<DumpedBlock>,
}

impl ExtractionReport {
    pub fn new(
        image: PathBuf,
        image_size: u64,
        offsets: Vec<u64>,
        blocks: Vec<DumpedBlock>,
    ) -> Self {
        Self {
            image,
            image_size,
            scanned_at: Utc::now(),
            offsets,
            blocks,
        }
    }

    /// Save report to JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!("Saved extraction report to {}", path.display());
        Ok(())
    }
}
