//! Scan command implementation.

use std::path::PathBuf;

use anyhow::Result;
use fvextract_core::{TracingReporter, format_offset, locate_image, scan_image};

use super::directory_source;

/// Run the scan command: list signature offsets without writing any blocks
pub fn run(dir: Option<PathBuf>, json: bool) -> Result<()> {
    let image = locate_image(directory_source(dir).as_ref())?;
    let offsets = scan_image(&image, &TracingReporter)?;
    let formatted: Vec<String> = offsets.iter().map(|&o| format_offset(o)).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&formatted)?);
        return Ok(());
    }

    println!("Image: {}", image.display());
    if formatted.is_empty() {
        println!("No FVE metadata signatures found");
    } else {
        for (i, offset) in formatted.iter().enumerate() {
            println!("  [{:02}] {}", i, offset);
        }
        println!("Found {} signature(s)", formatted.len());
    }

    Ok(())
}
