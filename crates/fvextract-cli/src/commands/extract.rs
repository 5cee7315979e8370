//! Extract command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use fvextract_core::{
    ExtractionReport, TracingReporter, dump_blocks, format_offset, locate_image, scan_image,
};
use owo_colors::OwoColorize;
use tracing::{info, warn};

use super::directory_source;

/// Run the extract command: locate the image, scan it and dump every block
pub fn run(dir: Option<PathBuf>, output: &Path, report: Option<&Path>) -> Result<()> {
    let current_version = env!("CARGO_PKG_VERSION");
    println!("fvextract {} - Extract Mode", current_version);

    let image = locate_image(directory_source(dir).as_ref())?;
    let image_size = fs::metadata(&image)?.len();
    println!("Image: {} ({} bytes)", image.display(), image_size);

    let reporter = TracingReporter;
    let offsets = scan_image(&image, &reporter)?;

    let blocks = if offsets.is_empty() {
        warn!("No FVE metadata signatures found, nothing to dump");
        Vec::new()
    } else {
        fs::create_dir_all(output)?;
        info!(
            "Dumping {} block(s) to {}",
            offsets.len(),
            output.display()
        );
        dump_blocks(&image, &offsets, output, &reporter)?
    };

    println!();
    println!("=== Metadata Blocks ({} found) ===", blocks.len());
    for block in &blocks {
        println!(
            "  [{:02}] {} -> {} ({} bytes)",
            block.index,
            format_offset(block.offset).green(),
            block.path.display(),
            block.len
        );
    }
    if blocks.is_empty() {
        println!("  {}", "none".yellow());
    }

    if let Some(report_path) = report {
        ExtractionReport::new(image, image_size, offsets, blocks).save(report_path)?;
        println!("Report saved to: {}", report_path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fvextract_core::{BLOCK_SIZE, FVE_SIGNATURE};
    use tempfile::TempDir;

    fn write_image(dir: &Path, len: usize, signature_offsets: &[usize]) -> PathBuf {
        let mut image = vec![0xAAu8; len];
        for &offset in signature_offsets {
            image[offset..offset + FVE_SIGNATURE.len()].copy_from_slice(FVE_SIGNATURE);
        }
        let path = dir.join("volume.dd");
        fs::write(&path, &image).unwrap();
        path
    }

    #[test]
    fn test_extract_writes_blocks_and_report() {
        let image_dir = TempDir::new().unwrap();
        let out_dir = TempDir::new().unwrap();
        write_image(image_dir.path(), 0x9000, &[0x1000, 0x8000]);
        let report_path = out_dir.path().join("report.json");

        run(
            Some(image_dir.path().to_path_buf()),
            out_dir.path(),
            Some(&report_path),
        )
        .unwrap();

        let first = fs::read(out_dir.path().join("fve_metadata_block_00_0x1000.bin")).unwrap();
        assert_eq!(first.len(), BLOCK_SIZE);
        assert_eq!(&first[..8], FVE_SIGNATURE);

        let second = fs::read(out_dir.path().join("fve_metadata_block_01_0x8000.bin")).unwrap();
        assert_eq!(second.len(), 0x1000);

        let report: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
        assert_eq!(report["offsets"], serde_json::json!(["0x1000", "0x8000"]));
    }

    #[test]
    fn test_extract_without_signature_writes_nothing() {
        let image_dir = TempDir::new().unwrap();
        let out_dir = TempDir::new().unwrap();
        write_image(image_dir.path(), 0x3000, &[]);

        run(Some(image_dir.path().to_path_buf()), out_dir.path(), None).unwrap();

        assert_eq!(fs::read_dir(out_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_extract_missing_image_is_error() {
        let image_dir = TempDir::new().unwrap();
        let out_dir = TempDir::new().unwrap();

        let err = run(Some(image_dir.path().to_path_buf()), out_dir.path(), None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<fvextract_core::Error>(),
            Some(fvextract_core::Error::NoImageFound { .. })
        ));
    }
}
