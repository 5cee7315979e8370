//! Hexdump command implementation.
//!
//! Displays raw image bytes in traditional hexdump format, useful for
//! eyeballing a metadata block before or after extraction.
//!
//! # Output Format
//!
//! ```text
//! 0x00002000: EB 58 90 2D 46 56 45 2D  46 53 2D 00 02 08 00 00  |.X.-FVE-FS-.....|
//! ```

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use anyhow::{Result, bail};

use super::hex_utils::parse_hex_offset;

/// Run the hexdump command
pub fn run(image: &Path, offset: &str, size: usize, ascii: bool) -> Result<()> {
    if size == 0 {
        bail!("Size must be greater than zero");
    }
    let offset = parse_hex_offset(offset)?;

    let mut file = File::open(image)?;
    file.seek(SeekFrom::Start(offset))?;
    // take() bounds the read; `size` may exceed what the image holds
    let mut bytes = Vec::new();
    file.take(size as u64).read_to_end(&mut bytes)?;

    println!(
        "Hexdump of {} at 0x{:X} ({} of {} bytes):",
        image.display(),
        offset,
        bytes.len(),
        size
    );
    println!();

    for line in render_hexdump(&bytes, offset, ascii) {
        println!("{}", line);
    }

    Ok(())
}

/// Render `bytes` as 16-byte lines labelled with their absolute offset
pub fn render_hexdump(bytes: &[u8], base: u64, ascii: bool) -> Vec<String> {
    bytes
        .chunks(16)
        .enumerate()
        .map(|(i, chunk)| {
            let mut line = format!("0x{:08X}: ", base.saturating_add((i * 16) as u64));

            for j in 0..16 {
                if j == 8 {
                    line.push(' ');
                }
                match chunk.get(j) {
                    Some(byte) => line.push_str(&format!("{:02X} ", byte)),
                    // Padding for incomplete lines
                    None => line.push_str("   "),
                }
            }

            if ascii {
                line.push_str(" |");
                for byte in chunk {
                    if (0x20..0x7F).contains(byte) {
                        line.push(*byte as char);
                    } else {
                        line.push('.');
                    }
                }
                for _ in chunk.len()..16 {
                    line.push(' ');
                }
                line.push('|');
            }

            line
        })
        .collect()
}
