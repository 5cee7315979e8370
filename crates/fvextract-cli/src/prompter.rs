//! CLI implementation of PathProvider for interactive directory selection

use fvextract_core::{IMAGE_EXTENSION, PathProvider};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Prompts on stdin for the directory holding the disk image
pub struct CliPrompter;

impl PathProvider for CliPrompter {
    fn select_directory(&self) -> Option<PathBuf> {
        print!("Directory containing the .{} image: ", IMAGE_EXTENSION);
        io::stdout().flush().ok();

        let stdin = io::stdin();
        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() {
            eprintln!("Failed to read input");
            return None;
        }
        parse_directory_answer(&line)
    }
}

/// Blank answers mean nothing was chosen
fn parse_directory_answer(line: &str) -> Option<PathBuf> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}
