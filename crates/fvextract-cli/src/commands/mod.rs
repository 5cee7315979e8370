//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod extract;
pub mod hex_utils;
pub mod hexdump;
pub mod scan;

use std::path::PathBuf;

use fvextract_core::{FixedPath, PathProvider};

use crate::prompter::CliPrompter;

/// Use `--dir` when given, otherwise ask on stdin
pub(crate) fn directory_source(dir: Option<PathBuf>) -> Box<dyn PathProvider> {
    match dir {
        Some(dir) => Box::new(FixedPath(dir)),
        None => Box::new(CliPrompter),
    }
}
