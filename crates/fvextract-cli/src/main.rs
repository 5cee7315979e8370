mod commands;
mod prompter;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fvextract")]
#[command(about = "Extract BitLocker FVE metadata blocks from raw disk images")]
#[command(version, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    extract: ExtractArgs,
}

#[derive(Args)]
struct ExtractArgs {
    /// Directory containing the .dd image (prompted for when omitted)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Directory to write metadata blocks into
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Write a JSON summary of the run to this file
    #[arg(short, long)]
    report: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Locate the image, scan it and dump every metadata block (default)
    Extract(ExtractArgs),
    /// List signature offsets without dumping
    Scan {
        /// Directory containing the .dd image (prompted for when omitted)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Print offsets as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Show raw bytes of an image at a hex offset
    Hexdump {
        /// Image file to read
        image: PathBuf,

        /// Start offset in hex (e.g. 0x2000)
        #[arg(short, long)]
        offset: String,

        /// Number of bytes to show
        #[arg(short, long, default_value_t = 256)]
        size: usize,

        /// Include ASCII column
        #[arg(short, long)]
        ascii: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("fvextract=info".parse()?)
                .add_directive("fvextract_core=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Command::Extract(cli.extract)) {
        Command::Extract(args) => {
            commands::extract::run(args.dir, &args.output, args.report.as_deref())
        }
        Command::Scan { dir, json } => commands::scan::run(dir, json),
        Command::Hexdump {
            image,
            offset,
            size,
            ascii,
        } => commands::hexdump::run(&image, &offset, size, ascii),
    };

    finish(result)
}

/// Map a command outcome to the process result.
///
/// A located entry that is not a regular file ends the run without failing it.
fn finish(result: Result<()>) -> Result<()> {
    let Err(e) = result else {
        return Ok(());
    };

    let core_err = e.downcast_ref::<fvextract_core::Error>();
    if matches!(core_err, Some(fvextract_core::Error::NotAFile(_))) {
        warn!("{}", e);
        return Ok(());
    }
    if core_err.is_some_and(|err| err.is_missing_input()) {
        error!(
            "No disk image to scan; pass --dir with a directory holding a .{} file",
            fvextract_core::IMAGE_EXTENSION
        );
    }

    Err(e)
}
