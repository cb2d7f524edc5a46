//! LZW12 CLI - decompress fixed 12-bit LZW archives.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{cmd_cat, cmd_extract, cmd_info, cmd_test};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lzw12")]
#[command(author, version, about = "Decompress fixed 12-bit LZW archives")]
#[command(long_about = "
Decompresses archives holding a raw stream of 12-bit LZW codes.

Examples:
  lzw12 extract compressedfile1.z
  lzw12 extract -o out/ a.z b.z c.z
  lzw12 cat compressedfile1.z
  lzw12 test *.z
  lzw12 info --json compressedfile1.z

Set RUST_LOG to control logging (default: lzw12=info).
")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decompress archives into <OUTPUT>/<stem>.txt
    #[command(alias = "x")]
    Extract {
        /// Archive files to decompress
        #[arg(required = true)]
        archives: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Show progress bar
        #[arg(short = 'P', long)]
        progress: bool,
    },

    /// Write the decompressed text of an archive to stdout
    Cat {
        /// Archive file to decompress
        archive: PathBuf,
    },

    /// Check that archives decode cleanly
    #[command(alias = "t")]
    Test {
        /// Archive files to test
        #[arg(required = true)]
        archives: Vec<PathBuf>,
    },

    /// Show information about an archive
    #[command(alias = "i")]
    Info {
        /// Archive file to inspect
        archive: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "lzw12=debug" } else { "lzw12=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Extract {
            archives,
            output,
            progress,
        } => cmd_extract(&archives, &output, progress, cli.verbose),
        Commands::Cat { archive } => cmd_cat(&archive),
        Commands::Test { archives } => cmd_test(&archives, cli.verbose),
        Commands::Info { archive, json } => cmd_info(&archive, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
