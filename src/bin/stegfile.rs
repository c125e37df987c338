//! # stegfile Binary Entry Point
//!
//! ## Usage
//!
//! ```bash
//! stegfile hide cover.png secret.pdf stego.png
//! stegfile reveal stego.png --output_dir recovered
//! stegfile capacity cover.png --filename secret.pdf
//! ```
//!
//! Every command prints a one-line diagnostic on failure and exits non-zero.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use stegfile::common::config::{load_config, StegConfig};
use stegfile::pipeline::{carrier_capacity, hide_file, reveal_file};

/// LSB steganography tool to hide and reveal files in PNG/BMP images.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to an optional configuration file (TOML format)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hide a file in an image
    Hide {
        /// Path to the carrier image
        carrier_image: PathBuf,
        /// Path to the secret file
        secret_file: PathBuf,
        /// Path to the output stego image
        output_image: PathBuf,
    },
    /// Reveal a file from an image
    Reveal {
        /// Path to the stego image
        stego_image: PathBuf,
        /// Directory the revealed file is written to
        #[arg(long = "output_dir", visible_alias = "output-dir")]
        output_dir: Option<PathBuf>,
    },
    /// Show how much data an image can hold
    Capacity {
        /// Path to the carrier image
        carrier_image: PathBuf,
        /// Name the secret file would be stored under
        #[arg(long, default_value = "")]
        filename: String,
    },
}

/// Initialize the logging system with timestamp, level, and message formatting.
///
/// `RUST_LOG` overrides the configured level.
/// Format: `[HH:MM:SS] [LEVEL] message`
fn init_logger(level: LevelFilter) {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(args: Args, config: StegConfig) -> Result<()> {
    match args.command {
        Command::Hide {
            carrier_image,
            secret_file,
            output_image,
        } => {
            let report = hide_file(&carrier_image, &secret_file, &output_image)
                .with_context(|| format!("failed to hide {}", secret_file.display()))?;
            println!(
                "Encoding successful. {} hidden bytes ({} of {} bits used). Image saved as: {}",
                report.hidden_bytes,
                report.used_bits,
                report.capacity_bits,
                report.output.display()
            );
        }
        Command::Reveal {
            stego_image,
            output_dir,
        } => {
            let output_dir = output_dir.unwrap_or(config.reveal.output_dir);
            let report = reveal_file(&stego_image, &output_dir)
                .with_context(|| format!("failed to reveal from {}", stego_image.display()))?;
            println!(
                "Decoding successful. Secret file saved as: {} ({} bytes)",
                report.path.display(),
                report.bytes
            );
        }
        Command::Capacity {
            carrier_image,
            filename,
        } => {
            let report = carrier_capacity(&carrier_image, &filename)
                .with_context(|| format!("failed to read {}", carrier_image.display()))?;
            match report.max_content_bytes {
                Some(max) => println!(
                    "{}x{} image: {} bits, up to {} bytes of content",
                    report.width, report.height, report.capacity_bits, max
                ),
                None => println!(
                    "{}x{} image: {} bits, cannot hold a file named '{}'",
                    report.width, report.height, report.capacity_bits, filename
                ),
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match load_config::<StegConfig>(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: cannot load config {}: {e:#}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => StegConfig::default(),
    };

    init_logger(config.logging.level_filter());

    match run(args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
