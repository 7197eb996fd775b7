//! # vcrypt Binary Entry Point
//!
//! Thin wrapper around the `simple_vc` library.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin vcrypt -- split --input plain.png --key key.png --cipher cipher.png
//! cargo run --bin vcrypt -- split --config config/default.toml --pad 4x4 --seed 7 \
//!   --input plain.png --key key.png --cipher cipher.png --report report.json
//! cargo run --bin vcrypt -- overlay --key key.png --cipher cipher.png --output stacked.png
//! ```
//!
//! Flags given on the command line override the configuration file.

use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::{info, LevelFilter};
use std::io::Write;
use std::path::PathBuf;

use simple_vc::common::config::{load_config, parse_format, VcConfig};
use simple_vc::generator::{load_share, ShareGenerator};
use simple_vc::processing::{overlay, reveal, PadSize};

/// Command-line arguments for the vcrypt binary
#[derive(Parser, Debug)]
#[command(author, version, about = "Two-share visual cryptography", long_about = None)]
struct Args {
    /// Log every processing stage
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split a black-and-white image into a key and a cipher share
    Split {
        /// Source image
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the key share
        #[arg(short, long)]
        key: PathBuf,

        /// Output path for the cipher share
        #[arg(short = 'x', long)]
        cipher: PathBuf,

        /// Path to a configuration file (TOML format)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Pad size as WxH (e.g. 3x3)
        #[arg(short, long)]
        pad: Option<PadSize>,

        /// Output container format (e.g. png)
        #[arg(short, long)]
        format: Option<String>,

        /// RNG seed for reproducible shares
        #[arg(short, long)]
        seed: Option<u64>,

        /// Path to write a JSON report of the run (optional)
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Stack a key and a cipher share
    Overlay {
        /// Key share
        #[arg(short, long)]
        key: PathBuf,

        /// Cipher share
        #[arg(short = 'x', long)]
        cipher: PathBuf,

        /// Output image (format taken from the extension)
        #[arg(short, long)]
        output: PathBuf,

        /// Reduce each WxH block back to one pixel, recovering the source
        #[arg(long)]
        reveal: Option<PadSize>,
    },
}

/// Initialize the logging system with timestamp, level, and message formatting.
///
/// Format: `[HH:MM:SS] [LEVEL] message`
fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

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
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    match args.command {
        Command::Split {
            input,
            key,
            cipher,
            config,
            pad,
            format,
            seed,
            report,
        } => {
            let mut config: VcConfig = match config {
                Some(path) => load_config(&path)?,
                None => VcConfig::default(),
            };

            // Command-line flags take precedence over the file
            if let Some(pad) = pad {
                config.pad.width = pad.width();
                config.pad.height = pad.height();
            }
            if let Some(format) = format {
                config.output.format = format;
            }
            if seed.is_some() {
                config.random.seed = seed;
            }

            let generator = ShareGenerator::new(&config)?;
            let stats = generator.split(&input, &key, &cipher)?;

            if let Some(report_path) = report {
                stats.export_to_json(&report_path)?;
                println!("Report exported to: {}", report_path.display());
            }
        }

        Command::Overlay {
            key,
            cipher,
            output,
            reveal: reveal_pad,
        } => {
            let key_share = load_share(&key)?;
            let cipher_share = load_share(&cipher)?;
            let stacked = overlay(&key_share, &cipher_share)?;

            let image = match reveal_pad {
                Some(pad) => reveal(&stacked, pad)?,
                None => stacked,
            };

            let extension = output
                .extension()
                .and_then(|ext| ext.to_str())
                .unwrap_or("png");
            image.save_with_format(&output, parse_format(extension)?)?;
            info!("🔍 Overlay written to {}", output.display());
        }
    }

    Ok(())
}
