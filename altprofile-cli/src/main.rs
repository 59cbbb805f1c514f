//! altprofile - generate altitude profiles from GPS traces.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `ALTPROFILE_IN_FILE` | GPS input file | Required unless `--in-file` |
//! | `ALTPROFILE_OUT_FILE` | Output file | Required unless `--out-file` |
//! | `RUST_LOG` | Log filter (e.g., "debug") | "altprofile=info" |

use altprofile::{Conversion, InputFormat, OutputFormat};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Generates altitude profiles from GPS traces with altitude information.
#[derive(Parser, Debug)]
#[command(name = "altprofile")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The GPS input file to use
    #[arg(long, alias = "in_file", env = "ALTPROFILE_IN_FILE", value_name = "file")]
    in_file: PathBuf,

    /// The input format (CSV, GPX)
    #[arg(long, alias = "in_format")]
    in_format: InputFormat,

    /// The options for the input format, if supported, e.g. "--delimiter ;"
    #[arg(
        long,
        alias = "in_options",
        default_value = "",
        allow_hyphen_values = true,
        value_name = "options"
    )]
    in_options: String,

    /// The file to write the profile to
    #[arg(long, alias = "out_file", env = "ALTPROFILE_OUT_FILE", value_name = "file")]
    out_file: PathBuf,

    /// The output format (CSV, PNG)
    #[arg(long, alias = "out_format")]
    out_format: OutputFormat,

    /// The options for the output format, if supported, e.g. "--width 800 --height 300"
    #[arg(
        long,
        alias = "out_options",
        default_value = "",
        allow_hyphen_values = true,
        value_name = "options"
    )]
    out_options: String,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "altprofile=debug"
    } else {
        "altprofile=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!(?cli, "parsed arguments");

    let summary = Conversion::builder(&cli.in_file, cli.in_format, &cli.out_file, cli.out_format)
        .input_options(cli.in_options)
        .output_options(cli.out_options)
        .build()
        .run()
        .with_context(|| {
            format!(
                "Failed to generate altitude profile from: {}",
                cli.in_file.display()
            )
        })?;

    println!(
        "Output written to: {} ({} records, {} tracks)",
        cli.out_file.display(),
        summary.records,
        summary.tracks
    );
    Ok(())
}
