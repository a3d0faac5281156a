//! Command-line argument definitions for the optisym CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the symbol and its size, the output path,
//! the configuration file and logging verbosity.

use clap::Parser;

use optisym::draw::LabelLoc;

/// Command-line arguments for the optisym symbol previewer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Symbol to render, by name or alias (e.g. rect, voa, osa, pd)
    #[arg(help = "Symbol name or alias")]
    pub symbol: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Body width in drawing units
    #[arg(long)]
    pub width: Option<f32>,

    /// Body height in drawing units
    #[arg(long)]
    pub height: Option<f32>,

    /// Seed for randomized instrument traces, overrides the config file
    #[arg(long)]
    pub seed: Option<u64>,

    /// Label drawn with the symbol
    #[arg(long)]
    pub label: Option<String>,

    /// Label position (top, bottom, left, right, center)
    #[arg(long)]
    pub label_loc: Option<LabelLoc>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
