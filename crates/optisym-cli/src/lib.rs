//! CLI logic for the optisym symbol previewer.
//!
//! This module contains the core CLI logic: it builds one catalog symbol and
//! writes its SVG preview to a file.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{debug, info};

use optisym::{Catalog, OptisymError, SymbolKind, SymbolOptions, draw::ElementParams};

/// Run the optisym CLI application
///
/// This function builds the requested symbol and writes its SVG preview to
/// the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `OptisymError` for:
/// - Unknown symbol names
/// - Configuration loading errors
/// - Invalid symbol sizes
/// - Invalid colors
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), OptisymError> {
    info!(
        symbol = args.symbol,
        output_path = args.output;
        "Rendering symbol"
    );

    let kind: SymbolKind = args.symbol.parse()?;

    // Load configuration, the command line seed wins over the file
    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(seed) = args.seed {
        app_config = app_config.with_seed(seed);
    }

    let options = symbol_options(args, app_config.params().clone());
    debug!(options:?; "Symbol options");

    let mut catalog = Catalog::new(app_config);
    let symbol = catalog.build(kind, &options)?;
    let svg = catalog.render_svg(&symbol)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

/// Command line label options override the config file's `[params]`.
fn symbol_options(args: &Args, mut params: ElementParams) -> SymbolOptions {
    if let Some(label) = &args.label {
        params = params.with_label(label.as_str());
    }
    if let Some(loc) = args.label_loc {
        params = params.with_label_loc(loc);
    }

    let mut options = SymbolOptions::new().with_params(params);
    if let Some(width) = args.width {
        options = options.with_width(width);
    }
    if let Some(height) = args.height {
        options = options.with_height(height);
    }
    options
}
