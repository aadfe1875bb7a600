//! # SVGPrint
//!
//! Traces the outlines of an SVG drawing and prints them as a stack of
//! identical layers on a fused-deposition 3D printer.
//!
//! ## Architecture
//!
//! SVGPrint is organized as a workspace with multiple crates:
//!
//! 1. **svgprint-core** - Waypoint, path and bounding-box types
//! 2. **svgprint-settings** - Machine profile loading and validation
//! 3. **svgprint-camtools** - Path tracing, normalization and G-code generation
//! 4. **svgprint** - Command-line driver that ties the crates together

pub mod cli;

pub use svgprint_camtools::{
    emit, normalize, parse, parse_strict, read_svg_paths, CamToolError, ParseMode, PrintJob,
    PrintProgram, PrintStatistics,
};
pub use svgprint_core::{BoundingBox, Path, Point, Waypoint};
pub use svgprint_settings::{MachineProfile, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - RUST_LOG environment variable support (defaults to `info`)
/// - Pretty console output, or one JSON object per line when `json` is set
pub fn init_logging(json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if json {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .json();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
