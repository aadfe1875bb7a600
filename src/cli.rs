//! Command-line driver

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use svgprint_camtools::{
    read_svg_paths, save_preview, LayerHeaderOptions, ParseMode, PrintJob, PrintProgram,
    PrintStatistics,
};
use svgprint_settings::MachineProfile;

const PREVIEW_SIZE: u32 = 800;

#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about = "Trace the paths of an SVG drawing into layered FDM printer G-code."
)]
pub struct Args {
    /// The input SVG file.
    pub input: PathBuf,

    /// Machine profile (JSON or TOML).
    #[arg(short, long, default_value = "config/config.json")]
    pub config: PathBuf,

    /// The output G-code file.
    #[arg(short, long, default_value = "output.gcode")]
    pub output: PathBuf,

    /// Number of layers to print.
    #[arg(short, long, default_value_t = 20)]
    pub layers: usize,

    /// Length of the drawing's longer side on the bed, in mm.
    #[arg(short, long, default_value_t = 60.0)]
    pub size: f64,

    /// Bed X position of the drawing's origin, in mm.
    #[arg(long, default_value_t = 40.0, allow_negative_numbers = true)]
    pub start_x: f64,

    /// Bed Y position of the drawing's origin, in mm.
    #[arg(long, default_value_t = 40.0, allow_negative_numbers = true)]
    pub start_y: f64,

    /// File whose contents replace the profile's start G-code.
    #[arg(long)]
    pub start_gcode: Option<PathBuf>,

    /// File whose contents replace the profile's end G-code.
    #[arg(long)]
    pub end_gcode: Option<PathBuf>,

    /// Reject malformed path data instead of skipping it.
    #[arg(long)]
    pub strict: bool,

    /// Heat nozzle and bed before printing.
    #[arg(long)]
    pub preheat: bool,

    /// Turn the cooling fan on after the first layer.
    #[arg(long)]
    pub fan: bool,

    /// Wipe the nozzle instead of a plain retract at each layer change.
    #[arg(long)]
    pub wipe: bool,

    /// Write a PNG preview of the traced paths.
    #[arg(long)]
    pub preview: Option<PathBuf>,

    /// Emit logs as JSON lines.
    #[arg(long)]
    pub log_json: bool,
}

impl Args {
    pub fn parse_mode(&self) -> ParseMode {
        if self.strict {
            ParseMode::Strict
        } else {
            ParseMode::Lenient
        }
    }

    /// Print job described by the arguments. Unreadable start/end G-code
    /// files are logged and fall back to the profile's blocks.
    pub fn print_job(&self) -> PrintJob {
        PrintJob {
            layers: self.layers,
            target_size: self.size,
            start_x: self.start_x,
            start_y: self.start_y,
            preheat: self.preheat,
            cooling_fan: self.fan,
            start_gcode: self.start_gcode.as_deref().and_then(read_gcode_block),
            end_gcode: self.end_gcode.as_deref().and_then(read_gcode_block),
            header: LayerHeaderOptions {
                wipe: self.wipe,
                ..LayerHeaderOptions::default()
            },
        }
    }
}

fn read_gcode_block(file: &Path) -> Option<String> {
    match std::fs::read_to_string(file) {
        Ok(block) => Some(block),
        Err(e) => {
            tracing::warn!(file = %file.display(), error = %e, "G-code file not readable, using default");
            None
        }
    }
}

/// Run one conversion end to end
pub fn run(args: &Args) -> anyhow::Result<PrintStatistics> {
    let profile = MachineProfile::load_from_file(&args.config)
        .with_context(|| format!("Failed to load machine profile {}", args.config.display()))?;

    let paths = read_svg_paths(&args.input, args.parse_mode())
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    if paths.is_empty() {
        tracing::warn!(file = %args.input.display(), "No printable paths found");
    }

    let job = args.print_job();
    let program = PrintProgram::build(&paths, &profile, &job)?;
    program
        .write_to_file(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    if let Some(preview) = &args.preview {
        save_preview(program.paths(), preview, PREVIEW_SIZE, PREVIEW_SIZE)?;
    }

    let stats = program.statistics();
    tracing::info!(
        output = %args.output.display(),
        layers = stats.layer_count,
        extrude_mm = stats.extrude_distance,
        travel_mm = stats.travel_distance,
        filament_mm = stats.filament_length,
        minutes = stats.estimated_minutes(),
        "Print program complete"
    );

    Ok(stats)
}
