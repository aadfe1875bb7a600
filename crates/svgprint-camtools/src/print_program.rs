//! Complete print program assembly
//!
//! Wraps the layer passes in a start block, optional preheat and fan
//! commands, and an end block.

use crate::commands;
use crate::error::{CamToolResult, ParameterError, ParameterResult};
use crate::extrusion::ExtrusionGenerator;
use crate::layer_emitter::{deposits_per_layer, LayerEmitter, LayerHeaderOptions};
use crate::normalizer::Normalization;
use crate::stats::PrintStatistics;
use serde::{Deserialize, Serialize};
use std::path::Path as StdPath;
use svgprint_core::{Path, Point};
use svgprint_settings::MachineProfile;

const DEFAULT_START_GCODE: &str = "; Start GCode\nG28 ; Home all axes\nG90 ; Absolute positioning\n";

const DEFAULT_END_GCODE: &str = "; End GCode\n\
G28 X Y ; Home X and Y\n\
M104 S0 ; Turn off extruder\n\
M140 S0 ; Turn off bed\n\
M84 ; Disable motors\n";

const MAX_LAYERS: usize = 10_000;

/// Per-run parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintJob {
    /// Number of times the outline is printed
    pub layers: usize,
    /// Length of the design's longer side on the bed (mm)
    pub target_size: f64,
    /// Bed position of the design's origin (mm)
    pub start_x: f64,
    pub start_y: f64,
    /// Heat nozzle and bed before printing
    pub preheat: bool,
    /// Run the part cooling fan from the second layer on
    pub cooling_fan: bool,
    /// Replaces the profile's `START_GCODE`
    pub start_gcode: Option<String>,
    /// Replaces the profile's `END_GCODE`
    pub end_gcode: Option<String>,
    pub header: LayerHeaderOptions,
}

impl Default for PrintJob {
    fn default() -> Self {
        Self {
            layers: 20,
            target_size: 60.0,
            start_x: 40.0,
            start_y: 40.0,
            preheat: false,
            cooling_fan: false,
            start_gcode: None,
            end_gcode: None,
            header: LayerHeaderOptions::default(),
        }
    }
}

impl PrintJob {
    pub fn validate(&self) -> ParameterResult<()> {
        if !(1..=MAX_LAYERS).contains(&self.layers) {
            return Err(ParameterError::OutOfRange {
                name: "layers".to_string(),
                value: self.layers as f64,
                min: 1.0,
                max: MAX_LAYERS as f64,
            });
        }

        if !(self.target_size.is_finite() && self.target_size > 0.0) {
            return Err(ParameterError::InvalidValue {
                name: "target_size".to_string(),
                reason: format!("must be a positive number, got {}", self.target_size),
            });
        }

        for (name, value) in [("start_x", self.start_x), ("start_y", self.start_y)] {
            if !value.is_finite() {
                return Err(ParameterError::InvalidValue {
                    name: name.to_string(),
                    reason: "must be finite".to_string(),
                });
            }
        }

        for (name, value) in [("retract", self.header.retract), ("prime", self.header.prime)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ParameterError::InvalidValue {
                    name: name.to_string(),
                    reason: format!("must be zero or positive, got {}", value),
                });
            }
        }

        Ok(())
    }

    pub fn start(&self) -> Point {
        Point::new(self.start_x, self.start_y)
    }
}

/// Generated G-code together with what it was generated from
#[derive(Debug, Clone)]
pub struct PrintProgram {
    gcode: String,
    paths: Vec<Path>,
    normalization: Option<Normalization>,
    statistics: PrintStatistics,
}

impl PrintProgram {
    /// Normalize `paths` to the job's target size and generate the program
    pub fn build(paths: &[Path], profile: &MachineProfile, job: &PrintJob) -> CamToolResult<Self> {
        job.validate()?;

        let normalization = Normalization::fit(paths, job.target_size);
        let paths = match &normalization {
            Some(norm) => norm.apply(paths),
            None => paths.to_vec(),
        };

        let emitter = LayerEmitter::new(profile, job.start()).with_header(job.header);
        let generator = ExtrusionGenerator::new(profile);

        let mut gcode = String::new();

        gcode.push_str("; SVGPrint layered outline G-code\n");
        gcode.push_str(&format!(
            "; Generated: {}\n",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        ));
        gcode.push_str(&format!("; Paths: {}\n", paths.len()));
        gcode.push_str(&format!("; Layers: {}\n", job.layers));
        gcode.push_str(&format!("; Target size: {} mm\n", job.target_size));
        gcode.push_str(&format!("; Layer height: {} mm\n", profile.layer_height));
        gcode.push_str(&format!(
            "; Deposit moves per layer: {}\n",
            deposits_per_layer(&paths)
        ));
        if let Some(norm) = &normalization {
            gcode.push_str(&format!("; Scale: {}\n", norm.scale));
        }
        gcode.push('\n');

        let start_block = resolve_block(
            job.start_gcode.as_deref(),
            &profile.start_gcode,
            DEFAULT_START_GCODE,
        );
        push_block(&mut gcode, start_block);

        if job.preheat {
            gcode.push_str(&commands::set_nozzle_temp(profile.filament_temperature));
            gcode.push_str(&commands::set_bed_temp(profile.bed_temperature));
        }

        gcode.push_str(&generator.travel(Point::new(0.0, 0.0)));
        gcode.push_str("\n; Begin SVG Print\n");
        gcode.push_str("; ==================\n");

        for index in 0..job.layers {
            emitter.emit_layer(&mut gcode, index, job.layers, &paths);
            gcode.push('\n');
            if job.cooling_fan && index == 0 {
                gcode.push_str(&commands::fan_on());
            }
        }

        if job.cooling_fan {
            gcode.push_str(&commands::fan_off());
        }
        let end_block =
            resolve_block(job.end_gcode.as_deref(), &profile.end_gcode, DEFAULT_END_GCODE);
        push_block(&mut gcode, end_block);

        let statistics = PrintStatistics::compute(&paths, profile, job.start(), job.layers);

        tracing::info!(
            paths = paths.len(),
            layers = job.layers,
            bytes = gcode.len(),
            "Generated print program"
        );

        Ok(Self {
            gcode,
            paths,
            normalization,
            statistics,
        })
    }

    pub fn gcode(&self) -> &str {
        &self.gcode
    }

    pub fn into_gcode(self) -> String {
        self.gcode
    }

    /// Paths after normalization, before the bed offset is applied
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Transform applied to the input, `None` when it was left unscaled
    pub fn normalization(&self) -> Option<Normalization> {
        self.normalization
    }

    pub fn statistics(&self) -> PrintStatistics {
        self.statistics
    }

    pub fn write_to_file<P: AsRef<StdPath>>(&self, file: P) -> CamToolResult<()> {
        let file = file.as_ref();
        std::fs::write(file, &self.gcode)?;
        tracing::info!(file = %file.display(), "G-code written");
        Ok(())
    }
}

/// Job override first, then a non-empty profile block, then the fallback
fn resolve_block<'a>(job: Option<&'a str>, profile: &'a str, fallback: &'a str) -> &'a str {
    job.or_else(|| (!profile.trim().is_empty()).then_some(profile))
        .unwrap_or(fallback)
}

fn push_block(gcode: &mut String, block: &str) {
    gcode.push_str(block);
    if !block.is_empty() && !block.ends_with('\n') {
        gcode.push('\n');
    }
}
