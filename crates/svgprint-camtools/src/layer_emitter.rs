//! Layer iteration
//!
//! Every layer replays the same normalized outline at the next Z height,
//! preceded by a layer-change header that printer firmware and slicer
//! previews use for progress tracking.

use crate::extrusion::ExtrusionGenerator;
use serde::{Deserialize, Serialize};
use svgprint_core::{Path, Point, Waypoint};
use svgprint_settings::MachineProfile;

/// Tunables for the layer-change header
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerHeaderOptions {
    /// Filament retracted before the Z move (mm)
    pub retract: f64,
    /// Filament pushed back after the Z move (mm)
    pub prime: f64,
    /// Replace the plain retract with a wipe sequence
    pub wipe: bool,
    pub object_id: u32,
}

impl Default for LayerHeaderOptions {
    fn default() -> Self {
        Self {
            retract: 0.8,
            prime: 0.8,
            wipe: false,
            object_id: 0,
        }
    }
}

/// Header emitted before layer `layer_index` (0-based)
pub fn layer_change_block(
    layer_index: usize,
    z_height: f64,
    total_layers: usize,
    layer_height: f64,
    options: &LayerHeaderOptions,
) -> String {
    let layer_num = layer_index + 1;
    let mut block = String::new();

    block.push_str("; CHANGE_LAYER\n");
    block.push_str(&format!("; Z_HEIGHT: {:.3}\n", z_height));
    block.push_str(&format!("; LAYER_HEIGHT: {:.3}\n", layer_height));

    if options.wipe {
        block.push_str("; WIPE_START\n");
        block.push_str("G1 X-13.5 Y0 Z10 F10000\n");
        block.push_str("; WIPE_END\n");
        block.push_str("G1 E-.04 F1800\n");
    } else {
        block.push_str(&format!("G1 E-{} F1800\n", options.retract));
    }

    block.push_str(&format!(
        "; layer num/total_layer_count: {}/{}\n",
        layer_num, total_layers
    ));
    block.push_str("; update layer progress\n");
    block.push_str(&format!("M73 L{}\n", layer_num));
    block.push_str(&format!("M991 S0 P{} ;notify layer change\n", layer_index));

    block.push_str(&format!("; OBJECT_ID: {}\n", options.object_id));
    block.push_str("M204 S10000\n");
    block.push_str("G17\n");
    block.push_str(&format!("G1 Z{} F300\n", z_height));
    block.push_str(&format!("G1 E{} F1800\n", options.prime));

    block.push_str("; FEATURE: Inner wall\n");
    block.push_str("; LINE_WIDTH: 0.45\n");

    block
}

/// Replays normalized paths layer by layer
#[derive(Debug, Clone, Copy)]
pub struct LayerEmitter<'a> {
    generator: ExtrusionGenerator<'a>,
    start: Point,
    header: LayerHeaderOptions,
}

impl<'a> LayerEmitter<'a> {
    /// Emitter placing the design at `start` on the bed
    pub fn new(profile: &'a MachineProfile, start: Point) -> Self {
        Self {
            generator: ExtrusionGenerator::new(profile),
            start,
            header: LayerHeaderOptions::default(),
        }
    }

    pub fn with_header(mut self, header: LayerHeaderOptions) -> Self {
        self.header = header;
        self
    }

    /// Z height of layer `index` (0-based)
    pub fn layer_z(&self, index: usize) -> f64 {
        (index + 1) as f64 * self.generator.profile().layer_height
    }

    /// Append header and moves for one layer to `out`.
    ///
    /// The extrusion cursor starts at the bed offset and is carried across
    /// paths. Each path must open with a move, otherwise its first segment
    /// extrudes from wherever the previous path ended.
    pub fn emit_layer(
        &self,
        out: &mut String,
        index: usize,
        total_layers: usize,
        paths: &[Path],
    ) {
        let layer_height = self.generator.profile().layer_height;
        out.push_str(&layer_change_block(
            index,
            self.layer_z(index),
            total_layers,
            layer_height,
            &self.header,
        ));

        let mut prev = Some(self.start);
        for waypoint in paths.iter().flat_map(Path::iter) {
            let placed = waypoint.map(|p| p.offset(self.start.x, self.start.y));
            out.push_str(&self.generator.emit(&placed, prev));
            prev = Some(placed.point());
        }
    }

    /// All `layer_count` layers, each followed by a blank line
    pub fn emit_layers(&self, paths: &[Path], layer_count: usize) -> String {
        let mut out = String::new();
        for index in 0..layer_count {
            self.emit_layer(&mut out, index, layer_count, paths);
            out.push('\n');
        }
        out
    }
}

/// Number of deposit moves in one layer pass
pub fn deposits_per_layer(paths: &[Path]) -> usize {
    paths
        .iter()
        .flat_map(Path::iter)
        .filter(|w| matches!(w, Waypoint::Line { .. }))
        .count()
}
