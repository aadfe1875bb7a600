//! Print statistics and time estimate

use crate::extrusion::ExtrusionGenerator;
use serde::{Deserialize, Serialize};
use svgprint_core::{Path, Point, Waypoint};
use svgprint_settings::MachineProfile;

/// Totals for a complete multi-layer print
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PrintStatistics {
    /// Deposit distance over all layers (mm)
    pub extrude_distance: f64,
    /// Travel distance over all layers (mm)
    pub travel_distance: f64,
    /// Filament consumed, the sum of every `E` value (mm)
    pub filament_length: f64,
    pub layer_count: usize,
    /// Planar motion time at G0/G1 speeds (seconds)
    pub estimated_seconds: f64,
}

impl PrintStatistics {
    /// Walk one layer pass the way the layer emitter does and scale by
    /// `layer_count`. Z moves and header retractions are not counted.
    pub fn compute(
        paths: &[Path],
        profile: &MachineProfile,
        start: Point,
        layer_count: usize,
    ) -> Self {
        let generator = ExtrusionGenerator::new(profile);
        let mut extrude = 0.0;
        let mut travel = 0.0;
        let mut prev = start;

        for waypoint in paths.iter().flat_map(Path::iter) {
            let p = waypoint.point().offset(start.x, start.y);
            let d = prev.distance_to(&p);
            match waypoint {
                Waypoint::Move { .. } => travel += d,
                Waypoint::Line { .. } => extrude += d,
            }
            prev = p;
        }

        let layers = layer_count as f64;
        let extrude_distance = extrude * layers;
        let travel_distance = travel * layers;
        let minutes = extrude_distance / profile.g1_speed + travel_distance / profile.g0_speed;

        Self {
            extrude_distance,
            travel_distance,
            filament_length: generator.extrusion_length(extrude_distance),
            layer_count,
            estimated_seconds: minutes * 60.0,
        }
    }

    pub fn estimated_minutes(&self) -> f64 {
        self.estimated_seconds / 60.0
    }
}
