//! Motion and extrusion generation
//!
//! Converts one waypoint into one G-code line. Travel moves use `G0` at the
//! profile's travel speed; deposit moves use `G1` with an `E` term computed
//! from the segment length and the filament/nozzle geometry:
//!
//! ```text
//! volume = distance * LAYER_HEIGHT * NOZZLE_SIZE
//! e      = volume / (π * (FILAMENT_DIAMETER / 2)²) * FILAMENT_FLOW_RATE
//! ```
//!
//! Coordinates are written with shortest round-trip precision and the
//! profile's X/Y/Z offsets added.

use svgprint_core::{Point, Waypoint};
use svgprint_settings::MachineProfile;

/// Formats motion commands against one machine profile
#[derive(Debug, Clone, Copy)]
pub struct ExtrusionGenerator<'a> {
    profile: &'a MachineProfile,
}

impl<'a> ExtrusionGenerator<'a> {
    pub fn new(profile: &'a MachineProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &'a MachineProfile {
        self.profile
    }

    /// Millimetres of filament pushed for a deposit of `distance` mm
    pub fn extrusion_length(&self, distance: f64) -> f64 {
        let volume = distance * self.profile.layer_height * self.profile.nozzle_size;
        volume / self.profile.filament_area() * self.profile.filament_flow_rate
    }

    /// `G0 X Y F<G0_SPEED>`
    pub fn travel(&self, to: Point) -> String {
        format!(
            "G0 X{} Y{} F{}\n",
            to.x + self.profile.x_offset,
            to.y + self.profile.y_offset,
            self.profile.g0_speed
        )
    }

    /// `G1 X Y E F<G1_SPEED>`, or a travel when there is no previous point
    pub fn extrude(&self, to: Point, from: Option<Point>) -> String {
        let Some(from) = from else {
            return self.travel(to);
        };

        let e = self.extrusion_length(from.distance_to(&to));
        format!(
            "G1 X{} Y{} E{} F{}\n",
            to.x + self.profile.x_offset,
            to.y + self.profile.y_offset,
            e,
            self.profile.g1_speed
        )
    }

    /// Deposit move with a Z component.
    ///
    /// A zero `z` is treated as planar and falls back to [`Self::extrude`].
    /// Otherwise the distance includes the Z change and the line carries a
    /// `Z` word shifted by `Z_OFFSET`.
    pub fn extrude_3d(&self, to: Point, z: f64, from: Option<(Point, f64)>) -> String {
        if z == 0.0 {
            return self.extrude(to, from.map(|(p, _)| p));
        }

        let x = to.x + self.profile.x_offset;
        let y = to.y + self.profile.y_offset;
        let z_out = z + self.profile.z_offset;

        match from {
            Some((prev, prev_z)) => {
                let dx = to.x - prev.x;
                let dy = to.y - prev.y;
                let dz = z - prev_z;
                let e = self.extrusion_length((dx * dx + dy * dy + dz * dz).sqrt());
                format!(
                    "G1 X{} Y{} Z{} E{} F{}\n",
                    x, y, z_out, e, self.profile.g1_speed
                )
            }
            None => format!("G0 X{} Y{} Z{} F{}\n", x, y, z_out, self.profile.g0_speed),
        }
    }

    /// One line for `waypoint`, given the previous physical position
    pub fn emit(&self, waypoint: &Waypoint, prev: Option<Point>) -> String {
        match waypoint {
            Waypoint::Move { .. } => self.travel(waypoint.point()),
            Waypoint::Line { .. } => self.extrude(waypoint.point(), prev),
        }
    }
}

/// Format one waypoint as G-code using `profile` for offsets and physics
pub fn emit(waypoint: &Waypoint, prev: Option<Point>, profile: &MachineProfile) -> String {
    ExtrusionGenerator::new(profile).emit(waypoint, prev)
}
