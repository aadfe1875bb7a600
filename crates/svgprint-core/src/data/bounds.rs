use super::{Path, Point};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounds over every waypoint of a set of paths
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Bounds of a single point
    pub fn from_point(p: Point) -> Self {
        Self {
            min_x: p.x,
            max_x: p.x,
            min_y: p.y,
            max_y: p.y,
        }
    }

    /// Bounds across all paths. Returns `None` when there are no waypoints.
    pub fn from_paths(paths: &[Path]) -> Option<Self> {
        paths
            .iter()
            .flat_map(|path| path.iter())
            .map(|w| w.point())
            .fold(None, |acc: Option<BoundingBox>, p| match acc {
                Some(bounds) => Some(bounds.including(p)),
                None => Some(BoundingBox::from_point(p)),
            })
    }

    /// Grow the box to contain `p`
    pub fn including(self, p: Point) -> Self {
        Self {
            min_x: self.min_x.min(p.x),
            max_x: self.max_x.max(p.x),
            min_y: self.min_y.min(p.y),
            max_y: self.max_y.max(p.y),
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Length of the longer side
    pub fn longest_side(&self) -> f64 {
        self.width().max(self.height())
    }

    /// True when either side has zero extent
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }
}
