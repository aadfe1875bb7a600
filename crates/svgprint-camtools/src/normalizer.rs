//! Fits traced paths onto a physical build size.
//!
//! All paths share one uniform scale so the design keeps its aspect ratio;
//! the bounding-box corner is shifted to the origin.

use serde::{Deserialize, Serialize};
use svgprint_core::{BoundingBox, Path, Point};

/// Uniform transform from source units to millimetres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normalization {
    pub min_x: f64,
    pub min_y: f64,
    pub scale: f64,
}

impl Normalization {
    /// Transform that maps `paths` into a `target_size` square.
    ///
    /// `None` when there is nothing to fit: no waypoints, a zero-width or
    /// zero-height design, or a target size that is not a positive number.
    pub fn fit(paths: &[Path], target_size: f64) -> Option<Self> {
        if !(target_size.is_finite() && target_size > 0.0) {
            tracing::warn!(target_size, "Ignoring non-positive target size");
            return None;
        }

        let bounds = BoundingBox::from_paths(paths)?;
        if bounds.is_degenerate() {
            tracing::debug!(?bounds, "Degenerate bounds, leaving paths unscaled");
            return None;
        }

        Some(Self {
            min_x: bounds.min_x,
            min_y: bounds.min_y,
            scale: target_size / bounds.longest_side(),
        })
    }

    pub fn apply_point(&self, p: Point) -> Point {
        Point::new((p.x - self.min_x) * self.scale, (p.y - self.min_y) * self.scale)
    }

    /// New paths with every waypoint transformed, tags preserved
    pub fn apply(&self, paths: &[Path]) -> Vec<Path> {
        paths
            .iter()
            .map(|path| path.map_points(|p| self.apply_point(p)))
            .collect()
    }
}

/// Rescale `paths` so the longer side of their joint bounds equals
/// `target_size`. Degenerate input comes back unchanged.
pub fn normalize(paths: &[Path], target_size: f64) -> Vec<Path> {
    match Normalization::fit(paths, target_size) {
        Some(norm) => {
            tracing::debug!(
                scale = norm.scale,
                min_x = norm.min_x,
                min_y = norm.min_y,
                "Normalizing paths"
            );
            norm.apply(paths)
        }
        None => paths.to_vec(),
    }
}
