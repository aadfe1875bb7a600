//! Data models for traced outlines
//!
//! This module provides:
//! - Planar points in source units or millimetres
//! - Waypoints tagged as travel (`Move`) or deposit (`Line`)
//! - Paths as fully materialized waypoint sequences
//! - Bounding boxes across a whole document

mod bounds;

pub use bounds::BoundingBox;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A planar coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Return this point shifted by a constant offset
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// One geometric instruction produced by path parsing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Waypoint {
    /// Travel to the point without depositing material
    Move { x: f64, y: f64 },
    /// Deposit material while travelling from the previous point to this one
    Line { x: f64, y: f64 },
}

impl Waypoint {
    pub const fn move_to(x: f64, y: f64) -> Self {
        Waypoint::Move { x, y }
    }

    pub const fn line_to(x: f64, y: f64) -> Self {
        Waypoint::Line { x, y }
    }

    /// Target coordinates of this waypoint
    pub fn point(&self) -> Point {
        match *self {
            Waypoint::Move { x, y } | Waypoint::Line { x, y } => Point::new(x, y),
        }
    }

    pub fn is_move(&self) -> bool {
        matches!(self, Waypoint::Move { .. })
    }

    /// Same tag, new coordinates
    pub fn with_point(&self, p: Point) -> Self {
        match self {
            Waypoint::Move { .. } => Waypoint::Move { x: p.x, y: p.y },
            Waypoint::Line { .. } => Waypoint::Line { x: p.x, y: p.y },
        }
    }

    /// Same tag, coordinates mapped through `f`
    pub fn map<F>(&self, f: F) -> Self
    where
        F: FnOnce(Point) -> Point,
    {
        self.with_point(f(self.point()))
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Waypoint::Move { .. } => write!(f, "move {}", self.point()),
            Waypoint::Line { .. } => write!(f, "line {}", self.point()),
        }
    }
}

/// An ordered sequence of waypoints traced from one SVG `path` element.
///
/// The first waypoint of a non-empty path is always a [`Waypoint::Move`];
/// the layer emitter relies on this to avoid extruding across the gap
/// between two paths.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    waypoints: Vec<Waypoint>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Waypoint> {
        self.waypoints.iter()
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn push(&mut self, waypoint: Waypoint) {
        self.waypoints.push(waypoint);
    }

    /// Whether the path honours the "opens with a move" invariant
    pub fn starts_with_move(&self) -> bool {
        self.waypoints.first().is_none_or(Waypoint::is_move)
    }

    /// Total length of the deposit segments, in path units
    pub fn line_length(&self) -> f64 {
        let mut prev: Option<Point> = None;
        let mut total = 0.0;
        for waypoint in &self.waypoints {
            let p = waypoint.point();
            if let (Waypoint::Line { .. }, Some(from)) = (waypoint, prev) {
                total += from.distance_to(&p);
            }
            prev = Some(p);
        }
        total
    }

    /// New path with every coordinate mapped through `f`
    pub fn map_points<F>(&self, mut f: F) -> Self
    where
        F: FnMut(Point) -> Point,
    {
        self.waypoints.iter().map(|w| w.map(&mut f)).collect()
    }
}

impl From<Vec<Waypoint>> for Path {
    fn from(waypoints: Vec<Waypoint>) -> Self {
        Self { waypoints }
    }
}

impl FromIterator<Waypoint> for Path {
    fn from_iter<I: IntoIterator<Item = Waypoint>>(iter: I) -> Self {
        Self {
            waypoints: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Waypoint;
    type IntoIter = std::slice::Iter<'a, Waypoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.waypoints.iter()
    }
}

impl IntoIterator for Path {
    type Item = Waypoint;
    type IntoIter = std::vec::IntoIter<Waypoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.waypoints.into_iter()
    }
}
