//! # SVGPrint Core
//!
//! Core geometry types shared by every SVGPrint crate.
//! Provides the waypoint model produced by path parsing and the
//! bounding-box math used when fitting a design onto the print bed.

pub mod data;

pub use data::{BoundingBox, Path, Point, Waypoint};
