//! # SVGPrint CAM Tools
//!
//! Turns SVG outlines into layered G-code for fused-deposition printers.
//!
//! ## Pipeline
//!
//! - **SVG Document Reader**: pulls `d` attributes out of `<path>` elements
//! - **Path Tracing**: tokenizes path data and interprets it into travel and
//!   deposit waypoints, chording curves and arcs to their endpoints
//! - **Normalizer**: uniformly rescales all paths to a physical build size
//! - **Extrusion Generator**: formats waypoints as `G0`/`G1` moves with
//!   filament-volume based `E` values
//! - **Layer Emitter**: replays the outline at increasing Z heights
//! - **Print Program**: wraps the layers in start, preheat, fan and end blocks
//!
//! ## Supporting Infrastructure
//!
//! - **Commands**: auxiliary G-code verbs
//! - **Statistics**: distance, filament and time estimates
//! - **Preview**: PNG rendering of traced paths

pub mod commands;
pub mod error;
pub mod extrusion;
pub mod layer_emitter;
pub mod normalizer;
pub mod preview;
pub mod print_program;
pub mod stats;
pub mod svg_document;
pub mod svg_path;

// Re-export commonly used items
pub use error::{
    CamToolError, CamToolResult, FileFormatError, FileFormatResult, ParameterError,
    ParameterResult, PathDataError, PathDataResult,
};
pub use extrusion::{emit, ExtrusionGenerator};
pub use layer_emitter::{layer_change_block, LayerEmitter, LayerHeaderOptions};
pub use normalizer::{normalize, Normalization};
pub use preview::{render_preview, save_preview};
pub use print_program::{PrintJob, PrintProgram};
pub use stats::PrintStatistics;
pub use svg_document::{extract_path_data, parse_svg_text, read_svg_paths};
pub use svg_path::{parse, parse_strict, ParseMode};
