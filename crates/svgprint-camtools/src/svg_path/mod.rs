//! SVG path-data tracing
//!
//! Turns the path mini-language of a `d` attribute into a [`Path`] of
//! travel and deposit waypoints.

mod parser;
mod tokenizer;

pub use parser::{interpret, parse, parse_strict, Cursor};
pub use tokenizer::{leading_text, tokenize, PathCommand};

use crate::error::PathDataResult;
use serde::{Deserialize, Serialize};
use svgprint_core::Path;

/// How tolerant path parsing is of malformed input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Drop anything unusable and keep going
    #[default]
    Lenient,
    /// Report the first problem as a [`crate::error::PathDataError`]
    Strict,
}

impl ParseMode {
    /// Parse `path_data` under this mode
    pub fn parse(self, path_data: &str) -> PathDataResult<Path> {
        match self {
            ParseMode::Lenient => Ok(parse(path_data)),
            ParseMode::Strict => parse_strict(path_data),
        }
    }
}
