//! Error types for the CAM tools crate.
//!
//! This module provides structured error types for print job generation,
//! parameter validation, SVG file reading and strict path-data parsing.

use std::io;
use thiserror::Error;

/// Errors that can occur during CAM tool operations.
#[derive(Error, Debug)]
pub enum CamToolError {
    /// Image processing failed.
    #[error("Image processing error: {0}")]
    ImageError(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// A file format error occurred.
    #[error("File format error: {0}")]
    FileFormat(#[from] FileFormatError),

    /// Path data was rejected in strict mode.
    #[error("Path data error: {0}")]
    PathData(#[from] PathDataError),
}

/// Errors related to print job parameter validation.
#[derive(Error, Debug)]
pub enum ParameterError {
    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },
}

/// Errors related to reading SVG documents.
#[derive(Error, Debug)]
pub enum FileFormatError {
    /// The SVG file could not be parsed.
    #[error("SVG parse error: {0}")]
    SvgParseError(String),

    /// The file is empty or contains no usable data.
    #[error("Empty file: {0}")]
    EmptyFile(String),

    /// The file extension is not recognized.
    #[error("Unknown file extension: {0}")]
    UnknownExtension(String),

    /// I/O error during file reading.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// Path-data problems reported by the strict parser.
///
/// The default parser never produces these: it drops whatever it cannot use.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathDataError {
    /// Text before the first command letter.
    #[error("Unexpected text before first command: '{0}'")]
    LeadingText(String),

    /// Characters inside a command that are not numbers or separators.
    #[error("Malformed number in '{command}' command: '{fragment}'")]
    MalformedNumber { command: char, fragment: String },

    /// A parameter group was cut short.
    #[error("Incomplete parameters for '{command}': expected groups of {group_size}, {leftover} left over")]
    IncompleteGroup {
        command: char,
        group_size: usize,
        leftover: usize,
    },

    /// A drawing command carried no parameters at all.
    #[error("Missing parameters for '{0}' command")]
    MissingParameters(char),

    /// Close-path carried parameters.
    #[error("Unexpected parameters for '{0}' command")]
    UnexpectedParameters(char),

    /// A command the tracer recognizes but does not interpret.
    #[error("Unsupported command '{0}'")]
    UnsupportedCommand(char),
}

/// Result type alias for CAM tool operations.
pub type CamToolResult<T> = Result<T, CamToolError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;

/// Result type alias for file format operations.
pub type FileFormatResult<T> = Result<T, FileFormatError>;

/// Result type alias for strict path-data parsing.
pub type PathDataResult<T> = Result<T, PathDataError>;
