//! SVG document reading
//!
//! Only the `d` attribute of `<path>` elements is consumed. Groups,
//! transforms and every other element are ignored.

use crate::error::{CamToolResult, FileFormatError, FileFormatResult};
use crate::svg_path::ParseMode;
use roxmltree::Document;
use std::path::Path as StdPath;
use svgprint_core::Path;

/// Every non-empty `d` attribute of a `<path>` element, in document order.
///
/// Entities are decoded and commented-out markup is not seen.
pub fn extract_path_data(svg_text: &str) -> FileFormatResult<Vec<String>> {
    if svg_text.trim().is_empty() {
        return Err(FileFormatError::EmptyFile("SVG document has no content".to_string()));
    }

    let doc = Document::parse(svg_text)
        .map_err(|e| FileFormatError::SvgParseError(e.to_string()))?;

    Ok(doc
        .descendants()
        .filter(|node| node.has_tag_name("path"))
        .filter_map(|node| node.attribute("d"))
        .map(str::trim)
        .filter(|data| !data.is_empty())
        .map(str::to_string)
        .collect())
}

/// Parse the path data of an SVG document held in memory.
///
/// Paths that trace to no waypoints are left out.
pub fn parse_svg_text(svg_text: &str, mode: ParseMode) -> CamToolResult<Vec<Path>> {
    let mut paths = Vec::new();
    for (index, data) in extract_path_data(svg_text)?.iter().enumerate() {
        let path = mode.parse(data)?;
        if path.is_empty() {
            tracing::debug!(index, "Skipping path without waypoints");
            continue;
        }
        if !path.starts_with_move() {
            tracing::warn!(index, "Path does not open with a move; first segment will be travel");
        }
        paths.push(path);
    }
    Ok(paths)
}

/// Read and trace every path of an SVG file
pub fn read_svg_paths<P: AsRef<StdPath>>(file: P, mode: ParseMode) -> CamToolResult<Vec<Path>> {
    let file = file.as_ref();

    if !file.exists() {
        return Err(FileFormatError::SvgParseError(format!(
            "SVG file does not exist: {}",
            file.display()
        ))
        .into());
    }
    if !file.is_file() {
        return Err(FileFormatError::SvgParseError(format!(
            "SVG path is not a file: {}",
            file.display()
        ))
        .into());
    }

    let is_svg = file
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if !is_svg {
        return Err(FileFormatError::UnknownExtension(file.display().to_string()).into());
    }

    let content = std::fs::read_to_string(file).map_err(FileFormatError::IoError)?;
    let paths = parse_svg_text(&content, mode)?;

    tracing::info!(file = %file.display(), paths = paths.len(), "Read SVG paths");
    Ok(paths)
}
