use std::fs;
use svgprint_camtools::{read_svg_paths, CamToolError, FileFormatError, ParseMode};
use svgprint_core::Waypoint;

const BADGE_SVG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 50">
  <g id="layer1">
    <path id="frame" d="M0,0 H100 V50 H0 Z" style="fill:none"/>
    <path d="m 20 10 c 5 0 10 5 10 10 s -5 10 -10 10 z"/>
  </g>
  <circle cx="50" cy="25" r="5"/>
</svg>
"#;

#[test]
fn test_read_svg_paths_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("badge.svg");
    fs::write(&file, BADGE_SVG).unwrap();

    let paths = read_svg_paths(&file, ParseMode::Lenient).unwrap();
    assert_eq!(paths.len(), 2);

    assert_eq!(
        paths[0].waypoints(),
        &[
            Waypoint::move_to(0.0, 0.0),
            Waypoint::line_to(100.0, 0.0),
            Waypoint::line_to(100.0, 50.0),
            Waypoint::line_to(0.0, 50.0),
            Waypoint::line_to(0.0, 0.0),
        ]
    );

    assert_eq!(
        paths[1].waypoints(),
        &[
            Waypoint::move_to(20.0, 10.0),
            Waypoint::line_to(30.0, 20.0),
            Waypoint::line_to(20.0, 30.0),
            Waypoint::line_to(20.0, 10.0),
        ]
    );
    assert!(paths.iter().all(|p| p.starts_with_move()));
}

#[test]
fn test_strict_mode_is_accepted_for_clean_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("badge.svg");
    fs::write(&file, BADGE_SVG).unwrap();

    let lenient = read_svg_paths(&file, ParseMode::Lenient).unwrap();
    let strict = read_svg_paths(&file, ParseMode::Strict).unwrap();
    assert_eq!(lenient, strict);
}

#[test]
fn test_strict_mode_rejects_truncated_data() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("broken.svg");
    fs::write(&file, r#"<svg><path d="M0,0 C1,1 2,2"/></svg>"#).unwrap();

    let err = read_svg_paths(&file, ParseMode::Strict).unwrap_err();
    assert!(matches!(err, CamToolError::PathData(_)));

    let paths = read_svg_paths(&file, ParseMode::Lenient).unwrap();
    assert_eq!(paths[0].waypoints(), &[Waypoint::move_to(0.0, 0.0)]);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_svg_paths(dir.path().join("nope.svg"), ParseMode::Lenient).unwrap_err();
    assert!(matches!(
        err,
        CamToolError::FileFormat(FileFormatError::SvgParseError(_))
    ));
}

#[test]
fn test_directory_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let sub = dir.path().join("folder.svg");
    fs::create_dir(&sub).unwrap();
    assert!(read_svg_paths(&sub, ParseMode::Lenient).is_err());
}

#[test]
fn test_wrong_extension() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("drawing.dxf");
    fs::write(&file, BADGE_SVG).unwrap();

    let err = read_svg_paths(&file, ParseMode::Lenient).unwrap_err();
    assert!(matches!(
        err,
        CamToolError::FileFormat(FileFormatError::UnknownExtension(_))
    ));
}

#[test]
fn test_upper_case_extension_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("BADGE.SVG");
    fs::write(&file, BADGE_SVG).unwrap();
    assert_eq!(read_svg_paths(&file, ParseMode::Lenient).unwrap().len(), 2);
}
