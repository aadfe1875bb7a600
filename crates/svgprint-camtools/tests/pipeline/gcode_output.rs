use svgprint_camtools::{
    emit, normalize, parse, parse_svg_text, ParseMode, PrintJob, PrintProgram,
};
use svgprint_core::{Point, Waypoint};
use svgprint_settings::MachineProfile;

fn word(line: &str, prefix: char) -> Option<f64> {
    line.split_whitespace()
        .find_map(|w| w.strip_prefix(prefix))
        .and_then(|v| v.parse().ok())
}

#[test]
fn test_reference_extrusion() {
    let profile = MachineProfile {
        layer_height: 0.2,
        nozzle_size: 0.4,
        filament_diameter: 1.75,
        filament_flow_rate: 1.0,
        ..MachineProfile::default()
    };
    let line = emit(
        &Waypoint::line_to(3.0, 4.0),
        Some(Point::new(0.0, 0.0)),
        &profile,
    );
    let e = word(&line, 'E').unwrap();
    assert!((e - 0.1663).abs() < 1e-4);
}

#[test]
fn test_parse_normalize_emit() {
    let paths = vec![
        parse("M0,0 L100,0 L100,50 Z"),
        parse("M10,10 h80"),
    ];
    let normalized = normalize(&paths, 60.0);

    let last = normalized[0].waypoints()[2].point();
    assert!((last.x - 60.0).abs() < 1e-9);
    assert!((last.y - 30.0).abs() < 1e-9);

    let profile = MachineProfile::default();
    let mut prev = None;
    let mut lines = Vec::new();
    for waypoint in normalized.iter().flat_map(|p| p.iter()) {
        lines.push(emit(waypoint, prev, &profile));
        prev = Some(waypoint.point());
    }

    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("G0 "));
    assert!(lines[4].starts_with("G0 "));
    for line in lines.iter().filter(|l| l.starts_with("G1 ")) {
        assert!(word(line, 'E').unwrap() > 0.0, "{line}");
    }
}

#[test]
fn test_full_program_layout() {
    let svg = r#"<svg><path d="M0,0 L20,0 L20,10 Z"/><path d="M5,2 l2,0"/></svg>"#;
    let paths = parse_svg_text(svg, ParseMode::Strict).unwrap();

    let profile = MachineProfile {
        x_offset: 1.0,
        y_offset: 2.0,
        ..MachineProfile::default()
    };
    let job = PrintJob {
        layers: 4,
        target_size: 40.0,
        ..PrintJob::default()
    };
    let program = PrintProgram::build(&paths, &profile, &job).unwrap();
    let gcode = program.gcode();

    // One origin travel plus one travel per path per layer.
    let travels = gcode.lines().filter(|l| l.starts_with("G0 X")).count();
    assert_eq!(travels, 1 + 2 * 4);

    let deposits = gcode.lines().filter(|l| l.starts_with("G1 X")).count();
    assert_eq!(deposits, 4 * 4);

    // Z rises by one layer height per layer.
    let z_moves: Vec<f64> = gcode
        .lines()
        .filter(|l| l.starts_with("G1 Z"))
        .filter_map(|l| word(l, 'Z'))
        .collect();
    assert_eq!(z_moves.len(), 4);
    for (i, z) in z_moves.iter().enumerate() {
        assert!((z - (i + 1) as f64 * 0.2).abs() < 1e-9);
    }

    // Origin travel carries the machine offset, layer moves add the bed offset too.
    assert!(gcode.contains("G0 X1 Y2 F3000\n"));
    assert!(gcode.contains("G0 X41 Y42 F3000\n"));

    let stats = program.statistics();
    assert_eq!(stats.layer_count, 4);
    assert!(stats.filament_length > 0.0);
}

#[test]
fn test_write_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("out.gcode");

    let paths = vec![parse("M0,0 L10,10")];
    let job = PrintJob {
        layers: 1,
        target_size: 10.0,
        ..PrintJob::default()
    };
    let program = PrintProgram::build(&paths, &MachineProfile::default(), &job).unwrap();
    program.write_to_file(&file).unwrap();

    let written = std::fs::read_to_string(&file).unwrap();
    assert_eq!(written, program.into_gcode());
}
