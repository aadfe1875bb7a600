use std::fs;
use svgprint_settings::{ConfigError, MachineProfile, SettingsError, REQUIRED_KEYS};

const PROFILE_JSON: &str = r#"{
    "X_OFFSET": 5,
    "Y_OFFSET": 5,
    "Z_OFFSET": 0.1,
    "X_MAX": 256,
    "Y_MAX": 256,
    "X_MIN": 0,
    "Y_MIN": 0,
    "Z_SPEED": 300,
    "G0_SPEED": 6000,
    "G1_SPEED": 1500,
    "NOZZLE_SIZE": 0.4,
    "LAYER_HEIGHT": 0.2,
    "FILAMENT_DIAMETER": 1.75,
    "FILAMENT_FLOW_RATE": 0.95,
    "FILAMENT_TEMPERATURE": 215,
    "BED_TEMPERATURE": 60,
    "START_GCODE": "G28\nG90\n",
    "END_GCODE": "M84\n"
}"#;

#[test]
fn test_load_json_profile() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("config.json");
    fs::write(&file, PROFILE_JSON).unwrap();

    let profile = MachineProfile::load_from_file(&file).unwrap();
    assert_eq!(profile.x_offset, 5.0);
    assert_eq!(profile.g0_speed, 6000.0);
    assert_eq!(profile.filament_flow_rate, 0.95);
    assert_eq!(profile.start_gcode, "G28\nG90\n");
}

#[test]
fn test_toml_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("printer.toml");

    let profile = MachineProfile {
        nozzle_size: 0.6,
        end_gcode: "M84\n".to_string(),
        ..MachineProfile::default()
    };
    profile.save_to_file(&file).unwrap();

    let text = fs::read_to_string(&file).unwrap();
    assert!(text.contains("NOZZLE_SIZE = 0.6"));

    let loaded = MachineProfile::load_from_file(&file).unwrap();
    assert_eq!(loaded, profile);
}

#[test]
fn test_every_key_is_required() {
    let full: serde_json::Value = serde_json::from_str(PROFILE_JSON).unwrap();
    for key in REQUIRED_KEYS {
        let mut value = full.clone();
        value.as_object_mut().unwrap().remove(key);
        let err = MachineProfile::from_json_str(&value.to_string()).unwrap_err();
        assert!(
            matches!(err, SettingsError::Config(ConfigError::MissingKey(ref k)) if k == key),
            "{key}: {err}"
        );
    }
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = MachineProfile::load_from_file(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SettingsError::LoadError(_)));
}

#[test]
fn test_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("config.yaml");
    fs::write(&file, "X_OFFSET: 0").unwrap();

    let err = MachineProfile::load_from_file(&file).unwrap_err();
    assert!(matches!(
        err,
        SettingsError::Config(ConfigError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_invalid_values_are_rejected_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("config.json");
    fs::write(&file, PROFILE_JSON.replace("\"G1_SPEED\": 1500", "\"G1_SPEED\": 0")).unwrap();

    let err = MachineProfile::load_from_file(&file).unwrap_err();
    assert!(matches!(
        err,
        SettingsError::Config(ConfigError::ValueOutOfRange { ref key, .. }) if key == "G1_SPEED"
    ));
}

#[test]
fn test_shipped_profile_loads() {
    let file = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/config.json");
    let profile = MachineProfile::load_from_file(&file).unwrap();
    assert!(profile.validate().is_ok());
}
