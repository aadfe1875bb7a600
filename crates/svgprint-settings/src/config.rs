//! Machine profile for SVGPrint
//!
//! Provides profile file handling and validation. Profiles are stored as JSON
//! or TOML using the upper-case key names printers' config files use
//! (`X_OFFSET`, `NOZZLE_SIZE`, ...). Every key is required; a profile is read
//! once at startup and shared read-only by every generation call.

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Keys every profile file must define.
pub const REQUIRED_KEYS: [&str; 18] = [
    "X_OFFSET",
    "Y_OFFSET",
    "Z_OFFSET",
    "X_MAX",
    "Y_MAX",
    "X_MIN",
    "Y_MIN",
    "Z_SPEED",
    "G0_SPEED",
    "G1_SPEED",
    "NOZZLE_SIZE",
    "LAYER_HEIGHT",
    "FILAMENT_DIAMETER",
    "FILAMENT_FLOW_RATE",
    "FILAMENT_TEMPERATURE",
    "BED_TEMPERATURE",
    "START_GCODE",
    "END_GCODE",
];

/// Physical and motion settings of the target printer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct MachineProfile {
    /// Offset added to every emitted X coordinate (mm)
    pub x_offset: f64,
    /// Offset added to every emitted Y coordinate (mm)
    pub y_offset: f64,
    /// Offset added to every emitted Z coordinate (mm)
    pub z_offset: f64,
    /// Bed X limit (max). Informational only, never used for clipping.
    pub x_max: f64,
    /// Bed Y limit (max)
    pub y_max: f64,
    /// Bed X limit (min)
    pub x_min: f64,
    /// Bed Y limit (min)
    pub y_min: f64,
    /// Z axis feed rate (mm/min)
    pub z_speed: f64,
    /// Travel feed rate (mm/min)
    pub g0_speed: f64,
    /// Print feed rate (mm/min)
    pub g1_speed: f64,
    /// Nozzle diameter, used as the extruded line width (mm)
    pub nozzle_size: f64,
    /// Layer height (mm)
    pub layer_height: f64,
    /// Filament diameter (mm)
    pub filament_diameter: f64,
    /// Extrusion multiplier
    pub filament_flow_rate: f64,
    /// Nozzle temperature (°C)
    pub filament_temperature: f64,
    /// Bed temperature (°C)
    pub bed_temperature: f64,
    /// G-code emitted before the first layer
    pub start_gcode: String,
    /// G-code emitted after the last layer
    pub end_gcode: String,
}

impl Default for MachineProfile {
    fn default() -> Self {
        Self {
            x_offset: 0.0,
            y_offset: 0.0,
            z_offset: 0.0,
            x_max: 180.0,
            y_max: 180.0,
            x_min: 0.0,
            y_min: 0.0,
            z_speed: 10.0,
            g0_speed: 3000.0,
            g1_speed: 1200.0,
            nozzle_size: 0.4,
            layer_height: 0.2,
            filament_diameter: 1.75,
            filament_flow_rate: 1.0,
            filament_temperature: 200.0,
            bed_temperature: 50.0,
            start_gcode: String::new(),
            end_gcode: String::new(),
        }
    }
}

impl MachineProfile {
    /// Load a profile from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let profile = if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            Self::from_toml_str(&content)?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()).into());
        };

        tracing::debug!(path = %path.display(), "Loaded machine profile");
        Ok(profile)
    }

    /// Save the profile to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()).into());
        };

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Parse and validate a JSON profile
    pub fn from_json_str(content: &str) -> SettingsResult<Self> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        let object = value
            .as_object()
            .ok_or_else(|| SettingsError::LoadError("profile must be a JSON object".to_string()))?;
        check_required_keys(|key| object.contains_key(key))?;

        let profile: Self = serde_json::from_value(value)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Parse and validate a TOML profile
    pub fn from_toml_str(content: &str) -> SettingsResult<Self> {
        let table: toml::Table = toml::from_str(content)?;
        check_required_keys(|key| table.contains_key(key))?;

        let profile: Self = toml::from_str(content)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Validate the profile
    pub fn validate(&self) -> ConfigResult<()> {
        let positive = [
            ("NOZZLE_SIZE", self.nozzle_size),
            ("LAYER_HEIGHT", self.layer_height),
            ("FILAMENT_DIAMETER", self.filament_diameter),
            ("FILAMENT_FLOW_RATE", self.filament_flow_rate),
            ("Z_SPEED", self.z_speed),
            ("G0_SPEED", self.g0_speed),
            ("G1_SPEED", self.g1_speed),
        ];
        for (key, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValueOutOfRange {
                    key: key.to_string(),
                    value: value.to_string(),
                });
            }
        }

        if self.x_min >= self.x_max {
            return Err(ConfigError::ValueOutOfRange {
                key: "X_MIN".to_string(),
                value: format!("{} (X_MAX is {})", self.x_min, self.x_max),
            });
        }
        if self.y_min >= self.y_max {
            return Err(ConfigError::ValueOutOfRange {
                key: "Y_MIN".to_string(),
                value: format!("{} (Y_MAX is {})", self.y_min, self.y_max),
            });
        }

        Ok(())
    }

    /// Cross-section area of the filament (mm²)
    pub fn filament_area(&self) -> f64 {
        let radius = self.filament_diameter / 2.0;
        std::f64::consts::PI * radius * radius
    }
}

fn check_required_keys<F>(has_key: F) -> ConfigResult<()>
where
    F: Fn(&str) -> bool,
{
    match REQUIRED_KEYS.iter().find(|key| !has_key(**key)) {
        Some(key) => Err(ConfigError::MissingKey((*key).to_string())),
        None => Ok(()),
    }
}
