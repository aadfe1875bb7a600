//! SVGPrint Settings Crate
//!
//! Handles the machine profile: loading, validation and persistence.

pub mod config;
pub mod error;

pub use config::{MachineProfile, REQUIRED_KEYS};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
