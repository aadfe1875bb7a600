//! Auxiliary G-code verbs
//!
//! Each function returns one newline-terminated command.

use svgprint_settings::MachineProfile;

/// `M104`: set nozzle temperature
pub fn set_nozzle_temp(temp: f64) -> String {
    format!("M104 S{}\n", temp)
}

/// `M140`: set bed temperature
pub fn set_bed_temp(temp: f64) -> String {
    format!("M140 S{}\n", temp)
}

pub fn fan_on() -> String {
    "M106 P1 S255\n".to_string()
}

pub fn fan_off() -> String {
    "M106 P1 S0\n".to_string()
}

/// `M73`: progress percentage and remaining minutes, followed by a blank line
pub fn progress(percentage: u32, remaining_minutes: u32) -> String {
    format!("M73 P{} R{}\n\n", percentage, remaining_minutes)
}

/// `G4`: dwell for `seconds`
pub fn dwell(seconds: f64) -> String {
    format!("G4 S{}\n", seconds)
}

/// `M400 U1`: wait for moves to finish, then pause for the user
pub fn pause() -> String {
    "M400 U1\n".to_string()
}

/// `G0 Z`: vertical travel, shifted by `Z_OFFSET`
pub fn travel_z(z: f64, profile: &MachineProfile) -> String {
    format!("G0 Z{}\n", z + profile.z_offset)
}
