//! Appliance status codes.
//!
//! The fast monitor carries a two-character status code. The table below is
//! the set of codes observed on the bus; codes outside it are passed
//! through undescribed, which is not an error. Error-status codes have
//! sub-codes and would need a nested table; not captured yet.

use core_types::SystemMode;

/// Human-readable description for a known status code.
pub fn describe(code: &str) -> Option<&'static str> {
    match code {
        "-A" => Some("Service Mode Enabled"),
        "-H" => Some("Heating Mode Enabled"),
        "=H" => Some("Domestic Hot Water Mode Enabled"),
        "0A" => Some("Waiting..."),
        "0C" => Some("Preparing to Ignite the burner"),
        "0E" => Some("Waiting, anti-pendel"),
        "0H" => Some("Standby, ready to heat"),
        "0L" => Some("Adjusting Gas intake"),
        "0U" => Some("Starting up the unit"),
        _ => None,
    }
}

/// Tri-state activity derived from the status code: heating, hot water, or
/// idle for any other known code. Unknown codes yield no mode at all.
pub fn system_mode(code: &str) -> Option<SystemMode> {
    match code {
        "-H" => Some(SystemMode::Heating),
        "=H" => Some(SystemMode::HotWater),
        _ => describe(code).map(|_| SystemMode::Idle),
    }
}
