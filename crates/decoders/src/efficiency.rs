//! Condensing-efficiency estimation.
//!
//! Below the flue gas dew point the boiler recovers latent heat from the
//! exhaust, so efficiency falls off steeply once the return water
//! temperature climbs through the condensation band. The table maps
//! integer return temperatures (°C) to efficiency percentages; anything in
//! between is interpolated linearly.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum EfficiencyError {
    #[error("return temperature {0} °C outside table domain {MIN_TEMP}..{MAX_TEMP}")]
    OutOfDomain(f64),
}

const MIN_TEMP: f64 = 10.0;
const MAX_TEMP: f64 = 100.0;

/// Efficiency at integer return temperatures 10..=100 °C.
#[rustfmt::skip]
static TABLE: [f64; 91] = [
    98.75, 98.70, 98.65, 98.60, 98.55, 98.50, 98.45,
    98.40, 98.35, 98.30, 98.25, 98.20, 98.15, 98.10,
    98.05, 98.00, 97.95, 97.90, 97.85, 97.80, 97.75,
    97.70, 97.65, 97.60, 97.55, 97.50, 97.45, 97.40,
    97.35, 97.30, 97.25, 97.20, 97.15, 97.10, 97.05,
    97.00, 96.20, 95.40, 94.60, 93.80, 93.00, 92.20,
    91.40, 90.60, 89.80, 89.00, 88.20, 87.40, 87.35,
    87.30, 87.25, 87.20, 87.15, 87.10, 87.05, 87.00,
    86.95, 86.90, 86.85, 86.80, 86.75, 86.70, 86.65,
    86.60, 86.55, 86.50, 86.45, 86.40, 86.35, 86.30,
    86.25, 86.20, 86.15, 86.10, 86.05, 86.00, 85.95,
    85.90, 85.85, 85.80, 85.75, 85.70, 85.65, 85.60,
    85.55, 85.50, 85.45, 85.40, 85.35, 85.30, 85.25,
];

/// Estimate the condensing efficiency (percent) for a return water
/// temperature.
///
/// The valid domain is `10.0 <= t < 100.0`. Anything outside (including
/// NaN) is a hard error, never clamped: out-of-domain readings indicate a
/// sensor or unit-conversion bug upstream, not normal bus noise.
pub fn estimate(return_temp: f64) -> Result<f64, EfficiencyError> {
    if !(MIN_TEMP..MAX_TEMP).contains(&return_temp) {
        return Err(EfficiencyError::OutOfDomain(return_temp));
    }
    let whole = return_temp.floor();
    let index = (whole - MIN_TEMP) as usize;
    let low = TABLE[index];
    let high = TABLE[index + 1];
    Ok(low + (return_temp - whole) * (high - low))
}
