//! Numeric field conversions shared by all decoders.

/// Big-endian accumulation over 1 to 3 bytes. Other widths are not
/// expected on this bus and yield zero rather than failing.
pub fn to_int(data: &[u8]) -> u32 {
    match data {
        [a] => u32::from(*a),
        [a, b] => (u32::from(*a) << 8) | u32::from(*b),
        [a, b, c] => (u32::from(*a) << 16) | (u32::from(*b) << 8) | u32::from(*c),
        _ => 0,
    }
}

/// The same accumulation scaled to recover an implied fixed-point decimal
/// (scalars in practice: 0.5, 0.1, 0.01).
pub fn to_scaled(data: &[u8], scalar: f64) -> f64 {
    f64::from(to_int(data)) * scalar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths() {
        assert_eq!(to_int(&[0x7F]), 127);
        assert_eq!(to_int(&[0x02, 0x71]), 625);
        assert_eq!(to_int(&[0x01, 0x00, 0x00]), 65_536);
    }

    #[test]
    fn test_unexpected_widths_yield_zero() {
        assert_eq!(to_int(&[]), 0);
        assert_eq!(to_int(&[1, 2, 3, 4]), 0);
    }

    #[test]
    fn test_scaled() {
        assert!((to_scaled(&[0x02, 0x71], 0.1) - 62.5).abs() < 1e-9);
        assert!((to_scaled(&[0x2B], 0.5) - 21.5).abs() < 1e-9);
        assert!((to_scaled(&[0x4B], 0.01) - 0.75).abs() < 1e-9);
    }
}
