//! The EMS frame checksum.
//!
//! Bit-serial and non-standard: the XOR constant 12 and the bit order do
//! not match any catalogued CRC-8 polynomial. The algorithm is carried
//! verbatim because it checks out against captured bus traffic; do not
//! "fix" or generalize it without new captures to validate against.

/// Compute the checksum over `bytes` (the caller excludes the trailing
/// CRC byte itself).
pub fn checksum(bytes: &[u8]) -> u8 {
    let mut crc: u8 = 0;
    for &byte in bytes {
        let carry = if crc & 0x80 != 0 {
            crc ^= 12;
            1
        } else {
            0
        };
        crc = ((crc << 1) & 0xFE) | carry;
        crc ^= byte;
    }
    crc
}

/// Check a candidate frame: the checksum over everything but the last byte
/// must equal that last byte.
pub fn validate(frame: &[u8]) -> bool {
    match frame.split_last() {
        Some((&crc, body)) => checksum(body) == crc,
        None => false,
    }
}
