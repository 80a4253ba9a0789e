//! Removal of the PARMRK escape artifact.
//!
//! With parity marking enabled, the serial driver escapes a genuine `0xFF`
//! data byte by doubling it, so a candidate frame can contain `0xFF 0xFF`
//! where the bus carried a single `0xFF`. This pass runs after break
//! synchronization and before CRC validation; the CRC is computed over the
//! logical (destuffed) byte sequence. The ordering matters when the payload
//! could contain `0xFF 0xFF 0x00 0x00` and must not be reversed.

/// Collapse each adjacent `0xFF 0xFF` pair into a single `0xFF`, scanning
/// once left to right. A lone `0xFF` passes through unchanged.
pub fn destuff(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        out.push(bytes[i]);
        if bytes[i] == 0xFF && bytes.get(i + 1) == Some(&0xFF) {
            i += 2;
        } else {
            i += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doubled_ff_collapses() {
        assert_eq!(destuff(&[0x01, 0xFF, 0xFF, 0x02]), vec![0x01, 0xFF, 0x02]);
    }

    #[test]
    fn test_lone_ff_passes_through() {
        assert_eq!(destuff(&[0x01, 0xFF, 0x02]), vec![0x01, 0xFF, 0x02]);
    }

    #[test]
    fn test_triple_ff_collapses_leading_pair_only() {
        // Single pass: the first two collapse, the third is then lone.
        assert_eq!(destuff(&[0xFF, 0xFF, 0xFF]), vec![0xFF, 0xFF]);
    }

    #[test]
    fn test_two_pairs_collapse_independently() {
        assert_eq!(
            destuff(&[0xFF, 0xFF, 0x00, 0xFF, 0xFF]),
            vec![0xFF, 0x00, 0xFF]
        );
    }

    #[test]
    fn test_no_ff_is_identity() {
        let input = [0x08, 0x00, 0x18, 0x00, 0x70];
        assert_eq!(destuff(&input), input.to_vec());
    }

    #[test]
    fn test_empty() {
        assert_eq!(destuff(&[]), Vec::<u8>::new());
    }
}
