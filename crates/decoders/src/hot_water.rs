use crate::convert;
use core_types::{Frame, FrameType, HotWater};

const KIND: FrameType = FrameType::HotWater;

/// Decode a domestic hot water monitor frame (0x34).
pub fn decode(frame: &Frame) -> Option<HotWater> {
    if frame.frame_type() != KIND.byte() || frame.bytes.len() != KIND.frame_len() {
        return None;
    }
    let b = &frame.bytes;

    Some(HotWater {
        tap_water_temperature: convert::to_scaled(&b[5..7], 0.1),
        boiler_temperature: convert::to_scaled(&b[7..9], 0.1),
        tap_water_flow: convert::to_scaled(&b[13..14], 0.1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Frame {
        Frame::new(vec![
            0x08, 0x00, 0x34, 0x00, 0x00, 0x01, 0xF4, 0x02, 0x30, 0x00, 0x00, 0x00, 0x00, 0x23,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x9A,
        ])
    }

    #[test]
    fn test_decodes_sample_frame() {
        let record = decode(&sample()).expect("valid 0x34 frame");
        assert!((record.tap_water_temperature - 50.0).abs() < 1e-9);
        assert!((record.boiler_temperature - 56.0).abs() < 1e-9);
        assert!((record.tap_water_flow - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_wrong_length_rejected() {
        let mut bytes = sample().bytes;
        bytes.truncate(15);
        assert!(decode(&Frame::new(bytes)).is_none());
    }

    #[test]
    fn test_wrong_type_rejected() {
        let mut bytes = sample().bytes;
        bytes[2] = 0x18;
        assert!(decode(&Frame::new(bytes)).is_none());
    }
}
