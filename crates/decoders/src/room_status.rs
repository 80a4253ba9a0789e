use crate::convert;
use core_types::{Frame, FrameType, RoomStatus};

const KIND: FrameType = FrameType::RoomStatus;

/// Decode a Moduline room unit status frame (0x91): the setpoint and the
/// measured room temperature.
pub fn decode(frame: &Frame) -> Option<RoomStatus> {
    if frame.frame_type() != KIND.byte() || frame.bytes.len() != KIND.frame_len() {
        return None;
    }
    let b = &frame.bytes;

    Some(RoomStatus {
        setpoint: convert::to_scaled(&b[5..6], 0.5),
        room_temperature: convert::to_scaled(&b[15..17], 0.1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Frame {
        Frame::new(vec![
            0x17, 0x00, 0x91, 0x00, 0x00, 0x2B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0xD7, 0x00, 0x70,
        ])
    }

    #[test]
    fn test_decodes_sample_frame() {
        let record = decode(&sample()).expect("valid 0x91 frame");
        assert!((record.setpoint - 21.5).abs() < 1e-9);
        assert!((record.room_temperature - 21.5).abs() < 1e-9);
    }

    #[test]
    fn test_wrong_length_rejected() {
        let bytes = sample().bytes[..18].to_vec();
        assert!(decode(&Frame::new(bytes)).is_none());
    }
}
