//! Typed decoders for EMS bus frames.
//!
//! One decoder per known frame type; dispatch is an exhaustive match over
//! the closed `FrameType` enum, so adding a message type is a compile-time
//! visible change. Frames whose type byte is not in the set decode to
//! `None` with no side effects; most bus traffic (polling tokens, unhandled
//! broadcasts) falls through here by design.

pub mod convert;
pub mod efficiency;
pub mod hot_water;
pub mod monitor_fast;
pub mod monitor_slow;
pub mod room_status;
pub mod status;

pub use efficiency::EfficiencyError;

use core_types::{EmsRecord, Frame, FrameType};

/// Decode a validated frame into a typed record, or `None` when the frame
/// type is unregistered or a decoder precondition fails.
pub fn decode(frame: &Frame) -> Option<EmsRecord> {
    match FrameType::from_byte(frame.frame_type())? {
        FrameType::MonitorFast => monitor_fast::decode(frame).map(EmsRecord::MonitorFast),
        FrameType::MonitorSlow => monitor_slow::decode(frame).map(EmsRecord::MonitorSlow),
        FrameType::HotWater => hot_water::decode(frame).map(EmsRecord::HotWater),
        FrameType::RoomStatus => room_status::decode(frame).map(EmsRecord::RoomStatus),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unregistered_type_decodes_to_none() {
        // 0x07 is a real bus broadcast we deliberately do not handle.
        let frame = Frame::new(vec![0x08, 0x00, 0x07, 0x00, 0x01, 0x02, 0x03]);
        assert_eq!(decode(&frame), None);
    }

    #[test]
    fn test_registered_type_with_wrong_length_decodes_to_none() {
        // Right type byte, truncated body: the decoder precondition fails
        // and no record escapes, without panicking.
        let frame = Frame::new(vec![0x17, 0x00, 0x91, 0x00, 0x2B, 0x00, 0x00]);
        assert_eq!(decode(&frame), None);
    }

    #[test]
    fn test_dispatches_to_room_status() {
        let frame = Frame::new(vec![
            0x17, 0x00, 0x91, 0x00, 0x00, 0x2B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0xD7, 0x00, 0x70,
        ]);
        match decode(&frame) {
            Some(EmsRecord::RoomStatus(record)) => {
                assert!((record.setpoint - 21.5).abs() < 1e-9);
            }
            other => panic!("expected RoomStatus, got {other:?}"),
        }
    }
}
