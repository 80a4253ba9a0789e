use crate::convert;
use core_types::{Frame, FrameType, MonitorSlow};

const KIND: FrameType = FrameType::MonitorSlow;

/// Decode a slow-cycle boiler monitor frame (0x19): lifetime counters and
/// the slow-moving temperatures.
pub fn decode(frame: &Frame) -> Option<MonitorSlow> {
    if frame.frame_type() != KIND.byte() || frame.bytes.len() != KIND.frame_len() {
        return None;
    }
    let b = &frame.bytes;

    let burner_runtime_minutes = convert::to_int(&b[17..20]);
    let heating_runtime_minutes = convert::to_int(&b[23..26]);

    Some(MonitorSlow {
        burner_out_temperature: convert::to_scaled(&b[6..8], 0.1),
        pump_duty: convert::to_scaled(&b[13..14], 0.01),
        burner_starts: convert::to_int(&b[14..17]),
        burner_runtime_minutes,
        heating_runtime_minutes,
        hot_water_runtime_minutes: i64::from(burner_runtime_minutes)
            - i64::from(heating_runtime_minutes),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Frame {
        Frame::new(vec![
            0x08, 0x00, 0x19, 0x00, 0x00, 0x00, 0x02, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x64,
            0x00, 0x30, 0x39, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x00, 0x00, 0x00,
            0x00, 0xA9,
        ])
    }

    #[test]
    fn test_decodes_sample_frame() {
        let record = decode(&sample()).expect("valid 0x19 frame");
        assert!((record.burner_out_temperature - 57.5).abs() < 1e-9);
        assert!((record.pump_duty - 1.0).abs() < 1e-9);
        assert_eq!(record.burner_starts, 12_345);
        assert_eq!(record.burner_runtime_minutes, 65_536);
        assert_eq!(record.heating_runtime_minutes, 32_768);
    }

    #[test]
    fn test_hot_water_runtime_is_derived() {
        let record = decode(&sample()).unwrap();
        assert_eq!(record.hot_water_runtime_minutes, 32_768);
    }

    #[test]
    fn test_inconsistent_counters_go_negative() {
        let mut bytes = sample().bytes;
        // Heating counter ahead of the burner counter.
        bytes[17] = 0x00;
        bytes[18] = 0x00;
        bytes[19] = 0x0A;
        let record = decode(&Frame::new(bytes)).unwrap();
        assert_eq!(record.hot_water_runtime_minutes, 10 - 32_768);
    }

    #[test]
    fn test_wrong_length_rejected() {
        let bytes = sample().bytes[..29].to_vec();
        assert!(decode(&Frame::new(bytes)).is_none());
    }
}
