use crate::{convert, efficiency, status};
use core_types::{Frame, FrameType, MonitorFast};

const KIND: FrameType = FrameType::MonitorFast;

/// Decode a fast-cycle boiler monitor frame (0x18).
///
/// Offsets index the whole frame, header included, matching the bus
/// documentation. Returns `None` when the type byte or the exact frame
/// length do not match; the caller treats that as "nothing to deliver".
pub fn decode(frame: &Frame) -> Option<MonitorFast> {
    if frame.frame_type() != KIND.byte() || frame.bytes.len() != KIND.frame_len() {
        return None;
    }
    let b = &frame.bytes;

    let flow_temperature = convert::to_scaled(&b[5..7], 0.1);
    let flow_return_temperature = convert::to_scaled(&b[17..19], 0.1);
    let status_code: String = [b[22] as char, b[23] as char].iter().collect();

    let condensing_efficiency = match efficiency::estimate(flow_return_temperature) {
        Ok(value) => Some(value),
        Err(err) => {
            // Out-of-domain return temperature points at a sensor problem
            // upstream; worth a warning but not worth dropping the frame.
            tracing::warn!(%err, "condensing efficiency unavailable");
            None
        }
    };

    Some(MonitorFast {
        flow_setpoint: convert::to_scaled(&b[4..5], 1.0),
        flow_temperature,
        burner_duty_requested: convert::to_scaled(&b[7..8], 0.01),
        burner_duty: convert::to_scaled(&b[8..9], 0.01),
        boiler_temperature: convert::to_scaled(&b[15..17], 0.1),
        flow_return_temperature,
        ionization_current: convert::to_scaled(&b[19..21], 0.1),
        pressure: convert::to_scaled(&b[21..22], 0.1),
        error_code: convert::to_int(&b[24..26]),
        delta_t: flow_temperature - flow_return_temperature,
        status_text: status::describe(&status_code),
        system_mode: status::system_mode(&status_code),
        status_code,
        condensing_efficiency,
    })
}
