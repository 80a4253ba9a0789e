use serde::Serialize;

pub mod transport;
pub use transport::{ByteSource, SerialConfig, TransportError};

/// One complete, delimited unit of bus traffic, after de-stuffing and CRC
/// validation. Positionally interpreted as
/// `[sender, receiver, type, offset, data.., crc]`.
///
/// The break marker that delimited the frame on the wire is not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub bytes: Vec<u8>,
}

/// Shortest frame the bus can produce: four header bytes plus the CRC.
pub const MIN_FRAME_LEN: usize = 5;

impl Frame {
    /// Wrap an already-validated byte sequence. Callers are expected to
    /// have checked length and CRC; the accessors assume `MIN_FRAME_LEN`.
    pub fn new(bytes: Vec<u8>) -> Self {
        debug_assert!(bytes.len() >= MIN_FRAME_LEN);
        Self { bytes }
    }

    pub fn sender(&self) -> u8 {
        self.bytes[0]
    }

    pub fn receiver(&self) -> u8 {
        self.bytes[1]
    }

    /// The decoder-selection key. Unknown values are legal bus traffic.
    pub fn frame_type(&self) -> u8 {
        self.bytes[2]
    }

    pub fn offset(&self) -> u8 {
        self.bytes[3]
    }

    pub fn data(&self) -> &[u8] {
        &self.bytes[4..self.bytes.len() - 1]
    }

    pub fn crc(&self) -> u8 {
        self.bytes[self.bytes.len() - 1]
    }
}

/// The closed set of message types this system decodes. Everything else on
/// the bus (polling tokens, unhandled broadcasts) is filtered out by
/// `from_byte` returning `None`; this is a whitelist, not a blacklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FrameType {
    /// UBA monitor, fast cycle (0x18).
    MonitorFast,
    /// UBA monitor, slow cycle (0x19).
    MonitorSlow,
    /// Domestic hot water monitor (0x34).
    HotWater,
    /// Moduline room unit status (0x91).
    RoomStatus,
}

impl FrameType {
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x18 => Some(FrameType::MonitorFast),
            0x19 => Some(FrameType::MonitorSlow),
            0x34 => Some(FrameType::HotWater),
            0x91 => Some(FrameType::RoomStatus),
            _ => None,
        }
    }

    pub const fn byte(self) -> u8 {
        match self {
            FrameType::MonitorFast => 0x18,
            FrameType::MonitorSlow => 0x19,
            FrameType::HotWater => 0x34,
            FrameType::RoomStatus => 0x91,
        }
    }

    /// Exact on-wire length of this message type, CRC included. Decoders
    /// reject frames of any other length to defend against a type-byte
    /// collision with an unrelated layout.
    pub const fn frame_len(self) -> usize {
        match self {
            FrameType::MonitorFast => 30,
            FrameType::MonitorSlow => 30,
            FrameType::HotWater => 21,
            FrameType::RoomStatus => 19,
        }
    }
}

/// Overall appliance activity derived from the two-character status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SystemMode {
    Heating,
    HotWater,
    Idle,
}

/// A decoded message, one variant per known frame type. Fields that do not
/// apply to a given message type simply do not exist on its variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum EmsRecord {
    MonitorFast(MonitorFast),
    MonitorSlow(MonitorSlow),
    HotWater(HotWater),
    RoomStatus(RoomStatus),
}

/// Fast-cycle boiler monitor (0x18). Temperatures in °C, pressure in bar,
/// ionization current in µA, duty cycles as fractions of 1.0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitorFast {
    pub flow_setpoint: f64,
    pub flow_temperature: f64,
    pub burner_duty_requested: f64,
    pub burner_duty: f64,
    pub boiler_temperature: f64,
    pub flow_return_temperature: f64,
    pub ionization_current: f64,
    pub pressure: f64,
    /// Two-character appliance status code, e.g. `-H` or `0A`.
    pub status_code: String,
    pub error_code: u32,
    /// Flow minus return temperature.
    pub delta_t: f64,
    /// Human-readable status, when the code is in the status table.
    pub status_text: Option<&'static str>,
    pub system_mode: Option<SystemMode>,
    /// Condensing efficiency estimate from the return temperature, absent
    /// when the return temperature falls outside the table domain.
    pub condensing_efficiency: Option<f64>,
}

/// Slow-cycle boiler monitor (0x19). Runtimes in minutes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitorSlow {
    pub burner_out_temperature: f64,
    pub pump_duty: f64,
    pub burner_starts: u32,
    pub burner_runtime_minutes: u32,
    pub heating_runtime_minutes: u32,
    /// Burner runtime minus heating runtime. Signed: the two counters come
    /// from different frames of reference and can disagree transiently.
    pub hot_water_runtime_minutes: i64,
}

/// Domestic hot water monitor (0x34).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotWater {
    pub boiler_temperature: f64,
    pub tap_water_temperature: f64,
    /// Tap water flow in liters per minute.
    pub tap_water_flow: f64,
}

/// Room unit status broadcast (0x91).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomStatus {
    pub setpoint: f64,
    pub room_temperature: f64,
}
