use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("failed to open {device}: {reason}")]
    Open { device: String, reason: String },
    #[error("failed to configure {device}: {reason}")]
    Configure { device: String, reason: String },
}

/// A blocking source of raw bus octets (a serial port in production, a
/// scripted buffer in tests).
///
/// The EMS link runs at 9600 baud, so throughput is never a concern; the
/// contract is about liveness: `read_chunk` may block up to the configured
/// timeout and returns `Ok(0)` when it expires, so the caller can simply
/// poll again.
pub trait ByteSource: Send {
    /// Read the next chunk of raw bytes into `buf`, returning how many
    /// bytes were placed there. `Ok(0)` means the read timed out.
    fn read_chunk(&mut self, buf: &mut [u8]) -> Result<usize, TransportError>;
}

/// Serial link parameters. The EMS bus itself is fixed at 9600 8N1; the
/// baud rate is configurable only to support bench setups with level
/// shifters that resample the bus.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SerialConfig {
    pub device: String,
    pub baud: u32,
    /// Blocking read timeout. Expiry is not an error, just a poll tick.
    pub timeout_ms: u64,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            device: "/dev/serial0".to_string(),
            baud: 9600,
            timeout_ms: 500,
        }
    }
}
