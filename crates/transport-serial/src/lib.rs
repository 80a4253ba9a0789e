//! Blocking serial byte source for the EMS bus.
//!
//! The port is opened raw at the configured rate (8 data bits, no parity,
//! no flow control) and then, crucially, parity marking (PARMRK together
//! with INPCK) is enabled on the descriptor. The EMS inter-message break
//! holds the bus low for ~1.1-1.2 ms, which the UART sees as a framing
//! error; with PARMRK set the driver reports it in-band as the reserved
//! triplet `0xFF 0x00 0x00`, and escapes a genuine `0xFF` data byte by
//! doubling it. The framing layer depends on exactly this behavior.

use std::io::Read;
use std::time::Duration;

use core_types::{ByteSource, SerialConfig, TransportError};
use serialport::{ClearBuffer, SerialPort, TTYPort};

pub struct EmsPort {
    port: TTYPort,
}

impl EmsPort {
    /// Open and configure the bus device. Stale driver-buffered input is
    /// flushed so the first candidate frame starts at a break boundary.
    pub fn open(config: &SerialConfig) -> Result<Self, TransportError> {
        let port = serialport::new(&config.device, config.baud)
            .timeout(Duration::from_millis(config.timeout_ms))
            .open_native()
            .map_err(|e| TransportError::Open {
                device: config.device.clone(),
                reason: e.to_string(),
            })?;

        enable_parity_marking(&port).map_err(|reason| TransportError::Configure {
            device: config.device.clone(),
            reason,
        })?;

        port.clear(ClearBuffer::Input)
            .map_err(|e| TransportError::Io(e.to_string()))?;

        tracing::info!(device = %config.device, baud = config.baud, "EMS port open");
        Ok(Self { port })
    }
}

impl ByteSource for EmsPort {
    fn read_chunk(&mut self, buf: &mut [u8]) -> Result<usize, TransportError> {
        match self.port.read(buf) {
            Ok(n) => Ok(n),
            // Timeout is a poll tick, not a failure; the bus idles between
            // broadcast cycles.
            Err(e) if e.kind() == std::io::ErrorKind::TimedOut => Ok(0),
            Err(e) => Err(TransportError::Io(e.to_string())),
        }
    }
}

// `TTYPort` is Unix-only, so this crate is too; the reference deployment
// is a Raspberry Pi wired to the bus through a level shifter.
fn enable_parity_marking(port: &TTYPort) -> Result<(), String> {
    use nix::sys::termios::{self, InputFlags, SetArg};
    use std::os::fd::{AsRawFd, BorrowedFd};

    // The descriptor is owned by `port` and outlives this borrow.
    let fd = unsafe { BorrowedFd::borrow_raw(port.as_raw_fd()) };

    let mut attrs = termios::tcgetattr(fd).map_err(|e| e.to_string())?;
    attrs
        .input_flags
        .insert(InputFlags::PARMRK | InputFlags::INPCK);
    attrs.input_flags.remove(InputFlags::IGNPAR);
    termios::tcsetattr(fd, SetArg::TCSANOW, &attrs).map_err(|e| e.to_string())
}
