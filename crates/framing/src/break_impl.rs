use crate::{crc, destuff::destuff, Framer};
use core_types::{Frame, MIN_FRAME_LEN};

/// Byte the driver uses to introduce a marked error condition.
const MARK: u8 = 0xFF;

/// Scanner state: how much of a potential break marker we have seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    Normal,
    SawFf,
    SawFf00,
}

/// Synchronizes on the EMS inter-message break.
///
/// The bus delimits messages by holding the line low for ~1.1-1.2 ms. With
/// PARMRK enabled the UART reports that framing error in-band as the
/// reserved triplet `0xFF 0x00 0x00`, so frame boundaries have to be
/// recovered by disambiguating three cases while scanning:
///
/// - `0xFF` then anything but `0x00`: the `0xFF` was genuine payload.
/// - `0xFF 0x00` then anything but `0x00`: both bytes were genuine payload.
/// - `0xFF 0x00 0x00`: a true break; the marker itself is not part of
///   either frame.
///
/// A byte-at-a-time Mealy machine with no lookahead beyond the two bytes
/// needed to confirm or refute a break. On a confirmed break the candidate
/// is destuffed, CRC-checked and emitted; runts (< 5 bytes) and CRC
/// failures are dropped silently because line noise is normal operation.
pub struct BreakFramer {
    buffer: Vec<u8>,
    state: Scan,
}

impl BreakFramer {
    pub fn new() -> Self {
        Self {
            buffer: Vec::with_capacity(64),
            state: Scan::Normal,
        }
    }

    fn on_break(&mut self, frames: &mut Vec<Frame>) {
        if self.buffer.len() >= MIN_FRAME_LEN {
            // Destuff first, then CRC over the logical bytes.
            let candidate = destuff(&self.buffer);
            if candidate.len() >= MIN_FRAME_LEN && crc::validate(&candidate) {
                frames.push(Frame::new(candidate));
            }
        }
        self.buffer.clear();
    }
}

impl Default for BreakFramer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framer for BreakFramer {
    fn push(&mut self, bytes: &[u8]) -> Vec<Frame> {
        let mut frames = Vec::new();

        for &b in bytes {
            match self.state {
                Scan::Normal => {
                    if b == MARK {
                        self.state = Scan::SawFf;
                    } else {
                        self.buffer.push(b);
                    }
                }
                Scan::SawFf => {
                    if b == 0x00 {
                        self.state = Scan::SawFf00;
                    } else {
                        // Refuted: the mark was payload after all.
                        self.buffer.push(MARK);
                        self.buffer.push(b);
                        self.state = Scan::Normal;
                    }
                }
                Scan::SawFf00 => {
                    if b == 0x00 {
                        self.on_break(&mut frames);
                    } else {
                        self.buffer.push(MARK);
                        self.buffer.push(0x00);
                        self.buffer.push(b);
                    }
                    self.state = Scan::Normal;
                }
            }
        }

        frames
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.state = Scan::Normal;
    }

    fn name(&self) -> &'static str {
        "EMS break"
    }
}
