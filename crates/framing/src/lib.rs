use core_types::Frame;

pub mod break_impl;
pub mod crc;
pub mod destuff;

pub use break_impl::BreakFramer;

/// Trait for converting a stream of bytes into discrete Frames.
pub trait Framer: Send {
    /// Ingest new bytes and return any complete, validated frames found.
    ///
    /// Partial frames are buffered across calls; invalid candidates
    /// (too short, bad CRC) are dropped without surfacing, since line
    /// noise is expected traffic and the next break is the retry point.
    fn push(&mut self, bytes: &[u8]) -> Vec<Frame>;

    /// Reset internal state (e.g., clear buffers).
    fn reset(&mut self);

    /// Get the name of the framer.
    fn name(&self) -> &'static str;
}
