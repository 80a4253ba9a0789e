use core_types::{ByteSource, EmsRecord};
use framing::{BreakFramer, Framer};

use crate::config::Targets;
use crate::sink::Sink;

/// The decode pipeline: byte source -> break synchronizer -> typed
/// decoders -> sink. Single-threaded and blocking; throughput is bounded
/// by the 9600 baud line, not by anything here.
pub struct Pipeline {
    framer: BreakFramer,
    targets: Targets,
}

impl Pipeline {
    pub fn new(targets: Targets) -> Self {
        Self {
            framer: BreakFramer::new(),
            targets,
        }
    }

    /// Run until the byte source fails. Per-frame conditions (noise, CRC
    /// mismatches, unknown types) never end the loop.
    pub fn run(&mut self, source: &mut dyn ByteSource, sink: &mut dyn Sink) -> anyhow::Result<()> {
        let mut buf = [0u8; 256];
        loop {
            let n = source.read_chunk(&mut buf)?;
            if n == 0 {
                continue;
            }
            self.feed(&buf[..n], sink);
        }
    }

    /// Drive one chunk of raw bytes through the pipeline. Split out of
    /// `run` so tests can feed scripted streams without a device.
    pub fn feed(&mut self, bytes: &[u8], sink: &mut dyn Sink) {
        for frame in self.framer.push(bytes) {
            match decoders::decode(&frame) {
                Some(record) => {
                    tracing::info!(?record, "decoded");
                    self.deliver(&record, sink);
                }
                None => {
                    tracing::trace!(
                        frame_type = frame.frame_type(),
                        len = frame.bytes.len(),
                        "ignored frame"
                    );
                }
            }
        }
    }

    fn deliver(&self, record: &EmsRecord, sink: &mut dyn Sink) {
        let t = &self.targets;
        match record {
            EmsRecord::MonitorFast(m) => {
                push_to(sink, t.delta_t, m.delta_t);
                push_to(sink, t.flow_temperature, m.flow_temperature);
                push_to(sink, t.flow_return_temperature, m.flow_return_temperature);
                push_to(sink, t.burner_duty_cycle, m.burner_duty);
                push_to(sink, t.system_pressure, m.pressure);
                push_to(sink, t.ionization_current, m.ionization_current);
                if let Some(efficiency) = m.condensing_efficiency {
                    push_to(sink, t.condensing_efficiency, efficiency);
                }
            }
            EmsRecord::MonitorSlow(m) => {
                push_to(sink, t.burner_temperature, m.burner_out_temperature);
                push_to(sink, t.pump_duty_cycle, m.pump_duty);
            }
            EmsRecord::HotWater(_) => {
                // Decoded and logged; no dashboard devices for these yet.
            }
            EmsRecord::RoomStatus(m) => {
                push_to(sink, t.room_temperature, m.room_temperature);
                push_to(sink, t.room_setpoint, m.setpoint);
            }
        }
    }
}

fn push_to(sink: &mut dyn Sink, idx: Option<u32>, value: f64) {
    if let Some(idx) = idx {
        sink.push(idx, value);
    }
}
