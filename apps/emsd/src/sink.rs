use std::time::Duration;

use crate::config::SinkConfig;

/// Destination for decoded values. Each push carries the numeric value and
/// the virtual device index it belongs to; delivery failures are the
/// sink's problem and must never propagate into the decoding pipeline.
pub trait Sink {
    fn push(&mut self, idx: u32, value: f64);
}

/// Pushes values to a Domoticz instance via its JSON API.
pub struct DomoticzSink {
    agent: ureq::Agent,
    base_url: String,
}

impl DomoticzSink {
    pub fn new(config: &SinkConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build();
        Self {
            agent,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Sink for DomoticzSink {
    fn push(&mut self, idx: u32, value: f64) {
        let url = format!(
            "{}/json.htm?type=command&param=udevice&idx={idx}&nvalue=0&svalue={value}",
            self.base_url
        );
        // Network or HTTP errors are logged and suppressed; the next frame
        // matters more than this sample.
        if let Err(err) = self.agent.get(&url).call() {
            tracing::warn!(idx, value, %err, "sink push failed");
        }
    }
}
