use std::path::Path;

use anyhow::Context;
use core_types::SerialConfig;
use serde::Deserialize;

/// Daemon configuration, loaded from a TOML file. Every field has a
/// default except the sink base URL, which has no sensible one.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub serial: SerialConfig,
    pub sink: SinkConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SinkConfig {
    /// Base URL of the Domoticz instance, e.g. `http://192.168.1.10:8080`.
    pub base_url: String,
    /// Per-request timeout; a slow dashboard must not starve frame
    /// synchronization indefinitely.
    #[serde(default = "default_sink_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default)]
    pub targets: Targets,
}

fn default_sink_timeout_ms() -> u64 {
    5_000
}

/// Domoticz virtual device indices per metric. A metric without an index
/// is decoded and logged but never pushed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Targets {
    pub room_temperature: Option<u32>,
    pub room_setpoint: Option<u32>,
    pub flow_temperature: Option<u32>,
    pub flow_return_temperature: Option<u32>,
    pub delta_t: Option<u32>,
    pub burner_temperature: Option<u32>,
    pub burner_duty_cycle: Option<u32>,
    pub pump_duty_cycle: Option<u32>,
    pub system_pressure: Option<u32>,
    pub ionization_current: Option<u32>,
    pub condensing_efficiency: Option<u32>,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config =
            toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config() {
        let config: Config = toml::from_str(
            r#"
            [sink]
            base_url = "http://127.0.0.1:8080"
            "#,
        )
        .unwrap();
        assert_eq!(config.serial.device, "/dev/serial0");
        assert_eq!(config.serial.baud, 9600);
        assert_eq!(config.sink.timeout_ms, 5_000);
        assert_eq!(config.sink.targets.room_temperature, None);
    }

    #[test]
    fn test_full_config() {
        let config: Config = toml::from_str(
            r#"
            [serial]
            device = "/dev/ttyAMA0"
            baud = 9600
            timeout_ms = 250

            [sink]
            base_url = "https://heating.local"
            timeout_ms = 2000

            [sink.targets]
            room_temperature = 69
            flow_temperature = 70
            delta_t = 83
            "#,
        )
        .unwrap();
        assert_eq!(config.serial.device, "/dev/ttyAMA0");
        assert_eq!(config.sink.timeout_ms, 2_000);
        assert_eq!(config.sink.targets.room_temperature, Some(69));
        assert_eq!(config.sink.targets.delta_t, Some(83));
        assert_eq!(config.sink.targets.pump_duty_cycle, None);
    }
}
