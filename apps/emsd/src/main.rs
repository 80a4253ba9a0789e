mod config;
mod pipeline;
mod sink;

use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use config::Config;
use pipeline::Pipeline;
use sink::DomoticzSink;
use transport_serial::EmsPort;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let path: PathBuf = std::env::args_os()
        .nth(1)
        .map(Into::into)
        .unwrap_or_else(|| PathBuf::from("emsd.toml"));
    let config = Config::load(&path)?;

    let mut source = EmsPort::open(&config.serial).context("opening EMS bus device")?;
    let mut sink = DomoticzSink::new(&config.sink);

    tracing::info!(sink = %config.sink.base_url, "decoding EMS traffic");
    Pipeline::new(config.sink.targets.clone()).run(&mut source, &mut sink)
}
