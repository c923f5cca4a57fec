//! `car-demo` binary: prints the description of a recolored vehicle record.

use clap::Parser;
use car_demo::DemoConfig;

/// Build a vehicle record, recolor it and print its description
#[derive(Debug, Parser)]
#[command(name = "car-demo", version, about)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    car_demo::logging::init()?;

    let config = DemoConfig::default();
    tracing::debug!(?config, "Starting demo");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    car_demo::run(&config, &mut out)?;

    Ok(())
}
