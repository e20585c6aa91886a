use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rocket_estimation::*;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Closed-form flight estimate for a single-stage rocket"
)]
struct Cli {
    /// Flight configuration (TOML). The demonstration rocket is used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Ambient temperature in Kelvin
    #[arg(long)]
    temperature: Option<f64>,

    /// Ambient pressure in Pascals
    #[arg(long)]
    pressure: Option<f64>,

    /// Write the effective configuration to this file
    #[arg(long)]
    save: Option<PathBuf>,
}

fn demo_config() -> FlightConfig {
    FlightConfig {
        vehicle_mass_empty: 0.6,
        vehicle_mass_loaded: 0.6,
        engine_mass_empty: 0.1,
        engine_mass_loaded: 0.125,
        area: 0.002,
        impulse: 20.0,
        thrust: 40.0,
        drag_coefficient: DEFAULT_DRAG_COEFFICIENT,
        temperature: STP_TEMPERATURE,
        pressure: STP_PRESSURE,
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => FlightConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => {
            info!("no configuration given, using the demonstration rocket");
            demo_config()
        }
    };

    let mut model = config.into_model();

    if cli.temperature.is_some() || cli.pressure.is_some() {
        let temperature = cli
            .temperature
            .unwrap_or_else(|| model.conditions().temperature());
        let pressure = cli
            .pressure
            .unwrap_or_else(|| model.conditions().pressure());
        info!(temperature, pressure, "overriding atmospheric conditions");
        // A failure stays recorded in the model and is shown by the report.
        let _ = model.update_conditions(temperature, pressure);
    }

    if let Some(path) = &cli.save {
        FlightConfig::from_model(&model)
            .save(path)
            .with_context(|| format!("saving configuration to {}", path.display()))?;
        info!(path = %path.display(), "configuration saved");
    }

    println!("{}", Report::new(&model));

    if let Err(e) = model.trajectory() {
        anyhow::bail!("flight estimate failed: {e}");
    }

    Ok(())
}
