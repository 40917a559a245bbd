use akweather::{ReportConfig, ReportKind, USAGE_NOTICE, WeatherClient, WeatherReportBuilder};
use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Daily, current and marine weather reports for the Kenai Peninsula
#[derive(Debug, Parser)]
#[command(name = "akweather", version, about)]
struct Args {
    /// Report to build
    #[arg(value_name = "WEATHER_TYPE", value_enum)]
    weather_type: ReportKind,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log request details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: Args) -> Result<()> {
    let config = ReportConfig::load_from_path(args.config)?;
    akweather::logging::init(&config.logging, args.verbose);

    let client =
        WeatherClient::new(&config.weather).with_context(|| "Failed to set up HTTP client")?;
    let builder = WeatherReportBuilder::new(client, config);

    println!("{USAGE_NOTICE}");
    let report = builder
        .build(args.weather_type, Utc::now())
        .with_context(|| format!("Failed to build {} report", args.weather_type))?;
    println!("{report}");

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let hint = e
                .chain()
                .find_map(|cause| cause.downcast_ref::<akweather::WeatherReportError>())
                .map(akweather::WeatherReportError::user_message);
            eprintln!("Error: {e:#}");
            if let Some(hint) = hint {
                eprintln!("{hint}");
            }
            ExitCode::FAILURE
        }
    }
}
