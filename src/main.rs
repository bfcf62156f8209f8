use clap::Parser;
use miette::{IntoDiagnostic, Result};
use ridebook::application::pipeline::BookingPipeline;
use ridebook::config::ConfigStore;
use ridebook::domain::booking::Booking;
use ridebook::error::InputError;
use ridebook::infrastructure::tracing_log::TracingAuditLog;
use ridebook::interfaces::csv::ride_reader::RideReader;
use ridebook::interfaces::{RideRequest, batch, demo, render};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Ride requests CSV file. Runs the demonstration rides when omitted.
    input: Option<PathBuf>,

    /// Override a configuration setting. May be repeated.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    overrides: Vec<String>,

    /// Print the configuration as JSON before booking.
    #[arg(long)]
    show_config: bool,

    /// Print bookings as JSON lines instead of text confirmations.
    #[arg(long)]
    json: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn apply_overrides(config: &ConfigStore, overrides: &[String]) -> Result<()> {
    for raw in overrides {
        let (key, value) = raw
            .split_once('=')
            .ok_or_else(|| InputError::InvalidOverride(raw.clone()))
            .into_diagnostic()?;
        if let Err(e) = config.set_from_str(key.trim(), value.trim()) {
            eprintln!("Configuration override rejected: {}", e);
        }
    }
    Ok(())
}

fn print_booking(booking: &Booking, config: &ConfigStore, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(booking).into_diagnostic()?);
    } else {
        println!("{}", render::confirmation(booking, config));
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = ConfigStore::global();
    apply_overrides(config, &cli.overrides)?;

    if cli.show_config {
        let snapshot = serde_json::to_string_pretty(&config.snapshot()).into_diagnostic()?;
        println!("{}", snapshot);
    }

    let pipeline = BookingPipeline::standard(config, Arc::new(TracingAuditLog));

    match cli.input {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            let reader = RideReader::new(file);
            for ride in reader.rides() {
                match ride {
                    Ok(ride) => run_ride(&pipeline, &ride, cli.json)?,
                    Err(e) => eprintln!("Error reading ride request: {}", e),
                }
            }
        }
        None => {
            if !cli.json {
                println!("{}", config.environment_info());
            }
            for (title, ride) in demo::demo_rides() {
                if !cli.json {
                    println!("\n[{}]", title);
                }
                run_ride(&pipeline, &ride, cli.json)?;
            }
            if !cli.json {
                let again = ConfigStore::global();
                println!(
                    "\nSame configuration instance across the app? {}",
                    std::ptr::eq(config, again)
                );
            }
        }
    }

    Ok(())
}

fn run_ride(pipeline: &BookingPipeline<'_>, ride: &RideRequest, json: bool) -> Result<()> {
    match batch::book(pipeline, ride) {
        Ok(booking) => print_booking(&booking, pipeline.config(), json)?,
        Err(e) => eprintln!("{}", e),
    }
    Ok(())
}
