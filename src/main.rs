//! saytime: announce the current time as natural speech.

use clap::Parser;
use std::path::PathBuf;

use chrono::{Local, Timelike};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use saytime::calendar;
use saytime::config::Config;
use saytime::phrase::{self, ClockReading};
use saytime::speech::SpeechRouter;

#[derive(Parser, Debug)]
#[command(name = "saytime", about = "Speak the current time")]
struct Args {
    /// Path to config YAML
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also announce the date and day of the week
    #[arg(short, long)]
    verbose: bool,

    /// Speech backend: auto, google, espeak, or console
    #[arg(short, long)]
    backend: Option<String>,

    /// Announce this time instead of the system clock (HH:MM)
    #[arg(short, long)]
    time: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Logs go to stderr: stdout is reserved for the console fallback,
    // where a screen reader may read whatever lands there.
    let filter = if args.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::load(args.config.as_deref());
    if let Some(backend) = &args.backend {
        config.speech.backend = backend.clone();
    }

    let now = Local::now();
    let reading = match &args.time {
        Some(spec) => parse_time(spec)?,
        None => ClockReading::new(now.hour(), now.minute())?,
    };

    let date_context = args.verbose.then(|| calendar::date_context(now.date_naive()));
    let message = phrase::compose_phrase(reading, date_context.as_deref())?;
    debug!("Composed phrase: {message}");

    let router = SpeechRouter::new(&config);
    router.announce(&message).await;

    Ok(())
}

/// Parse an "HH:MM" override into a validated clock reading.
fn parse_time(spec: &str) -> Result<ClockReading, String> {
    let (h, m) = spec
        .split_once(':')
        .ok_or_else(|| format!("expected HH:MM, got '{spec}'"))?;
    let hour: u32 = h
        .trim()
        .parse()
        .map_err(|_| format!("invalid hour in '{spec}'"))?;
    let minute: u32 = m
        .trim()
        .parse()
        .map_err(|_| format!("invalid minute in '{spec}'"))?;
    ClockReading::new(hour, minute).map_err(|e| e.to_string())
}
