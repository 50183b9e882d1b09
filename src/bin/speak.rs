//! speak: send a line of text through the speech sinks.
//!
//! Text comes from the command line, or from stdin when no arguments are
//! given, and is routed through the same backend selection as saytime.

use clap::Parser;
use std::io::Read;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use saytime::config::Config;
use saytime::speech::SpeechRouter;

#[derive(Parser, Debug)]
#[command(name = "speak", about = "Speak a line of text")]
struct Args {
    /// Text to speak; reads stdin when empty
    text: Vec<String>,

    /// Path to config YAML
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Language code for the web TTS endpoint ("en", "fr", "de", ...)
    #[arg(short, long)]
    language: Option<String>,

    /// Speech backend: auto, google, espeak, or console
    #[arg(short, long)]
    backend: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::load(args.config.as_deref());
    if let Some(language) = args.language {
        config.speech.language = language;
    }
    if let Some(backend) = args.backend {
        config.speech.backend = backend;
    }

    let text = if args.text.is_empty() {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        input.trim().to_string()
    } else {
        args.text.join(" ")
    };

    if text.is_empty() {
        tracing::warn!("Nothing to speak");
        return Ok(());
    }

    SpeechRouter::new(&config).announce(&text).await;

    Ok(())
}
