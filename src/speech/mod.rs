//! Speech sinks and output routing.
//!
//! Three ways to get a phrase out: the Google Translate TTS endpoint
//! (network, best quality), a local espeak binary, and plain console text.
//! `auto` probes the network and walks down that chain; failures cascade
//! the same way, with each failure class logged distinctly.

pub mod espeak;
pub mod gtts;

use std::time::Duration;

use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;
use crate::probe;

#[derive(Debug, Error)]
pub enum SpeakError {
    #[error("network unreachable")]
    NetworkUnreachable,

    #[error("speech backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("TTS request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("audio playback failed: {0}")]
    Playback(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Auto,
    Google,
    Espeak,
    Console,
}

impl Backend {
    pub fn from_str(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Self::Auto,
            "google" | "gtts" | "web" => Self::Google,
            "espeak" | "local" => Self::Espeak,
            "console" | "text" => Self::Console,
            other => {
                warn!("Unknown backend '{other}', using auto");
                Self::Auto
            }
        }
    }
}

/// Auto policy: web TTS when the network is up, espeak when the binary is
/// present, console otherwise.
fn resolve_auto(network_up: bool, espeak_present: bool) -> Backend {
    if network_up {
        Backend::Google
    } else if espeak_present {
        Backend::Espeak
    } else {
        Backend::Console
    }
}

pub struct SpeechRouter {
    requested: Backend,
    google: gtts::GoogleSpeaker,
    espeak: espeak::EspeakSpeaker,
    probe_host: String,
    probe_port: u16,
    probe_timeout: Duration,
}

impl SpeechRouter {
    pub fn new(config: &Config) -> Self {
        Self {
            requested: Backend::from_str(&config.speech.backend),
            google: gtts::GoogleSpeaker::new(&config.google, &config.speech.language),
            espeak: espeak::EspeakSpeaker::new(config.espeak.clone()),
            probe_host: config.probe.host.clone(),
            probe_port: config.probe.port,
            probe_timeout: Duration::from_secs_f64(config.probe.timeout_secs),
        }
    }

    /// Deliver `text`, falling back down the backend chain on failure.
    ///
    /// The phrase is printed only on the console path: when a speech sink
    /// plays it, echoing to stdout would make a screen reader voice it twice.
    pub async fn announce(&self, text: &str) {
        match self.resolve().await {
            Backend::Google => {
                match self.google.speak(text).await {
                    Ok(()) => {}
                    Err(SpeakError::NetworkUnreachable) => {
                        warn!("Network unreachable, trying espeak");
                        self.espeak_or_console(text).await;
                    }
                    Err(SpeakError::Request(e)) => {
                        warn!("Web TTS request failed: {e}, trying espeak");
                        self.espeak_or_console(text).await;
                    }
                    Err(e) => {
                        warn!("Web TTS failed: {e}, trying espeak");
                        self.espeak_or_console(text).await;
                    }
                }
            }
            Backend::Espeak => self.espeak_or_console(text).await,
            Backend::Console | Backend::Auto => println!("{text}"),
        }
    }

    async fn resolve(&self) -> Backend {
        match self.requested {
            Backend::Auto => {
                let network_up =
                    probe::is_reachable(&self.probe_host, self.probe_port, self.probe_timeout)
                        .await;
                let resolved = resolve_auto(network_up, self.espeak.is_available());
                info!("Backend auto-resolved to {resolved:?} (network up: {network_up})");
                resolved
            }
            requested => requested,
        }
    }

    async fn espeak_or_console(&self, text: &str) {
        let speaker = self.espeak.clone();
        let owned = text.to_string();
        let result = tokio::task::spawn_blocking(move || speaker.speak(&owned)).await;

        match result {
            Ok(Ok(())) => {}
            Ok(Err(SpeakError::BackendUnavailable(detail))) => {
                warn!("espeak unavailable ({detail}), printing to console");
                println!("{text}");
            }
            Ok(Err(e)) => {
                warn!("espeak failed: {e}, printing to console");
                println!("{text}");
            }
            Err(e) => {
                warn!("espeak task failed: {e}, printing to console");
                println!("{text}");
            }
        }
    }
}
