//! Configuration management for saytime-rs.
//!
//! Loads config from YAML files in standard locations. Every section has
//! defaults, so the tool runs fine with no config file at all.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    pub host: String,
    pub port: u16,
    pub timeout_secs: f64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        // Google public DNS over TCP: a bare IP, no resolution needed.
        Self {
            host: "8.8.8.8".into(),
            port: 53,
            timeout_secs: 3.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// Backend selection: "auto", "google", "espeak", or "console".
    pub backend: String,
    /// Language code passed to the web TTS endpoint ("en", "fr", "de", ...).
    pub language: String,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            backend: "auto".into(),
            language: "en".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GoogleConfig {
    pub endpoint: String,
    /// External player the MP3 bytes are piped to when the audio device
    /// cannot be opened directly.
    pub fallback_player: String,
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://translate.google.com/translate_tts".into(),
            fallback_player: "mpv".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EspeakConfig {
    /// Binary to try first; plain "espeak" is the fallback.
    pub binary: String,
    pub voice: String,
    /// Words per minute.
    pub rate: u32,
    /// Amplitude 0-200.
    pub amplitude: u32,
    /// Pitch 0-99.
    pub pitch: u32,
    /// Pause between words, in 10ms units.
    pub word_gap: u32,
}

impl Default for EspeakConfig {
    fn default() -> Self {
        Self {
            binary: "espeak-ng".into(),
            voice: "en-us".into(),
            rate: 220,
            amplitude: 100,
            pitch: 80,
            word_gap: 0,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub probe: ProbeConfig,
    pub speech: SpeechConfig,
    pub google: GoogleConfig,
    pub espeak: EspeakConfig,
}

impl Config {
    /// Load configuration from YAML file.
    ///
    /// Searches standard locations if no path is provided:
    /// 1. ./saytime.yaml
    /// 2. ~/.config/saytime/config.yaml
    /// 3. /etc/saytime/config.yaml
    pub fn load(path: Option<&Path>) -> Self {
        let resolved = path.map(PathBuf::from).or_else(|| {
            let candidates = [
                std::env::current_dir().ok().map(|d| d.join("saytime.yaml")),
                dirs::home_dir().map(|h| h.join(".config/saytime/config.yaml")),
                Some(PathBuf::from("/etc/saytime/config.yaml")),
            ];
            candidates.into_iter().flatten().find(|p| p.exists())
        });

        let Some(config_path) = resolved else {
            info!("No config file found, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match serde_yml::from_str(&contents) {
                Ok(config) => {
                    info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {e}, using defaults", config_path.display());
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {e}, using defaults", config_path.display());
                Self::default()
            }
        }
    }
}
