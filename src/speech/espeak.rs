//! Local speech via the espeak command line.
//!
//! Tries the configured binary (espeak-ng by default) and falls back to
//! plain espeak. Voice parameters come from config; the defaults are a
//! faster, higher-pitched voice than espeak ships with.

use std::process::{Command, Stdio};

use tracing::debug;

use super::SpeakError;
use crate::config::EspeakConfig;

#[derive(Clone)]
pub struct EspeakSpeaker {
    config: EspeakConfig,
}

impl EspeakSpeaker {
    pub fn new(config: EspeakConfig) -> Self {
        Self { config }
    }

    pub fn is_available(&self) -> bool {
        self.resolve_binary().is_some()
    }

    /// Speak `text` through espeak. Blocks until the audio finishes, so
    /// call it from a blocking task.
    pub fn speak(&self, text: &str) -> Result<(), SpeakError> {
        let binary = self.resolve_binary().ok_or_else(|| {
            SpeakError::BackendUnavailable(format!(
                "neither {} nor espeak is on PATH",
                self.config.binary
            ))
        })?;

        let args = voice_args(&self.config);
        debug!("Running {binary} {}", args.join(" "));

        let status = Command::new(&binary)
            .args(&args)
            .arg(text)
            .status()
            .map_err(|e| SpeakError::BackendUnavailable(format!("{binary}: {e}")))?;

        if !status.success() {
            return Err(SpeakError::Playback(format!(
                "{binary} exited with {status}"
            )));
        }
        Ok(())
    }

    fn resolve_binary(&self) -> Option<String> {
        for candidate in [self.config.binary.as_str(), "espeak"] {
            let found = Command::new(candidate)
                .arg("--version")
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .is_ok();
            if found {
                return Some(candidate.to_string());
            }
        }
        None
    }
}

/// espeak argv for the configured voice parameters.
fn voice_args(config: &EspeakConfig) -> Vec<String> {
    vec![
        "-v".into(),
        config.voice.clone(),
        "-s".into(),
        config.rate.to_string(),
        "-a".into(),
        config.amplitude.to_string(),
        "-p".into(),
        config.pitch.to_string(),
        "-g".into(),
        config.word_gap.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voice_args_reflect_config() {
        let args = voice_args(&EspeakConfig::default());
        assert_eq!(
            args,
            vec!["-v", "en-us", "-s", "220", "-a", "100", "-p", "80", "-g", "0"]
        );
    }

    #[test]
    fn voice_args_custom_voice() {
        let config = EspeakConfig {
            voice: "other/en-sc".into(),
            rate: 175,
            ..EspeakConfig::default()
        };
        let args = voice_args(&config);
        assert_eq!(args[1], "other/en-sc");
        assert_eq!(args[3], "175");
    }
}
