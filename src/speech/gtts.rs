//! Web text-to-speech via the Google Translate endpoint.
//!
//! Builds the `translate_tts` query URL, fetches the MP3 response, and plays
//! it on the default audio device with rodio. If the audio device cannot be
//! opened the bytes are piped into an external player (mpv by default)
//! instead.

use std::io::{Cursor, Write};
use std::process::{Command, Stdio};
use std::time::Duration;

use reqwest::{Client, Url};
use rodio::{Decoder, OutputStreamBuilder, Sink};
use tracing::{debug, warn};

use super::SpeakError;
use crate::config::GoogleConfig;

pub struct GoogleSpeaker {
    client: Client,
    endpoint: String,
    language: String,
    fallback_player: String,
}

impl GoogleSpeaker {
    pub fn new(config: &GoogleConfig, language: &str) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(3))
            .timeout(Duration::from_secs(30))
            // The endpoint rejects requests without a browser user agent.
            .user_agent("Mozilla")
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            endpoint: config.endpoint.clone(),
            language: language.to_string(),
            fallback_player: config.fallback_player.clone(),
        }
    }

    /// Fetch synthesized audio for `text` and play it. Blocks until the
    /// audio finishes.
    pub async fn speak(&self, text: &str) -> Result<(), SpeakError> {
        let url = request_url(&self.endpoint, &self.language, text)?;

        debug!("Requesting TTS audio for {} chars", text.len());
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(classify_request_error)?
            .error_for_status()?;

        let bytes = response.bytes().await?;
        debug!("Received {} bytes of MP3 audio", bytes.len());

        let fallback_player = self.fallback_player.clone();
        tokio::task::spawn_blocking(move || match play_mp3(&bytes) {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!("Audio device playback failed: {e}, piping to {fallback_player}");
                pipe_to_player(&fallback_player, &bytes)
            }
        })
        .await
        .map_err(|e| SpeakError::Playback(format!("playback task failed: {e}")))?
    }
}

/// Connect and timeout failures mean the network went away; everything else
/// is a plain request error.
fn classify_request_error(e: reqwest::Error) -> SpeakError {
    if e.is_connect() || e.is_timeout() {
        SpeakError::NetworkUnreachable
    } else {
        SpeakError::Request(e)
    }
}

/// Build the translate_tts request URL for a language and message.
fn request_url(endpoint: &str, language: &str, text: &str) -> Result<Url, SpeakError> {
    Url::parse_with_params(
        endpoint,
        &[
            ("ie", "UTF-8"),
            ("client", "tw-ob"),
            ("tl", language),
            ("q", text),
        ],
    )
    .map_err(|e| SpeakError::BackendUnavailable(format!("bad TTS endpoint: {e}")))
}

/// Decode and play an MP3 buffer on the default output device.
fn play_mp3(bytes: &[u8]) -> Result<(), SpeakError> {
    let stream = OutputStreamBuilder::open_default_stream()
        .map_err(|e| SpeakError::Playback(format!("failed to open audio output: {e}")))?;

    let decoder = Decoder::new(Cursor::new(bytes.to_vec()))
        .map_err(|e| SpeakError::Playback(format!("failed to decode MP3 stream: {e}")))?;

    let sink = Sink::connect_new(stream.mixer());
    sink.append(decoder);
    sink.sleep_until_end();
    Ok(())
}

/// Pipe MP3 bytes into an external player's stdin.
fn pipe_to_player(player: &str, bytes: &[u8]) -> Result<(), SpeakError> {
    let mut child = Command::new(player)
        .args(["--really-quiet", "-"])
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| SpeakError::BackendUnavailable(format!("{player}: {e}")))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(bytes)
            .map_err(|e| SpeakError::Playback(format!("failed to write to {player}: {e}")))?;
    }

    let status = child
        .wait()
        .map_err(|e| SpeakError::Playback(format!("{player} failed: {e}")))?;

    if !status.success() {
        return Err(SpeakError::Playback(format!(
            "{player} exited with {status}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_url_carries_text_and_language() {
        let url = request_url(
            "https://translate.google.com/translate_tts",
            "fr",
            "bonjour tout le monde",
        )
        .unwrap();

        assert_eq!(url.host_str(), Some("translate.google.com"));
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("tl".into(), "fr".into())));
        assert!(pairs.contains(&("client".into(), "tw-ob".into())));
        assert!(pairs.contains(&("q".into(), "bonjour tout le monde".into())));
    }

    #[test]
    fn request_url_rejects_bad_endpoint() {
        assert!(request_url("not a url", "en", "hi").is_err());
    }
}
