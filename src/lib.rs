//! saytime: spoken "current time" announcements for Linux.
//!
//! The core is a pure time-to-phrase formatter ([`phrase`]); everything
//! around it (reachability probe, web TTS, espeak, console fallback) is
//! plumbing for getting the phrase heard.

pub mod calendar;
pub mod config;
pub mod phrase;
pub mod probe;
pub mod speech;
