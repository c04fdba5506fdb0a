//! Engine command surface and error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::library::Track;

/// Errors reported by an audio backend.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no audio output device available")]
    NoOutputDevice(#[from] rodio::StreamError),

    #[error("failed to open {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path:?}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
}

/// Commands the player issues to the audio backend.
///
/// Every call returns immediately; decoding and output happen on the
/// backend's own thread. At most one track is loaded at a time and `load`
/// replaces whatever was loaded before. Only `load` can fail, and a failed
/// load leaves the backend with nothing loaded.
pub trait AudioEngine {
    fn load(&mut self, track: &Track) -> Result<(), EngineError>;
    fn unload(&mut self);
    fn play(&mut self);
    fn pause(&mut self);
    fn unpause(&mut self);
    fn stop(&mut self);
}
