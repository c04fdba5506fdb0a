//! Utilities for creating `rodio` sinks from `Track` values.

use std::fs::File;
use std::io::BufReader;

use rodio::{Decoder, OutputStream, Sink};

use crate::library::Track;

use super::types::EngineError;

/// Open and decode `track`, returning a paused `Sink` positioned at the
/// start of the file.
pub(super) fn create_sink(handle: &OutputStream, track: &Track) -> Result<Sink, EngineError> {
    let file = File::open(&track.path).map_err(|e| EngineError::Open {
        path: track.path.clone(),
        source: e,
    })?;

    let source = Decoder::new(BufReader::new(file)).map_err(|e| EngineError::Decode {
        path: track.path.clone(),
        source: e,
    })?;

    let sink = Sink::connect_new(handle.mixer());
    sink.append(source);
    sink.pause();
    Ok(sink)
}
