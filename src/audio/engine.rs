use rodio::{OutputStream, OutputStreamBuilder, Sink};

use crate::library::Track;

use super::sink::create_sink;
use super::types::{AudioEngine, EngineError};

/// The rodio-backed engine driving a single sink on the default output
/// device. Decoding and mixing run on rodio's own thread; none of these
/// calls block on audio I/O.
pub struct RodioEngine {
    stream: OutputStream,
    sink: Option<Sink>,
}

impl RodioEngine {
    pub fn new() -> Result<Self, EngineError> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy for a TUI app.
        stream.log_on_drop(false);

        Ok(Self { stream, sink: None })
    }
}

impl AudioEngine for RodioEngine {
    fn load(&mut self, track: &Track) -> Result<(), EngineError> {
        let sink = create_sink(&self.stream, track)?;
        self.sink = Some(sink);
        tracing::debug!("loaded {}", track.path.display());
        Ok(())
    }

    fn unload(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
    }

    fn play(&mut self) {
        if let Some(ref s) = self.sink {
            s.play();
        }
    }

    fn pause(&mut self) {
        if let Some(ref s) = self.sink {
            s.pause();
        }
    }

    fn unpause(&mut self) {
        if let Some(ref s) = self.sink {
            s.play();
        }
    }

    fn stop(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
        tracing::debug!("playback stopped");
    }
}
