//! Player model: playlist, selection, now-playing and transport handlers.
//!
//! Each handler runs to completion on the event loop thread and keeps four
//! pieces of state consistent: the playlist, the highlighted entry, the
//! track loaded in the engine, and the transport state. The engine is only
//! ever touched through these methods.

use std::path::Path;

use thiserror::Error;

use crate::audio::{AudioEngine, EngineError};
use crate::config::LibrarySettings;
use crate::library::{self, ScanError, Track};

/// The transport state of the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Stopped
    }
}

/// Errors surfaced to the user from transport or directory intents.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

pub struct Player<E> {
    pub tracks: Vec<Track>,
    pub selected: Option<usize>,
    pub now_playing: Option<usize>,
    pub state: PlaybackState,
    pub(crate) engine: E,
}

impl<E: AudioEngine> Player<E> {
    /// Create a player with an empty playlist.
    pub fn new(engine: E) -> Self {
        Self {
            tracks: Vec::new(),
            selected: None,
            now_playing: None,
            state: PlaybackState::Stopped,
            engine,
        }
    }

    /// Replace the playlist with the tracks found in `dir`.
    ///
    /// The scan runs before any state is touched: a bad path leaves the
    /// previous playlist, selection and playback exactly as they were.
    pub fn load_directory(
        &mut self,
        dir: &Path,
        settings: &LibrarySettings,
    ) -> Result<(), PlayerError> {
        let tracks = library::scan_dir(dir, settings)?;

        self.engine.pause();
        self.engine.unload();
        self.tracks = tracks;
        self.selected = None;
        self.now_playing = None;
        self.state = PlaybackState::Stopped;

        tracing::info!("playlist replaced: {} track(s)", self.tracks.len());
        Ok(())
    }

    /// Highlight the track at `index`. Out-of-range indices are ignored.
    /// Selecting never touches the engine; only `play` does.
    pub fn select(&mut self, index: usize) {
        if index < self.tracks.len() {
            self.selected = Some(index);
        }
    }

    /// Move the highlight down one entry, clamped at the last track.
    pub fn select_next(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        let next = match self.selected {
            Some(i) => (i + 1).min(self.tracks.len() - 1),
            None => 0,
        };
        self.select(next);
    }

    /// Move the highlight up one entry, clamped at the first track.
    pub fn select_prev(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        let prev = match self.selected {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.select(prev);
    }

    /// Start or resume playback for the current selection.
    ///
    /// Falls back to the first track when nothing is selected; a no-op on an
    /// empty playlist. Playing the index that is already loaded resumes it
    /// without reloading, so a paused track continues where it left off.
    pub fn play(&mut self) -> Result<(), PlayerError> {
        if self.tracks.is_empty() {
            return Ok(());
        }

        let target = match self.selected {
            Some(i) => i,
            None => {
                self.selected = Some(0);
                0
            }
        };

        if self.now_playing == Some(target) {
            self.engine.unpause();
            self.state = PlaybackState::Playing;
            Ok(())
        } else {
            self.set_track(target)
        }
    }

    /// Pause playback. Idempotent when already paused; a stopped player
    /// stays stopped.
    pub fn pause(&mut self) {
        self.engine.pause();
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    /// Play when idle or paused, pause when playing. The primary transport
    /// control maps here.
    pub fn toggle(&mut self) -> Result<(), PlayerError> {
        if self.state == PlaybackState::Playing {
            self.pause();
            Ok(())
        } else {
            self.play()
        }
    }

    /// Advance to the next track and play it from the start.
    ///
    /// Clamped at the end of the playlist: the last track is reloaded and
    /// restarted rather than wrapping around. With nothing loaded yet, the
    /// first track plays.
    pub fn next(&mut self) -> Result<(), PlayerError> {
        if self.tracks.is_empty() {
            return Ok(());
        }
        let target = match self.now_playing {
            Some(i) if i + 1 < self.tracks.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.set_track(target)
    }

    /// Step back to the previous track and play it from the start, clamped
    /// at the first track.
    pub fn prev(&mut self) -> Result<(), PlayerError> {
        if self.tracks.is_empty() {
            return Ok(());
        }
        let target = match self.now_playing {
            Some(i) if i > 0 => i - 1,
            Some(i) => i,
            None => 0,
        };
        self.set_track(target)
    }

    /// Stop playback and unload the engine's track.
    pub fn stop(&mut self) {
        self.engine.stop();
        self.now_playing = None;
        self.state = PlaybackState::Stopped;
    }

    /// Return true if the playlist contains any tracks.
    pub fn has_tracks(&self) -> bool {
        !self.tracks.is_empty()
    }

    /// The track currently loaded in the engine, if any.
    pub fn now_playing_track(&self) -> Option<&Track> {
        self.now_playing.and_then(|i| self.tracks.get(i))
    }

    // Load `index` into the engine and start it from the beginning. The
    // highlight follows the loaded track.
    fn set_track(&mut self, index: usize) -> Result<(), PlayerError> {
        let Some(track) = self.tracks.get(index) else {
            return Ok(());
        };

        self.engine.unload();
        if let Err(e) = self.engine.load(track) {
            // Nothing is loaded after a failed load; the state must not
            // claim otherwise.
            self.now_playing = None;
            self.state = PlaybackState::Stopped;
            tracing::warn!("load failed for {}: {e}", track.path.display());
            return Err(e.into());
        }
        self.engine.play();

        self.now_playing = Some(index);
        self.selected = Some(index);
        self.state = PlaybackState::Playing;
        Ok(())
    }
}
