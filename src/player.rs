//! Playback core: the `Player` state machine.
//!
//! The player owns the playlist, the selection and now-playing indices and
//! the transport state, and is the only component allowed to drive the
//! audio engine.

mod model;

pub use model::*;
