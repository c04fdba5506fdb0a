//! Audio backend: the engine command surface and its rodio implementation.
//!
//! The player drives playback exclusively through the `AudioEngine` trait,
//! so transport logic can be tested against a fake engine.

mod engine;
mod sink;
mod types;

pub use engine::*;
pub use types::*;
