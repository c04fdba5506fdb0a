//! Layered settings: struct defaults, optional TOML file, env overrides.

mod load;
mod schema;

pub use schema::*;
