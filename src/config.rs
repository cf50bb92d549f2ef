//! Configuration loader and schema types.
//!
//! Settings drive the slider's style and capture band, plus the demo host
//! and its logging. Loading is layered: environment over file over defaults.

mod load;
mod schema;

pub use load::{default_config_path, resolve_config_path};
pub use schema::*;

#[cfg(test)]
mod tests;
