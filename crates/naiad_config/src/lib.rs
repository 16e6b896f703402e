//! Design-file loading for the Naiad engine.
//!
//! Parses the JSON design format (chip, modules, channels, exclusions,
//! flags) into a [`naiad_design::Input`], applying the documented defaults:
//! three pins per module, the standard pin radius, and the standard clamp
//! band.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_design, parse_design};
pub use types::DesignFile;
