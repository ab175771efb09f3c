//! Configuration for the font preference service.
//!
//! Service options are read from an optional TOML file. Every entry has a
//! default, so a missing file, a partial file or a malformed file all still
//! produce a usable service.

mod defaults;
mod io;
mod models;

pub use io::{load_options, parse_options, serialize_options};
pub use models::{FontConfig, FontServiceOptions, LogLevel};
