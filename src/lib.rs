//! Localio - localization file generator
//!
//! Localio reads a translation table delimited by `[key]` and `[end]` rows
//! and writes the localization files each target platform expects: Android
//! `strings.xml`, iOS and Swift `.strings`, JSON, Rails YAML, .NET ResX,
//! Java properties, Twine and OEG JavaScript modules.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction, key formatting, placeholders, filtering and nesting
//! - `source`: Table access and the JSON grid and CSV loaders
//! - `writers`: Platform registry, rendering and file emission
//! - `utils`: Shared string helpers

pub mod cli;
pub mod config;
pub mod core;
pub mod source;
pub mod utils;
pub mod writers;
