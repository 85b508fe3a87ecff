//! Extraction and transformation pipeline.
//!
//! ```text
//! Table ─► extract ─► Extraction { terms, languages, default_language }
//!                         │
//!                         ▼
//!                     KeyFilter (only / except)
//!                         │
//!                         ▼
//!        writers: format_key + placeholder::prepare ─► Segments ─► nested::nest_segments
//! ```
//!
//! Every stage takes immutable input and returns a new value.

pub mod error;
pub mod extract;
pub mod filter;
pub mod format;
pub mod nested;
pub mod placeholder;
pub mod term;

pub use error::{Error, Result};
pub use extract::{ExtractOptions, extract};
pub use filter::{KeyFilter, KeyPattern, apply_filter};
pub use format::{KeyFormatting, format_key};
pub use term::{Extraction, LanguageMap, Segment, Term};
