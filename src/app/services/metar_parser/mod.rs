//! METAR report parser
//!
//! Turns a raw METAR string into a [`ParsedMetar`](crate::app::models::ParsedMetar).
//! Groups are recognized by shape rather than position, so optional and
//! reordered groups are handled without a fixed schema.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`splitter`] - Tokenization, remarks boundary, mixed visibility merge
//! - [`classifier`] - Shape signatures mapping tokens to group decoders
//! - [`field_parsers`] - One decoder per report group
//! - [`assembler`] - Folds decoded groups into the final record
//! - [`parser`] - Orchestration and batch helpers
//! - [`detail`] - Human readable summary
//! - [`stats`] - Batch parsing statistics
//!
//! ## Usage
//!
//! ```rust
//! use metar_parser::app::services::metar_parser::parse_metar;
//!
//! let metar = parse_metar("KORD 210051Z 15007KT 10SM OVC060 05/01 A3010 RMK AO2")?;
//! assert_eq!(metar.station, "KORD");
//! assert_eq!(metar.wind_speed(), Some(7));
//! # Ok::<(), metar_parser::MetarError>(())
//! ```

pub mod assembler;
pub mod classifier;
pub mod detail;
pub mod field_parsers;
pub mod parser;
pub mod splitter;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::{MetarParser, detail_metar, parse_metar};
pub use splitter::TokenStream;
pub use stats::{ParseResult, ParseStats};
