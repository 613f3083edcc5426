//! METAR Parser Library
//!
//! A Rust library for decoding METAR aviation weather reports into
//! structured observations.
//!
//! This library provides tools for:
//! - Splitting raw reports into tokens and locating the remarks section
//! - Recognizing each group by its shape, independent of position
//! - Decoding day/time, wind, visibility, clouds, temperature and altimeter
//! - Building a one-line human readable summary
//! - Batch parsing with per-report error reporting

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod metar_parser;
    }
}

// CLI modules
pub mod cli;

// Re-export commonly used types
pub use app::models::{
    Altimeter, CloudCover, CloudLayer, ParsedMetar, Visibility, VisibilityQualifier, Wind,
    WindDirection,
};
pub use app::services::metar_parser::{MetarParser, ParseResult, ParseStats, detail_metar, parse_metar};
pub use config::{CompassPoints, ParserConfig};
pub use error::{MetarError, Result};
