//! Configuration for the METAR parser.
//!
//! Parsing itself is a pure function of the report text; the settings here
//! only tune strictness and how decoded values are presented.

use crate::constants::{COMPASS_8, COMPASS_16};
use crate::error::{MetarError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Resolution of the compass label derived from a wind direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompassPoints {
    /// N, NE, E, SE, S, SW, W, NW
    Eight,
    /// N, NNE, NE, ... NNW
    Sixteen,
}

impl CompassPoints {
    /// Labels for this resolution, clockwise from north
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            CompassPoints::Eight => COMPASS_8,
            CompassPoints::Sixteen => COMPASS_16,
        }
    }

    /// Width of one sector in degrees
    pub fn sector_width(&self) -> f64 {
        360.0 / self.labels().len() as f64
    }
}

impl FromStr for CompassPoints {
    type Err = MetarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "8" => Ok(CompassPoints::Eight),
            "16" => Ok(CompassPoints::Sixteen),
            other => Err(MetarError::configuration(format!(
                "Invalid compass resolution '{}': expected 8 or 16",
                other
            ))),
        }
    }
}

impl fmt::Display for CompassPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels().len())
    }
}

/// Parser settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Compass resolution used by the detail string
    pub compass_points: CompassPoints,

    /// Reject reports whose station is not a 4 character ICAO identifier
    pub strict_station: bool,

    /// Keep tokens no recognizer matched in the parsed record
    pub keep_unrecognized: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            compass_points: CompassPoints::Sixteen,
            strict_station: false,
            keep_unrecognized: true,
        }
    }
}

impl ParserConfig {
    /// Use the given compass resolution
    pub fn with_compass_points(mut self, compass_points: CompassPoints) -> Self {
        self.compass_points = compass_points;
        self
    }

    /// Reject non-ICAO station identifiers
    pub fn with_strict_station(mut self) -> Self {
        self.strict_station = true;
        self
    }

    /// Drop unrecognized tokens instead of keeping them
    pub fn without_unrecognized(mut self) -> Self {
        self.keep_unrecognized = false;
        self
    }
}
