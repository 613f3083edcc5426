//! Data models for METAR parsing
//!
//! This module contains the decoded representation of a METAR report: one
//! value type per report group plus the assembled [`ParsedMetar`] record.
//! Optional groups are `Option`s rather than zero-defaulted, since zero is a
//! legitimate observed value for wind, gusts and temperatures.

use crate::constants::{
    ALTIMETER_DIVISOR, REPORT_TYPE_METAR, REPORT_TYPE_SPECI, cloud_cover_description,
};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Parsed Report
// =============================================================================

/// A fully decoded METAR report
///
/// Built once by the parser and never mutated afterwards. Every group other
/// than station and day/time is optional; a group that was absent from the
/// report is `None` (or an empty sequence for clouds).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedMetar {
    /// `METAR` or `SPECI` when the report carried an explicit type prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_type: Option<ReportType>,

    /// ICAO station identifier (e.g. "KORD")
    pub station: String,

    /// Day of month, 1-31
    pub day: u32,

    /// Observation time of day, UTC
    pub observation_time: NaiveTime,

    /// Automated station with no human augmentation
    pub is_auto: bool,

    /// Corrected report (`COR`)
    pub is_corrected: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind: Option<Wind>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,

    /// Cloud layers in report order. Empty both for `CLR`/`SKC` and when no
    /// sky condition was reported.
    pub clouds: Vec<CloudLayer>,

    /// Whole degrees Celsius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<i32>,

    /// Whole degrees Celsius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dew_point: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure: Option<Altimeter>,

    /// Everything after `RMK`, undecoded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,

    /// Tokens before the remarks that no recognizer matched, in report order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unrecognized: Vec<String>,
}

impl ParsedMetar {
    /// Observation hour, UTC
    pub fn hour(&self) -> u32 {
        self.observation_time.hour()
    }

    /// Observation minute
    pub fn minute(&self) -> u32 {
        self.observation_time.minute()
    }

    /// Sustained wind speed in knots, if a wind group was reported
    pub fn wind_speed(&self) -> Option<u16> {
        self.wind.as_ref().map(|w| w.speed_kt)
    }

    /// Gust speed in knots, only when the wind group carried a gust
    pub fn wind_gust(&self) -> Option<u16> {
        self.wind.as_ref().and_then(|w| w.gust_kt)
    }

    /// Altimeter setting in inches of mercury
    pub fn pressure_inhg(&self) -> Option<f64> {
        self.pressure.map(|p| p.inches_of_mercury())
    }

    /// Temperature/dew point spread in degrees Celsius
    pub fn dew_point_spread(&self) -> Option<i32> {
        match (self.temperature, self.dew_point) {
            (Some(t), Some(d)) => Some(t - d),
            _ => None,
        }
    }
}

/// Explicit report type prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportType {
    /// Routine hourly report
    Metar,
    /// Special unscheduled report
    Speci,
}

impl ReportType {
    /// Recognize a report type prefix token
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            REPORT_TYPE_METAR => Some(ReportType::Metar),
            REPORT_TYPE_SPECI => Some(ReportType::Speci),
            _ => None,
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportType::Metar => write!(f, "{}", REPORT_TYPE_METAR),
            ReportType::Speci => write!(f, "{}", REPORT_TYPE_SPECI),
        }
    }
}

// =============================================================================
// Day / Time
// =============================================================================

/// Day of month and UTC time from a `DDHHMMZ` group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTime {
    pub day: u32,
    pub time: NaiveTime,
}

// =============================================================================
// Wind
// =============================================================================

/// Direction the wind is blowing from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindDirection {
    /// True degrees, 0-360
    Degrees(u16),
    /// `VRB`: direction varies and no mean direction is given
    Variable,
}

impl WindDirection {
    pub fn degrees(&self) -> Option<u16> {
        match self {
            WindDirection::Degrees(deg) => Some(*deg),
            WindDirection::Variable => None,
        }
    }
}

/// Decoded wind group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wind {
    pub direction: WindDirection,

    /// Sustained speed in knots
    pub speed_kt: u16,

    /// Gust speed in knots; `None` when no gust was reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gust_kt: Option<u16>,

    /// Extremes of a variable direction (`dddVddd`), clockwise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_range: Option<(u16, u16)>,
}

impl Wind {
    /// `00000KT`
    pub fn is_calm(&self) -> bool {
        self.speed_kt == 0 && self.gust_kt.is_none() && self.direction == WindDirection::Degrees(0)
    }
}

// =============================================================================
// Visibility
// =============================================================================

/// Qualifier on a visibility value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibilityQualifier {
    /// `M` prefix: less than the reported value
    LessThan,
    /// `P` prefix: greater than the reported value
    GreaterThan,
}

/// Prevailing visibility in statute miles
///
/// The value is kept in its reported textual form ("10", "1/2", "1 1/2") so
/// fractions survive unchanged; [`Visibility::miles`] gives the decimal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visibility {
    pub value: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<VisibilityQualifier>,

    /// Numerator and denominator of the decoded distance, in statute miles
    pub(crate) fraction: (u32, u32),
}

impl Visibility {
    pub(crate) fn new(
        value: impl Into<String>,
        qualifier: Option<VisibilityQualifier>,
        numerator: u32,
        denominator: u32,
    ) -> Self {
        Self {
            value: value.into(),
            qualifier,
            fraction: (numerator, denominator),
        }
    }

    /// Unit label; always statute miles
    pub fn unit(&self) -> &'static str {
        "miles"
    }

    /// Distance as a decimal number of statute miles
    pub fn miles(&self) -> f64 {
        let (numerator, denominator) = self.fraction;
        numerator as f64 / denominator as f64
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.qualifier {
            Some(VisibilityQualifier::LessThan) => write!(f, "less than ")?,
            Some(VisibilityQualifier::GreaterThan) => write!(f, "greater than ")?,
            None => {}
        }
        write!(f, "{} {}", self.value, self.unit())
    }
}

// =============================================================================
// Clouds
// =============================================================================

/// Sky coverage code of one cloud layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CloudCover {
    Few,
    Scattered,
    Broken,
    Overcast,
    /// Indefinite ceiling; the altitude is the vertical visibility
    VerticalVisibility,
}

impl CloudCover {
    /// The code as it appears in a report
    pub fn code(&self) -> &'static str {
        match self {
            CloudCover::Few => "FEW",
            CloudCover::Scattered => "SCT",
            CloudCover::Broken => "BKN",
            CloudCover::Overcast => "OVC",
            CloudCover::VerticalVisibility => "VV",
        }
    }

    pub fn description(&self) -> &'static str {
        cloud_cover_description(self.code())
    }

    /// Broken, overcast and vertical visibility layers form a ceiling
    pub fn is_ceiling(&self) -> bool {
        matches!(
            self,
            CloudCover::Broken | CloudCover::Overcast | CloudCover::VerticalVisibility
        )
    }
}

impl FromStr for CloudCover {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "FEW" => Ok(CloudCover::Few),
            "SCT" => Ok(CloudCover::Scattered),
            "BKN" => Ok(CloudCover::Broken),
            "OVC" => Ok(CloudCover::Overcast),
            "VV" => Ok(CloudCover::VerticalVisibility),
            other => Err(format!("unknown cloud cover code '{}'", other)),
        }
    }
}

impl fmt::Display for CloudCover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Convective cloud type appended to a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConvectiveType {
    /// `CB`
    Cumulonimbus,
    /// `TCU`
    ToweringCumulus,
}

impl ConvectiveType {
    pub fn code(&self) -> &'static str {
        match self {
            ConvectiveType::Cumulonimbus => "CB",
            ConvectiveType::ToweringCumulus => "TCU",
        }
    }
}

/// One reported cloud layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudLayer {
    pub cover: CloudCover,

    /// Base of the layer in feet above ground level
    pub altitude_ft: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub convective: Option<ConvectiveType>,
}

impl fmt::Display for CloudLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.cover, self.altitude_ft)?;
        if let Some(convective) = self.convective {
            write!(f, " {}", convective.code())?;
        }
        Ok(())
    }
}

// =============================================================================
// Temperature / Pressure
// =============================================================================

/// Temperature and dew point from a `TT/DD` group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempDew {
    pub temperature: i32,
    pub dew_point: i32,
}

/// Altimeter setting, stored as reported in hundredths of an inch of mercury
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Altimeter {
    pub hundredths_inhg: u16,
}

impl Altimeter {
    pub fn inches_of_mercury(&self) -> f64 {
        self.hundredths_inhg as f64 / ALTIMETER_DIVISOR
    }
}

impl fmt::Display for Altimeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} inHg", self.inches_of_mercury())
    }
}
