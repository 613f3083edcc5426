//! Application constants for the METAR parser
//!
//! Literal markers, group suffixes, and lookup tables shared by the
//! splitter, the group classifier, and the detail builder.

// =============================================================================
// Report Structure Markers
// =============================================================================

/// Token that opens the free-text remarks section
pub const REMARKS_MARKER: &str = "RMK";

/// Automated station with no human augmentation
pub const AUTO_MARKER: &str = "AUTO";

/// Corrected report
pub const CORRECTION_MARKER: &str = "COR";

/// Report type prefixes that may precede the station identifier
pub const REPORT_TYPE_METAR: &str = "METAR";
pub const REPORT_TYPE_SPECI: &str = "SPECI";

/// Length of an ICAO station identifier
pub const STATION_ID_LENGTH: usize = 4;

// =============================================================================
// Group Signatures
// =============================================================================

/// Suffix closing the day/time group
pub const DAY_TIME_SUFFIX: char = 'Z';

/// Suffix closing the wind group (knots)
pub const WIND_SUFFIX: &str = "KT";

/// Prefix of a variable wind direction
pub const WIND_VARIABLE_PREFIX: &str = "VRB";

/// Suffix closing the visibility group (statute miles)
pub const VISIBILITY_SUFFIX: &str = "SM";

/// Prefix of the altimeter group (inches of mercury x 100)
pub const ALTIMETER_PREFIX: char = 'A';

/// Prefix marking a negative temperature
pub const NEGATIVE_PREFIX: char = 'M';

/// Sky clear tokens: no cloud layers reported
pub const SKY_CLEAR_TOKENS: &[&str] = &["CLR", "SKC"];

/// Cloud coverage codes, in increasing order of coverage
pub const CLOUD_COVER_CODES: &[&str] = &["FEW", "SCT", "BKN", "OVC", "VV"];

/// Cloud altitudes are reported in hundreds of feet
pub const CLOUD_ALTITUDE_FACTOR: u32 = 100;

/// Altimeter digits are hundredths of an inch of mercury
pub const ALTIMETER_DIVISOR: f64 = 100.0;

// =============================================================================
// Compass Labels
// =============================================================================

/// 16-point compass labels, clockwise from north
pub const COMPASS_16: &[&str] = &[
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// 8-point compass labels, clockwise from north
pub const COMPASS_8: &[&str] = &["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Human readable description of a cloud coverage code
pub fn cloud_cover_description(code: &str) -> &'static str {
    match code {
        "FEW" => "few",
        "SCT" => "scattered",
        "BKN" => "broken",
        "OVC" => "overcast",
        "VV" => "vertical visibility",
        _ => "unknown",
    }
}

/// Check if a token reports a clear sky
pub fn is_sky_clear_token(token: &str) -> bool {
    SKY_CLEAR_TOKENS.contains(&token)
}
