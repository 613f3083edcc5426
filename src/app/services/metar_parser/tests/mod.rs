//! Test fixtures for METAR parser testing
//!
//! Real-world reports shared by the test modules below.

use std::io::Write;
use tempfile::NamedTempFile;

mod field_parser_tests;
mod splitter_tests;

/// Routine report with remarks
pub const KORD_BASIC: &str =
    "KORD 210051Z 15007KT 10SM OVC060 05/01 A3010 RMK AO2 RAE02 SLP200 P0000 T00500011";

/// Automated station, gusting wind, negative temperatures
pub const PANV_AUTO: &str = "PANV 260236Z AUTO 04014G19KT 10SM OVC085 M11/M14 A2989 RMK AO1";

/// Three cloud layers
pub const KPWK_MULTIPLE_CLOUDS: &str =
    "KPWK 300251Z 16009KT 10SM FEW150 BKN200 OVC250 00/M07 A3043 RMK AO2 SLP312 T00001067 58019";

/// Clear sky
pub const KPWK_CLEAR: &str =
    "KPWK 300252Z 15007KT 10SM CLR 00/M07 A3045 RMK AO2 SLP318 T00001067 58020";

/// Low visibility with present weather and a mixed-number visibility
pub const KSFO_FOG: &str =
    "SPECI KSFO 121756Z 28012KT 250V310 1 1/2SM BR BKN008 OVC015 12/11 A2992 RMK AO2";

/// Station and day/time only
pub const MINIMAL: &str = "KJFK 011200Z";

/// Helper to create a temporary file with one report per line
pub fn create_report_file(reports: &[&str]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    for report in reports {
        writeln!(temp_file, "{}", report).unwrap();
    }
    temp_file
}
