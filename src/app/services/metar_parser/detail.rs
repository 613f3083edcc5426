//! Human readable summary of a decoded report
//!
//! Pure presentation: nothing here parses, and the numeric fields of
//! [`ParsedMetar`] remain the authoritative values.

use crate::app::models::{CloudLayer, ParsedMetar, Wind, WindDirection};
use crate::config::CompassPoints;

use super::field_parsers::compass_label;

/// One-line summary of a report
pub fn describe(metar: &ParsedMetar, points: CompassPoints) -> String {
    let mut parts = Vec::new();

    let mut header = String::new();
    if let Some(report_type) = metar.report_type {
        header.push_str(&format!("{} ", report_type));
    }
    header.push_str(&format!(
        "{} day {} at {:02}:{:02}Z",
        metar.station,
        metar.day,
        metar.hour(),
        metar.minute()
    ));
    if metar.is_auto {
        header.push_str(" (automated)");
    }
    if metar.is_corrected {
        header.push_str(" (corrected)");
    }
    parts.push(header);

    if let Some(wind) = &metar.wind {
        parts.push(format!("wind {}", describe_wind(wind, points)));
    }

    if let Some(visibility) = &metar.visibility {
        parts.push(format!("visibility {}", visibility));
    }

    if !metar.clouds.is_empty() {
        parts.push(format!("clouds {}", describe_clouds(&metar.clouds)));
    }

    // Temperature and dew point are decoded from one group, so both or neither
    if let (Some(temperature), Some(dew_point)) = (metar.temperature, metar.dew_point) {
        parts.push(format!(
            "temperature {}°C, dew point {}°C",
            temperature, dew_point
        ));
    }

    if let Some(pressure) = &metar.pressure {
        parts.push(format!("altimeter {}", pressure));
    }

    parts.join("; ")
}

/// Wind direction, speed and gust, e.g. "NNW (340°) at 14 kt gusting 21 kt"
pub fn describe_wind(wind: &Wind, points: CompassPoints) -> String {
    if wind.is_calm() {
        return "calm".to_string();
    }

    let mut text = match wind.direction {
        WindDirection::Degrees(degrees) => format!(
            "{} ({}°) at {} kt",
            compass_label(degrees, points),
            degrees,
            wind.speed_kt
        ),
        WindDirection::Variable => format!("variable at {} kt", wind.speed_kt),
    };

    if let Some(gust) = wind.gust_kt {
        text.push_str(&format!(" gusting {} kt", gust));
    }
    if let Some((from, to)) = wind.variable_range {
        text.push_str(&format!(", varying {}°-{}°", from, to));
    }

    text
}

/// Cloud layers in report order, e.g. "FEW at 20000, SCT at 25000"
pub fn describe_clouds(clouds: &[CloudLayer]) -> String {
    clouds
        .iter()
        .map(|layer| layer.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
