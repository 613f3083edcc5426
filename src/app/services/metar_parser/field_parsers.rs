//! Group extractors for METAR tokens
//!
//! One decoder per report group. Each takes a single token (already
//! identified by the classifier) and either decodes it or reports exactly
//! which token failed and why. Decoders are stateless.

use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::app::models::{
    Altimeter, CloudCover, CloudLayer, ConvectiveType, DayTime, TempDew, Visibility,
    VisibilityQualifier, Wind, WindDirection,
};
use crate::config::CompassPoints;
use crate::constants::{CLOUD_ALTITUDE_FACTOR, WIND_VARIABLE_PREFIX};
use crate::error::{MetarError, Result};

static DAY_TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2})(\d{2})(\d{2})Z$").expect("valid day/time regex"));

static WIND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{3}|VRB)(\d{2,3})(?:G(\d{2,3}))?KT$").expect("valid wind regex")
});

static WIND_VARIATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{3})V(\d{3})$").expect("valid wind variation regex"));

static VISIBILITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([MP])?(?:(\d+) (\d+)/(\d+)|(\d+)/(\d+)|(\d+))SM$")
        .expect("valid visibility regex")
});

static CLOUD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(FEW|SCT|BKN|OVC|VV)(\d{3})(CB|TCU)?$").expect("valid cloud regex")
});

static TEMP_DEW_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(M)?(\d{2})/(M)?(\d{2})$").expect("valid temperature regex"));

static ALTIMETER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^A(\d{4})$").expect("valid altimeter regex"));

// =============================================================================
// Day / Time
// =============================================================================

/// Parse a `DDHHMMZ` group into day of month and UTC time
pub fn parse_day_time(token: &str) -> Result<DayTime> {
    let caps = DAY_TIME_RE
        .captures(token)
        .ok_or_else(|| MetarError::malformed_day_time(token, "expected DDHHMMZ"))?;

    let day: u32 = caps[1].parse().map_err(|_| {
        MetarError::malformed_day_time(token, "day is not numeric")
    })?;
    let hour: u32 = caps[2].parse().map_err(|_| {
        MetarError::malformed_day_time(token, "hour is not numeric")
    })?;
    let minute: u32 = caps[3].parse().map_err(|_| {
        MetarError::malformed_day_time(token, "minute is not numeric")
    })?;

    if !(1..=31).contains(&day) {
        return Err(MetarError::malformed_day_time(
            token,
            format!("day {} outside 1-31", day),
        ));
    }

    let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
        MetarError::malformed_day_time(token, format!("invalid time {:02}:{:02}", hour, minute))
    })?;

    Ok(DayTime { day, time })
}

// =============================================================================
// Wind
// =============================================================================

/// Parse a `dddssKT` / `dddssGggKT` / `VRBssKT` wind group
pub fn parse_wind(token: &str) -> Result<Wind> {
    let caps = WIND_RE.captures(token).ok_or_else(|| {
        MetarError::malformed_wind(token, "expected dddss[Ggg]KT or VRBss[Ggg]KT")
    })?;

    let direction = if &caps[1] == WIND_VARIABLE_PREFIX {
        WindDirection::Variable
    } else {
        WindDirection::Degrees(parse_degrees(&caps[1], token)?)
    };

    let speed_kt = parse_knots(&caps[2], token)?;
    let gust_kt = caps
        .get(3)
        .map(|gust| parse_knots(gust.as_str(), token))
        .transpose()?;

    Ok(Wind {
        direction,
        speed_kt,
        gust_kt,
        variable_range: None,
    })
}

/// Parse a `dddVddd` variable wind direction group
pub fn parse_wind_variation(token: &str) -> Result<(u16, u16)> {
    let caps = WIND_VARIATION_RE
        .captures(token)
        .ok_or_else(|| MetarError::malformed_wind(token, "expected dddVddd"))?;

    Ok((parse_degrees(&caps[1], token)?, parse_degrees(&caps[2], token)?))
}

fn parse_degrees(digits: &str, token: &str) -> Result<u16> {
    let degrees: u16 = digits
        .parse()
        .map_err(|_| MetarError::malformed_wind(token, "direction is not numeric"))?;
    if degrees > 360 {
        return Err(MetarError::malformed_wind(
            token,
            format!("direction {} exceeds 360 degrees", degrees),
        ));
    }
    Ok(degrees)
}

fn parse_knots(digits: &str, token: &str) -> Result<u16> {
    digits
        .parse()
        .map_err(|_| MetarError::malformed_wind(token, "speed is not numeric"))
}

/// Map a wind direction onto a compass label
///
/// Each sector is centered on its label: with 16 points, N covers
/// 348.75-11.25 degrees, NNE 11.25-33.75, and so on.
pub fn compass_label(degrees: u16, points: CompassPoints) -> &'static str {
    let labels = points.labels();
    let width = points.sector_width();
    let normalized = (degrees % 360) as f64;
    let index = ((normalized + width / 2.0) / width) as usize % labels.len();
    labels[index]
}

// =============================================================================
// Visibility
// =============================================================================

/// Parse a statute-mile visibility group
///
/// Accepts whole (`10SM`), fractional (`1/2SM`) and mixed (`1 1/2SM`, as
/// produced by the splitter) values, with an optional `M` (less than) or
/// `P` (greater than) prefix.
pub fn parse_visibility(token: &str) -> Result<Visibility> {
    let caps = VISIBILITY_RE.captures(token).ok_or_else(|| {
        MetarError::malformed_visibility(token, "expected N, N/D or N N/D before SM")
    })?;

    let qualifier = match caps.get(1).map(|m| m.as_str()) {
        Some("M") => Some(VisibilityQualifier::LessThan),
        Some("P") => Some(VisibilityQualifier::GreaterThan),
        _ => None,
    };

    let number = |index: usize| -> Result<u32> {
        caps[index]
            .parse()
            .map_err(|_| MetarError::malformed_visibility(token, "distance out of range"))
    };

    let (value, numerator, denominator) = if caps.get(2).is_some() {
        let whole = number(2)?;
        let (numerator, denominator) = (number(3)?, number(4)?);
        let total = whole
            .checked_mul(denominator)
            .and_then(|w| w.checked_add(numerator))
            .ok_or_else(|| MetarError::malformed_visibility(token, "distance out of range"))?;
        (
            format!("{} {}/{}", &caps[2], &caps[3], &caps[4]),
            total,
            denominator,
        )
    } else if caps.get(5).is_some() {
        (
            format!("{}/{}", &caps[5], &caps[6]),
            number(5)?,
            number(6)?,
        )
    } else {
        (caps[7].to_string(), number(7)?, 1)
    };

    if denominator == 0 {
        return Err(MetarError::malformed_visibility(token, "zero denominator"));
    }

    Ok(Visibility::new(value, qualifier, numerator, denominator))
}

// =============================================================================
// Clouds
// =============================================================================

/// Parse one `CCChhh` cloud layer; `None` if the token is not a cloud layer
pub fn parse_cloud_layer(token: &str) -> Option<CloudLayer> {
    let caps = CLOUD_RE.captures(token)?;

    let cover: CloudCover = caps[1].parse().ok()?;
    let hundreds: u32 = caps[2].parse().ok()?;
    let convective = caps.get(3).map(|m| match m.as_str() {
        "CB" => ConvectiveType::Cumulonimbus,
        _ => ConvectiveType::ToweringCumulus,
    });

    Some(CloudLayer {
        cover,
        altitude_ft: hundreds * CLOUD_ALTITUDE_FACTOR,
        convective,
    })
}

/// Parse every cloud layer in a space separated sky condition string
///
/// Non-cloud tokens, including `CLR` and `SKC`, contribute nothing.
pub fn parse_clouds(sky: &str) -> Vec<CloudLayer> {
    sky.split_whitespace().filter_map(parse_cloud_layer).collect()
}

// =============================================================================
// Temperature / Dew Point
// =============================================================================

/// Parse a `TT/DD` group where either half may carry an `M` (minus) prefix
pub fn parse_temp_dew(token: &str) -> Result<TempDew> {
    let caps = TEMP_DEW_RE
        .captures(token)
        .ok_or_else(|| MetarError::malformed_temp_dew(token, "expected [M]TT/[M]DD"))?;

    Ok(TempDew {
        temperature: signed_celsius(caps.get(1).is_some(), &caps[2], token)?,
        dew_point: signed_celsius(caps.get(3).is_some(), &caps[4], token)?,
    })
}

fn signed_celsius(negative: bool, digits: &str, token: &str) -> Result<i32> {
    let magnitude: i32 = digits
        .parse()
        .map_err(|_| MetarError::malformed_temp_dew(token, "value is not numeric"))?;
    Ok(if negative { -magnitude } else { magnitude })
}

// =============================================================================
// Pressure
// =============================================================================

/// Parse an `Aiiii` altimeter group
pub fn parse_altimeter(token: &str) -> Result<Altimeter> {
    let caps = ALTIMETER_RE
        .captures(token)
        .ok_or_else(|| MetarError::malformed_pressure(token, "expected A followed by 4 digits"))?;

    let hundredths_inhg = caps[1]
        .parse()
        .map_err(|_| MetarError::malformed_pressure(token, "value is not numeric"))?;

    Ok(Altimeter { hundredths_inhg })
}
