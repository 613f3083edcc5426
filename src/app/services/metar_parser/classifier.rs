//! Shape-driven group classification
//!
//! METAR groups are optional and positionally loose, so a token's group is
//! decided by its shape alone. Each [`Recognizer`] pairs a shape signature
//! with a decoder; the classifier runs the table in order and the first
//! matching signature owns the token.
//!
//! Signatures are deliberately looser than the decoders: a token ending in
//! `KT` is claimed by the wind recognizer even if it does not decode, so a
//! garbled wind group surfaces as `MalformedWind` instead of being skipped.

use crate::app::models::{Altimeter, CloudLayer, DayTime, TempDew, Visibility, Wind};
use crate::constants::{
    ALTIMETER_PREFIX, AUTO_MARKER, CORRECTION_MARKER, DAY_TIME_SUFFIX, NEGATIVE_PREFIX,
    VISIBILITY_SUFFIX, WIND_SUFFIX, is_sky_clear_token,
};
use crate::error::Result;

use super::field_parsers::{
    parse_altimeter, parse_cloud_layer, parse_day_time, parse_temp_dew, parse_visibility,
    parse_wind, parse_wind_variation,
};

/// The kind of report group a token belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Auto,
    Correction,
    DayTime,
    Wind,
    WindVariation,
    Visibility,
    SkyClear,
    Cloud,
    TempDew,
    Altimeter,
}

/// A decoded report group
#[derive(Debug, Clone, PartialEq)]
pub enum Group {
    Auto,
    Correction,
    DayTime(DayTime),
    Wind(Wind),
    WindVariation(u16, u16),
    Visibility(Visibility),
    SkyClear,
    Cloud(CloudLayer),
    TempDew(TempDew),
    Altimeter(Altimeter),
}

/// Shape signature and decoder for one group kind
pub struct Recognizer {
    pub kind: GroupKind,
    matches: fn(&str) -> bool,
    decode: fn(&str) -> Result<Option<Group>>,
}

impl Recognizer {
    pub fn matches(&self, token: &str) -> bool {
        (self.matches)(token)
    }

    /// Decode a token this recognizer matched
    ///
    /// `Ok(None)` means the token only resembled this group and should be
    /// treated as unrecognized.
    pub fn decode(&self, token: &str) -> Result<Option<Group>> {
        (self.decode)(token)
    }
}

/// Recognizers in priority order
pub static RECOGNIZERS: &[Recognizer] = &[
    Recognizer {
        kind: GroupKind::Auto,
        matches: |t| t == AUTO_MARKER,
        decode: |_| Ok(Some(Group::Auto)),
    },
    Recognizer {
        kind: GroupKind::Correction,
        matches: |t| t == CORRECTION_MARKER,
        decode: |_| Ok(Some(Group::Correction)),
    },
    Recognizer {
        kind: GroupKind::DayTime,
        matches: is_day_time_shape,
        decode: |t| parse_day_time(t).map(|dt| Some(Group::DayTime(dt))),
    },
    Recognizer {
        kind: GroupKind::Wind,
        matches: |t| t.ends_with(WIND_SUFFIX),
        decode: |t| parse_wind(t).map(|w| Some(Group::Wind(w))),
    },
    Recognizer {
        kind: GroupKind::WindVariation,
        matches: is_wind_variation_shape,
        decode: |t| parse_wind_variation(t).map(|(from, to)| Some(Group::WindVariation(from, to))),
    },
    Recognizer {
        kind: GroupKind::Visibility,
        matches: |t| t.ends_with(VISIBILITY_SUFFIX),
        decode: |t| parse_visibility(t).map(|v| Some(Group::Visibility(v))),
    },
    Recognizer {
        kind: GroupKind::SkyClear,
        matches: is_sky_clear_token,
        decode: |_| Ok(Some(Group::SkyClear)),
    },
    Recognizer {
        kind: GroupKind::Cloud,
        matches: is_cloud_shape,
        decode: |t| Ok(parse_cloud_layer(t).map(Group::Cloud)),
    },
    Recognizer {
        kind: GroupKind::TempDew,
        matches: is_temp_dew_shape,
        decode: |t| parse_temp_dew(t).map(|td| Some(Group::TempDew(td))),
    },
    Recognizer {
        kind: GroupKind::Altimeter,
        matches: is_altimeter_shape,
        decode: |t| parse_altimeter(t).map(|a| Some(Group::Altimeter(a))),
    },
];

/// Find the recognizer that owns a token, if any
pub fn classify(token: &str) -> Option<&'static Recognizer> {
    RECOGNIZERS.iter().find(|r| r.matches(token))
}

/// Classify and decode a token in one step
///
/// `Ok(None)` for tokens no recognizer claims (present weather, unknown
/// groups); `Err` when a claimed token fails to decode.
pub fn recognize(token: &str) -> Result<Option<(GroupKind, Group)>> {
    match classify(token) {
        Some(recognizer) => Ok(recognizer
            .decode(token)?
            .map(|group| (recognizer.kind, group))),
        None => Ok(None),
    }
}

/// Six digits then `Z`
fn is_day_time_shape(token: &str) -> bool {
    match token.strip_suffix(DAY_TIME_SUFFIX) {
        Some(digits) => digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// `dddVddd`
fn is_wind_variation_shape(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() == 7
        && bytes[3] == b'V'
        && bytes[..3].iter().chain(&bytes[4..]).all(|b| b.is_ascii_digit())
}

/// Coverage code followed by a digit
fn is_cloud_shape(token: &str) -> bool {
    crate::constants::CLOUD_COVER_CODES.iter().any(|code| {
        token
            .strip_prefix(code)
            .is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_digit()))
    })
}

/// Only digits, `M` and `/`, with at least one digit and a `/` or `M`
fn is_temp_dew_shape(token: &str) -> bool {
    token
        .chars()
        .all(|c| c.is_ascii_digit() || c == NEGATIVE_PREFIX || c == '/')
        && token.chars().any(|c| c.is_ascii_digit())
        && token.chars().any(|c| c == NEGATIVE_PREFIX || c == '/')
}

/// `A` followed by digits only
fn is_altimeter_shape(token: &str) -> bool {
    match token.strip_prefix(ALTIMETER_PREFIX) {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}
