//! Tests for the individual group decoders

use super::super::field_parsers::*;
use crate::app::models::{CloudCover, ConvectiveType, VisibilityQualifier, WindDirection};
use crate::config::CompassPoints;
use crate::error::MetarError;

// =============================================================================
// Day / Time
// =============================================================================

#[test]
fn test_parse_day_time() {
    let day_time = parse_day_time("210051Z").unwrap();

    assert_eq!(day_time.day, 21);
    assert_eq!(day_time.time.format("%H:%M").to_string(), "00:51");
}

#[test]
fn test_day_time_round_trips_components() {
    for day in 1..=31 {
        for hour in 0..24 {
            for minute in 0..60 {
                let token = format!("{:02}{:02}{:02}Z", day, hour, minute);
                let decoded = parse_day_time(&token).unwrap();

                assert_eq!(decoded.day, day);
                assert_eq!(
                    decoded.time,
                    chrono::NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
                );
            }
        }
    }
}

#[test]
fn test_day_time_out_of_range() {
    for token in ["000051Z", "320051Z", "212451Z", "210060Z"] {
        let err = parse_day_time(token).unwrap_err();
        assert!(
            matches!(err, MetarError::MalformedDayTime { .. }),
            "{} should be malformed",
            token
        );
    }
}

// =============================================================================
// Wind
// =============================================================================

#[test]
fn test_parse_wind() {
    let wind = parse_wind("18055KT").unwrap();

    assert_eq!(wind.direction, WindDirection::Degrees(180));
    assert_eq!(wind.speed_kt, 55);
    assert_eq!(wind.gust_kt, None);
    assert_eq!(compass_label(180, CompassPoints::Sixteen), "S");
}

#[test]
fn test_parse_wind_with_gust() {
    let wind = parse_wind("34014G21KT").unwrap();

    assert_eq!(wind.direction, WindDirection::Degrees(340));
    assert_eq!(wind.speed_kt, 14);
    assert_eq!(wind.gust_kt, Some(21));
    assert_eq!(compass_label(340, CompassPoints::Sixteen), "NNW");
}

#[test]
fn test_parse_variable_and_calm_wind() {
    let variable = parse_wind("VRB03KT").unwrap();
    assert_eq!(variable.direction, WindDirection::Variable);
    assert_eq!(variable.speed_kt, 3);

    let calm = parse_wind("00000KT").unwrap();
    assert!(calm.is_calm());

    let strong = parse_wind("270105G130KT").unwrap();
    assert_eq!(strong.speed_kt, 105);
    assert_eq!(strong.gust_kt, Some(130));
}

#[test]
fn test_malformed_wind() {
    for token in ["ABCKT", "1805KT", "18055G5KT", "KT", "37010KT"] {
        let err = parse_wind(token).unwrap_err();
        assert!(
            matches!(&err, MetarError::MalformedWind { token: t, .. } if t == token),
            "{} should be malformed",
            token
        );
    }
}

#[test]
fn test_parse_wind_variation() {
    assert_eq!(parse_wind_variation("250V310").unwrap(), (250, 310));
    assert!(parse_wind_variation("250V370").is_err());
}

#[test]
fn test_compass_buckets() {
    let sixteen = CompassPoints::Sixteen;
    assert_eq!(compass_label(0, sixteen), "N");
    assert_eq!(compass_label(11, sixteen), "N");
    assert_eq!(compass_label(12, sixteen), "NNE");
    assert_eq!(compass_label(45, sixteen), "NE");
    assert_eq!(compass_label(349, sixteen), "N");
    assert_eq!(compass_label(360, sixteen), "N");

    let eight = CompassPoints::Eight;
    assert_eq!(compass_label(40, eight), "NE");
    assert_eq!(compass_label(340, eight), "N");
    assert_eq!(compass_label(200, eight), "S");
}

// =============================================================================
// Visibility
// =============================================================================

#[test]
fn test_parse_visibility_fraction() {
    let visibility = parse_visibility("1/2SM").unwrap();

    assert_eq!(visibility.value, "1/2");
    assert_eq!(visibility.unit(), "miles");
    assert_eq!(visibility.to_string(), "1/2 miles");
    assert_eq!(visibility.miles(), 0.5);
}

#[test]
fn test_parse_visibility_whole_and_mixed() {
    let whole = parse_visibility("10SM").unwrap();
    assert_eq!(whole.value, "10");
    assert_eq!(whole.to_string(), "10 miles");

    let mixed = parse_visibility("1 1/2SM").unwrap();
    assert_eq!(mixed.value, "1 1/2");
    assert_eq!(mixed.miles(), 1.5);
}

#[test]
fn test_parse_visibility_qualifiers() {
    let less = parse_visibility("M1/4SM").unwrap();
    assert_eq!(less.qualifier, Some(VisibilityQualifier::LessThan));
    assert_eq!(less.value, "1/4");
    assert_eq!(less.miles(), 0.25);

    let greater = parse_visibility("P6SM").unwrap();
    assert_eq!(greater.qualifier, Some(VisibilityQualifier::GreaterThan));
    assert_eq!(greater.miles(), 6.0);
}

#[test]
fn test_malformed_visibility() {
    for token in ["SM", "XSM", "1/SM", "1/0SM", "1//2SM"] {
        assert!(
            matches!(
                parse_visibility(token),
                Err(MetarError::MalformedVisibility { .. })
            ),
            "{} should be malformed",
            token
        );
    }
}

// =============================================================================
// Clouds
// =============================================================================

#[test]
fn test_parse_clouds_multiple() {
    let clouds = parse_clouds("FEW200 SCT250");

    assert_eq!(clouds.len(), 2);
    assert_eq!(clouds[0].cover, CloudCover::Few);
    assert_eq!(clouds[0].altitude_ft, 20000);
    assert_eq!(clouds[1].cover, CloudCover::Scattered);
    assert_eq!(clouds[1].altitude_ft, 25000);
}

#[test]
fn test_parse_cloud_item() {
    let cloud = parse_cloud_layer("FEW200").unwrap();
    assert_eq!(cloud.to_string(), "FEW at 20000");
}

#[test]
fn test_parse_cloud_variants() {
    let vv = parse_cloud_layer("VV002").unwrap();
    assert_eq!(vv.cover, CloudCover::VerticalVisibility);
    assert_eq!(vv.altitude_ft, 200);

    let cb = parse_cloud_layer("BKN030CB").unwrap();
    assert_eq!(cb.convective, Some(ConvectiveType::Cumulonimbus));

    let tcu = parse_cloud_layer("SCT045TCU").unwrap();
    assert_eq!(tcu.convective, Some(ConvectiveType::ToweringCumulus));
}

#[test]
fn test_clear_sky_yields_no_layers() {
    assert!(parse_clouds("CLR").is_empty());
    assert!(parse_clouds("SKC").is_empty());
    assert!(parse_cloud_layer("OVC06").is_none());
    assert!(parse_cloud_layer("XYZ060").is_none());
}

// =============================================================================
// Temperature / Pressure
// =============================================================================

#[test]
fn test_parse_temp_dew() {
    let temp_dew = parse_temp_dew("05/M01").unwrap();

    assert_eq!(temp_dew.temperature, 5);
    assert_eq!(temp_dew.dew_point, -1);
}

#[test]
fn test_parse_temp_dew_both_negative() {
    let temp_dew = parse_temp_dew("M11/M14").unwrap();

    assert_eq!(temp_dew.temperature, -11);
    assert_eq!(temp_dew.dew_point, -14);

    let zero = parse_temp_dew("M00/00").unwrap();
    assert_eq!(zero.temperature, 0);
}

#[test]
fn test_malformed_temp_dew() {
    for token in ["5/M01", "05M01", "05/1", "005/01", "05//01"] {
        assert!(
            matches!(parse_temp_dew(token), Err(MetarError::MalformedTempDew { .. })),
            "{} should be malformed",
            token
        );
    }
}

#[test]
fn test_parse_pressure() {
    let altimeter = parse_altimeter("A3006").unwrap();

    assert_eq!(altimeter.hundredths_inhg, 3006);
    assert_eq!(altimeter.inches_of_mercury(), 30.06);
}

#[test]
fn test_malformed_pressure() {
    for token in ["A306", "A30060", "A", "AXXXX"] {
        assert!(
            matches!(parse_altimeter(token), Err(MetarError::MalformedPressure { .. })),
            "{} should be malformed",
            token
        );
    }
}
