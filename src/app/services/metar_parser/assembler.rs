//! Folding decoded groups into a [`ParsedMetar`]
//!
//! The assembler receives groups in report order. Day/time must appear
//! exactly once; every other group is optional. A repeated optional group
//! keeps its first occurrence.

use tracing::{debug, warn};

use super::classifier::Group;
use crate::app::models::{
    Altimeter, CloudLayer, DayTime, ParsedMetar, ReportType, TempDew, Visibility, Wind,
};
use crate::error::{MetarError, Result};

/// Accumulates decoded groups for one report
#[derive(Debug, Default)]
pub struct MetarAssembler {
    day_time: Option<(DayTime, String)>,
    is_auto: bool,
    is_corrected: bool,
    wind: Option<Wind>,
    wind_variation: Option<(u16, u16)>,
    visibility: Option<Visibility>,
    clouds: Vec<CloudLayer>,
    sky_clear: bool,
    temp_dew: Option<TempDew>,
    altimeter: Option<Altimeter>,
    unrecognized: Vec<String>,
}

impl MetarAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one decoded group into the report
    pub fn apply(&mut self, group: Group, token: &str) -> Result<()> {
        debug!("Decoded {:?} from '{}'", group, token);

        match group {
            Group::Auto => self.is_auto = true,
            Group::Correction => self.is_corrected = true,
            Group::DayTime(day_time) => {
                if let Some((_, first)) = &self.day_time {
                    return Err(MetarError::AmbiguousDayTime {
                        first: first.clone(),
                        second: token.to_string(),
                    });
                }
                self.day_time = Some((day_time, token.to_string()));
            }
            Group::Wind(wind) => keep_first(&mut self.wind, wind, "wind", token),
            Group::WindVariation(from, to) => {
                keep_first(&mut self.wind_variation, (from, to), "wind variation", token)
            }
            Group::Visibility(visibility) => {
                keep_first(&mut self.visibility, visibility, "visibility", token)
            }
            Group::SkyClear => self.sky_clear = true,
            Group::Cloud(layer) => self.clouds.push(layer),
            Group::TempDew(temp_dew) => {
                keep_first(&mut self.temp_dew, temp_dew, "temperature/dew point", token)
            }
            Group::Altimeter(altimeter) => {
                keep_first(&mut self.altimeter, altimeter, "altimeter", token)
            }
        }

        Ok(())
    }

    /// Record a token no recognizer claimed
    pub fn skip(&mut self, token: &str) {
        self.unrecognized.push(token.to_string());
    }

    /// Build the final record
    pub fn finish(
        self,
        station: String,
        report_type: Option<ReportType>,
        remarks: Option<String>,
    ) -> Result<ParsedMetar> {
        let (day_time, _) = self.day_time.ok_or(MetarError::MissingDayTime)?;

        if self.sky_clear && !self.clouds.is_empty() {
            warn!(
                "Station {} reports clear sky alongside {} cloud layer(s)",
                station,
                self.clouds.len()
            );
        }

        let wind = match (self.wind, self.wind_variation) {
            (Some(wind), range) => Some(Wind {
                variable_range: range,
                ..wind
            }),
            (None, Some((from, to))) => {
                warn!(
                    "Station {} reports wind variation {:03}V{:03} without a wind group",
                    station, from, to
                );
                None
            }
            (None, None) => None,
        };

        let (temperature, dew_point) = match self.temp_dew {
            Some(temp_dew) => (Some(temp_dew.temperature), Some(temp_dew.dew_point)),
            None => (None, None),
        };

        Ok(ParsedMetar {
            report_type,
            station,
            day: day_time.day,
            observation_time: day_time.time,
            is_auto: self.is_auto,
            is_corrected: self.is_corrected,
            wind,
            visibility: self.visibility,
            clouds: self.clouds,
            temperature,
            dew_point,
            pressure: self.altimeter,
            remarks,
            unrecognized: self.unrecognized,
        })
    }
}

fn keep_first<T>(slot: &mut Option<T>, value: T, group: &str, token: &str) {
    if slot.is_some() {
        warn!("Ignoring repeated {} group '{}'", group, token);
    } else {
        *slot = Some(value);
    }
}
