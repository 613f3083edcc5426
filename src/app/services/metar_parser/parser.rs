//! Core METAR parser implementation
//!
//! Orchestrates the single pass over a report: split into tokens, take the
//! station, classify and decode every remaining token up to `RMK`, then
//! assemble the record. Also hosts the batch helpers that log and skip
//! reports which fail to parse.

use std::io::{BufRead, ErrorKind};
use std::path::Path;
use tracing::{debug, info, trace, warn};

use super::assembler::MetarAssembler;
use super::classifier::recognize;
use super::detail::describe;
use super::splitter::split;
use super::stats::ParseResult;
use crate::app::models::{ParsedMetar, ReportType};
use crate::config::ParserConfig;
use crate::constants::STATION_ID_LENGTH;
use crate::error::{MetarError, Result};

/// METAR report parser
///
/// Holds only configuration; every call to [`MetarParser::parse`] is
/// independent, so one parser can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct MetarParser {
    config: ParserConfig,
}

impl MetarParser {
    /// Create a new parser with the given configuration
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse one raw report
    pub fn parse(&self, raw: &str) -> Result<ParsedMetar> {
        let stream = split(raw)?;
        let body = stream.body();

        let (report_type, station_index) = match body.first() {
            Some(first) => match ReportType::from_token(first) {
                Some(report_type) if body.len() > 1 => (Some(report_type), 1),
                _ => (None, 0),
            },
            None => return Err(MetarError::MissingDayTime),
        };

        let station = body[station_index].to_string();
        self.check_station(&station)?;

        let mut assembler = MetarAssembler::new();
        for token in &body[station_index + 1..] {
            match recognize(token)? {
                Some((_, group)) => assembler.apply(group, token)?,
                None => {
                    trace!("Unrecognized group '{}' in report from {}", token, station);
                    if self.config.keep_unrecognized {
                        assembler.skip(token);
                    }
                }
            }
        }

        let metar = assembler.finish(station, report_type, stream.remarks())?;
        debug!(
            "Parsed report from {} ({} clouds, {} unrecognized)",
            metar.station,
            metar.clouds.len(),
            metar.unrecognized.len()
        );
        Ok(metar)
    }

    /// One-line summary of a parsed report, using the configured compass
    pub fn detail(&self, metar: &ParsedMetar) -> String {
        describe(metar, self.config.compass_points)
    }

    /// Parse many reports, logging and skipping the ones that fail
    ///
    /// Blank entries are ignored and not counted.
    pub fn parse_reports<'a, I>(&self, reports: I) -> ParseResult
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut result = ParseResult::new();
        for raw in reports {
            self.parse_into(raw, &mut result);
        }
        result
    }

    /// Parse one report per line from a reader
    ///
    /// Lines are parsed as they are read. A line that is not valid UTF-8 is
    /// counted as a skipped report; any other read error aborts the batch.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<ParseResult> {
        let mut result = ParseResult::new();

        for line in reader.lines() {
            match line {
                Ok(raw) => self.parse_into(&raw, &mut result),
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    warn!("Skipping undecodable report: {}", e);
                    let message = format!("Report {}: {}", result.stats.total_reports + 1, e);
                    result.stats.record_failure(message);
                }
                Err(e) => return Err(e.into()),
            }
        }

        info!(
            "Parsed {} of {} reports",
            result.stats.reports_parsed, result.stats.total_reports
        );
        Ok(result)
    }

    fn parse_into(&self, raw: &str, result: &mut ParseResult) {
        if raw.trim().is_empty() {
            return;
        }

        match self.parse(raw) {
            Ok(metar) => {
                result.metars.push(metar);
                result.stats.record_success();
            }
            Err(e) => {
                warn!("Skipping report '{}': {}", raw.trim(), e);
                let message = format!("Report {}: {}", result.stats.total_reports + 1, e);
                result.stats.record_failure(message);
            }
        }
    }

    /// Parse one report per line from a file
    pub fn parse_file(&self, path: &Path) -> Result<ParseResult> {
        info!("Parsing METAR file: {}", path.display());
        let file = std::fs::File::open(path)?;
        self.parse_reader(std::io::BufReader::new(file))
    }

    fn check_station(&self, station: &str) -> Result<()> {
        let icao_shaped = station.len() == STATION_ID_LENGTH
            && station.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());

        if icao_shaped {
            return Ok(());
        }
        if self.config.strict_station {
            return Err(MetarError::InvalidStation {
                token: station.to_string(),
            });
        }
        warn!("Station identifier '{}' is not ICAO shaped", station);
        Ok(())
    }
}

/// Parse one raw report with the default configuration
pub fn parse_metar(raw: &str) -> Result<ParsedMetar> {
    MetarParser::default().parse(raw)
}

/// One-line summary of a report with the default configuration
pub fn detail_metar(metar: &ParsedMetar) -> String {
    MetarParser::default().detail(metar)
}
