//! Command-line interface components.
//!
//! Reads raw reports (one per line) from a file or stdin, decodes them, and
//! prints either a summary line or a JSON object per report.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::*;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::debug;

use crate::app::models::ParsedMetar;
use crate::app::services::metar_parser::{MetarParser, ParseResult};
use crate::config::{CompassPoints, ParserConfig};

#[derive(Parser, Debug)]
#[command(name = "metar")]
#[command(about = "Decode METAR aviation weather reports")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// File with one METAR report per line (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Compass resolution for wind direction labels (8 or 16)
    #[arg(long, default_value = "16")]
    pub compass: CompassPoints,

    /// Reject reports whose station is not a 4 character ICAO identifier
    #[arg(long)]
    pub strict_station: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One summary line per report
    Text,
    /// One JSON object per report
    Json,
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }

    /// Parser configuration implied by the flags
    pub fn parser_config(&self) -> ParserConfig {
        let config = ParserConfig::default().with_compass_points(self.compass);
        if self.strict_station {
            config.with_strict_station()
        } else {
            config
        }
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("metar_parser={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Decode every report from the selected input and print the results
///
/// Returns the batch result so the caller can choose an exit code.
pub fn run(args: &Args) -> Result<ParseResult> {
    let parser = MetarParser::new(args.parser_config());

    let result = match &args.input {
        Some(path) => parser
            .parse_file(path)
            .with_context(|| format!("Failed to read reports from {}", path.display()))?,
        None => parser
            .parse_reader(BufReader::new(io::stdin().lock()))
            .context("Failed to read reports from stdin")?,
    };

    for metar in &result.metars {
        println!("{}", render(&parser, metar, args.format)?);
    }

    print_summary(&result);
    Ok(result)
}

/// Render one report in the requested format
pub fn render(parser: &MetarParser, metar: &ParsedMetar, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let detail = parser.detail(metar);
            Ok(match detail.split_once("; ") {
                Some((header, rest)) => format!("{}; {}", header.bright_cyan().bold(), rest),
                None => detail.bright_cyan().bold().to_string(),
            })
        }
        OutputFormat::Json => {
            serde_json::to_string(metar).context("Failed to serialize parsed report")
        }
    }
}

fn print_summary(result: &ParseResult) {
    let stats = &result.stats;
    let line = format!(
        "{} of {} reports parsed ({:.1}%)",
        stats.reports_parsed,
        stats.total_reports,
        stats.success_rate()
    );

    if stats.is_clean() {
        eprintln!("{}", line.bright_green());
    } else {
        eprintln!("{}", line.bright_yellow());
        for error in &stats.errors {
            eprintln!("  {}", error.bright_red());
        }
    }
}
