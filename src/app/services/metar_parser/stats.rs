//! Batch parsing statistics and result structures
//!
//! Used when many reports are parsed in one go: failed reports are logged
//! and skipped, and the counts end up here.

use crate::app::models::ParsedMetar;

/// Batch parsing result with decoded reports and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully decoded reports, in input order
    pub metars: Vec<ParsedMetar>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

impl ParseResult {
    /// Empty result, ready to accumulate a batch
    pub fn new() -> Self {
        Self {
            metars: Vec::new(),
            stats: ParseStats::new(),
        }
    }
}

impl Default for ParseResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Simple parsing statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of non-blank reports encountered
    pub total_reports: usize,

    /// Number of reports successfully parsed
    pub reports_parsed: usize,

    /// Number of reports skipped due to errors
    pub reports_skipped: usize,

    /// One message per skipped report
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_reports: 0,
            reports_parsed: 0,
            reports_skipped: 0,
            errors: Vec::new(),
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_reports == 0 {
            0.0
        } else {
            (self.reports_parsed as f64 / self.total_reports as f64) * 100.0
        }
    }

    /// True when no report was skipped
    pub fn is_clean(&self) -> bool {
        self.reports_skipped == 0
    }

    pub(crate) fn record_success(&mut self) {
        self.total_reports += 1;
        self.reports_parsed += 1;
    }

    pub(crate) fn record_failure(&mut self, message: String) {
        self.total_reports += 1;
        self.reports_skipped += 1;
        self.errors.push(message);
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
