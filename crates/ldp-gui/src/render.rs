//! Pure classification of a [`ParseReport`] into a renderable view model.
//!
//! The Iced view layer consumes [`ReportView`] only; every display
//! decision (placeholders, truncation, confidence tiers, empty-state)
//! is made here, with no side effects, so it can be tested without a
//! GUI runtime.

use ldp_model::{Confidence, ParseReport};
use serde_json::Value;

/// Placeholder shown for absent values.
pub const PLACEHOLDER_DASH: &str = "—";

/// Notice shown instead of an empty table body.
pub const EMPTY_NOTICE: &str = "No parameters mapped.";

/// Visual width limit for raw values; longer text is truncated with an
/// ellipsis. The underlying report value is untouched.
pub const MAX_RAW_CHARS: usize = 32;

/// One row of the parsed-data table, fully formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRow {
    pub row: String,
    pub col: String,
    pub param: String,
    /// Asset name, or the placeholder dash when absent or blank.
    pub asset: String,
    /// Raw cell value in its natural string form, truncated for display.
    pub raw: String,
    /// Parsed number exactly as received, or the placeholder dash.
    pub parsed: String,
    /// Display tier; unrecognized wire strings classify as `Low`.
    pub tier: Confidence,
}

/// One row of the unmapped-columns table, values verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmappedRow {
    pub col: String,
    pub header: String,
    pub reason: String,
}

/// Renderable form of a [`ParseReport`]. Section order and row order
/// mirror the report; the renderer never sorts or groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportView {
    pub warnings: Vec<String>,
    pub unmapped: Vec<UnmappedRow>,
    pub records: Vec<RecordRow>,
}

impl ReportView {
    /// Whether the warnings section should be rendered at all.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Whether the unmapped-columns section should be rendered at all.
    pub fn has_unmapped(&self) -> bool {
        !self.unmapped.is_empty()
    }

    /// Whether the table body is replaced by the empty-state notice.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Build the view model for a report. Pure: no side effects, no I/O.
pub fn build_report_view(report: &ParseReport) -> ReportView {
    let warnings = report.warnings.clone();

    let unmapped = report
        .unmapped_columns
        .iter()
        .map(|u| UnmappedRow {
            col: u.col.to_string(),
            header: u.header.clone(),
            reason: u.reason.clone(),
        })
        .collect();

    let records = report
        .parsed_data
        .iter()
        .map(|r| RecordRow {
            row: r.row.to_string(),
            col: r.col.to_string(),
            param: r.param_name.clone(),
            asset: match r.asset_name.as_deref() {
                // Blank asset names count as absent.
                Some(name) if !name.trim().is_empty() => name.to_string(),
                _ => PLACEHOLDER_DASH.to_string(),
            },
            raw: truncate_chars(&display_raw(&r.raw_value), MAX_RAW_CHARS),
            parsed: r
                .parsed_value
                .map(display_number)
                .unwrap_or_else(|| PLACEHOLDER_DASH.to_string()),
            tier: Confidence::from_wire(&r.confidence),
        })
        .collect();

    ReportView {
        warnings,
        unmapped,
        records,
    }
}

/// Natural string form of an arbitrary JSON scalar: strings unquoted,
/// numbers and booleans as written, null as empty text.
fn display_raw(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The numeric value exactly as received, with no rounding or padding.
fn display_number(n: f64) -> String {
    n.to_string()
}

/// Truncate to at most `max` characters, appending an ellipsis.
fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max).collect();
    out.push('…');
    out
}
