//! The `/parse` response document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One cell the service mapped to a known parameter.
///
/// Identity is `(row, col)`; uniqueness within one report is assumed from
/// the service, not enforced here. `raw_value` is kept as arbitrary JSON
/// because the source spreadsheet cell can hold anything; `confidence` is
/// kept as the raw wire string so exporting a report reproduces exactly
/// what the service sent (see [`crate::Confidence::from_wire`] for
/// classification).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedRecord {
    /// 1-based row in the source sheet.
    pub row: i64,
    /// 1-based column in the source sheet.
    pub col: i64,
    /// Canonical parameter name the cell was mapped to.
    pub param_name: String,
    /// Asset extracted from the column header, if any (e.g. "Boiler 1").
    pub asset_name: Option<String>,
    /// The cell content as received, untouched.
    pub raw_value: Value,
    /// Numeric interpretation of the cell, if the service produced one.
    pub parsed_value: Option<f64>,
    /// Self-reported confidence tier ("high", "medium", "low").
    pub confidence: String,
}

/// A column the service could not map to any known parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmappedColumn {
    /// 1-based column in the source sheet.
    pub col: i64,
    /// The original header text.
    pub header: String,
    /// Why the mapping failed, as free text.
    pub reason: String,
}

/// Everything the service produced for one uploaded file.
///
/// Sequence fields preserve server emission order verbatim; the client
/// never sorts or groups them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseReport {
    /// Service status string (e.g. "ok").
    pub status: String,
    /// 1-based row the service identified as the header row.
    pub header_row: i64,
    /// Mapped cells, in server order.
    pub parsed_data: Vec<ParsedRecord>,
    /// Columns that could not be mapped, in server order.
    pub unmapped_columns: Vec<UnmappedColumn>,
    /// Free-form warnings, in server order.
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_report() -> ParseReport {
        ParseReport {
            status: "ok".to_string(),
            header_row: 1,
            parsed_data: vec![ParsedRecord {
                row: 2,
                col: 3,
                param_name: "Voltage".to_string(),
                asset_name: None,
                raw_value: json!("12.4V"),
                parsed_value: Some(12.4),
                confidence: "high".to_string(),
            }],
            unmapped_columns: vec![UnmappedColumn {
                col: 5,
                header: "Notes".to_string(),
                reason: "no matching parameter".to_string(),
            }],
            warnings: vec!["header row guessed".to_string()],
        }
    }

    #[test]
    fn decodes_service_response() {
        let body = json!({
            "status": "ok",
            "header_row": 1,
            "parsed_data": [{
                "row": 2,
                "col": 3,
                "param_name": "Voltage",
                "asset_name": null,
                "raw_value": "12.4V",
                "parsed_value": 12.4,
                "confidence": "high"
            }],
            "unmapped_columns": [],
            "warnings": []
        });

        let report: ParseReport = serde_json::from_value(body).unwrap();
        assert_eq!(report.status, "ok");
        assert_eq!(report.parsed_data.len(), 1);
        let record = &report.parsed_data[0];
        assert_eq!(record.param_name, "Voltage");
        assert_eq!(record.asset_name, None);
        assert_eq!(record.parsed_value, Some(12.4));
    }

    #[test]
    fn raw_value_accepts_any_scalar() {
        for raw in [json!("text"), json!(42), json!(3.5), json!(true), json!(null)] {
            let body = json!({
                "status": "ok",
                "header_row": 1,
                "parsed_data": [{
                    "row": 1, "col": 1,
                    "param_name": "P",
                    "asset_name": "Pump 2",
                    "raw_value": raw,
                    "parsed_value": null,
                    "confidence": "medium"
                }],
                "unmapped_columns": [],
                "warnings": []
            });
            let report: ParseReport = serde_json::from_value(body).unwrap();
            assert_eq!(report.parsed_data[0].raw_value, raw);
            assert_eq!(report.parsed_data[0].parsed_value, None);
        }
    }

    #[test]
    fn pretty_json_round_trips() {
        let report = sample_report();
        let text = serde_json::to_string_pretty(&report).unwrap();
        let back: ParseReport = serde_json::from_str(&text).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn unrecognized_confidence_survives_round_trip() {
        let mut report = sample_report();
        report.parsed_data[0].confidence = "certain-ish".to_string();
        let text = serde_json::to_string_pretty(&report).unwrap();
        let back: ParseReport = serde_json::from_str(&text).unwrap();
        assert_eq!(back.parsed_data[0].confidence, "certain-ish");
    }
}
