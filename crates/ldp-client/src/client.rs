//! The parse endpoint client.

use std::time::Duration;

use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, warn};

use ldp_model::ParseReport;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// Multipart field name the service expects the file under.
pub const FILE_FIELD: &str = "file";

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shape of the service's error body.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Client for the Latspace parsing service.
#[derive(Debug, Clone)]
pub struct ParseClient {
    http: Client,
    config: ClientConfig,
}

impl ParseClient {
    /// Create a client for the given backend.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ClientError::from)?;

        Ok(Self { http, config })
    }

    /// Create a client from the environment configuration.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// The configured backend.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Submit a file's bytes for analysis.
    ///
    /// Exactly one request is issued; there is no retry. The file travels
    /// as a single multipart part named [`FILE_FIELD`] with its original
    /// file name attached, matching the service contract.
    pub async fn parse_file(&self, file_name: &str, bytes: Vec<u8>) -> Result<ParseReport> {
        let url = self.config.parse_url();
        debug!(url = %url, file = %file_name, size = bytes.len(), "submitting file for analysis");

        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part(FILE_FIELD, part);

        let response = self.http.post(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "parsing service rejected the upload");
            return Err(failure_from_body(status.as_u16(), &body));
        }

        let body = response.text().await?;
        let report: ParseReport = serde_json::from_str(&body).map_err(|e| {
            warn!("2xx response did not match the report shape: {e}");
            ClientError::MalformedResponse(e.to_string())
        })?;

        debug!(
            records = report.parsed_data.len(),
            unmapped = report.unmapped_columns.len(),
            warnings = report.warnings.len(),
            "analysis complete"
        );
        Ok(report)
    }
}

/// Build the error for a non-2xx response, pulling out the service's
/// `detail` field when the body carries one.
fn failure_from_body(status: u16, body: &str) -> ClientError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .filter(|d| !d.trim().is_empty());

    ClientError::Api { status, detail }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_extracts_detail_field() {
        let err = failure_from_body(422, r#"{"detail":"Unsupported sheet format"}"#);
        assert_eq!(err.user_message(), "Unsupported sheet format");
    }

    #[test]
    fn failure_tolerates_non_json_body() {
        let err = failure_from_body(502, "<html>Bad Gateway</html>");
        match err {
            ClientError::Api { status, detail } => {
                assert_eq!(status, 502);
                assert_eq!(detail, None);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn failure_ignores_blank_detail() {
        let err = failure_from_body(400, r#"{"detail":""}"#);
        match err {
            ClientError::Api { detail, .. } => assert_eq!(detail, None),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn client_creation_succeeds() {
        assert!(ParseClient::new(ClientConfig::default()).is_ok());
    }
}
