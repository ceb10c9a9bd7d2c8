//! Analysis service: the one suspension point in the application.
//!
//! Reads the selected file from disk and submits it to the parsing
//! service. The outcome returns to the update loop tagged with the job's
//! generation so the session can discard stale completions.

use iced::Task;

use ldp_client::{ClientConfig, ClientError, ParseClient};
use ldp_model::ParseReport;

use crate::message::Message;
use crate::state::AnalysisJob;

/// Dispatch an analysis request.
///
/// Returns a Task that will produce an `AnalysisFinished` message. Every
/// failure is folded into one user-facing string here; the update loop
/// never inspects error details.
pub fn run(config: ClientConfig, job: AnalysisJob) -> Task<Message> {
    Task::perform(
        async move {
            let generation = job.generation;
            let outcome = analyze(config, job).await.map_err(|e| e.user_message());
            (generation, outcome)
        },
        |(generation, outcome)| Message::AnalysisFinished {
            generation,
            outcome,
        },
    )
}

/// Read the file and perform the upload.
async fn analyze(config: ClientConfig, job: AnalysisJob) -> ldp_client::Result<ParseReport> {
    let bytes = tokio::fs::read(&job.path)
        .await
        .map_err(|e| ClientError::FileRead(e.to_string()))?;

    let client = ParseClient::new(config)?;
    client.parse_file(&job.file_name, bytes).await
}
