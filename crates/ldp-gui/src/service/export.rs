//! Export service: save the last report as pretty-printed JSON.

use std::path::Path;

use iced::Task;

use ldp_model::ParseReport;

use crate::message::Message;

/// Fixed file name offered by the save dialog.
pub const EXPORT_FILE_NAME: &str = "latspace_parsed_data.json";

/// Ask where to save, then write the report.
///
/// Returns a Task that will produce an `ExportFinished` message carrying
/// the written path, or `None` when the dialog was cancelled or the
/// write failed. Export has no user-facing error surface; failures are
/// logged and leave the session untouched.
pub fn run(report: ParseReport) -> Task<Message> {
    Task::perform(
        async move {
            let handle = rfd::AsyncFileDialog::new()
                .set_title("Save Parsed Data")
                .set_file_name(EXPORT_FILE_NAME)
                .add_filter("JSON", &["json"])
                .save_file()
                .await?;

            let path = handle.path().to_path_buf();
            match write_report(&path, &report) {
                Ok(()) => Some(path),
                Err(e) => {
                    tracing::error!("failed to write export: {e}");
                    None
                }
            }
        },
        Message::ExportFinished,
    )
}

/// Serialize and write the report.
///
/// The file handle is scoped to the single `write` call: acquired and
/// released on one exit path, so repeated exports cannot leak handles.
pub fn write_report(path: &Path, report: &ParseReport) -> std::io::Result<()> {
    let text = serde_json::to_string_pretty(report).map_err(std::io::Error::other)?;
    std::fs::write(path, text)
}
