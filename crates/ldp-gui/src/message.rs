//! Message hierarchy for the Elm-style architecture.
//!
//! All user interactions and background-task completions flow through
//! [`Message`]; the `update` function is the only place state changes.

use std::path::PathBuf;

use ldp_model::ParseReport;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // File intake
    // =========================================================================
    /// The user asked to browse for a file.
    OpenFilePicker,

    /// The file dialog returned (None when cancelled).
    FileSelected(Option<PathBuf>),

    /// A file was dropped onto the window.
    FileDropped(PathBuf),

    // =========================================================================
    // Analysis lifecycle
    // =========================================================================
    /// The user asked to analyze the selected file.
    AnalyzeRequested,

    /// The analysis request completed.
    ///
    /// `generation` identifies which dispatched request this outcome
    /// belongs to; stale generations are discarded by the session.
    AnalysisFinished {
        generation: u64,
        outcome: Result<ParseReport, String>,
    },

    /// The user asked to clear everything back to the initial state.
    ResetRequested,

    // =========================================================================
    // Export
    // =========================================================================
    /// The user asked to save the last report as JSON.
    ExportRequested,

    /// The export task finished (None when cancelled or failed).
    ExportFinished(Option<PathBuf>),

    /// No operation - used for events we deliberately ignore.
    Noop,
}
