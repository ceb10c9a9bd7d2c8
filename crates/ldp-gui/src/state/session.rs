//! The session state machine.
//!
//! One [`Session`] exists per application run. It owns the selected file
//! and the analysis request lifecycle:
//!
//! ```text
//! Idle ──begin_analysis──▶ Loading ──finish_analysis──▶ Success | Error
//!   ▲                                                       │
//!   └────────────── reset / accept ◀────────────────────────┘
//! ```
//!
//! A successful report and an error message are two variants of one enum,
//! so "both present" is unrepresentable. Every dispatched request carries
//! a generation number; `reset` and `accept` advance the generation, so a
//! request that completes after the user moved on is discarded instead of
//! overwriting fresh state.

use std::path::{Path, PathBuf};

use ldp_model::ParseReport;

/// File extensions the intake accepts, lowercase.
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["xlsx", "xls", "csv"];

/// Whether a path's extension is on the intake allow-list.
pub fn extension_allowed(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_EXTENSIONS.contains(&ext.as_str())
        })
}

/// The file currently staged for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Where the file lives on disk.
    pub path: PathBuf,
    /// Display name (the final path component).
    pub name: String,
}

impl SelectedFile {
    fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }
}

/// The analysis request lifecycle as a tagged state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnalysisState {
    /// Nothing requested yet, or cleared.
    #[default]
    Idle,
    /// Exactly one request is in flight.
    Loading,
    /// The last request succeeded.
    Success(ParseReport),
    /// The last request failed; the message is ready for display.
    Error(String),
}

/// Everything a dispatched analysis request needs, detached from state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisJob {
    /// Generation this request belongs to; compared on completion.
    pub generation: u64,
    /// File to upload.
    pub path: PathBuf,
    /// Original file name, forwarded to the service.
    pub file_name: String,
}

/// Client-owned session state: the selected file plus the request
/// lifecycle. Single owner, single writer; no locking needed beyond the
/// single-flight check in [`Session::begin_analysis`].
#[derive(Debug, Default)]
pub struct Session {
    selected_file: Option<SelectedFile>,
    analysis: AnalysisState,
    generation: u64,
}

impl Session {
    /// Offer candidate files to the intake.
    ///
    /// Only the first candidate is considered; the rest are ignored (at
    /// most one file is tracked at a time). A candidate outside the
    /// extension allow-list is a silent no-op. On acceptance the file
    /// replaces any previous selection and any prior result or error is
    /// cleared: a newly selected file invalidates the previous analysis,
    /// including one still in flight.
    ///
    /// Returns whether a file was accepted.
    pub fn accept(&mut self, candidates: &[PathBuf]) -> bool {
        let Some(first) = candidates.first() else {
            return false;
        };
        if !extension_allowed(first) {
            return false;
        }

        self.selected_file = Some(SelectedFile::new(first.clone()));
        self.analysis = AnalysisState::Idle;
        self.generation += 1;
        true
    }

    /// Start an analysis, enforcing single-flight.
    ///
    /// Returns `None` (a no-op) unless a file is selected and no request
    /// is currently in flight. Otherwise transitions to `Loading`,
    /// clearing any prior error, and returns the job to dispatch.
    pub fn begin_analysis(&mut self) -> Option<AnalysisJob> {
        if matches!(self.analysis, AnalysisState::Loading) {
            return None;
        }
        let file = self.selected_file.as_ref()?;

        self.generation += 1;
        self.analysis = AnalysisState::Loading;
        Some(AnalysisJob {
            generation: self.generation,
            path: file.path.clone(),
            file_name: file.name.clone(),
        })
    }

    /// Record the outcome of a dispatched request.
    ///
    /// Outcomes from a stale generation (the user reset or picked another
    /// file while the request was in flight) are discarded. Returns
    /// whether the outcome was applied.
    pub fn finish_analysis(
        &mut self,
        generation: u64,
        outcome: Result<ParseReport, String>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }

        self.analysis = match outcome {
            Ok(report) => AnalysisState::Success(report),
            Err(message) => AnalysisState::Error(message),
        };
        true
    }

    /// Return to the initial state, unconditionally.
    ///
    /// Always safe to call; does not cancel an in-flight request, but
    /// advancing the generation makes its eventual completion inert.
    pub fn reset(&mut self) {
        self.selected_file = None;
        self.analysis = AnalysisState::Idle;
        self.generation += 1;
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The file staged for analysis, if any.
    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    /// The current lifecycle state.
    pub fn analysis(&self) -> &AnalysisState {
        &self.analysis
    }

    /// Whether a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self.analysis, AnalysisState::Loading)
    }

    /// The last successful report, if the session is in `Success`.
    pub fn report(&self) -> Option<&ParseReport> {
        match &self.analysis {
            AnalysisState::Success(report) => Some(report),
            _ => None,
        }
    }

    /// The last error message, if the session is in `Error`.
    pub fn error(&self) -> Option<&str> {
        match &self.analysis {
            AnalysisState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Current generation; completions carrying an older value are stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether analysis can be started right now.
    pub fn can_analyze(&self) -> bool {
        self.selected_file.is_some() && !self.is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn csv(name: &str) -> PathBuf {
        PathBuf::from(format!("/tmp/{name}"))
    }

    fn sample_report() -> ParseReport {
        serde_json::from_value(json!({
            "status": "ok",
            "header_row": 1,
            "parsed_data": [{
                "row": 2, "col": 3,
                "param_name": "Voltage",
                "asset_name": null,
                "raw_value": "12.4V",
                "parsed_value": 12.4,
                "confidence": "high"
            }],
            "unmapped_columns": [],
            "warnings": []
        }))
        .unwrap()
    }

    #[test]
    fn accepts_only_allowed_extensions() {
        let mut session = Session::default();
        for bad in ["report.pdf", "data.txt", "archive.zip", "noext"] {
            assert!(!session.accept(&[csv(bad)]));
            assert_eq!(session.selected_file(), None);
        }
        assert!(session.accept(&[csv("data.csv")]));
        assert!(session.accept(&[csv("DATA.XLSX")]));
        assert!(session.accept(&[csv("legacy.xls")]));
    }

    #[test]
    fn accepts_only_the_first_candidate() {
        let mut session = Session::default();
        assert!(session.accept(&[csv("first.csv"), csv("second.csv")]));
        assert_eq!(session.selected_file().unwrap().name, "first.csv");
    }

    #[test]
    fn first_disallowed_candidate_blocks_the_drop() {
        // Only the first candidate is considered, even when a later one
        // would have been acceptable.
        let mut session = Session::default();
        assert!(!session.accept(&[csv("notes.txt"), csv("data.csv")]));
        assert_eq!(session.selected_file(), None);
    }

    #[test]
    fn accepting_a_file_clears_prior_outcome() {
        let mut session = Session::default();
        session.accept(&[csv("a.csv")]);
        let job = session.begin_analysis().unwrap();
        session.finish_analysis(job.generation, Ok(sample_report()));
        assert!(session.report().is_some());

        session.accept(&[csv("b.csv")]);
        assert_eq!(session.analysis(), &AnalysisState::Idle);
        assert!(session.report().is_none());
        assert!(session.error().is_none());
    }

    #[test]
    fn begin_requires_a_file() {
        let mut session = Session::default();
        assert_eq!(session.begin_analysis(), None);
    }

    #[test]
    fn single_flight_blocks_second_request() {
        let mut session = Session::default();
        session.accept(&[csv("data.csv")]);
        let first = session.begin_analysis();
        assert!(first.is_some());
        // Second call while loading must not produce a job.
        assert_eq!(session.begin_analysis(), None);
        assert!(session.is_loading());
    }

    #[test]
    fn success_flow() {
        let mut session = Session::default();
        session.accept(&[csv("data.csv")]);
        let job = session.begin_analysis().unwrap();
        assert!(session.finish_analysis(job.generation, Ok(sample_report())));
        assert!(!session.is_loading());
        assert_eq!(session.report().unwrap().parsed_data.len(), 1);
        assert!(session.error().is_none());
    }

    #[test]
    fn error_flow() {
        let mut session = Session::default();
        session.accept(&[csv("data.csv")]);
        let job = session.begin_analysis().unwrap();
        assert!(session.finish_analysis(job.generation, Err("Unsupported sheet format".into())));
        assert_eq!(session.error(), Some("Unsupported sheet format"));
        assert!(session.report().is_none());
        // Recoverable: a new analysis can start immediately.
        assert!(session.can_analyze());
    }

    #[test]
    fn reset_clears_everything_from_any_state() {
        let mut session = Session::default();
        session.accept(&[csv("data.csv")]);
        let job = session.begin_analysis().unwrap();
        session.finish_analysis(job.generation, Ok(sample_report()));

        session.reset();
        assert_eq!(session.selected_file(), None);
        assert_eq!(session.analysis(), &AnalysisState::Idle);
        assert!(session.report().is_none());
        assert!(session.error().is_none());
    }

    #[test]
    fn stale_completion_after_reset_is_discarded() {
        let mut session = Session::default();
        session.accept(&[csv("data.csv")]);
        let job = session.begin_analysis().unwrap();

        // User resets while the request is in flight.
        session.reset();

        // The response eventually arrives and must not resurrect state.
        assert!(!session.finish_analysis(job.generation, Ok(sample_report())));
        assert_eq!(session.analysis(), &AnalysisState::Idle);
        assert_eq!(session.selected_file(), None);
    }

    #[test]
    fn stale_completion_after_new_selection_is_discarded() {
        let mut session = Session::default();
        session.accept(&[csv("old.csv")]);
        let job = session.begin_analysis().unwrap();

        // User picks a different file while the request is in flight.
        session.accept(&[csv("new.csv")]);

        assert!(!session.finish_analysis(job.generation, Err("boom".into())));
        assert_eq!(session.analysis(), &AnalysisState::Idle);
        assert_eq!(session.selected_file().unwrap().name, "new.csv");
    }
}
