//! Application state.
//!
//! All state lives in [`Session`], an explicit finite-state object owned
//! by the `App` and passed by reference to view and export code.

mod session;

pub use session::{
    ALLOWED_EXTENSIONS, AnalysisJob, AnalysisState, SelectedFile, Session, extension_allowed,
};
