//! Wire types for the Latspace parsing service.
//!
//! The parsing service returns one JSON document per upload describing
//! every cell it could map ([`ParsedRecord`]), every column it could not
//! ([`UnmappedColumn`]), and free-form warnings. These types mirror that
//! document exactly so a report can be exported back to disk without
//! losing information the client does not understand.

mod confidence;
mod report;

pub use confidence::{Confidence, UnknownConfidence};
pub use report::{ParseReport, ParsedRecord, UnmappedColumn};
