//! HTTP client for the Latspace parsing service.
//!
//! The service exposes one endpoint, `POST {base}/parse`, which takes a
//! spreadsheet file as a multipart upload and returns a
//! [`ldp_model::ParseReport`]. This crate owns the request plumbing and
//! the error taxonomy that folds every possible failure into one
//! user-facing message.

mod client;
mod config;
mod error;

pub use client::{FILE_FIELD, ParseClient};
pub use config::{BACKEND_URL_VAR, ClientConfig};
pub use error::{ClientError, GENERIC_PARSE_FAILURE, Result};
