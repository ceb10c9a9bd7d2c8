//! Latspace Data Parser - GUI Library
//!
//! Desktop client for the Latspace parsing service: pick a spreadsheet,
//! submit it for analysis, inspect the mapped cells and their confidence
//! tiers, and export the raw report as JSON.
//!
//! Built with Iced 0.14 using the Elm architecture.

pub mod app;
pub mod component;
pub mod message;
pub mod render;
pub mod state;
pub mod view;

// Service modules for background tasks
pub mod service;
