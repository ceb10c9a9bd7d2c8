//! Reusable UI components.

mod badge;

pub use badge::confidence_badge;
