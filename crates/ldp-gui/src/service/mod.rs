//! Services for background tasks.
//!
//! These services provide async work for use with Iced's `Task::perform`
//! pattern; completions come back into the update loop as messages.

pub mod analysis;
pub mod export;
