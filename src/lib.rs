//! moodjour - Terminal mood journal
//!
//! Records emotions with optional context, guided reflection and a templated
//! insight, keeps the most recent 100 entries in a local blob, and
//! aggregates them into daily, weekly and per-emotion statistics.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodError;
