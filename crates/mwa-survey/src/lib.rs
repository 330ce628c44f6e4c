//! mwa-survey library root.
//!
//! Re-exports internal modules so that examples and integration tests
//! can drive the form and submit path without a terminal.

pub mod commands;
pub mod config;
pub mod prompt;
