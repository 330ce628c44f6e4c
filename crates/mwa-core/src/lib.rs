//! mwa-core
//!
//! Pure domain types for the thyroid MWA doctor survey: field identifiers,
//! option sets, the response model, and the form state manager.
//! No I/O — this is the shared vocabulary of the survey crates.

pub mod error;
pub mod field;
pub mod form;
pub mod models;
pub mod options;
pub mod visibility;
