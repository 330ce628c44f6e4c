//! mwa-export
//!
//! Turns a survey snapshot into text for display: the pretty JSON the form
//! shows on submit, and a Tera-rendered summary.

pub mod error;
pub mod json;
pub mod render;
