//! Schema-Driven Form Preview
//!
//! Two panes: the schema editor on the left and the form generated from the
//! committed schema on the right.

pub mod fields;
pub mod generator;
pub mod submission;

pub use generator::*;
