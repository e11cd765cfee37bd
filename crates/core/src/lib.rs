//! Domain logic for cross-field date validation.
//!
//! Holds the record model, the field registry used to look up sibling fields
//! by name, the `dategreaterthan` rule evaluator and the client-side rule
//! export. Nothing in here touches HTTP.

pub mod dates;
pub mod error;
pub mod project;
pub mod types;
pub mod validation;
