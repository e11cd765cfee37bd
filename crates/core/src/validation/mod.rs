//! Cross-field validation engine.
//!
//! Provides rule and result types, the field registry used to resolve sibling
//! fields by name, a pure-logic evaluator, schema assembly with eager
//! configuration checks, and the client-side rule export.

pub mod client;
pub mod evaluator;
pub mod registry;
pub mod rules;
pub mod schema;
