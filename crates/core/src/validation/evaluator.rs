//! Rule evaluator: pure logic, no I/O.
//!
//! The comparison is strict: equal dates fail. Time of day participates when
//! present; date-only values are midnight.

use crate::types::DateValue;

use super::rules::{
    format_message, FailureKind, ValidationOutcome, DATE_GREATER_THAN_TEMPLATE,
    MISSING_VALUE_TEMPLATE,
};

/// `true` when `candidate` is strictly after `reference`.
pub fn is_strictly_after(candidate: &DateValue, reference: &DateValue) -> bool {
    candidate > reference
}

/// A `dategreaterthan` rule bound to the display names of its two fields.
#[derive(Debug, Clone, Copy)]
pub struct DateGreaterThan<'a> {
    pub display_name: &'a str,
    pub other_display_name: &'a str,
    pub template: &'a str,
}

impl<'a> DateGreaterThan<'a> {
    /// Bind the rule with the default template.
    pub fn new(display_name: &'a str, other_display_name: &'a str) -> Self {
        Self {
            display_name,
            other_display_name,
            template: DATE_GREATER_THAN_TEMPLATE,
        }
    }

    pub fn with_template(mut self, template: &'a str) -> Self {
        self.template = template;
        self
    }

    /// The user-facing message shown when the comparison fails.
    pub fn failure_message(&self) -> String {
        format_message(self.template, self.display_name, self.other_display_name)
    }

    /// Compare two resolved dates.
    ///
    /// An absent date is a [`FailureKind::MissingValue`] failure, never a pass.
    pub fn evaluate(
        &self,
        candidate: Option<DateValue>,
        reference: Option<DateValue>,
    ) -> ValidationOutcome {
        match (candidate, reference) {
            (Some(candidate), Some(reference)) => {
                if is_strictly_after(&candidate, &reference) {
                    ValidationOutcome::valid()
                } else {
                    ValidationOutcome::invalid(FailureKind::NotGreater, self.failure_message())
                }
            }
            _ => ValidationOutcome::invalid(
                FailureKind::MissingValue,
                format_message(
                    MISSING_VALUE_TEMPLATE,
                    self.display_name,
                    self.other_display_name,
                ),
            ),
        }
    }
}
