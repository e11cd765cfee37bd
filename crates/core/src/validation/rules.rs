//! Validation rule and result types.

use serde::{Deserialize, Serialize};

/// Rule name shared by the server rule, the client method and the adapter.
pub const DATE_GREATER_THAN: &str = "dategreaterthan";

/// Default failure template: `{0}` is the validated field's display name,
/// `{1}` the referenced field's display name.
pub const DATE_GREATER_THAN_TEMPLATE: &str = "{0} must be greater than {1}";

/// Generic message used when either date is absent.
pub const MISSING_VALUE_TEMPLATE: &str = "{0} and {1} must both be valid dates";

/// A rule attached to one field of a record schema.
///
/// Immutable once attached. The referenced field is a lookup key into the
/// record's field registry, not an owning link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDescriptor {
    pub rule_name: String,
    pub referenced_field_name: String,
    pub message_template: String,
}

impl RuleDescriptor {
    /// `dategreaterthan` against `other_field`, with the default template.
    pub fn date_greater_than(other_field: impl Into<String>) -> Self {
        Self {
            rule_name: DATE_GREATER_THAN.to_string(),
            referenced_field_name: other_field.into(),
            message_template: DATE_GREATER_THAN_TEMPLATE.to_string(),
        }
    }

    /// Replace the failure template.
    pub fn with_message(mut self, template: impl Into<String>) -> Self {
        self.message_template = template.into();
        self
    }
}

/// Why a single rule evaluation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Candidate is not strictly after the reference.
    NotGreater,
    /// Either date is absent.
    MissingValue,
}

/// Outcome of one rule evaluation. Produced fresh per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureKind>,
    pub message: Option<String>,
}

impl ValidationOutcome {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            failure: None,
            message: None,
        }
    }

    pub fn invalid(failure: FailureKind, message: String) -> Self {
        Self {
            is_valid: false,
            failure: Some(failure),
            message: Some(message),
        }
    }
}

/// Aggregated result of validating one record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<FieldViolation>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<FieldViolation>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Messages reported against one field, in evaluation order.
    pub fn messages_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.errors
            .iter()
            .filter(move |v| v.field == field)
            .map(|v| v.message.as_str())
    }

    /// Append violations from another pass (e.g. input binding).
    pub fn merge(mut self, other: Vec<FieldViolation>) -> Self {
        self.errors.extend(other);
        self.is_valid = self.errors.is_empty();
        self
    }
}

/// A single field-level violation shown to the end user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule_type: String,
    pub message: String,
}

/// Substitute `{0}` and `{1}` in a message template.
pub fn format_message(template: &str, display_name: &str, other_display_name: &str) -> String {
    template
        .replace("{0}", display_name)
        .replace("{1}", other_display_name)
}
