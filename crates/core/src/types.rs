use chrono::NaiveDateTime;
use serde::Serialize;

/// Dates carry no time zone. Date-only input is stored as midnight.
pub type DateValue = NaiveDateTime;

/// Declared kind of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Date,
}

/// Current runtime value of one record field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Date(DateValue),
    Text(String),
    Null,
}

impl FieldValue {
    /// Name used in type-mismatch diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Date(_) => "date",
            FieldValue::Text(_) => "text",
            FieldValue::Null => "null",
        }
    }
}

impl From<Option<DateValue>> for FieldValue {
    fn from(value: Option<DateValue>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Date)
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Text)
    }
}
