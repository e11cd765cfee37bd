/// Domain errors raised by the core crate.
///
/// `FieldNotFound`, `TypeMismatch` and `UnknownRule` describe a misconfigured
/// schema. They are operator-facing and must never be turned into a
/// field-level validation message.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Field not found: {entity} has no field named '{field}'")]
    FieldNotFound { entity: &'static str, field: String },

    #[error(
        "An error occurred while validating the property. {entity}.{field} is not of type date (found {found})"
    )]
    TypeMismatch {
        entity: &'static str,
        field: String,
        found: &'static str,
    },

    #[error("Unknown validation rule '{rule}' attached to {entity}.{field}")]
    UnknownRule {
        entity: &'static str,
        field: String,
        rule: String,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Whether this error comes from a misconfigured schema rather than from
    /// user data.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            CoreError::FieldNotFound { .. }
                | CoreError::TypeMismatch { .. }
                | CoreError::UnknownRule { .. }
        )
    }
}
