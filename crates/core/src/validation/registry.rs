//! Field registry: name-based lookup of sibling fields.
//!
//! Each record type registers its fields once, with an accessor function per
//! field. Rules look up the referenced field through the registry, so a bad
//! field name surfaces as [`CoreError::FieldNotFound`] instead of a silent pass.

use std::fmt;

use crate::error::CoreError;
use crate::types::{DateValue, FieldKind, FieldValue};

/// Reads one field's current value from a record.
pub type Accessor<R> = fn(&R) -> FieldValue;

/// A registered field.
pub struct FieldDef<R> {
    pub name: &'static str,
    pub display_name: &'static str,
    pub kind: FieldKind,
    accessor: Accessor<R>,
}

impl<R> FieldDef<R> {
    /// Current value of this field on `record`.
    pub fn value(&self, record: &R) -> FieldValue {
        (self.accessor)(record)
    }
}

impl<R> fmt::Debug for FieldDef<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDef")
            .field("name", &self.name)
            .field("display_name", &self.display_name)
            .field("kind", &self.kind)
            .finish()
    }
}

/// Ordered set of fields for one record type.
pub struct FieldRegistry<R> {
    entity: &'static str,
    fields: Vec<FieldDef<R>>,
}

impl<R> FieldRegistry<R> {
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            fields: Vec::new(),
        }
    }

    /// Register a date-valued field.
    pub fn date(self, name: &'static str, display_name: &'static str, accessor: Accessor<R>) -> Self {
        self.with_field(name, display_name, FieldKind::Date, accessor)
    }

    /// Register a text field.
    pub fn text(self, name: &'static str, display_name: &'static str, accessor: Accessor<R>) -> Self {
        self.with_field(name, display_name, FieldKind::Text, accessor)
    }

    fn with_field(
        mut self,
        name: &'static str,
        display_name: &'static str,
        kind: FieldKind,
        accessor: Accessor<R>,
    ) -> Self {
        self.fields.push(FieldDef {
            name,
            display_name,
            kind,
            accessor,
        });
        self
    }

    pub fn entity(&self) -> &'static str {
        self.entity
    }

    pub fn fields(&self) -> &[FieldDef<R>] {
        &self.fields
    }

    /// Look up a field by exact, case-sensitive name.
    pub fn field(&self, name: &str) -> Result<&FieldDef<R>, CoreError> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| CoreError::FieldNotFound {
                entity: self.entity,
                field: name.to_string(),
            })
    }

    /// Look up a field and require it to be declared as a date.
    pub fn date_field(&self, name: &str) -> Result<&FieldDef<R>, CoreError> {
        let def = self.field(name)?;
        if def.kind != FieldKind::Date {
            return Err(CoreError::TypeMismatch {
                entity: self.entity,
                field: name.to_string(),
                found: "text",
            });
        }
        Ok(def)
    }

    /// Resolve the current date value of `name` on `record`.
    ///
    /// `Ok(None)` means the field exists but holds no value. Does not cache and
    /// does not mutate the record.
    pub fn resolve_date(&self, record: &R, name: &str) -> Result<Option<DateValue>, CoreError> {
        let def = self.date_field(name)?;
        match def.value(record) {
            FieldValue::Date(value) => Ok(Some(value)),
            FieldValue::Null => Ok(None),
            other => Err(CoreError::TypeMismatch {
                entity: self.entity,
                field: name.to_string(),
                found: other.type_name(),
            }),
        }
    }
}

impl<R> fmt::Debug for FieldRegistry<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRegistry")
            .field("entity", &self.entity)
            .field("fields", &self.fields)
            .finish()
    }
}
