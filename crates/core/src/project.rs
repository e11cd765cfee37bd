//! The project record: a name, a manager and a planned date range.
//!
//! Raw input arrives as strings (form post or JSON) and is bound into a
//! [`Project`] before the schema rules run. Binding problems are reported as
//! field violations next to the rule violations.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dates::parse_date_input;
use crate::error::CoreError;
use crate::types::{DateValue, FieldValue};
use crate::validation::registry::FieldRegistry;
use crate::validation::rules::{FieldViolation, RuleDescriptor, ValidationResult};
use crate::validation::schema::ModelSchema;

pub const ENTITY: &str = "Project";

/// Field names as declared by the schema and posted by the form.
pub mod fields {
    pub const NAME: &str = "Name";
    pub const PROJECT_MANAGER: &str = "ProjectManager";
    pub const START_DATE: &str = "StartDate";
    pub const END_DATE: &str = "EndDate";
}

/// Display names used in messages and labels.
pub mod labels {
    pub const NAME: &str = "Name";
    pub const PROJECT_MANAGER: &str = "Project manager";
    pub const START_DATE: &str = "Start date";
    pub const END_DATE: &str = "Estimated end date";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Project {
    pub name: Option<String>,
    pub project_manager: Option<String>,
    pub start_date: Option<DateValue>,
    pub end_date: Option<DateValue>,
}

/// Field registry for [`Project`], in form order.
pub fn project_registry() -> FieldRegistry<Project> {
    FieldRegistry::<Project>::new(ENTITY)
        .text(fields::NAME, labels::NAME, |p| p.name.clone().into())
        .text(fields::PROJECT_MANAGER, labels::PROJECT_MANAGER, |p| {
            p.project_manager.clone().into()
        })
        .date(fields::START_DATE, labels::START_DATE, |p| FieldValue::from(p.start_date))
        .date(fields::END_DATE, labels::END_DATE, |p| FieldValue::from(p.end_date))
}

/// The project schema: the estimated end date must be after the start date.
pub fn project_schema() -> Result<ModelSchema<Project>, CoreError> {
    ModelSchema::builder(project_registry())
        .rule(
            fields::END_DATE,
            RuleDescriptor::date_greater_than(fields::START_DATE),
        )
        .build()
}

/// Raw project input, as posted by the form or sent as JSON.
///
/// Keys use the schema's field names; snake_case aliases are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProjectInput {
    #[serde(rename = "Name", alias = "name", default)]
    #[validate(length(max = 200))]
    pub name: Option<String>,

    #[serde(rename = "ProjectManager", alias = "project_manager", default)]
    #[validate(length(max = 200))]
    pub project_manager: Option<String>,

    #[serde(rename = "StartDate", alias = "start_date", default)]
    pub start_date: Option<String>,

    #[serde(rename = "EndDate", alias = "end_date", default)]
    pub end_date: Option<String>,
}

impl ProjectInput {
    /// Raw value for a schema field name, for redisplay.
    pub fn raw(&self, field: &str) -> Option<&str> {
        match field {
            fields::NAME => self.name.as_deref(),
            fields::PROJECT_MANAGER => self.project_manager.as_deref(),
            fields::START_DATE => self.start_date.as_deref(),
            fields::END_DATE => self.end_date.as_deref(),
            _ => None,
        }
    }

    /// Convert raw strings into a [`Project`].
    ///
    /// Blank values become `None`. Unparsable dates and over-long text are
    /// returned as violations; the affected field is left empty.
    pub fn bind(&self) -> (Project, Vec<FieldViolation>) {
        let mut violations = self.length_violations();

        let project = Project {
            name: non_blank(self.name.as_deref()),
            project_manager: non_blank(self.project_manager.as_deref()),
            start_date: bind_date(
                self.start_date.as_deref(),
                fields::START_DATE,
                labels::START_DATE,
                &mut violations,
            ),
            end_date: bind_date(
                self.end_date.as_deref(),
                fields::END_DATE,
                labels::END_DATE,
                &mut violations,
            ),
        };

        (project, violations)
    }

    fn length_violations(&self) -> Vec<FieldViolation> {
        let Err(errors) = self.validate() else {
            return Vec::new();
        };

        let mut out = Vec::new();
        for (field, field_errors) in errors.field_errors() {
            let field: &str = &field;
            let (name, label) = match field {
                "name" => (fields::NAME, labels::NAME),
                "project_manager" => (fields::PROJECT_MANAGER, labels::PROJECT_MANAGER),
                _ => continue,
            };
            // The limit comes from the `length(max = ..)` attribute.
            let max = field_errors
                .iter()
                .find_map(|e| e.params.get("max").and_then(|v| v.as_u64()));
            let message = match max {
                Some(max) => format!("{label} must be at most {max} characters"),
                None => format!("{label} is too long"),
            };
            out.push(FieldViolation {
                field: name.to_string(),
                rule_type: "length".to_string(),
                message,
            });
        }
        // field_errors() is a hash map; keep output in form order.
        out.sort_by_key(|v| v.field != fields::NAME);
        out
    }
}

fn non_blank(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn bind_date(
    raw: Option<&str>,
    field: &str,
    label: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<DateValue> {
    let raw = non_blank(raw)?;
    let parsed = parse_date_input(&raw);
    if parsed.is_none() {
        violations.push(FieldViolation {
            field: field.to_string(),
            rule_type: "binding".to_string(),
            message: format!("The value '{raw}' is not valid for {label}."),
        });
    }
    parsed
}

/// Bind `input` and run the schema rules over the result.
///
/// Binding violations come first, then rule violations. Configuration errors
/// from the schema propagate unchanged.
pub fn validate_input(
    schema: &ModelSchema<Project>,
    input: &ProjectInput,
) -> Result<(Project, ValidationResult), CoreError> {
    let (project, binding) = input.bind();
    let rules = schema.validate(&project)?;
    Ok((project, ValidationResult::from_errors(binding).merge(rules.errors)))
}
