//! Record schemas: a field registry plus the rules attached to its fields.
//!
//! Rules are attached through explicit configuration at build time, and
//! [`ModelSchemaBuilder::build`] checks every field reference eagerly so a
//! misconfigured rule fails at startup instead of on the first request.

use std::fmt;

use crate::error::CoreError;

use super::client::{element_id, ClientFieldRules, ClientRuleDescriptor};
use super::evaluator::DateGreaterThan;
use super::registry::FieldRegistry;
use super::rules::{
    format_message, FieldViolation, RuleDescriptor, ValidationOutcome, ValidationResult,
    DATE_GREATER_THAN,
};

/// A rule attached to one named field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachedRule {
    pub field: &'static str,
    pub descriptor: RuleDescriptor,
}

/// Collects rules before the configuration check in [`Self::build`].
pub struct ModelSchemaBuilder<R> {
    registry: FieldRegistry<R>,
    rules: Vec<AttachedRule>,
}

impl<R> ModelSchemaBuilder<R> {
    /// Attach `descriptor` to `field`.
    pub fn rule(mut self, field: &'static str, descriptor: RuleDescriptor) -> Self {
        self.rules.push(AttachedRule { field, descriptor });
        self
    }

    /// Check every attached rule against the registry.
    ///
    /// Fails with `UnknownRule`, `FieldNotFound` or `TypeMismatch`; the error
    /// is logged before it is returned.
    pub fn build(self) -> Result<ModelSchema<R>, CoreError> {
        for rule in &self.rules {
            if let Err(err) = check_rule(&self.registry, rule) {
                tracing::error!(
                    entity = self.registry.entity(),
                    field = rule.field,
                    referenced_field = %rule.descriptor.referenced_field_name,
                    rule = %rule.descriptor.rule_name,
                    error = %err,
                    "Invalid validation rule configuration"
                );
                return Err(err);
            }
        }

        tracing::debug!(
            entity = self.registry.entity(),
            fields = self.registry.fields().len(),
            rules = self.rules.len(),
            "Model schema built"
        );

        Ok(ModelSchema {
            registry: self.registry,
            rules: self.rules,
        })
    }
}

fn check_rule<R>(registry: &FieldRegistry<R>, rule: &AttachedRule) -> Result<(), CoreError> {
    if rule.descriptor.rule_name != DATE_GREATER_THAN {
        return Err(CoreError::UnknownRule {
            entity: registry.entity(),
            field: rule.field.to_string(),
            rule: rule.descriptor.rule_name.clone(),
        });
    }
    registry.date_field(rule.field)?;
    registry.date_field(&rule.descriptor.referenced_field_name)?;
    Ok(())
}

/// A checked schema for records of type `R`.
pub struct ModelSchema<R> {
    registry: FieldRegistry<R>,
    rules: Vec<AttachedRule>,
}

impl<R> ModelSchema<R> {
    pub fn builder(registry: FieldRegistry<R>) -> ModelSchemaBuilder<R> {
        ModelSchemaBuilder {
            registry,
            rules: Vec::new(),
        }
    }

    pub fn entity(&self) -> &'static str {
        self.registry.entity()
    }

    pub fn registry(&self) -> &FieldRegistry<R> {
        &self.registry
    }

    pub fn rules(&self) -> &[AttachedRule] {
        &self.rules
    }

    pub fn display_name(&self, field: &str) -> Result<&'static str, CoreError> {
        Ok(self.registry.field(field)?.display_name)
    }

    /// Run every rule against `record`.
    ///
    /// Failed comparisons and missing dates become field violations.
    /// Configuration errors are logged and propagated unchanged.
    pub fn validate(&self, record: &R) -> Result<ValidationResult, CoreError> {
        let mut errors = Vec::new();
        for rule in &self.rules {
            let outcome = self.evaluate_rule(record, rule)?;
            if let Some(message) = outcome.message {
                errors.push(FieldViolation {
                    field: rule.field.to_string(),
                    rule_type: rule.descriptor.rule_name.clone(),
                    message,
                });
            }
        }
        Ok(ValidationResult::from_errors(errors))
    }

    /// Run only the rules attached to `field`.
    pub fn validate_field(&self, record: &R, field: &str) -> Result<Vec<ValidationOutcome>, CoreError> {
        self.registry.field(field)?;
        self.rules
            .iter()
            .filter(|rule| rule.field == field)
            .map(|rule| self.evaluate_rule(record, rule))
            .collect()
    }

    fn evaluate_rule(&self, record: &R, rule: &AttachedRule) -> Result<ValidationOutcome, CoreError> {
        let referenced = rule.descriptor.referenced_field_name.as_str();
        let result = self.run_rule(record, rule);

        match &result {
            Ok(outcome) => tracing::trace!(
                entity = self.entity(),
                field = rule.field,
                referenced_field = referenced,
                is_valid = outcome.is_valid,
                "Evaluated rule"
            ),
            Err(err) => tracing::error!(
                entity = self.entity(),
                field = rule.field,
                referenced_field = referenced,
                error = %err,
                "Validation rule failed to evaluate"
            ),
        }
        result
    }

    fn run_rule(&self, record: &R, rule: &AttachedRule) -> Result<ValidationOutcome, CoreError> {
        let referenced = rule.descriptor.referenced_field_name.as_str();
        let candidate = self.registry.resolve_date(record, rule.field)?;
        let reference = self.registry.resolve_date(record, referenced)?;
        let bound = DateGreaterThan::new(
            self.display_name(rule.field)?,
            self.display_name(referenced)?,
        )
        .with_template(&rule.descriptor.message_template);
        Ok(bound.evaluate(candidate, reference))
    }

    /// Client descriptors for every field carrying at least one rule, in
    /// registry order.
    pub fn client_rules(&self) -> Result<Vec<ClientFieldRules>, CoreError> {
        let mut out = Vec::new();
        for def in self.registry.fields() {
            let rules = self
                .rules
                .iter()
                .filter(|rule| rule.field == def.name)
                .map(|rule| -> Result<ClientRuleDescriptor, CoreError> {
                    let other = self.display_name(&rule.descriptor.referenced_field_name)?;
                    let message =
                        format_message(&rule.descriptor.message_template, def.display_name, other);
                    Ok(ClientRuleDescriptor::from_rule(&rule.descriptor, message))
                })
                .collect::<Result<Vec<_>, _>>()?;
            if !rules.is_empty() {
                out.push(ClientFieldRules {
                    field: def.name.to_string(),
                    element_id: element_id(def.name),
                    rules,
                });
            }
        }
        Ok(out)
    }

    /// Client descriptors for one field (empty when it carries no rules).
    pub fn client_rules_for(&self, field: &str) -> Result<Option<ClientFieldRules>, CoreError> {
        self.registry.field(field)?;
        Ok(self
            .client_rules()?
            .into_iter()
            .find(|rules| rules.field == field))
    }
}

impl<R> fmt::Debug for ModelSchema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelSchema")
            .field("registry", &self.registry)
            .field("rules", &self.rules)
            .finish()
    }
}
