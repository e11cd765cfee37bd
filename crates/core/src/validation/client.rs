//! Client-side rule export and the client comparison.
//!
//! [`ClientRuleDescriptor`] is what the server embeds in the rendered form so
//! the browser script can run the same check before submission.
//! [`client_evaluate`] mirrors `crates/api/assets/date-greater-than.js`:
//! it parses with its own patterns instead of going through
//! [`crate::dates::parse_date_input`], so the conformance tests compare two
//! independent implementations.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use super::rules::RuleDescriptor;

/// Adapter parameter carrying the sibling field selector. Must stay lowercase.
pub const OTHER_PROPERTY_PARAM: &str = "otherpropertyname";

const ISO_PATTERN: &str =
    r"^([0-9]{1,4})-([0-9]{1,2})-([0-9]{1,2})(?:[T ]([0-9]{1,2}):([0-9]{1,2})(?::([0-9]{1,2}))?)?$";
const US_PATTERN: &str =
    r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{1,4})(?: ([0-9]{1,2}):([0-9]{1,2})(?::([0-9]{1,2}))?)?$";

static ISO_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(ISO_PATTERN).expect("valid regex"));
static US_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(US_PATTERN).expect("valid regex"));

/// One rule as consumed by the client validation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRuleDescriptor {
    pub validation_type: String,
    pub parameters: BTreeMap<String, String>,
    pub message: String,
}

impl ClientRuleDescriptor {
    /// Translate a server rule with its already formatted message.
    pub fn from_rule(rule: &RuleDescriptor, message: String) -> Self {
        let mut parameters = BTreeMap::new();
        parameters.insert(
            OTHER_PROPERTY_PARAM.to_string(),
            element_selector(&rule.referenced_field_name),
        );
        Self {
            validation_type: rule.rule_name.to_lowercase(),
            parameters,
            message,
        }
    }

    /// Selector of the sibling input element.
    pub fn other_field_selector(&self) -> Option<&str> {
        self.parameters.get(OTHER_PROPERTY_PARAM).map(String::as_str)
    }

    /// Unobtrusive `data-val-*` attributes for this rule.
    pub fn html_attributes(&self) -> Vec<(String, String)> {
        let prefix = format!("data-val-{}", self.validation_type);
        std::iter::once((prefix.clone(), self.message.clone()))
            .chain(
                self.parameters
                    .iter()
                    .map(|(name, value)| (format!("{prefix}-{name}"), value.clone())),
            )
            .collect()
    }
}

/// All client rules attached to one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientFieldRules {
    pub field: String,
    pub element_id: String,
    pub rules: Vec<ClientRuleDescriptor>,
}

impl ClientFieldRules {
    /// Attributes for the field's input element, `data-val="true"` first.
    pub fn html_attributes(&self) -> Vec<(String, String)> {
        if self.rules.is_empty() {
            return Vec::new();
        }
        std::iter::once(("data-val".to_string(), "true".to_string()))
            .chain(self.rules.iter().flat_map(ClientRuleDescriptor::html_attributes))
            .collect()
    }
}

/// DOM id of the input element rendered for `field_name`.
///
/// Nested and indexed names (`Phases[0].End`) collapse to `Phases_0__End`.
pub fn element_id(field_name: &str) -> String {
    field_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect()
}

/// CSS selector for the input element rendered for `field_name`.
pub fn element_selector(field_name: &str) -> String {
    format!("#{}", element_id(field_name))
}

/// Client comparison: `true` only when both values parse and the first is
/// strictly later. Unparsable or empty input fails closed.
pub fn client_evaluate(raw_value: &str, raw_reference_value: &str) -> bool {
    match (client_parse(raw_value), client_parse(raw_reference_value)) {
        (Some(value), Some(reference)) => value > reference,
        _ => false,
    }
}

/// Comparable timestamp parts: year, month, day, hour, minute, second.
type DateKey = (i32, u32, u32, u32, u32, u32);

fn client_parse(raw: &str) -> Option<DateKey> {
    let raw = raw.trim();
    if let Some(caps) = ISO_RE.captures(raw) {
        return build_key(&caps, 1, 2, 3);
    }
    if let Some(caps) = US_RE.captures(raw) {
        return build_key(&caps, 3, 1, 2);
    }
    None
}

fn build_key(caps: &Captures<'_>, year_at: usize, month_at: usize, day_at: usize) -> Option<DateKey> {
    let num = |i: usize| -> Option<u32> {
        match caps.get(i) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0),
        }
    };
    let year = i32::try_from(num(year_at)?).ok()?;
    let (month, day) = (num(month_at)?, num(day_at)?);
    let (hour, minute, second) = (num(4)?, num(5)?, num(6)?);

    if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) {
        return None;
    }
    if hour > 23 || minute > 59 || second > 59 {
        return None;
    }
    Some((year, month, day, hour, minute, second))
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
