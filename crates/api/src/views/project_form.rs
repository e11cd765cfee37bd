//! The project form page.
//!
//! Inputs carry unobtrusive `data-val-*` attributes derived from the schema's
//! client rules, so the browser script validates with the same messages the
//! server produces.

use std::fmt::Write;

use datebound_core::dates::{format_short_date, parse_date_input};
use datebound_core::error::CoreError;
use datebound_core::project::{Project, ProjectInput};
use datebound_core::types::FieldKind;
use datebound_core::validation::client::element_id;
use datebound_core::validation::rules::ValidationResult;
use datebound_core::validation::schema::ModelSchema;

use super::escape_html;
use crate::handlers::assets::CLIENT_SCRIPT_PATH;

const JQUERY_SCRIPTS: &[&str] = &[
    "https://code.jquery.com/jquery-3.7.1.min.js",
    "https://cdn.jsdelivr.net/npm/jquery-validation@1.21.0/dist/jquery.validate.min.js",
    "https://cdn.jsdelivr.net/npm/jquery-validation-unobtrusive@4.0.0/dist/jquery.validate.unobtrusive.min.js",
];

const DATE_PLACEHOLDER: &str = "MM/dd/yyyy";

/// Render the full form page.
///
/// `result` is `None` for the initial GET; after a POST it drives the
/// per-field messages and the summary line.
pub fn render_project_form(
    schema: &ModelSchema<Project>,
    input: &ProjectInput,
    result: Option<&ValidationResult>,
) -> Result<String, CoreError> {
    let mut page = String::new();
    let mut body = String::new();

    for def in schema.registry().fields() {
        let id = element_id(def.name);
        let value = display_value(def.kind, input.raw(def.name));

        let mut attrs = String::new();
        if let Some(client) = schema.client_rules_for(def.name)? {
            for (name, attr_value) in client.html_attributes() {
                push_fmt(&mut attrs, format_args!(" {name}=\"{}\"", escape_html(&attr_value)))?;
            }
        }
        if def.kind == FieldKind::Date {
            push_fmt(&mut attrs, format_args!(" placeholder=\"{DATE_PLACEHOLDER}\""))?;
        }

        let messages: Vec<&str> = result
            .map(|r| r.messages_for(def.name).collect())
            .unwrap_or_default();
        let message_class = if messages.is_empty() {
            "field-validation-valid"
        } else {
            "field-validation-error"
        };

        push_fmt(
            &mut body,
            format_args!(
                concat!(
                    "    <div class=\"editor-label\"><label for=\"{id}\">{label}</label></div>\n",
                    "    <div class=\"editor-field\">\n",
                    "      <input type=\"text\" id=\"{id}\" name=\"{name}\" value=\"{value}\"{attrs} />\n",
                    "      <span class=\"{class}\" data-valmsg-for=\"{name}\" data-valmsg-replace=\"true\">{messages}</span>\n",
                    "    </div>\n"
                ),
                id = id,
                label = escape_html(def.display_name),
                name = def.name,
                value = escape_html(&value),
                attrs = attrs,
                class = message_class,
                messages = escape_html(&messages.join(" ")),
            ),
        )?;
    }

    let summary = match result {
        Some(r) if r.is_valid => "  <p class=\"validation-summary-valid\">The project is valid.</p>\n",
        Some(_) => "  <p class=\"validation-summary-errors\">Please correct the errors below.</p>\n",
        None => "",
    };

    push_fmt(
        &mut page,
        format_args!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\" />\n  <title>{entity}</title>\n",
            entity = schema.entity(),
        ),
    )?;
    for src in JQUERY_SCRIPTS.iter().copied().chain([CLIENT_SCRIPT_PATH]) {
        push_fmt(&mut page, format_args!("  <script src=\"{src}\"></script>\n"))?;
    }
    push_fmt(
        &mut page,
        format_args!(
            "</head>\n<body>\n  <h1>{entity}</h1>\n{summary}  <form method=\"post\" action=\"/\">\n{body}    <p><input type=\"submit\" value=\"Create\" /></p>\n  </form>\n</body>\n</html>\n",
            entity = schema.entity(),
        ),
    )?;

    Ok(page)
}

/// Dates that parse are shown as `MM/dd/yyyy`; anything else is echoed back
/// as typed so the user can correct it.
fn display_value(kind: FieldKind, raw: Option<&str>) -> String {
    match (kind, raw) {
        (FieldKind::Date, Some(raw)) => parse_date_input(raw)
            .map(|date| format_short_date(&date))
            .unwrap_or_else(|| raw.to_string()),
        (_, raw) => raw.unwrap_or_default().to_string(),
    }
}

fn push_fmt(out: &mut String, args: std::fmt::Arguments<'_>) -> Result<(), CoreError> {
    out.write_fmt(args)
        .map_err(|e| CoreError::Internal(format!("failed to render form: {e}")))
}
