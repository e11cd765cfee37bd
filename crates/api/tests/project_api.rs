//! HTTP-level integration tests for the `/api/v1/projects` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, build_test_app_with_schema, get, post_json};
use datebound_core::project::Project;
use datebound_core::types::FieldValue;
use datebound_core::validation::registry::FieldRegistry;
use datebound_core::validation::rules::RuleDescriptor;
use datebound_core::validation::schema::ModelSchema;
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: GET /api/v1/projects/client-rules exports the dategreaterthan rule
// ---------------------------------------------------------------------------

#[tokio::test]
async fn client_rules_export_date_greater_than() {
    let response = get(build_test_app(), "/api/v1/projects/client-rules").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json["data"],
        json!([{
            "field": "EndDate",
            "element_id": "EndDate",
            "rules": [{
                "validationType": "dategreaterthan",
                "parameters": { "otherpropertyname": "#StartDate" },
                "message": "Estimated end date must be greater than Start date",
            }],
        }])
    );
}

// ---------------------------------------------------------------------------
// Test: end date after start date is valid
// ---------------------------------------------------------------------------

#[tokio::test]
async fn later_end_date_is_valid() {
    let response = post_json(
        build_test_app(),
        "/api/v1/projects/validate",
        json!({
            "Name": "Bridge",
            "ProjectManager": "R. Ortiz",
            "StartDate": "2020-01-10",
            "EndDate": "2020-01-11",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["is_valid"], true);
    assert!(json["data"]["errors"].as_array().unwrap().is_empty());
    assert_eq!(json["data"]["project"]["start_date"], "2020-01-10T00:00:00");
    assert_eq!(json["data"]["project"]["end_date"], "2020-01-11T00:00:00");
}

// ---------------------------------------------------------------------------
// Test: equal dates are invalid with the formatted message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn equal_dates_are_invalid() {
    let response = post_json(
        build_test_app(),
        "/api/v1/projects/validate",
        json!({ "StartDate": "2020-01-10", "EndDate": "2020-01-10" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["is_valid"], false);
    assert_eq!(
        json["data"]["errors"],
        json!([{
            "field": "EndDate",
            "rule_type": "dategreaterthan",
            "message": "Estimated end date must be greater than Start date",
        }])
    );
}

// ---------------------------------------------------------------------------
// Test: end date before start date is invalid (snake_case keys accepted)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn earlier_end_date_is_invalid() {
    let response = post_json(
        build_test_app(),
        "/api/v1/projects/validate",
        json!({ "start_date": "2020-01-10", "end_date": "2020-01-09" }),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["data"]["is_valid"], false);
    assert_eq!(json["data"]["errors"][0]["field"], "EndDate");
}

// ---------------------------------------------------------------------------
// Test: unparsable date is reported as a binding error, not a crash
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unparsable_date_is_a_field_error() {
    let response = post_json(
        build_test_app(),
        "/api/v1/projects/validate",
        json!({ "StartDate": "10.01.2020", "EndDate": "2020-01-11" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["is_valid"], false);
    assert_eq!(json["data"]["errors"][0]["field"], "StartDate");
    assert_eq!(json["data"]["errors"][0]["rule_type"], "binding");
    assert!(json["data"]["project"]["start_date"].is_null());
}

// ---------------------------------------------------------------------------
// Test: a non-object JSON body is a 400 with the JSON error envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_object_body_is_a_bad_request() {
    let response = post_json(
        build_test_app(),
        "/api/v1/projects/validate",
        json!("2020-01-10"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("deserialize"));
}

// ---------------------------------------------------------------------------
// Test: a runtime type mismatch surfaces as a configuration error (500),
// never as a field message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn runtime_type_mismatch_is_configuration_error() {
    let registry = FieldRegistry::<Project>::new("Project")
        .text("Name", "Name", |p| p.name.clone().into())
        // Declared as a date but wired to a text accessor.
        .date("StartDate", "Start date", |p| p.name.clone().into())
        .date("EndDate", "Estimated end date", |p| FieldValue::from(p.end_date));
    let schema = ModelSchema::builder(registry)
        .rule("EndDate", RuleDescriptor::date_greater_than("StartDate"))
        .build()
        .unwrap();

    let response = post_json(
        build_test_app_with_schema(schema),
        "/api/v1/projects/validate",
        json!({ "Name": "Bridge", "StartDate": "2020-01-10", "EndDate": "2020-01-11" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFIGURATION_ERROR");
    assert!(json.get("data").is_none());
}
