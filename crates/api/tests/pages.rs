//! Integration tests for the server-rendered form and the client script.

mod common;

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use common::{body_text, build_test_app, get, post_form};

// ---------------------------------------------------------------------------
// Test: GET / renders the form with unobtrusive rule attributes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn index_renders_form_with_client_rules() {
    let response = get(build_test_app(), "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let page = body_text(response).await;
    assert!(page.contains("<label for=\"StartDate\">Start date</label>"));
    assert!(page.contains("<label for=\"EndDate\">Estimated end date</label>"));
    assert!(page.contains("data-val-dategreaterthan-otherpropertyname=\"#StartDate\""));
}

// ---------------------------------------------------------------------------
// Test: POST / with a valid range re-renders without errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn valid_submission_shows_summary() {
    let response = post_form(
        build_test_app(),
        "/",
        "Name=Bridge&ProjectManager=Ortiz&StartDate=01%2F10%2F2020&EndDate=01%2F11%2F2020",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_text(response).await;
    assert!(page.contains("The project is valid."));
    assert!(!page.contains("field-validation-error"));
    assert!(page.contains("value=\"01/11/2020\""));
}

// ---------------------------------------------------------------------------
// Test: POST / with equal dates shows the message next to the end date
// ---------------------------------------------------------------------------

#[tokio::test]
async fn equal_dates_show_field_message() {
    let response = post_form(
        build_test_app(),
        "/",
        "Name=Bridge&StartDate=2020-01-10&EndDate=2020-01-10",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_text(response).await;
    assert!(page.contains(
        "data-valmsg-for=\"EndDate\" data-valmsg-replace=\"true\">Estimated end date must be greater than Start date</span>"
    ));
    assert!(page.contains("Please correct the errors below."));
}

// ---------------------------------------------------------------------------
// Test: GET /assets/date-greater-than.js serves the adapter script
// ---------------------------------------------------------------------------

#[tokio::test]
async fn client_script_is_served() {
    let response = get(build_test_app(), "/assets/date-greater-than.js").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("application/javascript"));

    let script = body_text(response).await;
    assert!(script.contains("addMethod(\"dategreaterthan\""));
    assert!(script.contains("[\"otherpropertyname\"]"));
}
