//! Server and client comparisons must agree on the same input table.
//!
//! `fixtures/date_pairs.json` is also read by the browser script's test
//! (`crates/api/assets/date-greater-than.test.mjs`).

use datebound_core::dates::parse_date_input;
use datebound_core::project::labels;
use datebound_core::validation::client::client_evaluate;
use datebound_core::validation::evaluator::DateGreaterThan;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Case {
    value: String,
    reference: String,
    expected: bool,
}

fn cases() -> Vec<Case> {
    serde_json::from_str(include_str!("fixtures/date_pairs.json")).expect("valid fixture")
}

fn server_evaluate(value: &str, reference: &str) -> bool {
    DateGreaterThan::new(labels::END_DATE, labels::START_DATE)
        .evaluate(parse_date_input(value), parse_date_input(reference))
        .is_valid
}

#[test]
fn table_is_not_empty() {
    assert!(cases().len() > 10);
}

#[test]
fn server_matches_expected_verdicts() {
    for case in cases() {
        assert_eq!(
            server_evaluate(&case.value, &case.reference),
            case.expected,
            "server verdict for {case:?}"
        );
    }
}

#[test]
fn client_matches_expected_verdicts() {
    for case in cases() {
        assert_eq!(
            client_evaluate(&case.value, &case.reference),
            case.expected,
            "client verdict for {case:?}"
        );
    }
}

#[test]
fn server_and_client_agree_over_a_date_grid() {
    let dates = [
        "2019-12-31",
        "2020-01-01",
        "2020-01-01T00:00:01",
        "2020-01-01 12:00",
        "01/01/2020",
        "02/29/2020",
        "2020-02-29T23:59:59",
        "03/01/2020 00:00",
        "2020-12-31",
    ];
    for value in dates {
        for reference in dates {
            assert_eq!(
                server_evaluate(value, reference),
                client_evaluate(value, reference),
                "disagreement on ({value}, {reference})"
            );
        }
    }
}
