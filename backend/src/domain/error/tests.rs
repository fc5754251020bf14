//! Tests for the domain error payload.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::unauthorized("who"), ErrorCode::Unauthorized)]
#[case(Error::forbidden("no"), ErrorCode::Forbidden)]
#[case(Error::not_found("gone"), ErrorCode::NotFound)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] err: Error, #[case] expected: ErrorCode) {
    assert_eq!(err.code(), expected);
}

#[rstest]
fn serialises_with_camel_case_and_omits_empty_fields() {
    let err = Error::not_found("book 3 not found");
    let value = serde_json::to_value(&err).expect("serialise");
    assert_eq!(
        value,
        json!({"code": "not_found", "message": "book 3 not found"})
    );
}

#[rstest]
fn trace_id_and_details_are_serialised() {
    let err = Error::invalid_request("title must not be empty")
        .with_trace_id("abc")
        .with_details(json!({"field": "title", "code": "empty_title"}));
    let value = serde_json::to_value(&err).expect("serialise");
    assert_eq!(value["traceId"], "abc");
    assert_eq!(value["details"]["code"], "empty_title");
}

#[tokio::test]
async fn captures_trace_id_in_scope() {
    let trace_id: TraceId = "00000000-0000-0000-0000-000000000001"
        .parse()
        .expect("valid UUID");
    let err = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
    assert_eq!(err.trace_id(), Some("00000000-0000-0000-0000-000000000001"));
}

#[rstest]
fn outside_scope_has_no_trace_id() {
    assert!(Error::unauthorized("login required").trace_id().is_none());
}

#[rstest]
fn display_is_the_message() {
    assert_eq!(Error::forbidden("not yours").to_string(), "not yours");
}
