//! HTTP-level integration tests for the query dispatcher.
//!
//! These stub the Congress.gov API with `wiremock` and verify what actually
//! goes out on the wire: the hierarchical path, the injected credentials,
//! the clamped pagination, and the sort suppression rules. No real network
//! calls are made.

use congressgov_api::operations::{
    AmendmentsQuery, BillsQuery, BoundCongressionalRecordQuery, MembersQuery,
};
use congressgov_api::query::Page;
use congressgov_api::CongressClient;
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-api-key";

fn client_for(server: &MockServer) -> CongressClient {
    CongressClient::new(server.uri(), API_KEY)
}

/// A successful response is passed through verbatim, untyped.
#[tokio::test]
async fn test_success_body_is_passed_through_verbatim() {
    let server = MockServer::start().await;
    let body = json!({
        "bills": [{"congress": 118, "type": "HR", "number": "1"}],
        "pagination": {"count": 1}
    });

    Mock::given(method("GET"))
        .and(path("/bill"))
        .and(query_param("api_key", API_KEY))
        .and(query_param("format", "json"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.get_bills(BillsQuery::default()).await;

    assert_eq!(result.expect("should succeed"), body);
}

/// A fully qualified bill lookup hits the item path and drops `sort`.
#[tokio::test]
async fn test_single_bill_lookup_omits_sort() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bill/118/hr/1"))
        .and(query_param("api_key", API_KEY))
        .and(query_param_is_missing("sort"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"bill": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = BillsQuery {
        congress: Some(118),
        bill_type: Some("hr".into()),
        bill_number: Some(1),
        ..BillsQuery::default()
    };

    client.get_bills(query).await.expect("should succeed");
}

/// A bill listing carries the default sort order.
#[tokio::test]
async fn test_bill_listing_includes_default_sort() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bill/118"))
        .and(query_param("sort", "updateDate+desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"bills": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = BillsQuery {
        congress: Some(118),
        ..BillsQuery::default()
    };

    client.get_bills(query).await.expect("should succeed");
}

/// Oversized caller limits are clamped to the resource cap on the wire.
#[tokio::test]
async fn test_limit_is_clamped_before_sending() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/amendment"))
        .and(query_param("limit", "250"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"amendments": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = AmendmentsQuery {
        page: Page {
            offset: 0,
            limit: 1000,
        },
        ..AmendmentsQuery::default()
    };

    client.get_amendments(query).await.expect("should succeed");
}

/// Member lookup by Bioguide ID: item path, default paging, never sorted.
#[tokio::test]
async fn test_member_lookup_path_and_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/member/A000374"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "20"))
        .and(query_param_is_missing("sort"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"member": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = MembersQuery {
        bioguide_id: Some("A000374".into()),
        ..MembersQuery::default()
    };

    client.get_members(query).await.expect("should succeed");
}

/// The current-member filter is forwarded as a query parameter.
#[tokio::test]
async fn test_current_member_filter_is_forwarded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/member"))
        .and(query_param("currentMember", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"members": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = MembersQuery {
        current_member: Some(true),
        ..MembersQuery::default()
    };

    client.get_members(query).await.expect("should succeed");
}

/// A day without a month is dropped: only the complete prefix is honored.
#[tokio::test]
async fn test_bound_record_drops_day_without_month() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bound-congressional-record/2023"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"boundCongressionalRecord": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = BoundCongressionalRecordQuery {
        year: Some(2023),
        day: Some(15),
        ..BoundCongressionalRecordQuery::default()
    };

    client
        .get_bound_congressional_record(query)
        .await
        .expect("should succeed");
}

/// A non-2xx upstream status becomes an envelope, never a panic or a raw error.
#[tokio::test]
async fn test_upstream_error_status_becomes_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bill"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "not found"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let envelope = client
        .get_bills(BillsQuery::default())
        .await
        .expect_err("should fail");

    assert_eq!(envelope.status_code, Some(404));
    assert!(envelope.error.contains("bills"), "got: {}", envelope.error);
    assert!(!envelope.error.is_empty());
}

/// Rate-limit style 429 keeps its status code in the envelope.
#[tokio::test]
async fn test_rate_limited_status_is_preserved() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/amendment"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let envelope = client
        .get_amendments(AmendmentsQuery::default())
        .await
        .expect_err("should fail");

    assert_eq!(envelope.status_code, Some(429));
    assert!(envelope.error.contains("amendments"));
}

/// A connection failure yields an envelope with no status code at all.
#[tokio::test]
async fn test_connection_failure_has_no_status_code() {
    // Nothing listens here; the connection is refused immediately.
    let client = CongressClient::new("http://127.0.0.1:1", API_KEY);

    let envelope = client
        .get_bills(BillsQuery::default())
        .await
        .expect_err("should fail");

    assert_eq!(envelope.status_code, None);
    assert!(envelope.error.starts_with("Failed to retrieve bills:"));
}

/// A 2xx response with a non-JSON body still comes back as an envelope.
#[tokio::test]
async fn test_non_json_success_body_becomes_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/member"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let envelope = client
        .get_members(MembersQuery::default())
        .await
        .expect_err("should fail");

    assert!(envelope.error.contains("members"));
}
