//! Integration tests for `SearchClient::search`.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no real
//! network traffic is made. Covers the happy path and every error class the
//! client can return.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use zinsight_client::{ClientError, SearchClient};

const SEARCH_PATH: &str = "/svc/z3/search/GetSearchWithProperties";

/// Builds a `SearchClient` pointed at the mock server with a short timeout.
fn test_client(server: &MockServer) -> SearchClient {
    SearchClient::new(
        &format!("{}{SEARCH_PATH}", server.uri()),
        5,
        "zinsight-test/0.1",
        120,
    )
    .expect("failed to build test SearchClient")
}

fn envelope(products: &serde_json::Value, num_recs: u64) -> serde_json::Value {
    json!({
        "success": true,
        "data": {"search": {"searchResultsData": {
            "products": products,
            "numRecs": num_recs
        }}}
    })
}

#[tokio::test]
async fn search_returns_products_and_num_recs() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param(
            "parameters",
            "st=orderitemcount_all&pg=1&sd=desc&qs=cat",
        ))
        .and(query_param("type", "SearchResultsData"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            &json!([
                {"productId": "1", "storeName": "A", "price": 10, "keywords": "cat+dog"},
                {"productId": "2", "storeName": "B"}
            ]),
            987,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let results = test_client(&server)
        .search("  cat  ")
        .await
        .expect("search should succeed");

    assert_eq!(results.products.len(), 2);
    assert_eq!(results.products[0].identifier().as_deref(), Some("1"));
    assert_eq!(results.products[1].store_name.as_deref(), Some("B"));
    assert_eq!(results.num_recs, 987);
}

#[tokio::test]
async fn search_accepts_empty_product_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(&json!([]), 0)))
        .mount(&server)
        .await;

    let results = test_client(&server).search("nothing").await.unwrap();
    assert!(results.products.is_empty());
    assert_eq!(results.num_recs, 0);
}

#[tokio::test]
async fn search_rejects_unsuccessful_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "data": {"search": {"searchResultsData": {"products": [{"storeName": "A"}]}}}
        })))
        .mount(&server)
        .await;

    let err = test_client(&server).search("cat").await.unwrap_err();
    assert!(
        matches!(err, ClientError::InvalidShape { .. }),
        "expected InvalidShape, got: {err:?}"
    );
    assert!(err.is_shape_error());
}

#[tokio::test]
async fn search_rejects_missing_products() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "data": {"search": {}}})),
        )
        .mount(&server)
        .await;

    let err = test_client(&server).search("cat").await.unwrap_err();
    assert!(err.is_shape_error(), "expected shape error, got: {err:?}");
}

#[tokio::test]
async fn search_maps_non_success_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = test_client(&server).search("cat").await.unwrap_err();
    assert!(
        matches!(err, ClientError::UnexpectedStatus { status: 500, .. }),
        "expected UnexpectedStatus(500), got: {err:?}"
    );
    assert!(!err.is_shape_error());
}

#[tokio::test]
async fn search_maps_invalid_json_to_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = test_client(&server).search("cat").await.unwrap_err();
    assert!(
        matches!(err, ClientError::Deserialize { .. }),
        "expected Deserialize, got: {err:?}"
    );
}

#[tokio::test]
async fn search_reports_unreachable_upstream_as_http_error() {
    let server = MockServer::start().await;
    let endpoint = format!("{}{SEARCH_PATH}", server.uri());
    drop(server);

    let client = SearchClient::new(&endpoint, 2, "zinsight-test/0.1", 120).unwrap();
    let err = client.search("cat").await.unwrap_err();
    assert!(
        matches!(err, ClientError::Http(_)),
        "expected Http, got: {err:?}"
    );
}
