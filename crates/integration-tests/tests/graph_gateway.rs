//! Contract tests for request construction and error normalization.

use catalog_client::GraphError;
use catalog_integration_tests::{decode_form_body, graph_client_for};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_carries_token_and_params_in_query() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/biz-1/owned_product_catalogs"))
        .and(query_param("access_token", "tok"))
        .and(query_param("fields", "id,name"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{"id": "cat-1", "name": "Main"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let graph = graph_client_for(&mock_server);
    let catalogs = graph.catalogs("biz-1", "tok").await.expect("catalogs");
    assert_eq!(catalogs.len(), 1);
    assert_eq!(catalogs[0].id, "cat-1");
    assert_eq!(catalogs[0].name, "Main");
}

#[tokio::test]
async fn test_platform_error_message_is_surfaced() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": {"message": "Invalid token", "type": "OAuthException", "code": 190}
        })))
        .mount(&mock_server)
        .await;

    let graph = graph_client_for(&mock_server);
    let err = graph
        .businesses("user-1", "bad-token")
        .await
        .expect_err("must fail");
    match err {
        GraphError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Invalid token");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unstructured_error_body_gets_generic_message() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("bad gateway"))
        .mount(&mock_server)
        .await;

    let graph = graph_client_for(&mock_server);
    let err = graph
        .businesses("user-1", "tok")
        .await
        .expect_err("must fail");
    match err {
        GraphError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Graph API request failed");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_batch_delete_serializes_one_entry_per_id() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(query_param("access_token", "tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let graph = graph_client_for(&mock_server);
    graph
        .delete_products("tok", &["101".to_string(), "102".to_string()])
        .await
        .expect("delete");

    let requests = mock_server.received_requests().await.expect("recorded");
    let request = requests.first().expect("one request");
    let form = decode_form_body(&request.body);
    let batch: serde_json::Value =
        serde_json::from_str(form.get("batch").expect("batch param")).expect("json");
    assert_eq!(
        batch,
        serde_json::json!([
            {"method": "DELETE", "relative_url": "101"},
            {"method": "DELETE", "relative_url": "102"},
        ])
    );
}
