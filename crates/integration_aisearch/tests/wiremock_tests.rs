//! Integration tests for the AI web-search client using wiremock

use domain::{Coordinates, PlaceSummary};
use integration_aisearch::{AiSearchConfig, AiSearchError, AiWebSearchApi, AiWebSearchClient};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_places() -> Vec<PlaceSummary> {
    vec![
        PlaceSummary {
            name: "Test Diner".to_string(),
            location: Coordinates::new_unchecked(44.65, -63.58),
        },
        PlaceSummary {
            name: "Harbour Noodles".to_string(),
            location: Coordinates::new_unchecked(44.64, -63.57),
        },
    ]
}

/// Create a test client configured against the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> AiWebSearchClient {
    let config = AiSearchConfig {
        base_url: mock_server.uri(),
        timeout_secs: 5,
    };
    #[allow(clippy::expect_used)]
    AiWebSearchClient::new(config).expect("Failed to create client")
}

#[tokio::test]
async fn posts_camel_case_body_to_the_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/ai-web-search"))
        .and(body_partial_json(serde_json::json!({
            "searchData": "somewhere with live jazz",
            "restaurantsData": [
                { "name": "Test Diner", "location": { "lat": 44.65, "lng": -63.58 } },
                { "name": "Harbour Noodles", "location": { "lat": 44.64, "lng": -63.57 } }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "answer": "ignored by the client"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client
        .submit_filter(&sample_places(), "somewhere with live jazz")
        .await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn empty_filter_text_is_forwarded_as_is() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/ai-web-search"))
        .and(body_partial_json(serde_json::json!({ "searchData": "" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.submit_filter(&sample_places(), "").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn non_success_status_is_request_failed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/ai-web-search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.submit_filter(&sample_places(), "anything").await;

    assert!(
        matches!(result, Err(AiSearchError::RequestFailed(_))),
        "Expected RequestFailed, got: {result:?}"
    );
}
