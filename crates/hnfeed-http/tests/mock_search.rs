//! Mock search API tests.
//!
//! These tests use wiremock to stand in for the search endpoint, so they run
//! without network access.

use std::time::Duration;

use hnfeed_core::{
    Error, FetchOutcome, ListingConfig, ListingController, NavigationRequest, StorySource,
};
use hnfeed_http::{EndpointUrl, HttpStorySource, SearchConfig};
use serde_json::json;
use tokio::sync::mpsc;
use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to build a source pointed at a mock server.
fn mock_source(server: &MockServer) -> HttpStorySource {
    let endpoint =
        EndpointUrl::new(format!("http://127.0.0.1:{}/api/v1", server.address().port())).unwrap();
    HttpStorySource::new(SearchConfig {
        endpoint,
        timeout: Some(Duration::from_secs(5)),
        ..SearchConfig::default()
    })
    .unwrap()
}

fn peter_hit() -> serde_json::Value {
    json!({
        "title": "Title Text",
        "author": "Peter Parker",
        "url": "https://abc.com",
        "created_at": "2023-01-01T07:00:00.000Z",
        "_tags": ["tag1", "tag2"],
        "objectID": "1"
    })
}

// ============================================================================
// Fetch Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_page_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/search_by_date"))
        .and(query_param("tags", "story"))
        .and(query_param("page", "0"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hits": [peter_hit()],
            "page": 0,
            "nbPages": 50,
            "hitsPerPage": 20,
            "nbHits": 1000
        })))
        .expect(1)
        .mount(&server)
        .await;

    let source = mock_source(&server);
    let page = source.fetch_page(0).await.unwrap();

    assert_eq!(page.hits.len(), 1);
    assert_eq!(page.hits[0].author, "Peter Parker");
    assert_eq!(page.hits[0].object_id(), Some("1"));
    assert_eq!(page.nb_pages, Some(50));
}

#[tokio::test]
async fn test_fetch_requested_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/search_by_date"))
        .and(query_param("page", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "hits": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let source = mock_source(&server);
    let page = source.fetch_page(7).await.unwrap();
    assert!(page.hits.is_empty());
}

#[tokio::test]
async fn test_custom_tags_and_page_size() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search_by_date"))
        .and(query_param("tags", "ask_hn"))
        .and(query_param("hitsPerPage", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "hits": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let endpoint = EndpointUrl::new(format!("http://127.0.0.1:{}", server.address().port())).unwrap();
    let source = HttpStorySource::new(SearchConfig {
        endpoint,
        tags: "ask_hn".to_string(),
        hits_per_page: Some(50),
        timeout: None,
    })
    .unwrap();

    source.fetch_page(0).await.unwrap();
}

#[tokio::test]
async fn test_server_error_is_protocol_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/search_by_date"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let source = mock_source(&server);
    let err = source.fetch_page(0).await.unwrap_err();

    match err {
        Error::Protocol(e) => {
            assert_eq!(e.status, 500);
            assert!(e.is_status_error());
            assert_eq!(e.message.as_deref(), Some("upstream exploded"));
        }
        other => panic!("expected protocol error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_hits_is_protocol_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/search_by_date"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "page": 0 })))
        .mount(&server)
        .await;

    let source = mock_source(&server);
    let err = source.fetch_page(0).await.unwrap_err();

    match err {
        Error::Protocol(e) => {
            assert_eq!(e.status, 200);
            assert!(!e.is_status_error());
            assert!(e.to_string().contains("hits"));
        }
        other => panic!("expected protocol error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_record_is_protocol_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/search_by_date"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hits": [{ "title": "no timestamp" }]
        })))
        .mount(&server)
        .await;

    let source = mock_source(&server);
    let err = source.fetch_page(0).await.unwrap_err();
    assert!(matches!(err, Error::Protocol(_)));
}

#[tokio::test]
async fn test_unreachable_is_transport_error() {
    // Bind and drop a server so the port is closed.
    let port = {
        let server = MockServer::start().await;
        server.address().port()
    };

    let endpoint = EndpointUrl::new(format!("http://127.0.0.1:{}", port)).unwrap();
    let source = HttpStorySource::new(SearchConfig {
        endpoint,
        timeout: Some(Duration::from_secs(2)),
        ..SearchConfig::default()
    })
    .unwrap();

    let err = source.fetch_page(0).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}

// ============================================================================
// Listing Tests
// ============================================================================

#[tokio::test]
async fn test_listing_against_mock_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/search_by_date"))
        .and(query_param("page", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hits": [peter_hit()]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/search_by_date"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let (tx, mut rx) = mpsc::unbounded_channel::<NavigationRequest>();
    let controller = ListingController::initialize(
        mock_source(&server),
        tx,
        ListingConfig {
            poll_interval: Duration::from_secs(3600),
        },
    );

    let mut status = controller.subscribe();
    tokio::time::timeout(Duration::from_secs(5), status.wait_for(|s| s.page >= 1))
        .await
        .expect("initial fetch timed out")
        .unwrap();

    assert_eq!(controller.records().len(), 1);
    assert_eq!(controller.derived_view()[0].title, "Title Text");

    // A failed page leaves everything in place.
    assert_eq!(
        controller.fetch_next_page().await,
        FetchOutcome::Failed { page: 1 }
    );
    assert_eq!(controller.page(), 1);
    assert_eq!(controller.records().len(), 1);

    controller.set_filter_text("peter");
    assert!(controller.activate_visible(0));
    let request = rx.recv().await.unwrap();
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({ "screen": "Details", "params": { "data": peter_hit() } })
    );

    controller.teardown();
}
