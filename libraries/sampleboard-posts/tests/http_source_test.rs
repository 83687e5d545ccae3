//! HTTP posts source tests
//!
//! These tests use mock servers to verify source behavior without
//! requiring the real API.

use sampleboard_core::{FetchError, HttpSettings, Post};
use sampleboard_posts::{HttpPostsSource, PostsSource};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn source_for(server: &MockServer) -> HttpPostsSource {
    HttpPostsSource::new(&format!("{}/posts", server.uri()), &HttpSettings::default())
        .expect("mock server URI is valid")
}

#[tokio::test]
async fn parses_posts_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"userId": 1, "id": 1, "title": "sunt aut facere", "body": "quia et suscipit"},
            {"userId": 1, "id": 2, "title": "qui est esse", "body": "est rerum tempore"},
            {"userId": 2, "id": 11, "title": "et ea vero quia", "body": "delectus reiciendis"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let posts = source_for(&server).await.fetch_posts().await.unwrap();

    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0], Post::new(1, 1, "sunt aut facere", "quia et suscipit"));
    assert_eq!(posts[2].user_id, 2);
}

#[tokio::test]
async fn server_error_is_a_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let result = source_for(&server).await.fetch_posts().await;
    match result {
        Err(FetchError::Status { status, .. }) => assert_eq!(status, 500),
        other => panic!("Expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_json_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"not\": \"an array\"}"))
        .mount(&server)
        .await;

    let result = source_for(&server).await.fetch_posts().await;
    assert!(matches!(result, Err(FetchError::Parse(_))));
}

#[tokio::test]
async fn unreachable_server_fails() {
    // Nothing listens on port 9 (discard) in test environments
    let source = HttpPostsSource::new("http://127.0.0.1:9/posts", &HttpSettings::default()).unwrap();
    let result = source.fetch_posts().await;
    assert!(matches!(
        result,
        Err(FetchError::Unreachable(_)) | Err(FetchError::Request(_))
    ));
}

#[test]
fn rejects_invalid_endpoint() {
    let result = HttpPostsSource::new("not a url", &HttpSettings::default());
    assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
}
