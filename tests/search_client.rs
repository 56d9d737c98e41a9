//! End-to-end tests against a mock SearXNG instance

use champollion::{Client, SearchOptions};
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GO_BODY: &str =
    r#"{"results":[{"title":"Go","url":"https://go.dev"}],"suggestions":["golang tutorial"]}"#;

fn json_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "application/json")
}

#[tokio::test]
async fn test_search_decodes_results_and_suggestions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("format", "json"))
        .and(query_param("q", "golang"))
        .respond_with(json_response(GO_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(server.uri());
    let response = client.search("golang", None).await.unwrap();

    assert_eq!(response.results.len(), 1);
    assert_eq!(response.results[0].title, "Go");
    assert_eq!(response.results[0].url, "https://go.dev");
    assert_eq!(response.suggestions, vec!["golang tutorial".to_string()]);
}

#[tokio::test]
async fn test_search_sends_option_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "rust async"))
        .and(query_param("categories", "general,it"))
        .and(query_param("engines", "duckduckgo"))
        .and(query_param("language", "en-US"))
        .and(query_param("pageno", "2"))
        .respond_with(json_response(r#"{"results":[]}"#))
        .expect(1)
        .mount(&server)
        .await;

    let opts = SearchOptions::new()
        .with_categories(["general", "it"])
        .with_engine("duckduckgo")
        .with_language("en-US")
        .with_page(2);

    let response = Client::new(server.uri())
        .search("rust async", Some(&opts))
        .await
        .unwrap();
    assert!(response.is_empty());
    assert!(response.suggestions.is_empty());
}

#[tokio::test]
async fn test_search_omits_unset_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(json_response(r#"{"results":[]}"#))
        .mount(&server)
        .await;

    let opts = SearchOptions::new().with_page(0).with_language("");
    Client::new(server.uri())
        .search("golang", Some(&opts))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("format=json&q=golang"));
}

#[tokio::test]
async fn test_results_keep_upstream_order() {
    let server = MockServer::start().await;
    let body = r#"{"results":[
        {"title":"C","url":"https://c.example"},
        {"title":"A","url":"https://a.example"},
        {"title":"C","url":"https://c.example"}
    ]}"#;
    Mock::given(path("/search"))
        .respond_with(json_response(body))
        .mount(&server)
        .await;

    let response = Client::new(server.uri()).search("x", None).await.unwrap();
    let titles: Vec<&str> = response.results.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["C", "A", "C"]);
}

#[tokio::test]
async fn test_invalid_json_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = Client::new(server.uri())
        .search("golang", None)
        .await
        .unwrap_err();
    assert!(err.is_decode());
}

#[tokio::test]
async fn test_error_status_with_valid_body_is_returned() {
    let server = MockServer::start().await;
    Mock::given(path("/search"))
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_raw(br#"{"results":[]}"#.to_vec(), "application/json"),
        )
        .mount(&server)
        .await;

    let response = Client::new(server.uri()).search("golang", None).await.unwrap();
    assert!(response.is_empty());
}

#[tokio::test]
async fn test_error_page_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(path("/search"))
        .respond_with(
            ResponseTemplate::new(429).set_body_string("<html>Too Many Requests</html>"),
        )
        .mount(&server)
        .await;

    let err = Client::new(server.uri())
        .search("golang", None)
        .await
        .unwrap_err();
    assert!(err.is_decode());
}

#[tokio::test]
async fn test_base_url_with_path_prefix() {
    let server = MockServer::start().await;
    Mock::given(path("/searx/search"))
        .respond_with(json_response(GO_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(format!("{}/searx/", server.uri()));
    let response = client.search("golang", None).await.unwrap();
    assert_eq!(response.len(), 1);
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Reserve a free port, then close it so nothing is listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = Client::new(format!("http://{}", addr))
        .search("golang", None)
        .await
        .unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_caller_timeout_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(path("/search"))
        .respond_with(json_response(GO_BODY).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let http = reqwest::Client::builder()
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    let err = Client::with_http_client(server.uri(), http)
        .search("golang", None)
        .await
        .unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_unparseable_base_url_sends_nothing() {
    let err = Client::new("://bad").search("golang", None).await.unwrap_err();
    assert!(err.is_invalid_base_url());
}
