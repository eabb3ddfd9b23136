//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full fetch-and-extract cycle end-to-end.

use pagecrawl::config::Config;
use pagecrawl::{CrawlError, Crawler, NetworkErrorKind, RequestOptions};
use std::time::Duration;
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BODY: &str = r#"
  <html>
    <head>
      <title>Test title</title>
      <meta name="description" content="Test description">
      <meta property="og:title" content="Graph title">
      <meta property="og:description" content="Graph description">
    </head>
    <body>
      <h1>Hello world!</h1>
      <a href="https://www.rust-lang.org/">Rust</a>
      <a href="/relative">Relative</a>
      <a href="https://www.rust-lang.org/">Rust again</a>
      <!-- <a href="https://hidden.example.com/">Hidden</a> -->
    </body>
  </html>
"#;

/// Starts a mock server with the standard set of routes
async fn start_server() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/exists"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(BODY, "text/html"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/does-not-exist"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/internal-server-error"))
        .respond_with(ResponseTemplate::new(500).set_body_raw("", "text/html"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/redirect-301"))
        .respond_with(ResponseTemplate::new(301).insert_header("Location", "/exists"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/redirect-302"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", "/exists"))
        .mount(&server)
        .await;

    server
}

fn crawler() -> Crawler {
    Crawler::new(Config::default()).expect("Failed to build crawler")
}

#[tokio::test]
async fn test_request_valid_url() {
    let server = start_server().await;
    let url = format!("{}/exists", server.uri());

    let response = crawler().request(&url).await.expect("Request failed");

    assert_eq!(response.status, 200);
    assert_eq!(response.body, BODY);
    assert_eq!(response.final_url.as_str(), url);
    assert_eq!(response.content_type(), Some("text/html"));
}

#[tokio::test]
async fn test_request_404_is_http_error() {
    let server = start_server().await;

    let err = crawler()
        .request(&format!("{}/does-not-exist", server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, CrawlError::Http { status: 404, .. }));
    assert!(err.to_string().contains("404"), "message: {}", err);
}

#[tokio::test]
async fn test_request_500_is_http_error() {
    let server = start_server().await;

    let err = crawler()
        .request(&format!("{}/internal-server-error", server.uri()))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("500"), "message: {}", err);
}

#[tokio::test]
async fn test_request_follows_redirects() {
    let server = start_server().await;

    for route in ["/redirect-301", "/redirect-302"] {
        let response = crawler()
            .request(&format!("{}{}", server.uri(), route))
            .await
            .expect("Request failed");

        assert_eq!(response.status, 200);
        assert_eq!(
            response.final_url.as_str(),
            format!("{}/exists", server.uri())
        );
    }
}

#[tokio::test]
async fn test_crawl_valid_url() {
    let server = start_server().await;
    let url = format!("{}/exists", server.uri());

    let output = crawler().crawl(&url).await.expect("Crawl failed");

    assert_eq!(output.status, 200);
    assert_eq!(output.host, "127.0.0.1");
    assert_eq!(output.url.original, url);
    assert_eq!(output.url.resolved, url);
    assert!(!output.url.redirected);
    assert_eq!(output.title, "Test title");
    assert_eq!(output.meta.description, "Test description");
    assert_eq!(output.meta.og.get("title"), Some("Graph title"));
    assert_eq!(output.meta.og.get("description"), Some("Graph description"));
    assert_eq!(
        output.links,
        Some(vec!["https://www.rust-lang.org/".to_string()])
    );
    assert!(output.body.is_none());
}

#[tokio::test]
async fn test_crawl_redirected_url() {
    let server = start_server().await;

    for route in ["/redirect-301", "/redirect-302"] {
        let url = format!("{}{}", server.uri(), route);
        let output = crawler().crawl(&url).await.expect("Crawl failed");

        assert_eq!(output.status, 200);
        assert_eq!(output.host, "127.0.0.1");
        assert_eq!(output.url.original, url);
        assert_eq!(output.url.resolved, format!("{}/exists", server.uri()));
        assert!(output.url.redirected);
        assert_eq!(output.title, "Test title");
    }
}

#[tokio::test]
async fn test_crawl_includes_body_when_configured() {
    let server = start_server().await;
    let mut config = Config::default();
    config.output.include_body = true;
    config.output.include_links = false;

    let output = Crawler::new(config)
        .unwrap()
        .crawl(&format!("{}/exists", server.uri()))
        .await
        .expect("Crawl failed");

    assert_eq!(output.body.as_deref(), Some(BODY));
    assert!(output.links.is_none());
}

#[tokio::test]
async fn test_crawl_bad_status() {
    let server = start_server().await;

    let err = crawler()
        .crawl(&format!("{}/does-not-exist", server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, CrawlError::Http { status: 404, .. }));
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn test_invalid_urls_never_reach_the_network() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let crawler = crawler();
    let invalid = [
        String::new(),
        "localhost".to_string(),
        "//some/path".to_string(),
        "http://".to_string(),
        "ftp://google.com".to_string(),
        format!(" {}/exists", server.uri()),
        format!("{}/exists ", server.uri()),
        server.uri().replacen("http://", "ftp://", 1),
    ];

    for value in &invalid {
        let err = crawler.crawl(value).await.unwrap_err();
        assert!(
            matches!(err, CrawlError::InvalidUrl(ref v) if v == value),
            "unexpected error for '{}': {}",
            value,
            err
        );

        let err = crawler.request(value).await.unwrap_err();
        assert!(matches!(err, CrawlError::InvalidUrl(_)));
    }

    let received = server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty(), "{} requests were sent", received.len());
}

#[tokio::test]
async fn test_crawl_passes_request_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/headers"))
        .and(header("x-trace", "abc"))
        .and(header("accept-language", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<title>ok</title>", "text/html"))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = Config::default();
    config
        .client
        .headers
        .insert("accept-language".to_string(), "en".to_string());
    let options = RequestOptions::new().with_header("X-Trace", "abc").unwrap();

    let output = Crawler::new(config)
        .unwrap()
        .crawl_with(&format!("{}/headers", server.uri()), &options)
        .await
        .expect("Crawl failed");

    assert_eq!(output.title, "ok");
}

#[tokio::test]
async fn test_request_header_overrides_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("accept-language", "fr"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = Config::default();
    config
        .client
        .headers
        .insert("accept-language".to_string(), "en".to_string());
    let options = RequestOptions::new()
        .with_header("Accept-Language", "fr")
        .unwrap();

    let output = Crawler::new(config)
        .unwrap()
        .crawl_with(&format!("{}/", server.uri()), &options)
        .await
        .expect("Crawl failed");

    assert_eq!(output.status, 200);
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Reserve a free port, then release it so nothing is listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let err = crawler()
        .crawl(&format!("http://127.0.0.1:{}/", port))
        .await
        .unwrap_err();

    assert!(
        matches!(
            err,
            CrawlError::Network {
                kind: NetworkErrorKind::Connect,
                ..
            }
        ),
        "unexpected error: {}",
        err
    );
}

#[tokio::test]
async fn test_timeout_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let options = RequestOptions::new().with_timeout(Duration::from_millis(200));
    let err = crawler()
        .crawl_with(&format!("{}/slow", server.uri()), &options)
        .await
        .unwrap_err();

    assert!(
        matches!(
            err,
            CrawlError::Network {
                kind: NetworkErrorKind::Timeout,
                ..
            }
        ),
        "unexpected error: {}",
        err
    );
}

#[tokio::test]
async fn test_redirect_loop_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/loop"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", "/loop"))
        .mount(&server)
        .await;

    let mut config = Config::default();
    config.client.max_redirects = 3;

    let err = Crawler::new(config)
        .unwrap()
        .crawl(&format!("{}/loop", server.uri()))
        .await
        .unwrap_err();

    assert!(
        matches!(
            err,
            CrawlError::Network {
                kind: NetworkErrorKind::Redirect,
                ..
            }
        ),
        "unexpected error: {}",
        err
    );
}
