//! Sending navigated requests through real and recording transports.

use async_trait::async_trait;
use bytes::Bytes;
use fluent_http_client::{
    ClientConfig, ErrorKind, HttpRequest, HttpResponse, ReqwestTransport, Result, Transport,
    WebClient,
};
use mockito::Matcher;
use parking_lot::Mutex;
use std::collections::BTreeMap;

/// Records every request and answers 200 with an empty body.
#[derive(Default)]
struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().push(request);
        Ok(HttpResponse {
            status: 200,
            headers: BTreeMap::new(),
            body: Bytes::new(),
        })
    }
}

#[tokio::test]
async fn test_get_navigated_uri() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Regex(r"^/users/42;view=full".to_string()))
        .match_query(Matcher::UrlEncoded("q1".into(), "q1value".into()))
        .match_header("x-trace", "abc")
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body("hello")
        .create_async()
        .await;

    let transport = ReqwestTransport::new().unwrap();
    let mut client = WebClient::new(&server.url()).unwrap();
    client
        .path("users")
        .path("42")
        .matrix("view", "full")
        .query("q1", "q1value")
        .header("X-Trace", "abc");

    let response = client.get(&transport).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.header("content-type"), Some("text/plain"));
    assert_eq!(response.body, Bytes::from_static(b"hello"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_post_body_after_back() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/items")
        .match_body("payload")
        .with_status(201)
        .create_async()
        .await;

    let transport = ReqwestTransport::new().unwrap();
    let mut client = WebClient::new(&server.url()).unwrap();
    client.path("items").path("draft");
    client.back(false);

    let response = client.post(&transport, "payload").await.unwrap();
    assert_eq!(response.status, 201);
    assert!(response.is_success());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_reports_status() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/items/7")
        .with_status(404)
        .create_async()
        .await;

    let transport = ReqwestTransport::new().unwrap();
    let mut client = WebClient::new(&server.url()).unwrap();
    client.path("items/7");

    let response = client.delete(&transport).await.unwrap();
    assert_eq!(response.status, 404);
    assert!(!response.is_success());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let config = ClientConfig {
        request_timeout_ms: 2000,
        connect_timeout_ms: 500,
        enable_logging: false,
        ..Default::default()
    };
    let transport = ReqwestTransport::with_config(config).unwrap();
    let client = WebClient::new("http://127.0.0.1:1/").unwrap();

    let err = client.get(&transport).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn test_invoke_does_not_change_client() {
    let transport = RecordingTransport::default();
    let mut client = WebClient::new("http://foo").unwrap();
    client.path("a").header("h", "v");
    let before = client.clone();

    client.put(&transport, "body").await.unwrap();
    client.get(&transport).await.unwrap();

    assert_eq!(client, before);

    let requests = transport.requests.lock();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, http::Method::PUT);
    assert_eq!(requests[0].uri.as_str(), "http://foo/a");
    assert_eq!(requests[0].body, Bytes::from_static(b"body"));
    assert_eq!(requests[0].headers.get_first("h"), Some("v"));
    assert_eq!(requests[1].method, http::Method::GET);
    assert!(requests[1].body.is_empty());
}

#[tokio::test]
async fn test_transport_as_trait_object() {
    let recording = RecordingTransport::default();
    let transport: &dyn Transport = &recording;

    let mut client = WebClient::new("http://foo").unwrap();
    client.query("page", "2");
    client
        .invoke(transport, http::Method::HEAD, Bytes::new())
        .await
        .unwrap();

    let requests = recording.requests.lock();
    assert_eq!(requests[0].method, http::Method::HEAD);
    assert_eq!(requests[0].uri.as_str(), "http://foo/?page=2");
}
