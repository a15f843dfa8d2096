//! Integration tests for the status server.
//!
//! Each test binds a real listener on an ephemeral loopback port, serves the
//! full application on it, and talks to it over HTTP with reqwest.

use std::net::SocketAddr;

use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use status_server::config::Config;
use status_server::server::serve_on;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A running server and the means to stop it.
struct TestServer {
    addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<status_server::Result<()>>,
}

impl TestServer {
    async fn start(config: Config) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            serve_on(listener, &config, async {
                let _ = rx.await;
            })
            .await
        });

        Self {
            addr,
            shutdown,
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn stop(self) {
        let _ = self.shutdown.send(());
        let result = self.handle.await.unwrap();
        assert!(result.is_ok(), "server exited with error: {:?}", result.err());
    }
}

#[tokio::test]
async fn test_root_returns_status_payload() {
    let server = TestServer::start(Config::default()).await;

    let response = reqwest::get(server.url("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );
    assert_eq!(response.text().await.unwrap(), r#"{"status":"OK","code":200}"#);

    server.stop().await;
}

#[tokio::test]
async fn test_health_returns_healthy() {
    let server = TestServer::start(Config::default()).await;

    let response = reqwest::get(server.url("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "status": "healthy" }));

    server.stop().await;
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let server = TestServer::start(Config::default()).await;

    let response = reqwest::get(server.url("/nonexistent")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    server.stop().await;
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let server = TestServer::start(Config::default()).await;
    let client = reqwest::Client::new();

    let first = client
        .get(server.url("/"))
        .send()
        .await
        .unwrap()
        .bytes()
        .await
        .unwrap();

    for _ in 0..10 {
        let again = client
            .get(server.url("/?ignored=1"))
            .header("x-anything", "value")
            .send()
            .await
            .unwrap()
            .bytes()
            .await
            .unwrap();
        assert_eq!(again, first);
    }

    server.stop().await;
}

#[tokio::test]
async fn test_openapi_document_served() {
    let server = TestServer::start(Config::default()).await;

    let response = reqwest::get(server.url("/openapi.json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let doc: serde_json::Value = response.json().await.unwrap();
    assert_eq!(doc["info"]["title"], "status-server");
    assert!(doc["paths"]["/"]["get"].is_object());
    assert!(doc["paths"]["/health"]["get"].is_object());

    server.stop().await;
}

#[tokio::test]
async fn test_swagger_ui_served() {
    let server = TestServer::start(Config::default()).await;

    // reqwest follows the /docs -> /docs/ redirect.
    let response = reqwest::get(server.url("/docs")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().contains("swagger-ui"));

    server.stop().await;
}

#[tokio::test]
async fn test_docs_disabled() {
    let config = Config {
        enable_docs: false,
        ..Config::default()
    };
    let server = TestServer::start(config).await;

    let response = reqwest::get(server.url("/docs")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = reqwest::get(server.url("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    server.stop().await;
}
