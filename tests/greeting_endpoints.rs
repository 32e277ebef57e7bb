//! Tests for the greeting server.

use std::time::Duration;

use axum::{body::Body, http::Request};
use tower::ServiceExt;
use upload_relay::HttpServer;

mod common;

#[tokio::test]
async fn test_greetings_over_tcp() {
    let (addr, shutdown) = common::start_greeting().await;
    let client = common::client();

    let res = client.get(format!("http://{}/", addr)).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "Hello IIS from Flask");

    let res = client
        .get(format!("http://{}/Hello", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "Hello World!");

    shutdown.trigger();
}

#[tokio::test]
async fn test_greeting_routes_are_exact() {
    let router = HttpServer::greeting().router();

    let res = router
        .clone()
        .oneshot(Request::get("/hello").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), 404);

    let res = router
        .oneshot(Request::post("/Hello").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), 405);
}

#[tokio::test]
async fn test_greeting_is_plain_text() {
    let res = HttpServer::greeting()
        .router()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let content_type = res.headers()["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("text/plain"));
    assert!(res.headers().contains_key("x-request-id"));

    let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"Hello IIS from Flask");
}

#[tokio::test]
async fn test_server_stops_on_shutdown() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let shutdown = upload_relay::Shutdown::new();
    let handle = tokio::spawn(HttpServer::greeting().run(listener, shutdown.subscribe()));

    shutdown.trigger();

    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("Server should stop after shutdown")
        .unwrap();
    assert!(result.is_ok());
}
