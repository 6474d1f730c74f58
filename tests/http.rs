//! Integration tests against a local mock HTTP server.

mod common;

use mockito::{Matcher, Server};
use pathcall::{CallArgs, Client, Error, HttpExecutor, JsonExecutor};
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
struct Quote {
    anime: String,
    character: String,
    quote: String,
}

#[tokio::test]
async fn json_executor_resolves_chain_and_parses_body() {
    common::init_tracing();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/quotes/character/")
        .match_query(Matcher::UrlEncoded("name".into(), "Kino".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"anime":"Kino no Tabi","character":"Kino","quote":"..."}"#)
        .create_async()
        .await;

    let client = Client::new(format!("{}/", server.url()), JsonExecutor::new()).unwrap();
    let value = client
        .seg("quotes")
        .unwrap()
        .seg("character")
        .unwrap()
        .call(CallArgs::get().query("name", "Kino"))
        .await
        .unwrap();

    let quote: Quote = serde_json::from_value(value).unwrap();
    assert_eq!(quote.character, "Kino");
    assert_eq!(quote.anime, "Kino no Tabi");
    assert_eq!(quote.quote, "...");
    mock.assert_async().await;
}

#[tokio::test]
async fn json_executor_raises_on_non_success_status() {
    common::init_tracing();
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/missing/")
        .with_status(404)
        .with_body(r#"{"error":"not found"}"#)
        .create_async()
        .await;

    let client = Client::new(format!("{}/", server.url()), JsonExecutor::new()).unwrap();
    let err = client
        .seg("missing")
        .unwrap()
        .call(CallArgs::get())
        .await
        .unwrap_err();

    match err {
        Error::Status { status, body, .. } => {
            assert_eq!(status, 404);
            assert!(body.contains("not found"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn http_executor_returns_the_raw_response() {
    common::init_tracing();
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/teapot/")
        .with_status(418)
        .with_body("short and stout")
        .create_async()
        .await;

    // Raw executor never inspects the status.
    let client = Client::new(format!("{}/", server.url()), HttpExecutor::new()).unwrap();
    let response = client
        .seg("teapot")
        .unwrap()
        .call(CallArgs::get())
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 418);
    assert_eq!(response.text().await.unwrap(), "short and stout");
}

#[tokio::test]
async fn default_headers_and_call_headers_are_sent() {
    common::init_tracing();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/private/")
        .match_header("x-api-key", "secret")
        .match_header("accept", "application/json")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let executor = JsonExecutor::from_http(HttpExecutor::new().default_header("x-api-key", "secret"));
    let client = Client::new(format!("{}/", server.url()), executor).unwrap();
    client
        .seg("private")
        .unwrap()
        .call(CallArgs::get().header("accept", "application/json"))
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn json_bodies_are_posted() {
    common::init_tracing();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/messages/")
        .match_body(Matcher::Json(serde_json::json!({"text": "hello"})))
        .with_status(200)
        .with_body(r#"{"ok":true}"#)
        .create_async()
        .await;

    let client = Client::new(format!("{}/", server.url()), JsonExecutor::new()).unwrap();
    let value = client
        .seg("messages")
        .unwrap()
        .call(CallArgs::post().json(serde_json::json!({"text": "hello"})))
        .await
        .unwrap();
    assert_eq!(value["ok"], serde_json::json!(true));
    mock.assert_async().await;
}

#[tokio::test]
async fn url_override_bypasses_the_accumulated_path() {
    common::init_tracing();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/elsewhere")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = Client::new(format!("{}/", server.url()), JsonExecutor::new()).unwrap();
    client
        .seg("ignored")
        .unwrap()
        .call(CallArgs::get().url(format!("{}/elsewhere", server.url())))
        .await
        .unwrap();
    mock.assert_async().await;
}

#[test]
fn blocking_json_executor_round_trip() {
    common::init_tracing();
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/forecast/")
        .match_query(Matcher::UrlEncoded("city".into(), "120010".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"title":"Chiba"}"#)
        .create();

    let client = pathcall::blocking::Client::new(
        format!("{}/", server.url()),
        pathcall::blocking::JsonExecutor::new(),
    )
    .unwrap();
    let value = client
        .seg("forecast")
        .unwrap()
        .call(CallArgs::get().query("city", "120010"))
        .unwrap();
    assert_eq!(value["title"], serde_json::json!("Chiba"));
    mock.assert();
}

#[test]
fn blocking_json_executor_raises_on_non_success_status() {
    common::init_tracing();
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/gone/")
        .with_status(500)
        .with_body("oops")
        .create();

    let client = pathcall::blocking::Client::new(
        format!("{}/", server.url()),
        pathcall::blocking::JsonExecutor::new(),
    )
    .unwrap();
    let err = client.seg("gone").unwrap().call(CallArgs::get()).unwrap_err();
    match err {
        Error::Status { status, .. } => assert_eq!(status, 500),
        other => panic!("expected status error, got {other:?}"),
    }
}
