//! Route dispatch, static assets, status, and 404 behavior.

use serde_json::{json, Value};

mod common;

use common::{spawn_server, RecordingRunner};

#[tokio::test]
async fn test_banner_route() {
    let addr = spawn_server(RecordingRunner::new(json!({}))).await;

    let res = reqwest::get(format!("http://{}/", addr)).await.unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.text().await.unwrap().starts_with("Running Rust v"));
}

#[tokio::test]
async fn test_status_json() {
    let addr = spawn_server(RecordingRunner::new(json!({}))).await;

    let res = reqwest::get(format!("http://{}/status.json", addr))
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(
        res.headers().get("content-type").unwrap(),
        "application/json"
    );
    assert_eq!(
        res.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["lastmod"], "(not set)");
    assert_eq!(body["commit"], "(not set)");
    assert!(body["tech"].as_str().unwrap().starts_with("Rust "));
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_status_jsonp_callback() {
    let addr = spawn_server(RecordingRunner::new(json!({}))).await;

    let res = reqwest::get(format!("http://{}/status.json?callback=cb", addr))
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(
        res.headers().get("content-type").unwrap(),
        "application/javascript"
    );

    let body = res.text().await.unwrap();
    assert!(body.starts_with("cb({"));
    assert!(body.ends_with("});"));
}

#[tokio::test]
async fn test_static_assets_serve_cached_bytes() {
    let addr = spawn_server(RecordingRunner::new(json!({}))).await;
    let client = reqwest::Client::new();

    for (path, file, content_type) in [
        ("/robots.txt", "static/robots.txt", "text/plain; charset=utf-8"),
        ("/favicon.ico", "static/favicon.ico", "image/x-icon"),
        ("/favicon.svg", "static/favicon.svg", "image/svg+xml"),
    ] {
        let expected = std::fs::read(file).unwrap();
        for _ in 0..2 {
            let res = client
                .get(format!("http://{}{}", addr, path))
                .send()
                .await
                .unwrap();
            assert_eq!(res.status(), 200, "{path}");
            assert_eq!(res.headers().get("content-type").unwrap(), content_type);
            assert_eq!(res.bytes().await.unwrap().as_ref(), &expected[..], "{path}");
        }
    }
}

#[tokio::test]
async fn test_plain_404_for_unmapped_path() {
    let addr = spawn_server(RecordingRunner::new(json!({}))).await;

    let res = reqwest::get(format!("http://{}/nope", addr)).await.unwrap();
    assert_eq!(res.status(), 404);
    assert_eq!(res.text().await.unwrap(), "404: /nope not found");
}

#[tokio::test]
async fn test_json_404_answers_200_with_error_payload() {
    let addr = spawn_server(RecordingRunner::new(json!({}))).await;

    let res = reqwest::get(format!("http://{}/nope.json", addr))
        .await
        .unwrap();
    // Inherited behavior: the formatter always answers 200, the 404 travels
    // inside the body.
    assert_eq!(res.status(), 200);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "ENOTFOUND");
    assert_eq!(body["statusCode"], 404);
    assert_eq!(body["path"], "/nope.json");
}

#[tokio::test]
async fn test_json_404_honors_callback() {
    let addr = spawn_server(RecordingRunner::new(json!({}))).await;

    let res = reqwest::get(format!("http://{}/nope.json?callback=err", addr))
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(
        res.headers().get("content-type").unwrap(),
        "application/javascript"
    );
    let body = res.text().await.unwrap();
    assert!(body.starts_with("err({"));
    assert!(body.contains("ENOTFOUND"));
}

#[tokio::test]
async fn test_no_trailing_slash_normalization() {
    let addr = spawn_server(RecordingRunner::new(json!({}))).await;

    let res = reqwest::get(format!("http://{}/status.json/", addr))
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
}

#[tokio::test]
async fn test_request_id_header_present() {
    let addr = spawn_server(RecordingRunner::new(json!({}))).await;

    let res = reqwest::get(format!("http://{}/", addr)).await.unwrap();
    assert!(res.headers().contains_key("x-request-id"));
}
