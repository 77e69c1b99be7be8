//! tests/exceptions/json_clients.rs
//! API / AJAX clients receive JSON error bodies.

#[path = "../common/mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::Value;

async fn json_body(resp: reqwest::Response) -> Value {
    let body: String = resp.text().await.unwrap();
    serde_json::from_str(&body).unwrap()
}

#[tokio::test]
async fn malformed_json_is_422_for_json_clients() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = common::client()
        .post(format!("{}/test/invalid-json", base_url))
        .header("accept", "application/json")
        .body("{\"name\": ")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json: Value = json_body(resp).await;
    assert_eq!(json["status"], "error");
    assert_eq!(json["messages"], "invalid JSON");
}

#[tokio::test]
async fn missing_asset_answers_200_with_not_found_message() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = common::client()
        .get(format!("{}/api/assets/404", base_url))
        .header("accept", "application/json")
        .bearer_auth(common::API_TOKEN)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);
    let json: Value = json_body(resp).await;
    assert_eq!(json["status"], "error");
    assert_eq!(json["messages"], "Asset not found");
}

#[tokio::test]
async fn existing_asset_is_returned() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = common::client()
        .get(format!("{}/api/assets/1", base_url))
        .header("accept", "application/json")
        .bearer_auth(common::API_TOKEN)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);
    let json: Value = json_body(resp).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["payload"]["asset_tag"], "ASSET-0001");
}

#[tokio::test]
async fn unknown_route_is_404_for_ajax() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = common::client()
        .get(format!("{}/does-not-exist", base_url))
        .header("x-requested-with", "XMLHttpRequest")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let json: Value = json_body(resp).await;
    assert_eq!(json["messages"], "404 endpoint not found");
}

#[tokio::test]
async fn wrong_method_is_405() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = common::client()
        .delete(format!("{}/test/status", base_url))
        .header("accept", "application/json")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    let json: Value = json_body(resp).await;
    assert_eq!(json["messages"], "Method not allowed");
}

#[tokio::test]
async fn other_http_errors_collapse_to_405() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = common::client()
        .get(format!("{}/test/http/503", base_url))
        .header("accept", "application/json")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    let json: Value = json_body(resp).await;
    assert_eq!(json["messages"], "503");
}

#[tokio::test]
async fn malformed_path_segment_is_rendered_as_json() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = common::client()
        .get(format!("{}/test/http/abc", base_url))
        .header("accept", "application/json")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(resp.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("application/json"));
    let json: Value = json_body(resp).await;
    assert_eq!(json["status"], "error");
    assert_eq!(json["messages"], "400");
}

#[tokio::test]
async fn strict_mode_keeps_real_status_codes() {
    let (base_url, _) = common::spawn_app_with(exception_handler::EnvironmentVariables {
        strict_http_status: true,
        ..common::test_env()
    });

    let resp: reqwest::Response = common::client()
        .get(format!("{}/test/http/503", base_url))
        .header("accept", "application/json")
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let resp: reqwest::Response = common::client()
        .get(format!("{}/api/assets/999", base_url))
        .header("accept", "application/json")
        .bearer_auth(common::API_TOKEN)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp: reqwest::Response = common::client()
        .get(format!("{}/test/http/abc", base_url))
        .header("accept", "application/json")
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn validation_failure_lists_field_messages() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = common::client()
        .post(format!("{}/api/assets", base_url))
        .header("accept", "application/json")
        .header("content-type", "application/json")
        .bearer_auth(common::API_TOKEN)
        .body(r#"{"name": "", "asset_tag": "ASSET-0001"}"#)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json: Value = json_body(resp).await;
    assert_eq!(json["status"], "error");
    assert_eq!(json["messages"]["name"][0], "The name field is required.");
    assert_eq!(
        json["messages"]["asset_tag"][0],
        "The asset tag has already been taken."
    );
}

#[tokio::test]
async fn valid_asset_is_created() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = common::client()
        .post(format!("{}/api/assets", base_url))
        .header("content-type", "application/json")
        .bearer_auth(common::API_TOKEN)
        .body(r#"{"name": "Dell XPS 13", "asset_tag": "ASSET-0100"}"#)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);
    let json: Value = json_body(resp).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["payload"]["id"], 3);
}

#[tokio::test]
async fn missing_token_is_401_for_json_clients() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = common::client()
        .get(format!("{}/api/assets", base_url))
        .header("accept", "application/json")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let json: Value = json_body(resp).await;
    assert_eq!(json["error"], "Unauthorized or unauthenticated.");
}

#[tokio::test]
async fn token_mismatch_redirects_even_for_json_clients() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = common::client()
        .post(format!("{}/test/token-mismatch", base_url))
        .header("accept", "application/json")
        .header("referer", "/hardware/create")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(resp.headers()["location"], "/hardware/create");
    let cookie: &str = resp.headers()["set-cookie"].to_str().unwrap();
    assert!(cookie.starts_with("flash_error="));
}
