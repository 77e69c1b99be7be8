//! tests/exceptions/reporting.rs
//! Only unexpected failures reach the error log.

#[path = "../common/mod.rs"]
mod common;

#[tokio::test]
async fn expected_failures_are_not_reported() {
    let (base_url, reporter) = common::spawn_app_with(common::test_env());
    let client: reqwest::Client = common::client();

    for path in [
        "/test/http/404",
        "/test/http/418",
        "/test/unauthenticated",
        "/test/forbidden",
        "/test/oauth",
        "/test/unsupported-image",
        "/api/assets/77",
        "/does-not-exist",
    ] {
        client
            .get(format!("{}{}", base_url, path))
            .header("accept", "application/json")
            .send()
            .await
            .expect("Failed to execute request.");
    }

    for path in ["/test/token-mismatch", "/test/invalid-json"] {
        client
            .post(format!("{}{}", base_url, path))
            .body("{")
            .send()
            .await
            .expect("Failed to execute request.");
    }

    assert!(reporter.entries().is_empty(), "reported: {:?}", reporter.entries());
}

#[tokio::test]
async fn unclassified_failure_is_reported_once() {
    let (base_url, reporter) = common::spawn_app_with(common::test_env());

    let resp: reqwest::Response = common::client()
        .get(format!("{}/test/crash", base_url))
        .header("accept", "application/json")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let body: String = resp.text().await.unwrap();
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["message"], "Server Error");

    assert_eq!(reporter.entries(), vec!["unclassified".to_string()]);
}
