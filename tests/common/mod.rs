//! tests/common/mod.rs
//! A shared test helper to spawn the Axum app on an ephemeral port.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{serve, Router};
use tokio::net::TcpListener as TokioTcpListener;

use exception_handler::config::{environment::EnvironmentVariables, state::AppState};
use exception_handler::core::server::create_app;
use exception_handler::exceptions::{
    exception::AppException,
    handler::{ExceptionHandler, RenderOptions},
    report::Reporter,
};
use exception_handler::utils::lang::Translator;

pub const API_TOKEN: &str = "test-token";

/// Configuration used by every integration test.
pub fn test_env() -> EnvironmentVariables {
    EnvironmentVariables {
        api_token: Some(API_TOKEN.to_owned()),
        default_timeout_seconds: 1,
        max_request_body_size: 1024,
        ..EnvironmentVariables::default()
    }
}

/// Reporter that keeps the kind of every exception it receives.
#[derive(Clone, Default)]
pub struct RecordingReporter(pub Arc<Mutex<Vec<String>>>);

impl RecordingReporter {
    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, exception: &AppException) {
        self.0.lock().unwrap().push(exception.kind().to_string());
    }
}

/// Spawns the app with the default test configuration
pub fn spawn_app() -> String {
    spawn_app_with(test_env()).0
}

/// Spawns the app with a custom configuration, returning its base URL and
/// the reporter wired into its exception handler.
pub fn spawn_app_with(env: EnvironmentVariables) -> (String, RecordingReporter) {
    let reporter: RecordingReporter = RecordingReporter::default();
    let handler: ExceptionHandler = ExceptionHandler::new(
        Translator::new(env.locale.clone()),
        RenderOptions {
            login_path: env.login_path.to_string(),
            strict_status_codes: env.strict_http_status,
        },
    )
    .with_reporter(reporter.clone());

    let state: AppState = AppState::new(env).with_exception_handler(handler);
    let app: Router = create_app(state);

    // * Bind an ephemeral port using std::net::TcpListener.
    let std_listener: std::net::TcpListener =
        std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    std_listener.set_nonblocking(true).unwrap();

    // * Convert std::net::TcpListener to tokio::net::TcpListener.
    let tokio_listener: TokioTcpListener =
        TokioTcpListener::from_std(std_listener).expect("Failed to convert to tokio listener");

    let addr: std::net::SocketAddr = tokio_listener.local_addr().unwrap();

    // * Spawn the server in a background task.
    tokio::spawn(async move {
        serve(tokio_listener, app).await.expect("Server failed");
    });

    // * Return the base URL, e.g. "http://127.0.0.1:12345".
    (format!("http://{}", addr), reporter)
}

/// Client that never follows redirects, so 302 answers can be inspected.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to build client")
}
