// Start of file: src/main.rs

use axum::{serve, Router};
use tokio::net::TcpListener;

use exception_handler::config::{environment::EnvironmentVariables, state::AppState};
use exception_handler::core::{
    logging::init_tracing,
    server::{create_app, setup_listener, shutdown_signal},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // set up logging
    init_tracing();

    let env: &'static EnvironmentVariables = EnvironmentVariables::instance();
    let state: AppState = AppState::from_env();

    // build our router
    let app: Router = create_app(state);

    let listener: TcpListener = setup_listener(env).await?;

    tracing::info!(
        "Server listening on: {}://{}",
        env.protocol,
        listener.local_addr()?
    );

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

// End of file: src/main.rs
