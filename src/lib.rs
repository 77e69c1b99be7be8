// Library root for the axum exception handler

pub mod api;
pub mod config;
pub mod core;
pub mod exceptions;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::core::server::create_app;
pub use crate::exceptions::{AppException, ExceptionHandler};
