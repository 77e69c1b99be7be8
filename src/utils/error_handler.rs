// Global error handling for tower middleware layers

use axum::{http::StatusCode, BoxError};
use std::error::Error;
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
// Axum uses http_body_util for length-limiting
use http_body_util::LengthLimitError;

use crate::exceptions::exception::AppException;

/// Maps errors escaping the tower stack onto exceptions, which the
/// exception middleware then renders like any handler failure.
pub async fn handle_global_error(err: BoxError) -> AppException {
    classify_layer_error(err)
}

pub fn classify_layer_error(err: BoxError) -> AppException {
    // 413 if the body was too large
    if err.is::<LengthLimitError>() || find_cause::<LengthLimitError>(&*err).is_some() {
        return AppException::http(StatusCode::PAYLOAD_TOO_LARGE);
    }

    // 408 if the request took too long
    if err.is::<Elapsed>() {
        return AppException::http(StatusCode::REQUEST_TIMEOUT);
    }

    // Otherwise an unclassified failure
    AppException::from(anyhow::anyhow!("Unhandled internal error: {err}"))
}

/// Helper function to find specific error type in error chain
pub fn find_cause<T: Error + 'static>(err: &dyn Error) -> Option<&T> {
    let mut source: Option<&dyn Error> = err.source();

    while let Some(s) = source {
        if let Some(typed) = s.downcast_ref::<T>() {
            return Some(typed);
        }
        source = s.source();
    }

    None
}
