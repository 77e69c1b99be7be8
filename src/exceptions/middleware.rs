// Start of file: /src/exceptions/middleware.rs

// * Glue between axum and the exception handler: handlers return
// * `AppException`, this middleware turns it into the final response.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::exceptions::{
    exception::AppException, handler::ExceptionHandler, render::Rendered, request::RequestMeta,
};
use crate::utils::json::to_two_space_indented_json;

/// Produces a placeholder response holding the exception in its extensions;
/// [`exception_middleware`] swaps it for the rendered one.
impl IntoResponse for AppException {
    fn into_response(self) -> Response {
        let status: StatusCode = self
            .status_code()
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response: Response = status.into_response();
        response.extensions_mut().insert(self);
        response
    }
}

pub async fn exception_middleware(
    State(handler): State<ExceptionHandler>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let meta: RequestMeta = RequestMeta::from_parts(req.headers(), req.uri());

    let mut response: Response = next.run(req).await;

    let Some(exception) = response.extensions_mut().remove::<AppException>() else {
        return response;
    };

    let rendered: Rendered = handler.handle(&meta, &exception);

    debug!(
        kind = %exception.kind(),
        status = rendered.status().as_u16(),
        "Exception rendered"
    );
    if let Rendered::Json { body, .. } = &rendered {
        if let Ok(pretty) = to_two_space_indented_json(body) {
            debug!("\nRendered exception body:\n{}", pretty);
        }
    }

    rendered.into_response()
}

/// Router fallback for paths nothing matched.
pub async fn route_not_found() -> AppException {
    AppException::http(StatusCode::NOT_FOUND)
}

/// Router fallback for known paths hit with the wrong method.
pub async fn method_not_allowed() -> AppException {
    AppException::http(StatusCode::METHOD_NOT_ALLOWED)
}

// End of file: /src/exceptions/middleware.rs
