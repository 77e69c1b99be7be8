// Start of file: /src/exceptions/handler.rs

// * Maps an exception plus request metadata to exactly one response,
// * logging it first when the report policy says so.

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use tracing::debug;

use crate::exceptions::{
    exception::AppException,
    render::{Flash, Rendered},
    report::{ReportPolicy, Reporter, TracingReporter},
    request::RequestMeta,
};
use crate::utils::{
    api_response::error_response,
    lang::Translator,
    views::{basic_layout, error_view, not_found_view},
};

const DEFAULT_LOGIN_PATH: &str = "/login";
const UNAUTHENTICATED_MESSAGE: &str = "Unauthorized or unauthenticated.";
const UNAUTHORIZED_MESSAGE: &str = "This action is unauthorized.";
const SERVER_ERROR_MESSAGE: &str = "Server Error";

#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Where unauthenticated browser requests are sent.
    pub login_path: String,
    /// Answer JSON not-found with 404 and other HTTP errors with their own
    /// code, instead of the compatible 200 / 405 answers.
    pub strict_status_codes: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            strict_status_codes: false,
        }
    }
}

#[derive(Clone)]
pub struct ExceptionHandler {
    policy: ReportPolicy,
    reporter: Arc<dyn Reporter>,
    translator: Translator,
    options: RenderOptions,
}

impl std::fmt::Debug for ExceptionHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExceptionHandler")
            .field("policy", &self.policy)
            .field("translator", &self.translator)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Default for ExceptionHandler {
    fn default() -> Self {
        Self::new(Translator::default(), RenderOptions::default())
    }
}

impl ExceptionHandler {
    pub fn new(translator: Translator, options: RenderOptions) -> Self {
        Self {
            policy: ReportPolicy::default(),
            reporter: Arc::new(TracingReporter),
            translator,
            options,
        }
    }

    pub fn with_reporter(mut self, reporter: impl Reporter) -> Self {
        self.reporter = Arc::new(reporter);
        self
    }

    /// Logs the exception unless it is on the do-not-report list.
    /// Returns whether an entry was written.
    pub fn report(&self, exception: &AppException) -> bool {
        if !self.policy.should_report(exception) {
            debug!(kind = %exception.kind(), "Exception not reported");
            return false;
        }
        self.reporter.report(exception);
        true
    }

    /// Report, then render.
    pub fn handle(&self, meta: &RequestMeta, exception: &AppException) -> Rendered {
        self.report(exception);
        self.render(meta, exception)
    }

    pub fn render(&self, meta: &RequestMeta, exception: &AppException) -> Rendered {
        match exception {
            AppException::TokenMismatch => {
                return Rendered::Redirect {
                    location: meta.previous_url().to_owned(),
                    flash: Some(Flash::new(
                        "error",
                        self.translator.trans("general.token_expired"),
                    )),
                    intended: None,
                };
            }
            AppException::InvalidJson { .. } => {
                return Rendered::json(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    error_response("invalid JSON"),
                );
            }
            _ => {}
        }

        if meta.ajax() || meta.wants_json() {
            if let Some(model) = exception.model_basename() {
                let status: StatusCode = if self.options.strict_status_codes {
                    StatusCode::NOT_FOUND
                } else {
                    StatusCode::OK
                };
                return Rendered::json(status, error_response(format!("{model} not found")));
            }

            if let AppException::Http { status, .. } = exception {
                return self.render_http_json(*status);
            }
        }

        let not_found: bool = matches!(exception, AppException::ModelNotFound { .. })
            || matches!(exception, AppException::Http { status, .. } if *status == StatusCode::NOT_FOUND);
        if not_found {
            return Rendered::View {
                status: StatusCode::NOT_FOUND,
                html: basic_layout(
                    &self.translator.trans("general.not_found"),
                    &not_found_view(&self.translator),
                ),
            };
        }

        self.render_default(meta, exception)
    }

    fn render_http_json(&self, status: StatusCode) -> Rendered {
        match status {
            StatusCode::NOT_FOUND => Rendered::json(
                StatusCode::NOT_FOUND,
                error_response(format!("{} endpoint not found", status.as_u16())),
            ),
            StatusCode::METHOD_NOT_ALLOWED => Rendered::json(
                StatusCode::METHOD_NOT_ALLOWED,
                error_response("Method not allowed"),
            ),
            other => {
                let answered: StatusCode = if self.options.strict_status_codes {
                    other
                } else {
                    StatusCode::METHOD_NOT_ALLOWED
                };
                Rendered::json(answered, error_response(other.as_u16().to_string()))
            }
        }
    }

    /// What the host framework does with anything the branches above leave over.
    fn render_default(&self, meta: &RequestMeta, exception: &AppException) -> Rendered {
        match exception {
            AppException::Unauthenticated { .. } => {
                if meta.expects_json() {
                    return Rendered::json(
                        StatusCode::UNAUTHORIZED,
                        json!({ "error": UNAUTHENTICATED_MESSAGE }),
                    );
                }
                return Rendered::Redirect {
                    location: self.options.login_path.clone(),
                    flash: None,
                    intended: Some(meta.path_and_query().to_owned()),
                };
            }
            AppException::Validation { errors } => {
                let messages = serde_json::to_value(errors).unwrap_or_default();
                return Rendered::json(StatusCode::UNPROCESSABLE_ENTITY, error_response(messages));
            }
            _ => {}
        }

        let status: StatusCode = match exception {
            AppException::Http { status, .. } | AppException::OAuthServer { status, .. } => *status,
            AppException::Unauthorized { .. } => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if meta.expects_json() {
            return Rendered::json(status, json!({ "message": client_message(status, exception) }));
        }

        Rendered::View {
            status,
            html: basic_layout(
                status.canonical_reason().unwrap_or("Error"),
                &error_view(status, &self.translator),
            ),
        }
    }
}

/// Text shown to JSON clients by the default renderer; server errors stay opaque.
fn client_message(status: StatusCode, exception: &AppException) -> String {
    if status.is_server_error() {
        return SERVER_ERROR_MESSAGE.to_owned();
    }
    let reason = || status.canonical_reason().unwrap_or("Error").to_owned();
    match exception {
        AppException::Http { message, .. } => message.clone().unwrap_or_else(reason),
        AppException::Unauthorized { message } => message
            .clone()
            .unwrap_or_else(|| UNAUTHORIZED_MESSAGE.to_owned()),
        AppException::OAuthServer { message, .. } => message.clone(),
        _ => reason(),
    }
}


// End of file: /src/exceptions/handler.rs
