// Start of file: /src/exceptions/exception.rs

// * Every failure the request pipeline can raise, as one closed enum.

use std::{fmt, sync::Arc};

use axum::{
    extract::rejection::{BytesRejection, JsonRejection, PathRejection},
    http::StatusCode,
};
use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

/// Field-level validation messages, fields kept in the order they first failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(IndexMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to the given field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Builder flavour of [`ValidationErrors::add`].
    pub fn with(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.add(field, message);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.0.keys().map(String::as_str).collect();
        write!(f, "{}", fields.join(", "))
    }
}

/// Tag identifying an [`AppException`] variant without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExceptionKind {
    TokenMismatch,
    InvalidJson,
    ModelNotFound,
    Http,
    Unauthenticated,
    Unauthorized,
    OAuthServer,
    UnsupportedImage,
    Validation,
    Unclassified,
}

impl ExceptionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TokenMismatch => "token_mismatch",
            Self::InvalidJson => "invalid_json",
            Self::ModelNotFound => "model_not_found",
            Self::Http => "http",
            Self::Unauthenticated => "unauthenticated",
            Self::Unauthorized => "unauthorized",
            Self::OAuthServer => "oauth_server",
            Self::UnsupportedImage => "unsupported_image",
            Self::Validation => "validation",
            Self::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unhandled failure escaping a handler or a middleware layer.
///
/// The unclassified source sits behind an `Arc`, which keeps the whole enum
/// `Clone` for storage in response extensions.
#[derive(Debug, Clone, Error)]
pub enum AppException {
    #[error("CSRF token mismatch")]
    TokenMismatch,

    #[error("malformed JSON body: {detail}")]
    InvalidJson { detail: String },

    #[error("no query results for model [{model}]")]
    ModelNotFound { model: String, ids: Vec<String> },

    #[error("HTTP {status}")]
    Http {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("unauthenticated")]
    Unauthenticated { guards: Vec<String> },

    #[error("this action is unauthorized")]
    Unauthorized { message: Option<String> },

    #[error("oauth server error ({error_type}): {message}")]
    OAuthServer {
        status: StatusCode,
        error_type: String,
        message: String,
    },

    #[error("unsupported image format: {format}")]
    UnsupportedImage { format: String },

    #[error("the given data was invalid: {errors}")]
    Validation { errors: ValidationErrors },

    #[error("{0}")]
    Unclassified(Arc<anyhow::Error>),
}

impl AppException {
    pub fn kind(&self) -> ExceptionKind {
        match self {
            Self::TokenMismatch => ExceptionKind::TokenMismatch,
            Self::InvalidJson { .. } => ExceptionKind::InvalidJson,
            Self::ModelNotFound { .. } => ExceptionKind::ModelNotFound,
            Self::Http { .. } => ExceptionKind::Http,
            Self::Unauthenticated { .. } => ExceptionKind::Unauthenticated,
            Self::Unauthorized { .. } => ExceptionKind::Unauthorized,
            Self::OAuthServer { .. } => ExceptionKind::OAuthServer,
            Self::UnsupportedImage { .. } => ExceptionKind::UnsupportedImage,
            Self::Validation { .. } => ExceptionKind::Validation,
            Self::Unclassified(_) => ExceptionKind::Unclassified,
        }
    }

    /// Status code carried by HTTP-flavoured exceptions.
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            Self::Http { status, .. } | Self::OAuthServer { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Model name without its module path, e.g. `App\Models\Asset` -> `Asset`.
    pub fn model_basename(&self) -> Option<&str> {
        match self {
            Self::ModelNotFound { model, .. } => Some(basename(model)),
            _ => None,
        }
    }

    pub fn http(status: StatusCode) -> Self {
        Self::Http {
            status,
            message: None,
        }
    }

    pub fn http_with_message(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: Some(message.into()),
        }
    }

    /// Not-found for the Rust type `T`, named after its type path.
    pub fn model_not_found<T: ?Sized>(ids: impl IntoIterator<Item = impl ToString>) -> Self {
        Self::ModelNotFound {
            model: std::any::type_name::<T>().to_string(),
            ids: ids.into_iter().map(|id| id.to_string()).collect(),
        }
    }

    pub fn validation(errors: ValidationErrors) -> Self {
        Self::Validation { errors }
    }

    pub fn unauthenticated() -> Self {
        Self::Unauthenticated { guards: Vec::new() }
    }
}

/// Generic arguments are dropped: `alloc::vec::Vec<app::Asset>` -> `Vec`.
fn basename(path: &str) -> &str {
    let path: &str = path.split('<').next().unwrap_or(path);
    path.rsplit(|c| c == '\\' || c == ':')
        .find(|segment| !segment.is_empty())
        .unwrap_or(path)
}

impl From<anyhow::Error> for AppException {
    fn from(err: anyhow::Error) -> Self {
        Self::Unclassified(Arc::new(err))
    }
}

impl From<JsonRejection> for AppException {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonSyntaxError(err) => Self::InvalidJson {
                detail: err.body_text(),
            },
            JsonRejection::JsonDataError(err) => {
                Self::validation(ValidationErrors::new().with("body", err.body_text()))
            }
            JsonRejection::MissingJsonContentType(err) => {
                Self::http_with_message(err.status(), err.body_text())
            }
            other => Self::http_with_message(other.status(), other.body_text()),
        }
    }
}

impl From<PathRejection> for AppException {
    fn from(rejection: PathRejection) -> Self {
        Self::http_with_message(rejection.status(), rejection.body_text())
    }
}

impl From<BytesRejection> for AppException {
    fn from(rejection: BytesRejection) -> Self {
        Self::http_with_message(rejection.status(), rejection.body_text())
    }
}


// End of file: /src/exceptions/exception.rs
