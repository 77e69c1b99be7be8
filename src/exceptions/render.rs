// Start of file: /src/exceptions/render.rs

// * Response descriptors produced by the exception handler, and how they
// * turn into real axum responses.

use axum::{
    http::{
        header::{LOCATION, SET_COOKIE},
        HeaderValue, StatusCode,
    },
    response::{Html, IntoResponse, Response},
    Json,
};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde_json::Value;
use tracing::warn;

/// Cookie carrying the URL a guest tried to reach before being sent to login.
pub const INTENDED_URL_COOKIE: &str = "url_intended";

/// The intended URL outlives the redirect, but not a forgotten login tab.
const INTENDED_URL_MAX_AGE_SECONDS: u64 = 30 * 60;

/// A message kept for exactly one subsequent page render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub key: String,
    pub message: String,
}

impl Flash {
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn cookie_name(&self) -> String {
        format!("flash_{}", self.key)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Json {
        status: StatusCode,
        body: Value,
    },
    View {
        status: StatusCode,
        html: String,
    },
    Redirect {
        location: String,
        flash: Option<Flash>,
        intended: Option<String>,
    },
}

impl Rendered {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Json { status, .. } | Self::View { status, .. } => *status,
            Self::Redirect { .. } => StatusCode::FOUND,
        }
    }

    pub fn json(status: StatusCode, body: impl serde::Serialize) -> Self {
        let body: Value = serde_json::to_value(body).unwrap_or_else(|err| {
            warn!("Failed to serialize error body: {err}");
            Value::Null
        });
        Self::Json { status, body }
    }
}

/// Percent-encoded cookie value. Flash cookies are expired by
/// `flash_middleware` on the request that reads them.
fn one_shot_cookie(name: &str, value: &str, max_age: Option<u64>) -> Option<HeaderValue> {
    let encoded: String = utf8_percent_encode(value, NON_ALPHANUMERIC).to_string();
    let max_age: String = max_age
        .map(|seconds| format!("; Max-Age={seconds}"))
        .unwrap_or_default();
    HeaderValue::from_str(&format!(
        "{name}={encoded}; Path=/{max_age}; HttpOnly; SameSite=Lax"
    ))
    .map_err(|err| warn!("Dropping cookie {name}: {err}"))
    .ok()
}

impl IntoResponse for Rendered {
    fn into_response(self) -> Response {
        match self {
            Self::Json { status, body } => (status, Json(body)).into_response(),
            Self::View { status, html } => (status, Html(html)).into_response(),
            Self::Redirect {
                location,
                flash,
                intended,
            } => {
                let mut response: Response = StatusCode::FOUND.into_response();
                let headers = response.headers_mut();

                let location: HeaderValue = HeaderValue::try_from(location.as_str())
                    .unwrap_or_else(|err| {
                        warn!("Invalid redirect location {location:?}: {err}");
                        HeaderValue::from_static("/")
                    });
                headers.insert(LOCATION, location);

                if let Some(flash) = &flash {
                    if let Some(cookie) = one_shot_cookie(&flash.cookie_name(), &flash.message, None) {
                        headers.append(SET_COOKIE, cookie);
                    }
                }
                if let Some(cookie) = intended
                    .as_deref()
                    .and_then(|url| {
                        one_shot_cookie(INTENDED_URL_COOKIE, url, Some(INTENDED_URL_MAX_AGE_SECONDS))
                    })
                {
                    headers.append(SET_COOKIE, cookie);
                }

                if let Some(flash) = flash {
                    response.extensions_mut().insert(flash);
                }
                response
            }
        }
    }
}


// End of file: /src/exceptions/render.rs
