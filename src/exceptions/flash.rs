// Start of file: /src/exceptions/flash.rs

// * Consumes the one-shot cookies written by redirect responses: flash
// * messages are handed to the next request and then expired.

use axum::{
    body::Body,
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue, Request,
    },
    middleware::Next,
    response::Response,
};
use percent_encoding::percent_decode_str;
use tracing::{debug, warn};

use crate::exceptions::render::{Flash, INTENDED_URL_COOKIE};

const FLASH_PREFIX: &str = "flash_";

/// Flash messages and intended URL received with the current request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashBag {
    pub messages: Vec<Flash>,
    pub intended: Option<String>,
}

impl FlashBag {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut bag: FlashBag = FlashBag::default();

        let pairs = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='));

        for (name, raw) in pairs {
            let Ok(value) = percent_decode_str(raw).decode_utf8() else {
                warn!("Ignoring cookie {name} with a non UTF-8 value");
                continue;
            };
            if let Some(key) = name.strip_prefix(FLASH_PREFIX) {
                if !key.is_empty() && !value.is_empty() {
                    bag.messages.push(Flash::new(key, value));
                }
            } else if name == INTENDED_URL_COOKIE && !value.is_empty() {
                bag.intended = Some(value.into_owned());
            }
        }
        bag
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.intended.is_none()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages
            .iter()
            .find(|flash| flash.key == key)
            .map(|flash| flash.message.as_str())
    }
}

fn sets_cookie(headers: &HeaderMap, name: &str) -> bool {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(|value| value.split_once('=').is_some_and(|(n, _)| n == name))
}

fn expired_cookie(name: &str) -> Option<HeaderValue> {
    HeaderValue::from_str(&format!(
        "{name}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax"
    ))
    .map_err(|err| warn!("Cannot expire cookie {name}: {err}"))
    .ok()
}

/// Hands incoming flash cookies to the handler as a [`FlashBag`] extension,
/// then expires them unless the response writes a fresh value.
pub async fn flash_middleware(mut req: Request<Body>, next: Next) -> Response {
    let bag: FlashBag = FlashBag::from_headers(req.headers());
    if bag.is_empty() {
        return next.run(req).await;
    }

    let consumed: Vec<String> = bag.messages.iter().map(Flash::cookie_name).collect();
    req.extensions_mut().insert(bag);

    let mut response: Response = next.run(req).await;

    for name in consumed {
        if sets_cookie(response.headers(), &name) {
            continue;
        }
        if let Some(cookie) = expired_cookie(&name) {
            debug!("Flash cookie {name} consumed");
            response.headers_mut().append(SET_COOKIE, cookie);
        }
    }
    response
}


// End of file: /src/exceptions/flash.rs
