// Start of file: /src/exceptions/request.rs

// * What the exception handler needs to know about the failed request.

use axum::http::{
    header::{ACCEPT, REFERER},
    HeaderMap, Uri,
};

const X_REQUESTED_WITH: &str = "x-requested-with";
const X_PJAX: &str = "x-pjax";

/// Header-derived snapshot of a request, taken before the handler runs.
#[derive(Debug, Clone, Default)]
pub struct RequestMeta {
    requested_with: Option<String>,
    pjax: bool,
    accept: Vec<String>,
    referer: Option<String>,
    path_and_query: String,
}

impl RequestMeta {
    pub fn from_parts(headers: &HeaderMap, uri: &Uri) -> Self {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned)
        };

        let accept: Vec<String> = header(ACCEPT.as_str())
            .map(|raw| parse_accept(&raw))
            .unwrap_or_default();

        Self {
            requested_with: header(X_REQUESTED_WITH),
            pjax: header(X_PJAX).is_some_and(|v| pjax_flag(&v)),
            accept,
            referer: header(REFERER.as_str()).filter(|r| !r.is_empty()),
            path_and_query: uri
                .path_and_query()
                .map(|pq| pq.as_str().to_owned())
                .unwrap_or_else(|| "/".to_owned()),
        }
    }

    /// `X-Requested-With: XMLHttpRequest`
    pub fn ajax(&self) -> bool {
        self.requested_with.as_deref() == Some("XMLHttpRequest")
    }

    /// `X-PJAX` with any value except empty or `"0"`, so even `"false"` counts.
    pub fn pjax(&self) -> bool {
        self.pjax
    }

    /// The most preferred media range asks for JSON.
    pub fn wants_json(&self) -> bool {
        self.accept
            .first()
            .is_some_and(|media| media.contains("/json") || media.contains("+json"))
    }

    pub fn accepts_any_content_type(&self) -> bool {
        match self.accept.first() {
            None => true,
            Some(media) => media == "*/*" || media == "*",
        }
    }

    /// Framework-level "this client wants JSON", used for auth and default rendering.
    pub fn expects_json(&self) -> bool {
        (self.ajax() && !self.pjax() && self.accepts_any_content_type()) || self.wants_json()
    }

    /// Where "back" points: the referer, or the site root.
    pub fn previous_url(&self) -> &str {
        self.referer.as_deref().unwrap_or("/")
    }

    pub fn path_and_query(&self) -> &str {
        &self.path_and_query
    }
}

fn pjax_flag(value: &str) -> bool {
    !value.is_empty() && value != "0"
}

/// Splits an `Accept` header into media ranges ordered by quality (stable for ties).
fn parse_accept(raw: &str) -> Vec<String> {
    let mut ranges: Vec<(String, f32)> = raw
        .split(',')
        .filter_map(|part| {
            let mut pieces = part.split(';');
            let media: String = pieces.next()?.trim().to_ascii_lowercase();
            if media.is_empty() {
                return None;
            }
            let quality: f32 = pieces
                .filter_map(|param| param.trim().strip_prefix("q="))
                .find_map(|q| q.trim().parse().ok())
                .unwrap_or(1.0);
            Some((media, quality))
        })
        .collect();

    ranges.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranges.into_iter().map(|(media, _)| media).collect()
}


// End of file: /src/exceptions/request.rs
