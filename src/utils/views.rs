// Start of file: /src/utils/views.rs

// * Plain HTML views used when a browser (not an API client) hits an error.

use axum::http::StatusCode;

use crate::utils::lang::Translator;

/// Wraps `content` in the basic page layout.
pub fn basic_layout(title: &str, content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
<html lang=\"en\">\n\
<head>\n\
<meta charset=\"utf-8\">\n\
<title>{title}</title>\n\
</head>\n\
<body class=\"basic-layout\">\n\
<main>\n{content}\n</main>\n\
</body>\n\
</html>\n",
        title = escape(title),
    )
}

pub fn not_found_view(translator: &Translator) -> String {
    format!(
        "<section class=\"error-404\">\n<h1>404</h1>\n<h2>{}</h2>\n<p>{}</p>\n<a href=\"/\">Home</a>\n</section>",
        escape(&translator.trans("general.not_found")),
        escape(&translator.trans("general.not_found_body")),
    )
}

pub fn error_view(status: StatusCode, translator: &Translator) -> String {
    format!(
        "<section class=\"error-{code}\">\n<h1>{code}</h1>\n<h2>{reason}</h2>\n<p>{hint}</p>\n</section>",
        code = status.as_u16(),
        reason = escape(status.canonical_reason().unwrap_or("Error")),
        hint = escape(&translator.trans("general.error")),
    )
}

fn escape(raw: &str) -> String {
    let mut out: String = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}


// End of file: /src/utils/views.rs
