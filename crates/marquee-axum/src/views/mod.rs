//! Server-rendered HTML views.
//!
//! Views are plain functions from view models to HTML strings. Every
//! upstream string passes through [`escape`] before it reaches the markup.

mod detail;
mod list;
mod pagination;

use std::fmt::Write as _;

use axum::http::StatusCode;

pub use detail::render_detail;
pub use list::render_list;
pub use pagination::render_controls;

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;background:#f8fafc;color:#111827}\
main{max-width:72rem;margin:0 auto;padding:2rem 1rem}\
a{color:#2563eb;text-decoration:none}\
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(12rem,1fr));gap:1.5rem}\
.card{background:#fff;border-radius:.5rem;box-shadow:0 1px 3px #0002;overflow:hidden}\
.card img,.placeholder{width:100%;aspect-ratio:2/3;object-fit:cover;background:#e5e7eb;display:block}\
.card .info{padding:.75rem}\
.pagination{display:flex;gap:.5rem;justify-content:center;align-items:center;margin:2rem 0}\
.pagination a,.pagination span{padding:.25rem .75rem;border-radius:.25rem;background:#fff}\
.pagination .current{background:#2563eb;color:#fff}\
.pagination .disabled{color:#9ca3af}\
.error{color:#dc2626;text-align:center;padding:2rem}\
.genre{display:inline-block;padding:.25rem .75rem;margin:.125rem;border-radius:9999px;background:#dbeafe;color:#1e40af}\
.download{display:flex;justify-content:space-between;padding:1rem;background:#fff;border-radius:.5rem;margin:.5rem 0}";

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Wrap a page body in the shared document shell.
pub fn layout(title: &str, body: &str) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{}</title><style>{STYLE}</style></head><body><main>{body}</main></body></html>",
        escape(title)
    );
    html
}

/// A single red error message, with no partial results.
pub fn error_message(message: &str) -> String {
    format!("<p class=\"error\" role=\"alert\">{}</p>", escape(message))
}

/// Full error page for `status`.
pub fn error_page(status: StatusCode, message: &str) -> String {
    let title = status.canonical_reason().unwrap_or("Error");
    layout(
        title,
        &format!(
            "<a href=\"/\">&larr; Back to Movies</a>{}",
            error_message(message)
        ),
    )
}
