//! Upload page handler.

use axum::response::Html;

use crate::page::UPLOAD_PAGE_HTML;

/// Serve the single-page upload form.
pub async fn index() -> Html<&'static str> {
    Html(UPLOAD_PAGE_HTML)
}
