//! Browser pages: the idea form and the slide viewer.
//!
//! Both are static HTML compiled into the binary. The viewer reads the deck
//! id from its own URL and loads the slides from `/api/decks/{id}`.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../../assets/index.html");
const VIEWER_HTML: &str = include_str!("../../../assets/viewer.html");

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /decks/{id}
pub async fn viewer() -> Html<&'static str> {
    Html(VIEWER_HTML)
}
