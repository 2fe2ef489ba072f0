//! HTTP routes for HTML pages.

use axum::{routing::get, Router};

use super::handlers::{index, test_panel};

/// Creates the page router.
///
/// Routes:
/// - `GET /` - Landing page
/// - `GET /test` - Link panel for the simulation endpoints
pub fn page_routes() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/test", get(test_panel))
}
