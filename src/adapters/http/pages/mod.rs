//! HTML pages: landing page and manual test panel.

mod handlers;
mod routes;

pub use handlers::TEST_PANEL_HTML;
pub use routes::page_routes;
