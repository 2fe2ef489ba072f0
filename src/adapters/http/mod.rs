//! HTTP adapters - REST API and HTML pages.
//!
//! Each area has its own module with handlers and routes; [`app_router`]
//! merges them and applies the shared middleware stack.

pub mod error;
pub mod extract;
pub mod pages;
pub mod router;
pub mod signal;

// Re-export key types for convenience
pub use error::{ApiError, ErrorResponse};
pub use extract::{ValidatedJson, ValidatedPath};
pub use router::{app_router, with_middleware};
