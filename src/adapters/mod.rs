//! Adapters - connect the domain to the outside world.
//!
//! - `http` - axum router, handlers, DTOs and middleware stack

pub mod http;
