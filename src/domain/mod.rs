//! Domain layer containing the signal decision logic and its value types.
//!
//! # Module Organization
//!
//! - `signal` - Red-light timing rule, traffic length value object and the
//!   fixed advisories for emergency preemption and incident handling

pub mod signal;
