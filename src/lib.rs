//! TrafficMind - advisory traffic-signal decision service
//!
//! This crate maps measured traffic queues to red-light durations and returns
//! fixed advisories for emergency-vehicle preemption and incident handling,
//! all over a small JSON HTTP API.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod observability;
