//! HTTP middleware applied by the top-level router.

pub mod cors;
pub mod tracing;
