//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Random short code generation
//! - [`db_error`] - SQLx error classification

pub mod code_generator;
pub mod db_error;
