//! Core domain entities.
//!
//! - [`Link`] - A stored short code to long URL mapping
//! - [`NewLink`] - Input for inserting a link

pub mod link;

pub use link::{Link, NewLink};
