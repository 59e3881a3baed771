//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers and the admin
//! CLI a single entry point.
//!
//! - [`services::link_service::LinkService`] - Short link creation and resolution

pub mod services;
