//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - Link creation with collision handling
//! - [`services::resolver::Resolver`] - Token to destination lookup

pub mod services;
