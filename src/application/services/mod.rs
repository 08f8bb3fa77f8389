//! Business logic services for the application layer.

pub mod resolver;
pub mod shorten_service;

pub use resolver::{Resolution, Resolver};
pub use shorten_service::{DEFAULT_MAX_ATTEMPTS, ShortenService};
