//! Helper functions used across the application:
//!
//! - [`token_generator`] - Token generation and suggested-token validation
//! - [`destination`] - Destination URL validation

pub mod destination;
pub mod token_generator;
