//! Domain layer containing business entities and storage contracts.
//!
//! Nothing in here depends on the HTTP boundary or on a concrete database.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`errors`] - Store and shortening error taxonomy
//!
//! # Design Principles
//!
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Storage handles are constructed explicitly and injected into services
//!   (see [`crate::application::services`]), never looked up from global state

pub mod entities;
pub mod errors;
pub mod repositories;
