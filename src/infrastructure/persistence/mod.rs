//! Link store implementations.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - PostgreSQL, uniqueness enforced by `links_token_key`
//! - [`MemoryLinkRepository`] - In-process map for tests and local runs

pub mod memory_link_repository;
pub mod pg_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
pub use pg_link_repository::{DEFAULT_STORE_TIMEOUT, PgLinkRepository};
