//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Link`] - A persisted token to destination mapping
//!
//! Entities follow the "New Type" pattern with a separate struct for creation:
//! [`NewLink`] carries only what the caller chooses, the store assigns the rest.

pub mod link;

pub use link::{Link, NewLink};
