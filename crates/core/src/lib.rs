//! `payflex-core` — shared domain building blocks.
//!
//! Pure domain primitives only: errors, identifiers and the entity trait.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::DocumentId;
