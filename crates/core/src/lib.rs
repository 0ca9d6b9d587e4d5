//! `amenities-core`: domain building blocks for the showcase.
//!
//! This crate contains **pure domain** primitives (no IO, no rendering).

pub mod entity;
pub mod error;
pub mod id;
pub mod reducer;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use reducer::Reducer;
pub use value_object::ValueObject;
