//! `renoovy-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the storefront
//! contexts: the error model, entity identifiers, and the `Money` and `Rating`
//! value objects. No IO, no logging, no storage.

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod rating;
pub mod text;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::EntityId;
pub use money::{Currency, Money};
pub use rating::Rating;
pub use value_object::ValueObject;
