//! `storefront-core` — shared building blocks for the storefront domain.
//!
//! Identifiers, money, and the domain error model. No IO, no global state.

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{OrderId, ProductId, UserId};
pub use money::Money;
pub use value_object::ValueObject;
