//! Domain error model.

use thiserror::Error;

use crate::id::{OrderId, ProductId};

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Constructors never fail: names, titles and prices are accepted as given.
/// Errors only arise from lookups and from parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A monetary amount could not be parsed.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// An entity with this identifier is already registered.
    #[error("duplicate identifier: {0}")]
    DuplicateId(String),

    /// An aggregate amount does not fit in the money representation.
    #[error("amount overflow: {0}")]
    AmountOverflow(String),

    /// A requested entity was not found in the registry.
    #[error("not found")]
    NotFound,

    /// An order refers to a product that is not registered.
    #[error("dangling order reference: order {order} refers to unknown product {product}")]
    DanglingReference { order: OrderId, product: ProductId },
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }

    pub fn duplicate_id(msg: impl Into<String>) -> Self {
        Self::DuplicateId(msg.into())
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        Self::AmountOverflow(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn dangling(order: OrderId, product: ProductId) -> Self {
        Self::DanglingReference { order, product }
    }
}
