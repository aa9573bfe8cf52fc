//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Products, users and orders are all entities: two products with the same
/// title and price are still distinct if their ids differ.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
