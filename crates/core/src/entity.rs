//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Documents handed to lifecycle hooks are entities: hooks mutate their
/// fields in place, the identity stays the same.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
