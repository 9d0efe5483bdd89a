//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Skus, products and order items are entities: two snapshots with the same id
/// describe the same thing even if their attributes differ.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
