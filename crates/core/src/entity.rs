//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// The identity returned here is the one other records refer to (for a
/// principal, whatever its grants are scoped to), not necessarily a storage key.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
