//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// A retired pallet that is later un-retired is still the same entity; only its
/// identifier is stable, every other field may be edited.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
