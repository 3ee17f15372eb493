//! Entity trait: identity that survives state changes.

/// An object whose identity is its id, not its attribute values.
///
/// A `Person` keeps the same id when renamed or when its wallet is replaced;
/// two products with identical prices are still distinct catalogue entries.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
