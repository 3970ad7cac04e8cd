//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Identity is the only thing compared when code asks "is this the same
/// item?". An inventory keeps at most one stack per `ItemDefinition::id()`,
/// and a catalog refuses a second definition with an id it already holds,
/// regardless of whether name, weight or limits differ.
///
/// Catalog ids are stable keys chosen by content authors (e.g. `"iron_sword"`),
/// not display text: rename an item by changing its name and keep the id, or
/// existing stacks stop merging with new pickups.
pub trait Entity {
    /// Identifier type; must be hashable so it can key a catalog map.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the identifier that decides stack merging and catalog lookup.
    fn id(&self) -> &Self::Id;
}
