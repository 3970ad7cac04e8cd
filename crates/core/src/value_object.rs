//! Value object trait: equality by value, not identity.
//!
//! A value object has no identity of its own; it is defined entirely by its
//! attributes. `Weight(2.5)` is the same thing wherever it appears.

/// Marker trait for value objects.
///
/// Value objects are **immutable**. Combining two of them (adding weights,
/// scaling by a quantity) always yields a new instance and leaves the inputs
/// untouched.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (`Weight`, two equal weights are interchangeable)
/// - **Entity**: has identity (`ItemDefinition`, keyed by its `ItemId`)
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Weight(f64);
///
/// impl ValueObject for Weight {}
///
/// assert_eq!(Weight(1.5), Weight(1.5));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
