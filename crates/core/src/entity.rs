//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Every storefront record (package, testimonial, FAQ, benefit) has a stable
/// identifier and an active flag that controls whether it is shown.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Human-readable kind used in error messages and logs (e.g. `"package"`).
    const KIND: &'static str;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Whether the entity is currently published.
    fn is_active(&self) -> bool;
}
