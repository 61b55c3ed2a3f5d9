//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new value: `Money::apply_discount` returns a new `Money`, it never
/// touches the receiver.
///
/// - **Value Object**: `Money { amount: 297, currency: BRL }`, `Rating(5)`
/// - **Entity**: `Package { id: PackageId(..), .. }` (same id, same package)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
