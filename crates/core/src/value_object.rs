//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. A transition on a
/// value object consumes it and returns the next value instead of mutating in
/// place, so two states built through different action orders compare equal
/// whenever they hold the same selections.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Selected(Option<String>);
///
/// impl ValueObject for Selected {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
