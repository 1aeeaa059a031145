//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity of their own: two instances with the same
/// attributes are interchangeable. A role grant is the canonical example here,
/// since it is nothing more than the pair it was built from.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Grant { role: Role, principal: Username }
///
/// impl ValueObject for Grant {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
