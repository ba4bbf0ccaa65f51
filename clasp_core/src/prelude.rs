//! Traits which, typically, may be imported without concern: `use clasp::prelude::*`.

use crate::api::InvalidValue;

/// Behaviour to convert a single command line token into a typed value.
///
/// Implemented for the numeric primitives, `bool`, `char` and the string-like types.
/// Custom types implement this via [`extract_value_like`](crate::extract_value_like)
/// or [`extract_string_like`](crate::extract_string_like).
// Needs to be imported in order to implement a custom `Extract`.
pub trait Extract: Sized {
    /// Convert `token` into `Self`.
    fn extract(token: &str) -> Result<Self, InvalidValue>;
}

/// Behaviour for restricting the legal values of an argument.
// Needs to be imported in order to implement a custom `Constraint`.
pub trait Constraint<T> {
    /// Human readable description of the legal set.
    fn description(&self) -> String;

    /// Short form of the legal set, used as the argument's type description.
    fn short_id(&self) -> String;

    /// Whether `value` belongs to the legal set.
    fn check(&self, value: &T) -> bool;
}
