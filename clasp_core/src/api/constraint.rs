use std::fmt::Display;

use crate::prelude::Constraint;

/// A constraint restricting values to an allowed set.
///
/// ### Example
/// ```
/// # use clasp_core as clasp;
/// use clasp::prelude::*;
/// use clasp::Values;
///
/// let colors = Values::new(vec!["red", "green"]);
/// assert_eq!(colors.description(), "red|green");
/// assert!(colors.check(&"red"));
/// assert!(!colors.check(&"blue"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Values<T> {
    allowed: Vec<T>,
    description: String,
}

impl<T: Display + PartialEq> Values<T> {
    /// Create the constraint from the `allowed` values.
    pub fn new(allowed: Vec<T>) -> Self {
        let description = allowed
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<String>>()
            .join("|");

        Self {
            allowed,
            description,
        }
    }
}

impl<T: Display + PartialEq> Constraint<T> for Values<T> {
    fn description(&self) -> String {
        self.description.clone()
    }

    fn short_id(&self) -> String {
        self.description.clone()
    }

    fn check(&self, value: &T) -> bool {
        self.allowed.contains(value)
    }
}
