use crate::api::Argument;
use crate::parser::SpecificationError;

/// Enforces that no positional argument follows an optional positional argument.
#[derive(Debug, Default)]
pub(crate) struct PositionalTracker {
    optional_seen: bool,
}

impl PositionalTracker {
    pub(crate) fn check(&mut self, argument: &dyn Argument) -> Result<(), SpecificationError> {
        if !argument.is_positional() {
            return Ok(());
        }

        if self.optional_seen {
            return Err(SpecificationError::PositionalAfterOptional(argument.id()));
        }

        if !argument.is_required() {
            self.optional_seen = true;
        }

        Ok(())
    }
}
