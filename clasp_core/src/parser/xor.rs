use std::rc::Rc;

use crate::api::{same_argument, Argument};
use crate::parser::ParseError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The mutually exclusive groups of a command line.
///
/// At most one member of a group may be matched.
/// Matching a member satisfies the requiredness of the entire group.
#[derive(Debug, Default)]
pub struct XorHandler {
    groups: Vec<Vec<Rc<dyn Argument>>>,
}

impl XorHandler {
    pub(crate) fn add(&mut self, group: Vec<Rc<dyn Argument>>) {
        self.groups.push(group);
    }

    /// The groups, in order of declaration.
    pub fn groups(&self) -> &[Vec<Rc<dyn Argument>>] {
        &self.groups
    }

    /// Whether `argument` belongs to any group.
    pub fn contains(&self, argument: &dyn Argument) -> bool {
        self.group_of(argument).is_some()
    }

    fn group_of(&self, argument: &dyn Argument) -> Option<&Vec<Rc<dyn Argument>>> {
        self.groups.iter().find(|group| {
            group
                .iter()
                .any(|member| same_argument(member.as_ref(), argument))
        })
    }

    /// Account for `argument` having just matched.
    ///
    /// Returns how many required arguments the match satisfies.
    pub(crate) fn check(&self, argument: &dyn Argument) -> Result<usize, ParseError> {
        match self.group_of(argument) {
            Some(group) => {
                let others = || {
                    group
                        .iter()
                        .filter(|member| !same_argument(member.as_ref(), argument))
                };

                if let Some(member) = others().find(|member| member.is_set()) {
                    return Err(ParseError::MutuallyExclusive {
                        argument: member.id(),
                    });
                }

                for member in others() {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Excluding '{}' by '{}'.", member.id(), argument.id());
                    }
                    member.exclude();
                }

                if argument.allow_more() {
                    Ok(0)
                } else {
                    Ok(group.len())
                }
            }
            None => {
                if argument.is_required() {
                    Ok(1)
                } else {
                    Ok(0)
                }
            }
        }
    }
}
