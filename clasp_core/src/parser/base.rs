use std::collections::VecDeque;
use std::rc::Rc;
use thiserror::Error;

use crate::api::{Argument, InvalidValue};
use crate::model::Visit;
use crate::parser::{Cursor, PositionalTracker, Session, Token, XorHandler};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// An error in the declaration of the command line.
/// Each variant carries the id of the offending argument.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpecificationError {
    /// The flag is longer than a single character.
    #[error("Specification error: argument flag can only be one character long: {0}")]
    FlagTooLong(String),
    /// The flag is one of the reserved prefixes.
    #[error("Specification error: argument flag cannot be either '-' or '--' or a space: {0}")]
    ReservedFlag(String),
    /// The name begins with a reserved prefix.
    #[error("Specification error: argument name cannot begin with '-' or contain a space: {0}")]
    ReservedName(String),
    /// The name is empty.
    #[error("Specification error: argument name cannot be empty: {0}")]
    EmptyName(String),
    /// A positional argument was declared with a flag.
    #[error("Specification error: positional argument cannot have a flag: {0}")]
    PositionalFlag(String),
    /// The constraint offers no description of its values.
    #[error("Specification error: constraint must describe its values: {0}")]
    EmptyConstraint(String),
    /// The argument clashes with an already registered argument.
    #[error("Specification error: argument with same flag/name already exists: {0}")]
    Duplicate(String),
    /// A positional argument was registered after an optional positional argument.
    #[error(
        "Specification error: you can't specify any positional argument following an optional positional argument: {0}"
    )]
    PositionalAfterOptional(String),
}

impl SpecificationError {
    /// The id of the offending argument.
    pub fn argument(&self) -> &str {
        match self {
            SpecificationError::FlagTooLong(id)
            | SpecificationError::ReservedFlag(id)
            | SpecificationError::ReservedName(id)
            | SpecificationError::EmptyName(id)
            | SpecificationError::PositionalFlag(id)
            | SpecificationError::EmptyConstraint(id)
            | SpecificationError::Duplicate(id)
            | SpecificationError::PositionalAfterOptional(id) => id,
        }
    }
}

/// An error in the command line being parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ParseError {
    /// The value token could not be converted into the argument's type.
    #[error("{source}")]
    InvalidValue {
        argument: String,
        source: InvalidValue,
    },
    /// The value is outside the argument's constraint.
    #[error("Value '{value}' does not meet constraint: {constraint}")]
    ConstraintViolation {
        argument: String,
        value: String,
        constraint: String,
    },
    /// The argument was found without its delimited value (ex: `--num` rather than `--num=1`).
    #[error("Couldn't find delimiter for this argument!")]
    MissingDelimiter { argument: String },
    /// The argument was the final token, leaving no value.
    #[error("Missing a value for this argument!")]
    MissingValue { argument: String },
    /// A single valued argument was found more than once.
    #[error("Argument already set!")]
    AlreadySet { argument: String },
    /// The argument is mutually exclusive with another matched argument.
    #[error("Mutually exclusive argument already set!")]
    MutuallyExclusive { argument: String },
    /// No argument matches the token.
    #[error("Couldn't find match for argument")]
    Unmatched { token: String },
    /// Required arguments did not appear.
    #[error("Required argument{} missing: {}", plural(.names), .names.join(", "))]
    MissingRequired { names: Vec<String> },
    /// More required arguments were accounted for than were declared.
    #[error("Too many arguments!")]
    TooManyArguments,
}

fn plural(names: &[String]) -> &'static str {
    if names.len() > 1 {
        "s"
    } else {
        ""
    }
}

impl ParseError {
    /// The id of the offending argument (or the unmatched token), when there is one.
    pub fn argument(&self) -> Option<&str> {
        match self {
            ParseError::InvalidValue { argument, .. }
            | ParseError::ConstraintViolation { argument, .. }
            | ParseError::MissingDelimiter { argument }
            | ParseError::MissingValue { argument }
            | ParseError::AlreadySet { argument }
            | ParseError::MutuallyExclusive { argument } => Some(argument),
            ParseError::Unmatched { token } => Some(token),
            ParseError::MissingRequired { .. } | ParseError::TooManyArguments => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Action {
    Complete,
    PrintUsage,
    PrintVersion,
    Exit(i32),
}

/// The declared command line: its settings along with every registered argument.
///
/// This is the read-only view offered to an [`Output`](crate::Output) for rendering.
pub struct Command {
    program_name: String,
    message: String,
    version: String,
    delimiter: char,
    help_and_version: bool,
    arguments: VecDeque<Rc<dyn Argument>>,
    xor: XorHandler,
    num_required: usize,
    tracker: PositionalTracker,
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("program_name", &self.program_name)
            .field("arguments", &self.arguments)
            .field("num_required", &self.num_required)
            .finish()
    }
}

impl Command {
    pub(crate) fn new(
        message: String,
        version: String,
        delimiter: char,
        help_and_version: bool,
    ) -> Self {
        Self {
            program_name: String::default(),
            message,
            version,
            delimiter,
            help_and_version,
            arguments: VecDeque::default(),
            xor: XorHandler::default(),
            num_required: 0,
            tracker: PositionalTracker::default(),
        }
    }

    /// The program name, taken from the first token of the most recent parse.
    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    /// The message describing the program.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The version of the program.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The character separating a labeled argument from its value.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Whether the built-in `--help` and `--version` switches are declared.
    pub fn has_help_and_version(&self) -> bool {
        self.help_and_version
    }

    /// The arguments, in matching order (labeled arguments first, newest first).
    pub fn arguments(&self) -> impl Iterator<Item = &dyn Argument> {
        self.arguments.iter().map(|argument| argument.as_ref())
    }

    /// The mutually exclusive groups.
    pub fn xor_handler(&self) -> &XorHandler {
        &self.xor
    }

    /// Short form of `argument` for the usage synopsis (ex: `[-n <integer>]`).
    pub fn short_id(&self, argument: &dyn Argument) -> String {
        let value = argument.type_description().unwrap_or_default();

        let id = if argument.is_positional() {
            format!("<{value}>")
        } else {
            let mut id = if argument.flag().is_empty() {
                format!("--{}", argument.name())
            } else {
                format!("-{}", argument.flag())
            };

            if argument.is_value_required() {
                id.push_str(&format!("{}<{value}>", self.delimiter));
            }

            if argument.is_required() {
                id
            } else {
                format!("[{id}]")
            }
        };

        if argument.accepts_multiple_values() {
            format!("{id} ...")
        } else {
            id
        }
    }

    /// Long form of `argument` for the usage listing (ex: `-n <integer>,  --num <integer>`).
    pub fn long_id(&self, argument: &dyn Argument) -> String {
        let value = argument.type_description().unwrap_or_default();
        let suffix = if argument.accepts_multiple_values() {
            "  (accepted multiple times)"
        } else {
            ""
        };

        if argument.is_positional() {
            return format!("<{value}>{suffix}");
        }

        let with_value = |label: String| {
            if argument.is_value_required() {
                format!("{label}{}<{value}>", self.delimiter)
            } else {
                label
            }
        };
        let mut id = String::default();

        if !argument.flag().is_empty() {
            id.push_str(&with_value(format!("-{}", argument.flag())));
            id.push_str(",  ");
        }

        id.push_str(&with_value(format!("--{}", argument.name())));
        id.push_str(suffix);
        id
    }

    /// Register an argument, without checking it against the existing arguments.
    pub(crate) fn push(&mut self, argument: Rc<dyn Argument>) {
        if argument.is_required() {
            self.num_required += 1;
        }

        if argument.is_positional() {
            self.arguments.push_back(argument);
        } else {
            self.arguments.push_front(argument);
        }
    }

    pub(crate) fn add(&mut self, argument: Rc<dyn Argument>) -> Result<(), SpecificationError> {
        if self
            .arguments
            .iter()
            .any(|existing| existing.conflicts_with(argument.as_ref()))
        {
            return Err(SpecificationError::Duplicate(argument.id()));
        }

        self.tracker.check(argument.as_ref())?;
        self.push(argument);
        Ok(())
    }

    pub(crate) fn xor_add(
        &mut self,
        group: Vec<Rc<dyn Argument>>,
    ) -> Result<(), SpecificationError> {
        for argument in &group {
            argument.force_required();
        }

        self.xor.add(group.clone());

        for argument in group {
            self.add(argument)?;
        }

        Ok(())
    }

    pub(crate) fn reset(&mut self) {
        for argument in &self.arguments {
            argument.reset();
        }

        self.program_name.clear();
    }

    pub(crate) fn consume(
        &mut self,
        tokens: Vec<String>,
        ignore_unmatched: bool,
    ) -> Result<Action, ParseError> {
        let mut tokens = tokens.into_iter();
        self.program_name = tokens.next().unwrap_or_default();
        let mut session = Session::new(self.delimiter);
        let mut cursor = Cursor::new(tokens.map(Token::new).collect());
        let mut required_count = 0;

        while let Some(text) = cursor.current().map(|token| token.text().to_string()) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Offering token '{text}'.");
            }
            let mut claimed = false;

            for argument in &self.arguments {
                let matched = match argument.process(&mut cursor, &session)? {
                    Some(matched) => matched,
                    None => continue,
                };

                #[cfg(feature = "tracing_debug")]
                {
                    debug!(
                        "Token '{text}' matched by '{}' (whole: {}).",
                        argument.id(),
                        matched.claimed()
                    );
                }

                match matched.visit() {
                    Visit::Continue => {}
                    Visit::IgnoreRest => {
                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!("Ignoring the rest of the labeled arguments.");
                        }
                        session.begin_ignoring();
                    }
                    Visit::Usage => return Ok(Action::PrintUsage),
                    Visit::Version => return Ok(Action::PrintVersion),
                    Visit::Exit(code) => return Ok(Action::Exit(code)),
                }

                required_count += self.xor.check(argument.as_ref())?;

                if matched.claimed() {
                    claimed = true;
                    break;
                }
            }

            let exhausted = cursor.current().map_or(false, Token::is_exhausted);

            if !claimed && !exhausted && !session.ignoring() && !ignore_unmatched {
                return Err(ParseError::Unmatched { token: text });
            }

            cursor.advance();
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Accounted for {required_count} of {} required arguments.",
                self.num_required
            );
        }

        if required_count < self.num_required {
            let names = self
                .arguments
                .iter()
                .filter(|argument| argument.is_required() && !argument.is_set())
                .map(|argument| argument.name().to_string())
                .collect();
            return Err(ParseError::MissingRequired { names });
        }

        if required_count > self.num_required {
            return Err(ParseError::TooManyArguments);
        }

        Ok(Action::Complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{
        AsArgument, MultiSwitchArg, MultiValueArg, Parameter, PositionalArg, PositionalMultiArg,
        SwitchArg, ValueArg,
    };
    use crate::constant::*;
    use crate::test::assert_contains;
    use rstest::rstest;

    fn command() -> Command {
        let mut command = Command::new("abc".to_string(), "1.0".to_string(), ' ', true);
        command.push(
            SwitchArg::builtin(FLAG_START, IGNORE_NAME, IGNORE_DESCRIPTION, Visit::IgnoreRest)
                .as_argument(),
        );
        command
    }

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn consume_empty() {
        // Setup
        let mut command = command();

        // Execute
        let action = command.consume(Vec::default(), false).unwrap();

        // Verify
        assert_eq!(action, Action::Complete);
        assert_eq!(command.program_name(), "");
    }

    #[test]
    fn consume_program_name() {
        let mut command = command();
        let action = command.consume(tokens(&["prog"]), false).unwrap();
        assert_eq!(action, Action::Complete);
        assert_eq!(command.program_name(), "prog");

        command.reset();
        assert_eq!(command.program_name(), "");
    }

    #[rstest]
    #[case(vec!["prog", "--num", "42"], 42)]
    #[case(vec!["prog", "-n", "42"], 42)]
    #[case(vec!["prog", "-n", " 42 "], 42)]
    fn consume_value(#[case] args: Vec<&str>, #[case] expected: u32) {
        // Setup
        let mut command = command();
        let num = ValueArg::new(Parameter::labeled("n", "num").required(), 0u32, "integer")
            .unwrap();
        command.add(num.as_argument()).unwrap();

        // Execute
        let action = command.consume(tokens(&args), false).unwrap();

        // Verify
        assert_eq!(action, Action::Complete);
        assert_eq!(num.value(), expected);
        assert!(num.is_set());
    }

    #[test]
    fn consume_missing_required() {
        let mut command = command();
        let num = ValueArg::new(Parameter::labeled("n", "num").required(), 0u32, "integer")
            .unwrap();
        let other = ValueArg::new(Parameter::labeled("o", "other").required(), 0u32, "integer")
            .unwrap();
        command.add(num.as_argument()).unwrap();
        command.add(other.as_argument()).unwrap();

        let error = command.consume(tokens(&["prog"]), false).unwrap_err();

        assert_eq!(
            error,
            ParseError::MissingRequired {
                names: vec!["other".to_string(), "num".to_string()]
            }
        );
        assert_contains!(error.to_string(), "Required arguments missing: other, num");
    }

    #[test]
    fn consume_unmatched() {
        let mut command = command();
        let error = command
            .consume(tokens(&["prog", "--what"]), false)
            .unwrap_err();
        assert_eq!(
            error,
            ParseError::Unmatched {
                token: "--what".to_string()
            }
        );
        assert_eq!(error.argument(), Some("--what"));
    }

    #[test]
    fn consume_ignore_unmatched() {
        let mut command = command();
        let action = command
            .consume(tokens(&["prog", "--what", "x"]), true)
            .unwrap();
        assert_eq!(action, Action::Complete);
    }

    #[test]
    fn consume_combined_switches() {
        // Setup
        let mut command = command();
        let a = SwitchArg::new(Parameter::labeled("a", "aa"), false).unwrap();
        let b = SwitchArg::new(Parameter::labeled("b", "bb"), false).unwrap();
        let c = SwitchArg::new(Parameter::labeled("c", "cc"), false).unwrap();
        command.add(a.as_argument()).unwrap();
        command.add(b.as_argument()).unwrap();
        command.add(c.as_argument()).unwrap();

        // Execute
        let action = command.consume(tokens(&["prog", "-ab"]), false).unwrap();

        // Verify
        assert_eq!(action, Action::Complete);
        assert!(a.value());
        assert!(b.value());
        assert!(!c.value());
    }

    #[test]
    fn consume_combined_switches_unknown() {
        let mut command = command();
        let a = SwitchArg::new(Parameter::labeled("a", "aa"), false).unwrap();
        command.add(a.as_argument()).unwrap();

        let error = command.consume(tokens(&["prog", "-az"]), false).unwrap_err();
        assert_eq!(
            error,
            ParseError::Unmatched {
                token: "-az".to_string()
            }
        );
    }

    #[test]
    fn consume_combined_multi_switch() {
        let mut command = command();
        let verbose = MultiSwitchArg::new(Parameter::labeled("v", "verbose"), 0).unwrap();
        let a = SwitchArg::new(Parameter::labeled("a", "aa"), false).unwrap();
        command.add(verbose.as_argument()).unwrap();
        command.add(a.as_argument()).unwrap();

        let action = command
            .consume(tokens(&["prog", "-vav", "-v", "--verbose"]), false)
            .unwrap();

        assert_eq!(action, Action::Complete);
        assert_eq!(verbose.count(), 4);
        assert!(a.value());
    }

    #[test]
    fn consume_xor() {
        // Setup
        let mut command = command();
        let a = SwitchArg::new(Parameter::labeled("a", "aa"), false).unwrap();
        let b = ValueArg::new(Parameter::labeled("b", "bb"), 0u32, "integer").unwrap();
        command
            .xor_add(vec![a.as_argument(), b.as_argument()])
            .unwrap();

        // Execute
        let action = command.consume(tokens(&["prog", "-a"]), false).unwrap();

        // Verify
        assert_eq!(action, Action::Complete);
        assert!(a.is_set());
        assert!(!b.is_set());
        assert!(b.as_argument().is_xor_set());
    }

    #[test]
    fn consume_xor_neither() {
        let mut command = command();
        let a = SwitchArg::new(Parameter::labeled("a", "aa"), false).unwrap();
        let b = ValueArg::new(Parameter::labeled("b", "bb"), 0u32, "integer").unwrap();
        command
            .xor_add(vec![a.as_argument(), b.as_argument()])
            .unwrap();

        let error = command.consume(tokens(&["prog"]), false).unwrap_err();
        assert_eq!(
            error,
            ParseError::MissingRequired {
                names: vec!["bb".to_string(), "aa".to_string()]
            }
        );
    }

    #[test]
    fn consume_xor_names_excluded() {
        // Setup
        let mut command = command();
        let a = SwitchArg::new(Parameter::labeled("a", "aa"), false).unwrap();
        let b = ValueArg::new(Parameter::labeled("b", "bb"), 0u32, "integer").unwrap();
        let c = SwitchArg::new(Parameter::labeled("c", "cc").required(), false).unwrap();
        command
            .xor_add(vec![a.as_argument(), b.as_argument()])
            .unwrap();
        command.add(c.as_argument()).unwrap();

        // Execute
        let error = command.consume(tokens(&["prog", "-a"]), false).unwrap_err();

        // Verify
        assert!(b.as_argument().is_xor_set());
        assert_eq!(
            error,
            ParseError::MissingRequired {
                names: vec!["cc".to_string(), "bb".to_string()]
            }
        );
        assert_eq!(error.to_string(), "Required arguments missing: cc, bb");
    }

    #[test]
    fn consume_xor_both() {
        let mut command = command();
        let a = SwitchArg::new(Parameter::labeled("a", "aa"), false).unwrap();
        let b = ValueArg::new(Parameter::labeled("b", "bb"), 0u32, "integer").unwrap();
        command
            .xor_add(vec![a.as_argument(), b.as_argument()])
            .unwrap();

        let error = command
            .consume(tokens(&["prog", "-a", "-b", "1"]), false)
            .unwrap_err();
        assert_eq!(
            error,
            ParseError::MutuallyExclusive {
                argument: "-b (--bb)".to_string()
            }
        );
    }

    #[test]
    fn consume_xor_combined() {
        let mut command = command();
        let a = SwitchArg::new(Parameter::labeled("a", "aa"), false).unwrap();
        let b = SwitchArg::new(Parameter::labeled("b", "bb"), false).unwrap();
        let c = SwitchArg::new(Parameter::labeled("c", "cc"), false).unwrap();
        command
            .xor_add(vec![a.as_argument(), b.as_argument()])
            .unwrap();
        command.add(c.as_argument()).unwrap();

        let action = command.consume(tokens(&["prog", "-ca"]), false).unwrap();
        assert_eq!(action, Action::Complete);
        assert!(a.value());
        assert!(c.value());
    }

    #[rstest]
    #[case(vec!["prog", "-m", "1"], vec![1], true)]
    #[case(vec!["prog", "-m", "1", "-m", "2"], vec![1, 2], false)]
    #[case(vec!["prog", "-m", "1", "--multi", "2", "-m", "3"], vec![1, 2, 3], false)]
    fn consume_multi_value(
        #[case] args: Vec<&str>,
        #[case] expected: Vec<u32>,
        #[case] still_required: bool,
    ) {
        // Setup
        let mut command = command();
        let multi =
            MultiValueArg::<u32>::new(Parameter::labeled("m", "multi").required(), "integer")
                .unwrap();
        command.add(multi.as_argument()).unwrap();

        // Execute
        let action = command.consume(tokens(&args), false).unwrap();

        // Verify
        assert_eq!(action, Action::Complete);
        assert_eq!(multi.values(), expected);
        assert_eq!(multi.as_argument().is_required(), still_required);
    }

    #[test]
    fn consume_ignore_rest() {
        // Setup
        let mut command = command();
        let a = SwitchArg::new(Parameter::labeled("a", "aa"), false).unwrap();
        let rest = PositionalMultiArg::<String>::new(Parameter::positional("rest"), "string")
            .unwrap();
        command.add(a.as_argument()).unwrap();
        command.add(rest.as_argument()).unwrap();

        // Execute
        let action = command
            .consume(tokens(&["prog", "x", "--", "-a", "y"]), false)
            .unwrap();

        // Verify
        assert_eq!(action, Action::Complete);
        assert!(!a.value());
        assert_eq!(rest.values(), vec!["x", "-a", "y"]);
    }

    #[test]
    fn consume_ignore_rest_unmatched() {
        let mut command = command();
        let a = SwitchArg::new(Parameter::labeled("a", "aa"), false).unwrap();
        command.add(a.as_argument()).unwrap();

        let action = command
            .consume(tokens(&["prog", "--", "-a", "anything"]), false)
            .unwrap();
        assert_eq!(action, Action::Complete);
        assert!(!a.value());
    }

    #[test]
    fn consume_positional_order() {
        let mut command = command();
        let first = PositionalArg::new(Parameter::positional("first").required(), 0u32, "integer")
            .unwrap();
        let second =
            PositionalArg::new(Parameter::positional("second").required(), 0u32, "integer")
                .unwrap();
        let v = SwitchArg::new(Parameter::labeled("v", "verbose"), false).unwrap();
        command.add(first.as_argument()).unwrap();
        command.add(second.as_argument()).unwrap();
        command.add(v.as_argument()).unwrap();

        let action = command
            .consume(tokens(&["prog", "1", "-v", "2"]), false)
            .unwrap();

        assert_eq!(action, Action::Complete);
        assert_eq!(first.value(), 1);
        assert_eq!(second.value(), 2);
        assert!(v.value());
    }

    #[rstest]
    #[case(Visit::Usage, Action::PrintUsage)]
    #[case(Visit::Version, Action::PrintVersion)]
    #[case(Visit::Exit(7), Action::Exit(7))]
    fn consume_visit(#[case] visit: Visit, #[case] expected: Action) {
        let mut command = command();
        let a = SwitchArg::new(Parameter::labeled("a", "aa").visitor(move || visit), false)
            .unwrap();
        let b = SwitchArg::new(Parameter::labeled("b", "bb"), false).unwrap();
        command.add(a.as_argument()).unwrap();
        command.add(b.as_argument()).unwrap();

        let action = command
            .consume(tokens(&["prog", "-a", "-b"]), false)
            .unwrap();

        assert_eq!(action, expected);
        assert!(a.value());
        assert!(!b.value());
    }

    #[test]
    fn consume_required_multi_switch() {
        let mut command = command();
        let verbose = MultiSwitchArg::new(Parameter::labeled("v", "verbose").required(), 0)
            .unwrap();
        command.add(verbose.as_argument()).unwrap();

        let action = command
            .consume(tokens(&["prog", "-v", "-v", "-v"]), false)
            .unwrap();
        assert_eq!(action, Action::Complete);
        assert_eq!(verbose.count(), 3);
    }

    #[test]
    fn consume_too_many() {
        let mut command = command();
        let a = SwitchArg::new(Parameter::labeled("a", "aa").required(), false).unwrap();
        let b = SwitchArg::new(Parameter::labeled("b", "bb").required(), false).unwrap();
        command.push(a.as_argument());
        // The group outnumbers the registered members.
        command.xor.add(vec![a.as_argument(), b.as_argument()]);

        let error = command.consume(tokens(&["prog", "-a"]), false).unwrap_err();
        assert_eq!(error, ParseError::TooManyArguments);
        assert_eq!(error.argument(), None);
    }

    #[test]
    fn add_duplicate() {
        let mut command = command();
        let a = SwitchArg::new(Parameter::labeled("a", "aa"), false).unwrap();
        let b = SwitchArg::new(Parameter::labeled("a", "bb"), false).unwrap();
        let c = SwitchArg::new(Parameter::labeled("c", "aa"), false).unwrap();
        command.add(a.as_argument()).unwrap();

        assert_matches!(
            command.add(b.as_argument()),
            Err(SpecificationError::Duplicate(id)) if id == "-a (--bb)"
        );
        assert_matches!(
            command.add(c.as_argument()),
            Err(SpecificationError::Duplicate(_))
        );
        assert_matches!(
            command.add(a.as_argument()),
            Err(SpecificationError::Duplicate(_))
        );
    }

    #[test]
    fn add_reserved() {
        let mut command = command();
        let ignore = SwitchArg::new(Parameter::labeled("", IGNORE_NAME), false).unwrap();
        assert_matches!(
            command.add(ignore.as_argument()),
            Err(SpecificationError::Duplicate(_))
        );
    }

    #[test]
    fn add_order() {
        let mut command = command();
        let a = SwitchArg::new(Parameter::labeled("a", "aa"), false).unwrap();
        let p = PositionalArg::new(Parameter::positional("p").required(), 0u32, "integer")
            .unwrap();
        let b = SwitchArg::new(Parameter::labeled("b", "bb").required(), false).unwrap();
        command.add(a.as_argument()).unwrap();
        command.add(p.as_argument()).unwrap();
        command.add(b.as_argument()).unwrap();

        let names: Vec<&str> = command.arguments().map(|a| a.name()).collect();
        assert_eq!(names, vec!["bb", "aa", IGNORE_NAME, "p"]);
        assert_eq!(command.num_required, 2);
    }

    #[test]
    fn add_positional_after_optional() {
        let mut command = command();
        let a = PositionalArg::new(Parameter::positional("a"), 0u32, "integer").unwrap();
        let b = PositionalArg::new(Parameter::positional("b"), 0u32, "integer").unwrap();
        command.add(a.as_argument()).unwrap();
        assert_matches!(
            command.add(b.as_argument()),
            Err(SpecificationError::PositionalAfterOptional(_))
        );
    }

    #[rstest]
    #[case(Parameter::labeled("n", "num"), "[-n <integer>]", "-n <integer>,  --num <integer>")]
    #[case(Parameter::labeled("n", "num").required(), "-n <integer>", "-n <integer>,  --num <integer>")]
    #[case(Parameter::labeled("", "num"), "[--num <integer>]", "--num <integer>")]
    fn value_ids(#[case] parameter: Parameter, #[case] short: &str, #[case] long: &str) {
        let command = command();
        let num = ValueArg::new(parameter, 0u32, "integer").unwrap();
        assert_eq!(command.short_id(num.as_argument().as_ref()), short);
        assert_eq!(command.long_id(num.as_argument().as_ref()), long);
    }

    #[test]
    fn other_ids() {
        let command = command();
        let switch = SwitchArg::new(Parameter::labeled("s", "switch"), false).unwrap();
        let multi = MultiValueArg::<u32>::new(Parameter::labeled("m", "multi"), "integer").unwrap();
        let positional =
            PositionalMultiArg::<u32>::new(Parameter::positional("p"), "integer").unwrap();

        assert_eq!(command.short_id(switch.as_argument().as_ref()), "[-s]");
        assert_eq!(command.long_id(switch.as_argument().as_ref()), "-s,  --switch");
        assert_eq!(
            command.short_id(multi.as_argument().as_ref()),
            "[-m <integer>] ..."
        );
        assert_eq!(
            command.long_id(multi.as_argument().as_ref()),
            "-m <integer>,  --multi <integer>  (accepted multiple times)"
        );
        assert_eq!(
            command.short_id(positional.as_argument().as_ref()),
            "<integer> ..."
        );
        assert_eq!(
            command.long_id(positional.as_argument().as_ref()),
            "<integer>  (accepted multiple times)"
        );
    }
}
