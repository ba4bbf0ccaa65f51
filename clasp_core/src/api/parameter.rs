use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::constant::*;
use crate::model::{Visit, Visitor};
use crate::parser::{Cursor, Matched, ParseError, Session, SpecificationError};

/// The declaration of an argument, from which each argument variant is constructed.
///
/// ### Example
/// ```
/// # use clasp_core as clasp;
/// use clasp::{Parameter, ValueArg};
///
/// let num: ValueArg<u32> = ValueArg::new(
///     Parameter::labeled("n", "num").help("The number of things.").required(),
///     0,
///     "integer",
/// )
/// .unwrap();
/// assert_eq!(num.value(), 0);
/// ```
pub struct Parameter {
    flag: String,
    name: String,
    description: String,
    required: bool,
    ignoreable: Option<bool>,
    visitor: Option<Visitor>,
}

impl std::fmt::Debug for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parameter")
            .field("flag", &self.flag)
            .field("name", &self.name)
            .field("required", &self.required)
            .finish()
    }
}

impl Parameter {
    /// Declare a labeled argument, matched by `-flag` or `--name`.
    /// An empty `flag` declares an argument with only the long form.
    pub fn labeled(flag: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            flag: flag.into(),
            name: name.into(),
            description: String::default(),
            required: false,
            ignoreable: None,
            visitor: None,
        }
    }

    /// Declare a positional argument, matched by its position amongst the tokens.
    pub fn positional(name: impl Into<String>) -> Self {
        Self::labeled("", name)
    }

    /// Document the argument.
    /// If repeated, only the final description applies.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Require that the argument appears on the command line.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Whether the argument stops matching once the ignore-rest flag (`--`) has been seen.
    /// Defaults to `true` for labeled arguments and `false` for positional arguments.
    pub fn ignoreable(mut self, ignoreable: bool) -> Self {
        self.ignoreable.replace(ignoreable);
        self
    }

    /// Invoke `visitor` each time the argument matches.
    ///
    /// ### Example
    /// ```
    /// # use clasp_core as clasp;
    /// use clasp::{CommandLine, Parameter, Status, SwitchArg, Visit};
    ///
    /// let mut cl = CommandLine::new("abc");
    /// let quit = SwitchArg::new(Parameter::labeled("q", "quit").visitor(|| Visit::Exit(3)), false).unwrap();
    /// cl.add(&quit).unwrap();
    ///
    /// assert_eq!(cl.try_parse(["program", "-q"]), Ok(Status::Exit(3)));
    /// ```
    pub fn visitor(mut self, visitor: impl FnMut() -> Visit + 'static) -> Self {
        self.visitor.replace(Box::new(visitor));
        self
    }

    pub(crate) fn into_labeled(self, value_required: bool) -> Result<Header, SpecificationError> {
        let ignoreable = self.ignoreable.unwrap_or(true);
        self.into_header(value_required, ignoreable)
    }

    pub(crate) fn into_positional(self) -> Result<Header, SpecificationError> {
        if !self.flag.is_empty() {
            return Err(SpecificationError::PositionalFlag(format!(
                "{}{} ({}{})",
                FLAG_START, self.flag, NAME_START, self.name
            )));
        }

        let ignoreable = self.ignoreable.unwrap_or(false);
        self.into_header(true, ignoreable)
    }

    fn into_header(
        self,
        value_required: bool,
        ignoreable: bool,
    ) -> Result<Header, SpecificationError> {
        let Parameter {
            flag,
            name,
            description,
            required,
            ignoreable: _,
            visitor,
        } = self;
        let header = Header {
            flag,
            name,
            description,
            required: Cell::new(required),
            value_required,
            ignoreable,
            mark: Cell::new(Mark::Unset),
            visitor: RefCell::new(visitor),
        };
        header.validate()?;
        Ok(header)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mark {
    Unset,
    Matched,
    Excluded,
}

/// The state common to every argument variant.
#[doc(hidden)]
pub struct Header {
    flag: String,
    name: String,
    description: String,
    required: Cell<bool>,
    value_required: bool,
    ignoreable: bool,
    mark: Cell<Mark>,
    visitor: RefCell<Option<Visitor>>,
}

impl std::fmt::Debug for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Header")
            .field("flag", &self.flag)
            .field("name", &self.name)
            .field("required", &self.required.get())
            .field("mark", &self.mark.get())
            .finish()
    }
}

impl Header {
    // The built-in switches are declared without validation (the ignore-rest flag is reserved).
    pub(crate) fn builtin(flag: &str, name: &str, description: &str, visit: Visit) -> Self {
        Self {
            flag: flag.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            required: Cell::new(false),
            value_required: false,
            ignoreable: true,
            mark: Cell::new(Mark::Unset),
            visitor: RefCell::new(Some(Box::new(move || visit))),
        }
    }

    fn validate(&self) -> Result<(), SpecificationError> {
        if self.flag.chars().count() > 1 {
            return Err(SpecificationError::FlagTooLong(self.id()));
        }

        if self.name != IGNORE_NAME
            && (self.flag == FLAG_START || self.flag == NAME_START || self.flag == " ")
        {
            return Err(SpecificationError::ReservedFlag(self.id()));
        }

        if self.name.is_empty() {
            return Err(SpecificationError::EmptyName(self.id()));
        }

        if self.name.starts_with(FLAG_START) || self.name.contains(' ') {
            return Err(SpecificationError::ReservedName(self.id()));
        }

        Ok(())
    }

    pub(crate) fn flag(&self) -> &str {
        &self.flag
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn description(&self) -> &str {
        &self.description
    }

    pub(crate) fn is_required(&self) -> bool {
        self.required.get()
    }

    pub(crate) fn is_value_required(&self) -> bool {
        self.value_required
    }

    pub(crate) fn is_ignoreable(&self) -> bool {
        self.ignoreable
    }

    /// Matched directly, as opposed to via a mutually exclusive argument.
    pub(crate) fn is_set(&self) -> bool {
        self.mark.get() == Mark::Matched
    }

    pub(crate) fn is_xor_set(&self) -> bool {
        self.mark.get() == Mark::Excluded
    }

    pub(crate) fn already_set(&self) -> bool {
        self.mark.get() != Mark::Unset
    }

    /// The short form of the argument, when it has one.
    pub(crate) fn short(&self) -> Option<char> {
        self.flag.chars().next()
    }

    pub(crate) fn id(&self) -> String {
        if self.flag.is_empty() {
            format!("({}{})", NAME_START, self.name)
        } else {
            format!("{}{} ({}{})", FLAG_START, self.flag, NAME_START, self.name)
        }
    }

    /// Whether `text` is precisely this argument's `-flag` or `--name`.
    pub(crate) fn matches(&self, text: &str) -> bool {
        match text.strip_prefix(NAME_START) {
            Some(name) if name == self.name => return true,
            _ => {}
        }

        match text.strip_prefix(FLAG_START) {
            Some(flag) => !self.flag.is_empty() && flag == self.flag,
            None => false,
        }
    }

    /// Whether the ignore-rest flag has silenced this argument.
    pub(crate) fn is_ignored(&self, session: &Session) -> bool {
        self.ignoreable && session.ignoring()
    }

    /// Reject a repeated or an excluded match.
    pub(crate) fn check_settable(&self) -> Result<(), ParseError> {
        self.check_excluded()?;

        if self.already_set() {
            return Err(ParseError::AlreadySet { argument: self.id() });
        }

        Ok(())
    }

    pub(crate) fn check_excluded(&self) -> Result<(), ParseError> {
        if self.is_xor_set() {
            return Err(ParseError::MutuallyExclusive { argument: self.id() });
        }

        Ok(())
    }

    /// Record the match and run the visitor.
    pub(crate) fn matched(&self) -> Visit {
        if self.mark.get() == Mark::Unset {
            self.mark.set(Mark::Matched);
        }

        match self.visitor.borrow_mut().as_mut() {
            Some(visitor) => visitor(),
            None => Visit::Continue,
        }
    }

    pub(crate) fn exclude(&self) {
        self.mark.set(Mark::Excluded);
    }

    pub(crate) fn force_required(&self) {
        self.required.set(true);
    }

    pub(crate) fn reset(&self) {
        self.mark.set(Mark::Unset);
    }
}

/// Behaviour common to every argument, as seen by the parse engine and by renderers.
pub trait Argument {
    #[doc(hidden)]
    fn header(&self) -> &Header;

    /// Offer the token under `cursor` to this argument.
    ///
    /// Returns `None` when the argument does not match the token.
    /// An argument which consumes a value token moves the cursor onto it.
    #[doc(hidden)]
    fn process(&self, cursor: &mut Cursor, session: &Session)
        -> Result<Option<Matched>, ParseError>;

    /// Restore the argument to its state before parsing.
    fn reset(&self);

    /// Description of the argument's value (ex: `integer`), or `None` for switches.
    fn type_description(&self) -> Option<String>;

    /// Whether the argument is matched by position rather than by label.
    fn is_positional(&self) -> bool {
        false
    }

    /// Whether the argument may be matched more than once.
    fn accepts_multiple_values(&self) -> bool {
        false
    }

    /// Whether the argument must (still) appear on the command line.
    fn is_required(&self) -> bool {
        self.header().is_required()
    }

    /// Whether, having already been counted towards the required arguments, further matches are permitted.
    #[doc(hidden)]
    fn allow_more(&self) -> bool {
        false
    }

    /// The short form of the argument (ex: `n` for `-n`), possibly empty.
    fn flag(&self) -> &str {
        self.header().flag()
    }

    /// The long form of the argument (ex: `num` for `--num`).
    fn name(&self) -> &str {
        self.header().name()
    }

    /// The argument's documentation.
    fn description(&self) -> &str {
        self.header().description()
    }

    /// Whether the argument takes a value.
    fn is_value_required(&self) -> bool {
        self.header().is_value_required()
    }

    /// Whether the argument was matched directly on the command line.
    fn is_set(&self) -> bool {
        self.header().is_set()
    }

    /// Whether the argument was satisfied by a mutually exclusive argument.
    fn is_xor_set(&self) -> bool {
        self.header().is_xor_set()
    }

    /// Whether the argument stops matching after the ignore-rest flag.
    fn is_ignoreable(&self) -> bool {
        self.header().is_ignoreable()
    }

    /// Identifier used in diagnostics (ex: `-n (--num)`).
    fn id(&self) -> String {
        self.header().id()
    }

    /// Whether `other` may not be registered alongside this argument.
    fn conflicts_with(&self, other: &dyn Argument) -> bool {
        if self.is_positional() {
            let same_description = other.is_positional()
                && !self.description().is_empty()
                && self.description() == other.description();
            self.name() == other.name() || same_description
        } else {
            (!self.flag().is_empty() && self.flag() == other.flag()) || self.name() == other.name()
        }
    }

    #[doc(hidden)]
    fn force_required(&self) {
        self.header().force_required();
    }

    #[doc(hidden)]
    fn exclude(&self) {
        self.header().exclude();
    }
}

/// Conversion of an argument handle into the shared argument the engine holds.
pub trait AsArgument {
    /// The argument, sharing its state with this handle.
    fn as_argument(&self) -> Rc<dyn Argument>;
}

impl std::fmt::Debug for dyn Argument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Argument{{{}}}", self.id())
    }
}

/// Whether `a` and `b` are the very same argument.
pub(crate) fn same_argument(a: &dyn Argument, b: &dyn Argument) -> bool {
    (a as *const dyn Argument).cast::<()>() == (b as *const dyn Argument).cast::<()>()
}
