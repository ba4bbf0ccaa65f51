use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::api::value::Extractor;
use crate::api::{Argument, AsArgument, Header, Parameter};
use crate::parser::{Cursor, Matched, ParseError, Session, SpecificationError};
use crate::prelude::{Constraint, Extract};

/// The text of the token under `cursor`, when it may be taken positionally.
fn positional_token(header: &Header, cursor: &Cursor, session: &Session) -> Option<String> {
    if header.is_ignored(session) {
        return None;
    }

    match cursor.current() {
        Some(token) if !token.has_claims() => Some(token.text().to_string()),
        _ => None,
    }
}

struct PositionalInner<T> {
    header: Header,
    extractor: Extractor<T>,
    default: T,
    value: RefCell<T>,
}

/// An argument matched by its position amongst the unlabeled tokens.
///
/// Positional arguments match in the order they are added, after every labeled argument has been given the chance to match.
///
/// ### Example
/// ```
/// # use clasp_core as clasp;
/// use clasp::{CommandLine, Parameter, PositionalArg};
///
/// let mut cl = CommandLine::new("abc");
/// let source = PositionalArg::new(Parameter::positional("source").required(), String::default(), "path").unwrap();
/// let target = PositionalArg::new(Parameter::positional("target").required(), String::default(), "path").unwrap();
/// cl.add(&source).unwrap();
/// cl.add(&target).unwrap();
///
/// cl.try_parse(["program", "a.txt", "b.txt"]).unwrap();
/// assert_eq!(source.value(), "a.txt");
/// assert_eq!(target.value(), "b.txt");
/// ```
pub struct PositionalArg<T>(Rc<PositionalInner<T>>);

impl<T> Clone for PositionalArg<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: Extract + Clone + 'static> PositionalArg<T> {
    /// Create a positional argument, holding `default` until it matches.
    pub fn new(
        parameter: Parameter,
        default: T,
        type_description: impl Into<String>,
    ) -> Result<Self, SpecificationError> {
        let header = parameter.into_positional()?;
        Ok(Self::from_parts(
            header,
            Extractor::described(type_description),
            default,
        ))
    }

    /// Create a positional argument whose value must satisfy `constraint`.
    pub fn constrained(
        parameter: Parameter,
        default: T,
        constraint: impl Constraint<T> + 'static,
    ) -> Result<Self, SpecificationError> {
        let header = parameter.into_positional()?;
        let extractor = Extractor::constrained(constraint, &header)?;
        Ok(Self::from_parts(header, extractor, default))
    }

    fn from_parts(header: Header, extractor: Extractor<T>, default: T) -> Self {
        Self(Rc::new(PositionalInner {
            header,
            extractor,
            value: RefCell::new(default.clone()),
            default,
        }))
    }

    /// The current value.
    pub fn value(&self) -> T {
        self.0.value.borrow().clone()
    }

    /// Whether the argument matched in the most recent parse.
    pub fn is_set(&self) -> bool {
        self.0.header.is_set()
    }

    /// Restore the default value.
    pub fn reset(&self) {
        self.0.reset();
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for PositionalArg<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PositionalArg")
            .field(&self.0.header)
            .field(&self.0.value.borrow())
            .finish()
    }
}

impl<T: Extract + Clone + 'static> AsArgument for PositionalArg<T> {
    fn as_argument(&self) -> Rc<dyn Argument> {
        self.0.clone()
    }
}

impl<T: Extract + Clone> Argument for PositionalInner<T> {
    fn header(&self) -> &Header {
        &self.header
    }

    fn process(
        &self,
        cursor: &mut Cursor,
        session: &Session,
    ) -> Result<Option<Matched>, ParseError> {
        if self.header.already_set() {
            return Ok(None);
        }

        match positional_token(&self.header, cursor, session) {
            Some(token) => {
                let value = self.extractor.extract(&token, &self.header)?;
                self.value.replace(value);
                Ok(Some(Matched::whole(self.header.matched())))
            }
            None => Ok(None),
        }
    }

    fn reset(&self) {
        self.header.reset();
        self.value.replace(self.default.clone());
    }

    fn type_description(&self) -> Option<String> {
        Some(self.extractor.type_description().to_string())
    }

    fn is_positional(&self) -> bool {
        true
    }
}

struct PositionalMultiInner<T> {
    header: Header,
    extractor: Extractor<T>,
    values: RefCell<Vec<T>>,
    matches: Cell<usize>,
    allow_more: Cell<bool>,
}

/// A positional argument which collects every remaining unlabeled token.
///
/// ### Example
/// ```
/// # use clasp_core as clasp;
/// use clasp::{CommandLine, Parameter, PositionalMultiArg};
///
/// let mut cl = CommandLine::new("abc");
/// let numbers = PositionalMultiArg::<i64>::new(Parameter::positional("numbers"), "integer").unwrap();
/// cl.add(&numbers).unwrap();
///
/// cl.try_parse(["program", "1", "2", "3"]).unwrap();
/// assert_eq!(numbers.values(), vec![1, 2, 3]);
/// ```
pub struct PositionalMultiArg<T>(Rc<PositionalMultiInner<T>>);

impl<T> Clone for PositionalMultiArg<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: Extract + Clone + 'static> PositionalMultiArg<T> {
    /// Create a multiple value positional argument.
    pub fn new(
        parameter: Parameter,
        type_description: impl Into<String>,
    ) -> Result<Self, SpecificationError> {
        let header = parameter.into_positional()?;
        Ok(Self::from_parts(
            header,
            Extractor::described(type_description),
        ))
    }

    /// Create a multiple value positional argument whose values must each satisfy `constraint`.
    pub fn constrained(
        parameter: Parameter,
        constraint: impl Constraint<T> + 'static,
    ) -> Result<Self, SpecificationError> {
        let header = parameter.into_positional()?;
        let extractor = Extractor::constrained(constraint, &header)?;
        Ok(Self::from_parts(header, extractor))
    }

    fn from_parts(header: Header, extractor: Extractor<T>) -> Self {
        Self(Rc::new(PositionalMultiInner {
            header,
            extractor,
            values: RefCell::new(Vec::default()),
            matches: Cell::new(0),
            allow_more: Cell::new(false),
        }))
    }

    /// The values collected, in command line order.
    pub fn values(&self) -> Vec<T> {
        self.0.values.borrow().clone()
    }

    /// Whether the argument matched in the most recent parse.
    pub fn is_set(&self) -> bool {
        self.0.header.is_set()
    }

    /// Discard the collected values.
    pub fn reset(&self) {
        self.0.reset();
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for PositionalMultiArg<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PositionalMultiArg")
            .field(&self.0.header)
            .field(&self.0.values.borrow())
            .finish()
    }
}

impl<T: Extract + Clone + 'static> AsArgument for PositionalMultiArg<T> {
    fn as_argument(&self) -> Rc<dyn Argument> {
        self.0.clone()
    }
}

impl<T: Extract + Clone> Argument for PositionalMultiInner<T> {
    fn header(&self) -> &Header {
        &self.header
    }

    fn process(
        &self,
        cursor: &mut Cursor,
        session: &Session,
    ) -> Result<Option<Matched>, ParseError> {
        match positional_token(&self.header, cursor, session) {
            Some(token) => {
                self.header.check_excluded()?;
                let value = self.extractor.extract(&token, &self.header)?;
                self.values.borrow_mut().push(value);
                self.matches.set(self.matches.get() + 1);
                Ok(Some(Matched::whole(self.header.matched())))
            }
            None => Ok(None),
        }
    }

    fn reset(&self) {
        self.header.reset();
        self.values.borrow_mut().clear();
        self.matches.set(0);
        self.allow_more.set(false);
    }

    fn type_description(&self) -> Option<String> {
        Some(self.extractor.type_description().to_string())
    }

    fn is_positional(&self) -> bool {
        true
    }

    fn accepts_multiple_values(&self) -> bool {
        true
    }

    fn is_required(&self) -> bool {
        self.header.is_required() && self.matches.get() <= 1
    }

    fn allow_more(&self) -> bool {
        self.allow_more.replace(true)
    }
}
