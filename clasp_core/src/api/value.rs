use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::api::{Argument, AsArgument, Header, Parameter};
use crate::constant::*;
use crate::parser::{Cursor, Matched, ParseError, Session, SpecificationError};
use crate::prelude::{Constraint, Extract};

/// Converts tokens into `T`, enforcing the optional constraint.
pub(crate) struct Extractor<T> {
    type_description: String,
    constraint: Option<Box<dyn Constraint<T>>>,
}

impl<T: Extract> Extractor<T> {
    pub(crate) fn described(type_description: impl Into<String>) -> Self {
        Self {
            type_description: type_description.into(),
            constraint: None,
        }
    }

    pub(crate) fn constrained(
        constraint: impl Constraint<T> + 'static,
        header: &Header,
    ) -> Result<Self, SpecificationError> {
        let type_description = constraint.short_id();

        if type_description.is_empty() {
            return Err(SpecificationError::EmptyConstraint(header.id()));
        }

        Ok(Self {
            type_description,
            constraint: Some(Box::new(constraint)),
        })
    }

    pub(crate) fn type_description(&self) -> &str {
        &self.type_description
    }

    pub(crate) fn extract(&self, token: &str, header: &Header) -> Result<T, ParseError> {
        let value = T::extract(token).map_err(|source| ParseError::InvalidValue {
            argument: header.id(),
            source,
        })?;

        if let Some(constraint) = &self.constraint {
            if !constraint.check(&value) {
                return Err(ParseError::ConstraintViolation {
                    argument: header.id(),
                    value: token.to_string(),
                    constraint: constraint.description(),
                });
            }
        }

        Ok(value)
    }
}

/// Match the token under `cursor` against a labeled, value taking `header`, returning the value text.
///
/// The value is either delimited within the token (ex: `--num=1`), or (for the space delimiter) the next token.
fn take_labeled_value(
    header: &Header,
    cursor: &mut Cursor,
    session: &Session,
    single: bool,
) -> Result<Option<String>, ParseError> {
    if header.is_ignored(session) {
        return Ok(None);
    }

    let inline = match cursor.current() {
        Some(token) if !token.has_claims() => {
            let (label, value) = session.trim_flag(token.text());

            if !header.matches(label) {
                return Ok(None);
            }

            value.filter(|v| !v.is_empty()).map(str::to_string)
        }
        _ => return Ok(None),
    };

    if single {
        header.check_settable()?;
    } else {
        header.check_excluded()?;
    }

    match inline {
        Some(value) => Ok(Some(value)),
        None if session.delimiter() != DEFAULT_DELIMITER => Err(ParseError::MissingDelimiter {
            argument: header.id(),
        }),
        None => match cursor.take_next() {
            Some(value) => Ok(Some(value.to_string())),
            None => Err(ParseError::MissingValue {
                argument: header.id(),
            }),
        },
    }
}

struct ValueInner<T> {
    header: Header,
    extractor: Extractor<T>,
    default: T,
    value: RefCell<T>,
}

/// A labeled argument which takes a single value.
///
/// ### Example
/// ```
/// # use clasp_core as clasp;
/// use clasp::{CommandLine, Parameter, ValueArg};
///
/// let mut cl = CommandLine::new("abc");
/// let num: ValueArg<u32> = ValueArg::new(Parameter::labeled("n", "num"), 0, "integer").unwrap();
/// cl.add(&num).unwrap();
///
/// cl.try_parse(["program", "--num", "42"]).unwrap();
/// assert_eq!(num.value(), 42);
/// ```
pub struct ValueArg<T>(Rc<ValueInner<T>>);

impl<T> Clone for ValueArg<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: Extract + Clone + 'static> ValueArg<T> {
    /// Create a value argument, holding `default` until it matches.
    /// The `type_description` documents the value in the usage (ex: `integer`).
    pub fn new(
        parameter: Parameter,
        default: T,
        type_description: impl Into<String>,
    ) -> Result<Self, SpecificationError> {
        let header = parameter.into_labeled(true)?;
        Ok(Self::from_parts(
            header,
            Extractor::described(type_description),
            default,
        ))
    }

    /// Create a value argument whose values must satisfy `constraint`.
    /// The constraint's short id documents the value in the usage.
    pub fn constrained(
        parameter: Parameter,
        default: T,
        constraint: impl Constraint<T> + 'static,
    ) -> Result<Self, SpecificationError> {
        let header = parameter.into_labeled(true)?;
        let extractor = Extractor::constrained(constraint, &header)?;
        Ok(Self::from_parts(header, extractor, default))
    }

    fn from_parts(header: Header, extractor: Extractor<T>, default: T) -> Self {
        Self(Rc::new(ValueInner {
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

impl<T: std::fmt::Debug> std::fmt::Debug for ValueArg<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ValueArg")
            .field(&self.0.header)
            .field(&self.0.value.borrow())
            .finish()
    }
}

impl<T: Extract + Clone + 'static> AsArgument for ValueArg<T> {
    fn as_argument(&self) -> Rc<dyn Argument> {
        self.0.clone()
    }
}

impl<T: Extract + Clone> Argument for ValueInner<T> {
    fn header(&self) -> &Header {
        &self.header
    }

    fn process(
        &self,
        cursor: &mut Cursor,
        session: &Session,
    ) -> Result<Option<Matched>, ParseError> {
        match take_labeled_value(&self.header, cursor, session, true)? {
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
}

struct MultiValueInner<T> {
    header: Header,
    extractor: Extractor<T>,
    greedy: Cell<bool>,
    values: RefCell<Vec<T>>,
    matches: Cell<usize>,
    allow_more: Cell<bool>,
}

/// A labeled argument which may be matched many times, accumulating its values.
///
/// ### Example
/// ```
/// # use clasp_core as clasp;
/// use clasp::{CommandLine, MultiValueArg, Parameter};
///
/// let mut cl = CommandLine::new("abc");
/// let items: MultiValueArg<u32> = MultiValueArg::new(Parameter::labeled("i", "item"), "integer").unwrap();
/// cl.add(&items).unwrap();
///
/// cl.try_parse(["program", "-i", "1", "--item", "2", "-i", "3"]).unwrap();
/// assert_eq!(items.values(), vec![1, 2, 3]);
/// ```
pub struct MultiValueArg<T>(Rc<MultiValueInner<T>>);

impl<T> Clone for MultiValueArg<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: Extract + Clone + 'static> MultiValueArg<T> {
    /// Create a multiple value argument.
    /// The `type_description` documents the value in the usage (ex: `integer`).
    pub fn new(
        parameter: Parameter,
        type_description: impl Into<String>,
    ) -> Result<Self, SpecificationError> {
        let header = parameter.into_labeled(true)?;
        Ok(Self::from_parts(
            header,
            Extractor::described(type_description),
        ))
    }

    /// Create a multiple value argument whose values must each satisfy `constraint`.
    pub fn constrained(
        parameter: Parameter,
        constraint: impl Constraint<T> + 'static,
    ) -> Result<Self, SpecificationError> {
        let header = parameter.into_labeled(true)?;
        let extractor = Extractor::constrained(constraint, &header)?;
        Ok(Self::from_parts(header, extractor))
    }

    fn from_parts(header: Header, extractor: Extractor<T>) -> Self {
        Self(Rc::new(MultiValueInner {
            header,
            extractor,
            greedy: Cell::new(false),
            values: RefCell::new(Vec::default()),
            matches: Cell::new(0),
            allow_more: Cell::new(false),
        }))
    }

    /// After its first value, keep consuming the following tokens which do not begin with `-`.
    ///
    /// Requiredness counts matches rather than values.
    /// A required greedy argument still reports [`Argument::is_required`] after one match, even when that match stored several values.
    ///
    /// ### Example
    /// ```
    /// # use clasp_core as clasp;
    /// use clasp::{CommandLine, MultiValueArg, Parameter, SwitchArg};
    ///
    /// let mut cl = CommandLine::new("abc");
    /// let files = MultiValueArg::<String>::new(Parameter::labeled("f", "file"), "path")
    ///     .unwrap()
    ///     .greedy();
    /// let quiet = SwitchArg::new(Parameter::labeled("q", "quiet"), false).unwrap();
    /// cl.add(&files).unwrap();
    /// cl.add(&quiet).unwrap();
    ///
    /// cl.try_parse(["program", "-f", "a", "b", "-q"]).unwrap();
    /// assert_eq!(files.values(), vec!["a", "b"]);
    /// assert!(quiet.value());
    /// ```
    pub fn greedy(self) -> Self {
        self.0.greedy.set(true);
        self
    }

    /// The values accumulated, in the order they were matched.
    pub fn values(&self) -> Vec<T> {
        self.0.values.borrow().clone()
    }

    /// Whether the argument matched in the most recent parse.
    pub fn is_set(&self) -> bool {
        self.0.header.is_set()
    }

    /// Discard the accumulated values.
    pub fn reset(&self) {
        self.0.reset();
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for MultiValueArg<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("MultiValueArg")
            .field(&self.0.header)
            .field(&self.0.values.borrow())
            .finish()
    }
}

impl<T: Extract + Clone + 'static> AsArgument for MultiValueArg<T> {
    fn as_argument(&self) -> Rc<dyn Argument> {
        self.0.clone()
    }
}

impl<T: Extract + Clone> Argument for MultiValueInner<T> {
    fn header(&self) -> &Header {
        &self.header
    }

    fn process(
        &self,
        cursor: &mut Cursor,
        session: &Session,
    ) -> Result<Option<Matched>, ParseError> {
        let token = match take_labeled_value(&self.header, cursor, session, false)? {
            Some(token) => token,
            None => return Ok(None),
        };

        let value = self.extractor.extract(&token, &self.header)?;
        self.values.borrow_mut().push(value);

        if self.greedy.get() {
            while let Some(next) = cursor.peek_next() {
                if next.text().starts_with(FLAG_START) {
                    break;
                }

                let value = self.extractor.extract(next.text(), &self.header)?;
                self.values.borrow_mut().push(value);
                cursor.take_next();
            }
        }

        self.matches.set(self.matches.get() + 1);
        Ok(Some(Matched::whole(self.header.matched())))
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

    fn accepts_multiple_values(&self) -> bool {
        true
    }

    // Once matched twice, a required multiple value argument has been accounted for.
    fn is_required(&self) -> bool {
        self.header.is_required() && self.matches.get() <= 1
    }

    // Counted towards the required arguments on the first call only.
    fn allow_more(&self) -> bool {
        self.allow_more.replace(true)
    }
}
