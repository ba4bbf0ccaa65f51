use std::cell::Cell;
use std::rc::Rc;

use crate::api::{Argument, AsArgument, Header, Parameter};
use crate::model::Visit;
use crate::parser::{Cursor, Matched, ParseError, Session, SpecificationError};

struct SwitchInner {
    header: Header,
    default: bool,
    value: Cell<bool>,
}

/// A labeled argument which takes no value, toggling a boolean.
///
/// Switches may be combined behind a single `-` (ex: `-ab` for both `-a` and `-b`).
///
/// ### Example
/// ```
/// # use clasp_core as clasp;
/// use clasp::{CommandLine, Parameter, SwitchArg};
///
/// let mut cl = CommandLine::new("abc");
/// let all = SwitchArg::new(Parameter::labeled("a", "all"), false).unwrap();
/// let bare = SwitchArg::new(Parameter::labeled("b", "bare"), false).unwrap();
/// cl.add(&all).unwrap();
/// cl.add(&bare).unwrap();
///
/// cl.try_parse(["program", "-ab"]).unwrap();
/// assert!(all.value());
/// assert!(bare.value());
/// ```
#[derive(Clone)]
pub struct SwitchArg(Rc<SwitchInner>);

impl SwitchArg {
    /// Create a switch, whose value is `default` until it matches (at which point it becomes `!default`).
    pub fn new(parameter: Parameter, default: bool) -> Result<Self, SpecificationError> {
        Ok(Self(Rc::new(SwitchInner {
            header: parameter.into_labeled(false)?,
            default,
            value: Cell::new(default),
        })))
    }

    pub(crate) fn builtin(flag: &str, name: &str, description: &str, visit: Visit) -> Self {
        Self(Rc::new(SwitchInner {
            header: Header::builtin(flag, name, description, visit),
            default: false,
            value: Cell::new(false),
        }))
    }

    /// The current value.
    pub fn value(&self) -> bool {
        self.0.value.get()
    }

    /// Whether the switch matched in the most recent parse.
    pub fn is_set(&self) -> bool {
        self.0.header.is_set()
    }

    /// Restore the default value.
    pub fn reset(&self) {
        self.0.reset();
    }
}

impl std::fmt::Debug for SwitchArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SwitchArg").field(&self.0.header).finish()
    }
}

impl AsArgument for SwitchArg {
    fn as_argument(&self) -> Rc<dyn Argument> {
        self.0.clone()
    }
}

/// Claim an occurrence of `header`'s flag within a combined switch token (ex: `-abc`).
fn claim_combined(header: &Header, cursor: &mut Cursor, session: &Session) -> Option<bool> {
    let flag = header.short()?;
    let token = cursor.current_mut()?;

    if flag == '-' || !token.is_combined(session.delimiter()) {
        return None;
    }

    if token.claim(flag) {
        Some(token.is_fully_claimed())
    } else {
        None
    }
}

fn matches_whole(header: &Header, cursor: &Cursor) -> bool {
    match cursor.current() {
        Some(token) => !token.has_claims() && header.matches(token.text()),
        None => false,
    }
}

impl SwitchInner {
    fn toggle(&self) -> Result<Visit, ParseError> {
        self.header.check_settable()?;
        self.value.set(!self.value.get());
        Ok(self.header.matched())
    }
}

impl Argument for SwitchInner {
    fn header(&self) -> &Header {
        &self.header
    }

    fn process(
        &self,
        cursor: &mut Cursor,
        session: &Session,
    ) -> Result<Option<Matched>, ParseError> {
        if self.header.is_ignored(session) {
            return Ok(None);
        }

        if matches_whole(&self.header, cursor) {
            return Ok(Some(Matched::whole(self.toggle()?)));
        }

        match claim_combined(&self.header, cursor, session) {
            Some(last) => {
                // The same switch may not appear twice amongst the combined switches.
                if claim_combined(&self.header, cursor, session).is_some() {
                    return Err(ParseError::AlreadySet {
                        argument: self.header.id(),
                    });
                }

                let visit = self.toggle()?;

                if last {
                    Ok(Some(Matched::whole(visit)))
                } else {
                    Ok(Some(Matched::partial(visit)))
                }
            }
            None => Ok(None),
        }
    }

    fn reset(&self) {
        self.header.reset();
        self.value.set(self.default);
    }

    fn type_description(&self) -> Option<String> {
        None
    }
}

struct MultiSwitchInner {
    header: Header,
    initial: u32,
    count: Cell<u32>,
    matches: Cell<usize>,
    allow_more: Cell<bool>,
}

/// A labeled argument which takes no value, counting its occurrences (ex: `-vvv`).
///
/// ### Example
/// ```
/// # use clasp_core as clasp;
/// use clasp::{CommandLine, MultiSwitchArg, Parameter};
///
/// let mut cl = CommandLine::new("abc");
/// let verbose = MultiSwitchArg::new(Parameter::labeled("v", "verbose"), 0).unwrap();
/// cl.add(&verbose).unwrap();
///
/// cl.try_parse(["program", "-vv", "--verbose"]).unwrap();
/// assert_eq!(verbose.count(), 3);
/// ```
#[derive(Clone)]
pub struct MultiSwitchArg(Rc<MultiSwitchInner>);

impl MultiSwitchArg {
    /// Create a counting switch, starting from `initial`.
    pub fn new(parameter: Parameter, initial: u32) -> Result<Self, SpecificationError> {
        Ok(Self(Rc::new(MultiSwitchInner {
            header: parameter.into_labeled(false)?,
            initial,
            count: Cell::new(initial),
            matches: Cell::new(0),
            allow_more: Cell::new(false),
        })))
    }

    /// The current count.
    pub fn count(&self) -> u32 {
        self.0.count.get()
    }

    /// Whether the switch matched in the most recent parse.
    pub fn is_set(&self) -> bool {
        self.0.header.is_set()
    }

    /// Restore the initial count.
    pub fn reset(&self) {
        self.0.reset();
    }
}

impl std::fmt::Debug for MultiSwitchArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("MultiSwitchArg")
            .field(&self.0.header)
            .field(&self.0.count.get())
            .finish()
    }
}

impl AsArgument for MultiSwitchArg {
    fn as_argument(&self) -> Rc<dyn Argument> {
        self.0.clone()
    }
}

impl MultiSwitchInner {
    fn increment(&self, occurrences: u32) -> Result<Visit, ParseError> {
        self.header.check_excluded()?;
        self.count.set(self.count.get().saturating_add(occurrences));
        self.matches.set(self.matches.get() + 1);
        Ok(self.header.matched())
    }
}

impl Argument for MultiSwitchInner {
    fn header(&self) -> &Header {
        &self.header
    }

    fn process(
        &self,
        cursor: &mut Cursor,
        session: &Session,
    ) -> Result<Option<Matched>, ParseError> {
        if self.header.is_ignored(session) {
            return Ok(None);
        }

        if matches_whole(&self.header, cursor) {
            return Ok(Some(Matched::whole(self.increment(1)?)));
        }

        let mut occurrences = 0;
        let mut last = false;

        while let Some(fully_claimed) = claim_combined(&self.header, cursor, session) {
            occurrences += 1;
            last = fully_claimed;
        }

        if occurrences == 0 {
            return Ok(None);
        }

        let visit = self.increment(occurrences)?;

        if last {
            Ok(Some(Matched::whole(visit)))
        } else {
            Ok(Some(Matched::partial(visit)))
        }
    }

    fn reset(&self) {
        self.header.reset();
        self.count.set(self.initial);
        self.matches.set(0);
        self.allow_more.set(false);
    }

    fn type_description(&self) -> Option<String> {
        None
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
