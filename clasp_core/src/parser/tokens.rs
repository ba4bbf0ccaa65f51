use crate::constant::*;
use crate::model::Visit;

/// State shared by every argument during a single parse.
#[doc(hidden)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    delimiter: char,
    ignore_rest: bool,
}

impl Session {
    pub(crate) fn new(delimiter: char) -> Self {
        Self {
            delimiter,
            ignore_rest: false,
        }
    }

    /// The character separating a name from its inline value (ex: `--name=value`).
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Whether the ignore-rest switch has been encountered.
    pub fn ignoring(&self) -> bool {
        self.ignore_rest
    }

    pub(crate) fn begin_ignoring(&mut self) {
        self.ignore_rest = true;
    }

    /// Split `text` into its name and inline value at the first delimiter.
    ///
    /// The delimiter must not be at the front of the name (ex: `-=` stays intact).
    pub fn trim_flag<'t>(&self, text: &'t str) -> (&'t str, Option<&'t str>) {
        match text.char_indices().find(|(_, c)| *c == self.delimiter) {
            Some((stop, c)) if stop > 1 => (&text[..stop], Some(&text[stop + c.len_utf8()..])),
            _ => (text, None),
        }
    }
}

/// A single command line token along with which of its characters have been claimed.
///
/// Characters are claimed by switches matching inside a combined token (ex: `-abc`).
#[doc(hidden)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    claimed: Vec<bool>,
}

impl Token {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let claimed = vec![false; text.chars().count()];
        Self { text, claimed }
    }

    /// The original text of the token.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether any character (after the leading one) has been claimed.
    pub fn has_claims(&self) -> bool {
        self.claimed.iter().skip(1).any(|c| *c)
    }

    /// Whether the token may be combined switches (ex: `-abc`), as opposed to a long name or a delimited value.
    pub fn is_combined(&self, delimiter: char) -> bool {
        self.text.starts_with(FLAG_START)
            && !self.text.starts_with(NAME_START)
            && !self.text.contains(delimiter)
    }

    /// Claim the first unclaimed occurrence of `flag` past the leading character.
    pub fn claim(&mut self, flag: char) -> bool {
        let position = self
            .text
            .chars()
            .enumerate()
            .skip(1)
            .find(|(i, c)| *c == flag && !self.claimed[*i])
            .map(|(i, _)| i);

        match position {
            Some(i) => {
                self.claimed[i] = true;
                true
            }
            None => false,
        }
    }

    /// Whether every character past the leading one is claimed.
    pub fn is_fully_claimed(&self) -> bool {
        self.claimed.iter().skip(1).all(|c| *c)
    }

    /// Whether this is a combined switch token that has been entirely claimed.
    pub fn is_exhausted(&self) -> bool {
        self.text.starts_with(FLAG_START_CHAR) && self.claimed.len() > 1 && self.is_fully_claimed()
    }
}

/// A forward-only cursor over the tokens being parsed.
#[doc(hidden)]
#[derive(Debug)]
pub struct Cursor {
    tokens: Vec<Token>,
    index: usize,
}

impl Cursor {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, index: 0 }
    }

    /// The token under the cursor.
    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    /// The token under the cursor, for claiming characters.
    pub fn current_mut(&mut self) -> Option<&mut Token> {
        self.tokens.get_mut(self.index)
    }

    /// Move onto the next token, returning its text (ex: to consume it as a value).
    pub fn take_next(&mut self) -> Option<&str> {
        if self.index + 1 < self.tokens.len() {
            self.index += 1;
            Some(self.tokens[self.index].text())
        } else {
            None
        }
    }

    /// Peek at the token after the cursor.
    pub fn peek_next(&self) -> Option<&Token> {
        self.tokens.get(self.index + 1)
    }

    pub(crate) fn advance(&mut self) {
        self.index += 1;
    }
}

/// The result of an argument matching (part of) the current token.
#[doc(hidden)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matched {
    claimed: bool,
    visit: Visit,
}

impl Matched {
    /// The argument claimed the whole token.
    pub fn whole(visit: Visit) -> Self {
        Self {
            claimed: true,
            visit,
        }
    }

    /// The argument claimed a part of the token; other arguments may claim the rest.
    pub fn partial(visit: Visit) -> Self {
        Self {
            claimed: false,
            visit,
        }
    }

    pub(crate) fn claimed(&self) -> bool {
        self.claimed
    }

    pub(crate) fn visit(&self) -> Visit {
        self.visit
    }
}
