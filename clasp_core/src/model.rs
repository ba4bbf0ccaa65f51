/// The outcome of an argument's visitor, reported back to the parse loop.
///
/// Visitors are invoked synchronously at the moment their argument matches.
/// Rather than unwinding, they describe what the parse loop should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Keep parsing.
    Continue,
    /// Skip every ignoreable argument for the remainder of this parse.
    IgnoreRest,
    /// Display the usage via the [`Output`](crate::Output) and stop with status `0`.
    Usage,
    /// Display the version via the [`Output`](crate::Output) and stop with status `0`.
    Version,
    /// Stop parsing, requesting termination with the given status.
    Exit(i32),
}

/// A side effect hook invoked when its argument matches.
pub type Visitor = Box<dyn FnMut() -> Visit>;

/// How a parse came to an end, when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every token was consumed and the command line is valid.
    Complete,
    /// A visitor (ex: `--help`) requested termination with the given status.
    Exit(i32),
}

impl Status {
    /// Whether parsing ran to completion.
    pub fn is_complete(&self) -> bool {
        matches!(self, Status::Complete)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
