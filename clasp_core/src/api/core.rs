use crate::api::{AsArgument, SwitchArg};
use crate::constant::*;
use crate::model::{Status, Visit};
use crate::parser::{Action, Command, ConsoleOutput, Output, ParseError, SpecificationError};

/// Construction time settings for a [`CommandLine`].
///
/// ### Example
/// ```
/// # use clasp_core as clasp;
/// use clasp::CommandLine;
///
/// let cl = CommandLine::builder("My program.")
///     .delimiter('=')
///     .version("1.0.0")
///     .build();
/// assert_eq!(cl.command().delimiter(), '=');
/// assert_eq!(cl.command().version(), "1.0.0");
/// ```
#[derive(Debug)]
pub struct CommandLineBuilder {
    message: String,
    delimiter: char,
    version: String,
    help_and_version: bool,
}

impl CommandLineBuilder {
    /// The character separating a labeled argument from its value (default `' '`).
    ///
    /// With any delimiter other than space, values must be attached (ex: `--num=1`).
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// The version displayed by `--version` (default `none`).
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Whether to declare the built-in `-h/--help` and `--version` switches (default `true`).
    pub fn help_and_version(mut self, help_and_version: bool) -> Self {
        self.help_and_version = help_and_version;
        self
    }

    /// Build the command line, declaring the built-in switches.
    pub fn build(self) -> CommandLine {
        let CommandLineBuilder {
            message,
            delimiter,
            version,
            help_and_version,
        } = self;
        let mut command = Command::new(message, version, delimiter, help_and_version);

        let ignore = SwitchArg::builtin(FLAG_START, IGNORE_NAME, IGNORE_DESCRIPTION, Visit::IgnoreRest);
        command.push(ignore.as_argument());

        if help_and_version {
            let help = SwitchArg::builtin(HELP_SHORT, HELP_NAME, HELP_DESCRIPTION, Visit::Usage);
            let version = SwitchArg::builtin("", VERSION_NAME, VERSION_DESCRIPTION, Visit::Version);
            command.push(help.as_argument());
            command.push(version.as_argument());
        }

        CommandLine {
            command,
            output: Box::new(ConsoleOutput::default()),
            handle_errors: true,
            ignore_unmatched: false,
        }
    }
}

/// The command line parser.
///
/// Arguments are declared via [`CommandLine::add`] and [`CommandLine::xor_add`], then matched against the tokens via [`CommandLine::parse`] (or [`CommandLine::try_parse`]).
/// The argument handles share their state with the command line, and read the parsed values after parsing.
///
/// ### Example
/// ```
/// # use clasp_core as clasp;
/// use clasp::{CommandLine, Parameter, Status, SwitchArg, ValueArg};
///
/// let mut cl = CommandLine::new("Sums numbers.");
/// let num: ValueArg<u32> = ValueArg::new(Parameter::labeled("n", "num").required(), 0, "integer").unwrap();
/// let verbose = SwitchArg::new(Parameter::labeled("v", "verbose"), false).unwrap();
/// cl.add(&num).unwrap();
/// cl.add(&verbose).unwrap();
///
/// assert_eq!(cl.try_parse(["program", "--num", "42", "-v"]), Ok(Status::Complete));
/// assert_eq!(num.value(), 42);
/// assert!(verbose.value());
/// ```
pub struct CommandLine {
    command: Command,
    output: Box<dyn Output>,
    handle_errors: bool,
    ignore_unmatched: bool,
}

impl std::fmt::Debug for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandLine")
            .field("command", &self.command)
            .field("handle_errors", &self.handle_errors)
            .field("ignore_unmatched", &self.ignore_unmatched)
            .finish()
    }
}

impl CommandLine {
    /// Create a command line with the default settings.
    /// The `message` describes the program in the usage.
    pub fn new(message: impl Into<String>) -> Self {
        Self::builder(message).build()
    }

    /// Configure a command line.
    pub fn builder(message: impl Into<String>) -> CommandLineBuilder {
        CommandLineBuilder {
            message: message.into(),
            delimiter: DEFAULT_DELIMITER,
            version: DEFAULT_VERSION.to_string(),
            help_and_version: true,
        }
    }

    /// Register an argument.
    ///
    /// Fails when the argument clashes with an existing argument (same flag or name),
    /// or is a positional argument following an optional positional argument.
    pub fn add(&mut self, argument: &dyn AsArgument) -> Result<(), SpecificationError> {
        self.command.add(argument.as_argument())
    }

    /// Register mutually exclusive arguments.
    ///
    /// Exactly one of the arguments must appear on the command line (each is made required).
    ///
    /// ### Example
    /// ```
    /// # use clasp_core as clasp;
    /// use clasp::{CommandLine, Parameter, ParseError, SwitchArg};
    ///
    /// let mut cl = CommandLine::new("abc");
    /// let read = SwitchArg::new(Parameter::labeled("r", "read"), false).unwrap();
    /// let write = SwitchArg::new(Parameter::labeled("w", "write"), false).unwrap();
    /// cl.xor_add(&[&read, &write]).unwrap();
    ///
    /// assert!(matches!(cl.try_parse(["program", "-r", "-w"]), Err(ParseError::MutuallyExclusive { .. })));
    /// ```
    pub fn xor_add(&mut self, arguments: &[&dyn AsArgument]) -> Result<(), SpecificationError> {
        let group = arguments
            .iter()
            .map(|argument| argument.as_argument())
            .collect();
        self.command.xor_add(group)
    }

    /// Parse the `args`, the first of which is the program name.
    ///
    /// Errors are always returned, regardless of [`CommandLine::set_exception_handling`].
    /// When a built-in switch displays the usage or version, the parse stops with `Status::Exit(0)`.
    pub fn try_parse<I, S>(&mut self, args: I) -> Result<Status, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens = args.into_iter().map(Into::into).collect();

        match self.command.consume(tokens, self.ignore_unmatched)? {
            Action::Complete => Ok(Status::Complete),
            Action::PrintUsage => {
                self.output.usage(&self.command);
                Ok(Status::Exit(0))
            }
            Action::PrintVersion => {
                self.output.version(&self.command);
                Ok(Status::Exit(0))
            }
            Action::Exit(code) => Ok(Status::Exit(code)),
        }
    }

    /// Parse the `args`, the first of which is the program name.
    ///
    /// When exception handling is enabled (the default), a parse error is displayed via the [`Output`] and the
    /// process exits with its failure status (via [`std::process::exit`]); likewise for any `Status::Exit`.
    /// Otherwise, this behaves as [`CommandLine::try_parse`].
    pub fn parse<I, S>(&mut self, args: I) -> Result<Status, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let result = self.try_parse(args);

        if !self.handle_errors {
            return result;
        }

        match result {
            Ok(Status::Complete) => Ok(Status::Complete),
            Ok(Status::Exit(code)) => std::process::exit(code),
            Err(error) => {
                let code = self.output.failure(&self.command, &error);
                std::process::exit(code);
            }
        }
    }

    /// Parse the command line of this process ([`std::env::args`]) via [`CommandLine::parse`].
    pub fn parse_env(&mut self) -> Result<Status, ParseError> {
        self.parse(std::env::args())
    }

    /// Reset every argument, so that the command line may parse again.
    pub fn reset(&mut self) {
        self.command.reset();
    }

    /// Whether [`CommandLine::parse`] handles errors by displaying them and exiting (default `true`).
    pub fn set_exception_handling(&mut self, handle_errors: bool) {
        self.handle_errors = handle_errors;
    }

    /// Whether errors are handled by [`CommandLine::parse`].
    pub fn exception_handling(&self) -> bool {
        self.handle_errors
    }

    /// Whether tokens which match no argument are skipped, rather than failing the parse (default `false`).
    pub fn ignore_unmatched(&mut self, ignore_unmatched: bool) {
        self.ignore_unmatched = ignore_unmatched;
    }

    /// Replace how the usage, version, and failures are displayed.
    pub fn set_output(&mut self, output: Box<dyn Output>) {
        self.output = output;
    }

    /// The declared command line, for rendering.
    pub fn command(&self) -> &Command {
        &self.command
    }
}
