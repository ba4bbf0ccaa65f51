//! `clasp` is a declaration driven command line parser for Rust.
//!
//! Programs declare their arguments up front, register them with a [`CommandLine`], and read the parsed values back from the argument handles once parsing completes.
//! `clasp` prioritizes the following design concerns:
//! * *Typed values*:
//! The user should not call any `&str -> T` conversion functions directly.
//! Values are read via [`prelude::Extract`], which is implemented for every [`std::str::FromStr`] primitive as well as the string-like types.
//! * *Declared constraints*:
//! The user should not validate the domain of a value by hand.
//! Instead, attach a [`prelude::Constraint`] (such as [`Values`]) to the argument.
//! * *Required argument accounting*:
//! Required arguments, mutually exclusive groups, and multiple value arguments are counted by the parser, so that a missing argument is always reported by name.
//! * *Familiar syntax*:
//! Labeled arguments use `-f`/`--name` syntax, short switches may be combined (`-abc`), and positional arguments are matched in declaration order.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/summer.rs")]
//! ```
//!
//! ```console
//! $ summer -h
//!
//! USAGE:
//!
//!    summer [-v] [--version] [-h] [--] <u32> ...
//!
//! Where:
//!
//!    -v,  --verbose
//!      Print each item.
//! <truncated>
//!
//! $ summer 1 2 3
//! Sum: 6
//!
//! $ summer 1 blah
//! PARSE ERROR: Argument: (--item)
//!              Couldn't read argument value from string 'blah'.
//!
//! For complete USAGE and HELP type:
//!    summer --help
//! ```
//!
//! # Arguments
//! Each argument is declared from a [`Parameter`], which carries its flag, name, description, and whether it is required.
//! [`Parameter::labeled`] declares an argument matched by `-f` or `--name`, while [`Parameter::positional`] declares an argument matched by position.
//!
//! * [`SwitchArg`]: a labeled boolean, toggled from its default when matched (ex: `--verbose`).
//! * [`MultiSwitchArg`]: a labeled counter, incremented on each match (ex: `-vvv`).
//! * [`ValueArg`]: a labeled argument holding a single value (ex: `--num 42`).
//! * [`MultiValueArg`]: a labeled argument collecting a value on each match (ex: `-i 1 -i 2`).
//! * [`PositionalArg`]: a positional argument holding a single value.
//! * [`PositionalMultiArg`]: a positional argument collecting every remaining unmatched token.
//!
//! The handles are cheap to clone and share their state with the `CommandLine`.
//! Read the values (ex: [`ValueArg::value`]) after parsing.
//!
//! ### Mutually exclusive groups
//! [`CommandLine::xor_add`] registers a group of which exactly one argument must appear.
//! Matching one member excludes the others; matching a second member fails the parse.
//!
//! ```no_run
#![doc = include_str!("../demos/archive.rs")]
//! ```
//!
//! # Command Line Semantics
//! `clasp` walks the tokens (after the program name) from left to right, offering each one to the arguments in their registration order.
//! Labeled arguments are ordered ahead of positional arguments.
//!
//! * `--name` matches the argument's name, and `-f` matches its flag.
//! * A labeled value is taken from the next token (ex: `--num 42`).
//! With a delimiter other than space, the value must be attached instead (ex: `--num=42`).
//! * Short switches may be combined into one token (ex: `-abc`).
//! * Positional arguments match the tokens no labeled argument claims, in declaration order.
//! No positional argument may follow an optional positional argument.
//! * `--` (or `--ignore_rest`) stops matching labeled arguments for the rest of the command line.
//! * `-h/--help` and `--version` display the usage and version, ending the parse with `Status::Exit(0)`.
//!
//! After the tokens are exhausted, every required argument must have been set.
//!
//! # Errors
//! Mistakes in the declarations are reported as a [`SpecificationError`] when the argument is created or registered.
//! Mistakes on the command line are reported as a [`ParseError`].
//! By default, [`CommandLine::parse`] displays a parse error via the [`Output`] and exits the process; [`CommandLine::try_parse`] always returns it.
//!
//! # Features
//! * `unit_test`: For features that help with unit testing (see `util::channel_output`).
//! * `tracing_debug`: Emit `tracing` debug events while parsing.
pub use clasp_core::*;
