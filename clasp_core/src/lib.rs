//! Core module for `clasp`.
//! See [documentation root](https://docs.rs/clasp/latest/clasp/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use model::*;
pub use parser::{
    Command, ConsoleOutput, Cursor, Matched, Output, ParseError, Session, SpecificationError,
    Token, XorHandler,
};

#[cfg(any(test, feature = "unit_test"))]
pub use parser::util;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
