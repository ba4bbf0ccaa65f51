use std::ffi::OsString;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

use crate::prelude::Extract;

/// Failure to convert a token into a typed value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidValue {
    /// The token holds no value of the target type.
    #[error("Couldn't read argument value from string '{token}'.")]
    Unreadable {
        /// The offending token.
        token: String,
    },
    /// The token holds more than one value of the target type.
    #[error("More than one valid value parsed from string '{token}'.")]
    Ambiguous {
        /// The offending token.
        token: String,
    },
}

/// Extract a value-like `T` from `token`.
///
/// The token is split on whitespace, and must contain precisely one word which converts via [`FromStr`].
///
/// ### Example
/// ```
/// # use clasp_core as clasp;
/// use clasp::{extract_value_like, InvalidValue};
///
/// assert_eq!(extract_value_like::<u32>(" 7 "), Ok(7));
/// assert_matches::assert_matches!(extract_value_like::<u32>("7 8"), Err(InvalidValue::Ambiguous { .. }));
/// assert_matches::assert_matches!(extract_value_like::<u32>("seven"), Err(InvalidValue::Unreadable { .. }));
/// ```
pub fn extract_value_like<T: FromStr>(token: &str) -> Result<T, InvalidValue> {
    let mut value: Option<T> = None;
    let mut read = 0;

    for word in token.split_whitespace() {
        let parsed = T::from_str(word).map_err(|_| InvalidValue::Unreadable {
            token: token.to_string(),
        })?;
        read += 1;
        value.get_or_insert(parsed);
    }

    match value {
        Some(_) if read > 1 => Err(InvalidValue::Ambiguous {
            token: token.to_string(),
        }),
        Some(value) => Ok(value),
        None => Err(InvalidValue::Unreadable {
            token: token.to_string(),
        }),
    }
}

/// Extract a string-like `T` from `token`, verbatim.
pub fn extract_string_like<T: From<String>>(token: &str) -> Result<T, InvalidValue> {
    Ok(T::from(token.to_string()))
}

macro_rules! value_like {
    ($($t:ty),*) => {
        $(
            impl Extract for $t {
                fn extract(token: &str) -> Result<Self, InvalidValue> {
                    extract_value_like(token)
                }
            }
        )*
    };
}

macro_rules! string_like {
    ($($t:ty),*) => {
        $(
            impl Extract for $t {
                fn extract(token: &str) -> Result<Self, InvalidValue> {
                    extract_string_like(token)
                }
            }
        )*
    };
}

value_like!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char);
string_like!(String, PathBuf, OsString);
