mod base;
mod interface;
mod tokens;
mod tracker;
mod xor;

pub use base::*;
pub use interface::*;
pub use tokens::*;
pub(crate) use tracker::*;
pub use xor::*;
