mod capture;
mod constraint;
mod core;
mod field;
mod parameter;
mod positional;
mod value;

pub use self::core::*;
pub use capture::*;
pub use constraint::*;
pub use field::*;
pub use parameter::*;
pub use positional::*;
pub use value::*;
