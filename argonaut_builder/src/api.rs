mod capture;
mod core;
mod field;

pub use self::core::*;
pub(crate) use capture::*;
pub(crate) use field::*;
