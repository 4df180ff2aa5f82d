mod base;
mod interface;
mod printer;
mod tokens;

pub use base::ParseError;
pub(crate) use base::{Flag, Registry};
pub(crate) use interface::{UserInterface, WriterInterface};
pub(crate) use printer::Printer;
pub(crate) use tokens::{scan, Action};

#[cfg(test)]
pub(crate) use interface::util;
