//! Core of `argonaut`.
//! See [documentation root](https://docs.rs/argonaut/latest/argonaut/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod model;
mod parser;

pub use api::*;
pub use model::*;
pub use parser::ParseError;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
