//! `argonaut` is a small flag parser for Rust command line programs.
//!
//! It covers the common ground of Cli flag parsing without adopting a larger framework:
//! * Flags of three kinds (string, integer, boolean), each with an optional short (`-n`) and long (`--name`) alias.
//! * Values are written straight into variables that the program owns.
//! * Every token that isn't a flag, nor a flag's value, is kept as a positional argument.
//! * `-h`/`--help` prints usage text.
//!
//! `argonaut` never reads the process arguments itself, never exits the process, and never prints errors.
//! The program hands it the tokens and decides what to do with the outcome.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/basic.rs")]
//! ```
//!
//! ```console
//! $ basic -h
//! Usage of basic:
//!   -n, --name string
//!         The name of the user (default "default")
//!   -a, --age int
//!         The age of the user (default 0)
//!   -v, --verbose
//!         Enable verbose output (default false)
//!
//! $ basic -n Jane -a=25 -v push
//! Name: Jane
//! Age: 25
//! Verbose: true
//! Positional arguments: ["push"]
//!
//! $ basic --age=abc
//! Error: invalid value for int flag -a/--age: abc
//!
//! $ basic --bogus
//! Error: unknown flag: bogus
//! ```
//!
//! # Cli Semantics
//! The tokens are scanned once, left to right.
//!
//! * `--NAME=VALUE` and `-N=VALUE` attach a value to a flag.
//! Only the first `=` separates; `--key=a=b` gives `key` the value `a=b`.
//! * `--NAME VALUE` and `-N VALUE` take the following token as the value, for string and integer flags only.
//! A following token that starts with `-` is never taken as a value.
//! * A bare boolean flag (`--verbose`, `-v`) means `true`.
//! Boolean flags otherwise only accept `=true` or `=false`.
//! * A bare string or integer flag, without a value to take, is an invalid value error.
//! * `-` and `--` on their own, and every token without a leading `-`, are positional arguments.
//! * `-h` or `--help` anywhere in the input prints usage and returns [`ParseError::HelpRequested`], before anything else is looked at.
//! * An alias is matched against both the short and the long alias of each flag.
//! When a flag is given several times, the last occurrence wins.
//! When several flags were registered with the same alias, the latest registration wins (the others keep their defaults).
//! * There is no grouping of short flags (`-abc`), no repeated/multi-valued flags and no sub-commands.
//!
//! # Errors
//! [`FlagParser::parse`] returns exactly one of: success, [`ParseError::HelpRequested`], [`ParseError::InvalidValue`] or [`ParseError::UnknownFlag`].
//! When several flags are unknown, the one encountered first in the input is reported.
//! Values written before an error was found are not rolled back.
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events while parsing and rendering usage.
pub use argonaut_builder::*;
