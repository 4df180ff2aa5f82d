use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::{InvalidCapture, Slot};
use crate::model::{DefaultValue, Kind};
use crate::parser::tokens::Pending;

/// The outcome of a parse that did not complete normally.
///
/// [`ParseError::HelpRequested`] is a control signal rather than a failure: usage has already been written to the parser's sink.
/// The parser never prints errors, nor exits the process; that is up to the caller (see [`ParseError::exit_code`]).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// `-h` or `--help` appeared in the input.
    #[error("help requested")]
    HelpRequested,
    /// A flag's raw value could not be converted to the flag's kind.
    #[error("invalid value for {kind} flag {flag}: {token}")]
    InvalidValue {
        /// The flag's aliases, as written on the Cli (ex: `-a/--age`).
        flag: String,
        /// The kind of the flag.
        kind: Kind,
        /// The offending raw value.
        token: String,
    },
    /// An alias that matches no registered flag.
    #[error("unknown flag: {0}")]
    UnknownFlag(String),
}

impl ParseError {
    /// Whether this is the help signal, rather than an actual error.
    pub fn is_help_requested(&self) -> bool {
        matches!(self, ParseError::HelpRequested)
    }

    /// The conventional process exit code for this outcome: `0` for help, `1` otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            ParseError::HelpRequested => 0,
            ParseError::InvalidValue { .. } | ParseError::UnknownFlag(_) => 1,
        }
    }
}

/// One registered flag.
pub(crate) struct Flag<'a> {
    short: Option<String>,
    long: Option<String>,
    default: DefaultValue,
    description: String,
    slot: Slot<'a>,
}

impl<'a> std::fmt::Debug for Flag<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Flag")
            .field("short", &self.short)
            .field("long", &self.long)
            .field("default", &self.default)
            .field("slot", &self.slot)
            .finish()
    }
}

impl<'a> Flag<'a> {
    /// An empty alias means the flag has no such form.
    pub(crate) fn new(
        short: &str,
        long: &str,
        default: DefaultValue,
        description: impl Into<String>,
        slot: Slot<'a>,
    ) -> Self {
        debug_assert_eq!(default.kind(), slot.kind());
        Self {
            short: non_empty(short),
            long: non_empty(long),
            default,
            description: description.into(),
            slot,
        }
    }

    pub(crate) fn short(&self) -> Option<&str> {
        self.short.as_deref()
    }

    pub(crate) fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    pub(crate) fn kind(&self) -> Kind {
        self.slot.kind()
    }

    pub(crate) fn default(&self) -> &DefaultValue {
        &self.default
    }

    pub(crate) fn description(&self) -> &str {
        &self.description
    }

    fn matches(&self, alias: &str) -> bool {
        self.short() == Some(alias) || self.long() == Some(alias)
    }
}

fn non_empty(alias: &str) -> Option<String> {
    if alias.is_empty() {
        None
    } else {
        Some(alias.to_string())
    }
}

/// Join the dash-prefixed forms of a flag (ex: `-n, --name` or `-n/--name`).
pub(crate) fn flag_names(short: Option<&str>, long: Option<&str>, separator: &str) -> String {
    match (short, long) {
        (Some(s), Some(l)) => format!("-{s}{separator}--{l}"),
        (Some(s), None) => format!("-{s}"),
        (None, Some(l)) => format!("--{l}"),
        (None, None) => String::default(),
    }
}

/// The ordered flag descriptors of a parser.
///
/// Registration order is display order; resolution walks it backwards so the latest of several same-alias flags wins.
#[derive(Debug, Default)]
pub(crate) struct Registry<'a> {
    flags: Vec<Flag<'a>>,
}

impl<'a> Registry<'a> {
    pub(crate) fn register(&mut self, flag: Flag<'a>) {
        #[cfg(feature = "tracing_debug")]
        {
            if flag.short.is_none() && flag.long.is_none() {
                debug!("Registered a flag without any alias; it cannot be set from the Cli.");
            }
        }

        self.flags.push(flag);
    }

    pub(crate) fn flags(&self) -> &[Flag<'a>] {
        &self.flags
    }

    /// Whether a bare occurrence of `alias` consumes the next token, as decided by the latest flag registered with it.
    pub(crate) fn takes_value(&self, alias: &str) -> bool {
        self.flags
            .iter()
            .rev()
            .find(|flag| flag.matches(alias))
            .map_or(false, |flag| flag.kind().takes_value())
    }

    /// Apply the pending occurrences onto the flag slots.
    ///
    /// Flags are visited in reverse registration order, each claiming (and removing) the occurrences of its short then long alias.
    /// The first conversion failure aborts; slots written before it keep their new values.
    /// Any occurrence left unclaimed is reported as unknown, first-encountered first.
    pub(crate) fn resolve(&mut self, mut pending: Pending) -> Result<(), ParseError> {
        for flag in self.flags.iter_mut().rev() {
            let Flag {
                short, long, slot, ..
            } = flag;

            for alias in [short.as_deref(), long.as_deref()].into_iter().flatten() {
                if let Some(raw) = pending.shift_remove(alias) {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Resolving '{alias}' with {raw:?}.");
                    }

                    slot.capture(&raw).map_err(
                        |InvalidCapture { token, kind }| ParseError::InvalidValue {
                            flag: flag_names(short.as_deref(), long.as_deref(), "/"),
                            kind,
                            token,
                        },
                    )?;
                }
            }
        }

        match pending.into_iter().next() {
            Some((alias, _)) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Unclaimed flag '{alias}'.");
                }

                Err(ParseError::UnknownFlag(alias))
            }
            None => Ok(()),
        }
    }
}
