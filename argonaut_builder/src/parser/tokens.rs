use indexmap::IndexMap;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::RawValue;
use crate::constant::*;

/// Flag occurrences keyed by alias (no dashes).
/// Keys stay in first-encountered order, while the value is that of the latest occurrence.
pub(crate) type Pending = IndexMap<String, RawValue>;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Action {
    Continue {
        pending: Pending,
        positionals: Vec<String>,
    },
    PrintHelp,
}

/// Scan the tokens once, left to right, splitting them into flag occurrences and positional arguments.
///
/// `takes_value` answers whether a bare flag with the given alias consumes the following token.
/// Nothing is converted here; conversion happens when the pending occurrences are resolved against the registry.
pub(crate) fn scan<S, F>(tokens: &[S], takes_value: F) -> Action
where
    S: AsRef<str>,
    F: Fn(&str) -> bool,
{
    // Help pre-empts everything else, wherever it shows up.
    if tokens.iter().any(|token| is_help(token.as_ref())) {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Help requested; skipping token classification.");
        }

        return Action::PrintHelp;
    }

    let mut pending = Pending::default();
    let mut positionals = Vec::default();
    let mut index = 0;

    while index < tokens.len() {
        let token = tokens[index].as_ref();
        index += 1;

        let body = match flag_body(token) {
            Some(body) => body,
            None => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Token '{token}' is positional.");
                }

                positionals.push(token.to_string());
                continue;
            }
        };

        let (alias, raw) = match body.split_once('=') {
            Some((alias, value)) => (alias, RawValue::Explicit(value.to_string())),
            None => match tokens.get(index).map(AsRef::as_ref) {
                Some(next) if !next.starts_with('-') && takes_value(body) => {
                    index += 1;
                    (body, RawValue::Explicit(next.to_string()))
                }
                _ => (body, RawValue::Implicit),
            },
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Token '{token}' is flag '{alias}' with {raw:?}.");
        }

        pending.insert(alias.to_string(), raw);
    }

    Action::Continue {
        pending,
        positionals,
    }
}

fn is_help(token: &str) -> bool {
    match token.strip_prefix("--") {
        Some(long) => long == HELP_NAME,
        None => token.strip_prefix('-') == Some(HELP_SHORT),
    }
}

// The flag text after its dashes, or `None` when the token is positional.
// Both `-` and `--` alone are positional.
fn flag_body(token: &str) -> Option<&str> {
    let body = token
        .strip_prefix("--")
        .or_else(|| token.strip_prefix('-'))?;

    if body.is_empty() {
        None
    } else {
        Some(body)
    }
}
