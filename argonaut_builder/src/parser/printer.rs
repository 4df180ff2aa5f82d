use terminal_size::{terminal_size, Width};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::model::Kind;
use crate::parser::base::{flag_names, Flag};
use crate::parser::interface::chunk;

const FLAG_INDENT: usize = 2;
const DESCRIPTION_INDENT: usize = 8;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_DESCRIPTION_WIDTH: usize = 17;

/// Renders the usage text of a registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Printer {
    description_width: Option<usize>,
}

impl Printer {
    /// Descriptions on a single line each, regardless of length.
    pub(crate) fn plain() -> Self {
        Self::default()
    }

    /// Wrap descriptions so each usage line fits within `total_width` columns.
    pub(crate) fn fixed(total_width: usize) -> Self {
        let description_width = std::cmp::max(
            total_width.saturating_sub(DESCRIPTION_INDENT),
            MINIMUM_DESCRIPTION_WIDTH,
        );

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Total width {total_width}.  Selecting description width: {description_width}.");
        }

        Self {
            description_width: Some(description_width),
        }
    }

    /// Wrap descriptions to the current terminal, if there is one.
    pub(crate) fn terminal() -> Self {
        match terminal_size() {
            Some((Width(width), _)) => Self::fixed(width as usize),
            None => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("No terminal detected.  Descriptions will not be wrapped.");
                }

                Self::plain()
            }
        }
    }

    pub(crate) fn render(&self, program: &str, flags: &[Flag<'_>]) -> String {
        let mut out = format!("Usage of {program}:\n");

        for flag in flags {
            let names = flag_names(flag.short(), flag.long(), ", ");

            match flag.kind() {
                Kind::Bool => out.push_str(&format!("{:FLAG_INDENT$}{names}\n", "")),
                kind => out.push_str(&format!("{:FLAG_INDENT$}{names} {kind}\n", "")),
            }

            let description = format!("{} (default {})", flag.description(), flag.default());

            match self.description_width {
                Some(width) => {
                    for line in chunk(&description, width) {
                        out.push_str(&format!("{:DESCRIPTION_INDENT$}{line}\n", ""));
                    }
                }
                None => out.push_str(&format!("{:DESCRIPTION_INDENT$}{description}\n", "")),
            }
        }

        out
    }
}
