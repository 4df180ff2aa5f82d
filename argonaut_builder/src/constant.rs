pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_SHORT: &str = "h";
pub(crate) const DEFAULT_PROGRAM: &str = "program";
// The raw value recorded for a flag given without `=` and without a consumed value token.
pub(crate) const IMPLICIT_VALUE: &str = "true";
