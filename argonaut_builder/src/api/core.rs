use std::io::Write;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::Slot;
use crate::constant::DEFAULT_PROGRAM;
use crate::model::DefaultValue;
use crate::parser::{
    scan, Action, Flag, ParseError, Printer, Registry, UserInterface, WriterInterface,
};

/// The flag parser.
///
/// Flags are registered against caller owned variables, which the parser writes into.
/// Each variable is borrowed for the lifetime `'a` of the parser; read it back once the parser is dropped.
///
/// ### Example
/// ```
/// # use argonaut_builder as argonaut;
/// use argonaut::FlagParser;
///
/// let mut name = String::default();
/// let mut age: i64 = 0;
/// let mut verbose = false;
/// let mut parser = FlagParser::new(std::io::sink());
/// parser
///     .string_var(&mut name, "n", "name", "default", "The name of the user")
///     .int_var(&mut age, "a", "age", 0, "The age of the user")
///     .bool_var(&mut verbose, "v", "verbose", false, "Enable verbose output");
///
/// parser.parse(&["-n", "Jane", "-a=25", "-v", "push"]).unwrap();
/// assert_eq!(parser.positional_arguments(), &["push".to_string()]);
/// drop(parser);
///
/// assert_eq!(name, "Jane");
/// assert_eq!(age, 25);
/// assert!(verbose);
/// ```
pub struct FlagParser<'a> {
    program: String,
    registry: Registry<'a>,
    positionals: Vec<String>,
    printer: Printer,
    user_interface: Box<dyn UserInterface + 'a>,
}

impl<'a> std::fmt::Debug for FlagParser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlagParser")
            .field("program", &self.program)
            .field("registry", &self.registry)
            .field("positionals", &self.positionals)
            .finish()
    }
}

impl<'a> FlagParser<'a> {
    /// Create a flag parser that writes usage text to `output`.
    pub fn new(output: impl Write + 'a) -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            registry: Registry::default(),
            positionals: Vec::default(),
            printer: Printer::plain(),
            user_interface: Box::new(WriterInterface::new(output)),
        }
    }

    /// Create a flag parser that writes usage text to stdout.
    pub fn console() -> Self {
        Self::new(std::io::stdout())
    }

    /// Set the program name shown in the usage header (`program` until set).
    pub fn set_program_name(&mut self, program: impl Into<String>) -> &mut Self {
        self.program = program.into();
        self
    }

    /// Wrap flag descriptions to the width of the current terminal.
    /// Without a terminal, descriptions are left unwrapped.
    pub fn wrap_to_terminal(&mut self) -> &mut Self {
        self.printer = Printer::terminal();
        self
    }

    /// Wrap flag descriptions so usage lines fit within `width` columns.
    pub fn wrap_to_width(&mut self, width: usize) -> &mut Self {
        self.printer = Printer::fixed(width);
        self
    }

    /// Register a string flag.
    ///
    /// `variable` is set to `default` right away.
    /// An empty `short` or `long` means the flag has no such form.
    /// Registering an alias twice is allowed: the latest registration is the one that gets set, although usage shows both.
    pub fn string_var(
        &mut self,
        variable: &'a mut String,
        short: &str,
        long: &str,
        default: impl Into<String>,
        description: impl Into<String>,
    ) -> &mut Self {
        let default = default.into();
        *variable = default.clone();
        self.register(Flag::new(
            short,
            long,
            DefaultValue::String(default),
            description,
            Slot::String(variable),
        ))
    }

    /// Register an integer flag.
    /// See [`FlagParser::string_var`] for the alias semantics.
    pub fn int_var(
        &mut self,
        variable: &'a mut i64,
        short: &str,
        long: &str,
        default: i64,
        description: impl Into<String>,
    ) -> &mut Self {
        *variable = default;
        self.register(Flag::new(
            short,
            long,
            DefaultValue::Int(default),
            description,
            Slot::Int(variable),
        ))
    }

    /// Register a boolean flag.
    /// A bare `-v`/`--verbose` means `true`; otherwise the value must be given with `=` (ex: `--verbose=false`).
    /// See [`FlagParser::string_var`] for the alias semantics.
    pub fn bool_var(
        &mut self,
        variable: &'a mut bool,
        short: &str,
        long: &str,
        default: bool,
        description: impl Into<String>,
    ) -> &mut Self {
        *variable = default;
        self.register(Flag::new(
            short,
            long,
            DefaultValue::Bool(default),
            description,
            Slot::Bool(variable),
        ))
    }

    fn register(&mut self, flag: Flag<'a>) -> &mut Self {
        self.registry.register(flag);
        self
    }

    /// Parse the input tokens (typically the process arguments, minus the program name).
    ///
    /// Parsing happens in two phases:
    /// 1. The tokens are scanned once, left to right, into flag occurrences and positional arguments.
    /// `--name=value`, `--name value` and `-n value` forms are accepted; the second token is only taken when the flag isn't boolean and the token doesn't start with `-`.
    /// 2. The occurrences are converted and written into the registered variables.
    ///
    /// If `-h` or `--help` appears anywhere, usage is written and [`ParseError::HelpRequested`] is returned without touching any variable.
    ///
    /// On error, variables written before the failing flag keep their new values.
    /// On success, the positional arguments replace those of any previous parse.
    pub fn parse<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<(), ParseError> {
        let registry = &self.registry;

        match scan(tokens, |alias| registry.takes_value(alias)) {
            Action::PrintHelp => {
                self.render_usage();
                Err(ParseError::HelpRequested)
            }
            Action::Continue {
                pending,
                positionals,
            } => {
                self.registry.resolve(pending)?;

                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Parsed with positional arguments {positionals:?}.");
                }

                self.positionals = positionals;
                Ok(())
            }
        }
    }

    /// The positional arguments of the most recent successful parse, in input order.
    pub fn positional_arguments(&self) -> &[String] {
        &self.positionals
    }

    /// The usage text.
    pub fn usage(&self) -> String {
        self.printer.render(&self.program, self.registry.flags())
    }

    /// Write the usage text to the output.
    pub fn render_usage(&mut self) {
        let usage = self.usage();
        self.user_interface.print(usage);
    }
}
