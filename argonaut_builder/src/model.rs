/// The value kind of a registered flag.
///
/// The kind decides how a raw value is converted, and whether a bare `--flag` consumes the following token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Any text, copied verbatim.
    String,
    /// A base-10 signed integer.
    Int,
    /// Exactly `true` or `false`.
    Bool,
}

impl Kind {
    /// Whether a bare occurrence of the flag (no `=`) takes the following token as its value.
    pub fn takes_value(&self) -> bool {
        !matches!(self, Kind::Bool)
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::String => write!(f, "string"),
            Kind::Int => write!(f, "int"),
            Kind::Bool => write!(f, "bool"),
        }
    }
}

/// The registered default of a flag, kept for usage rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValue {
    /// Default of a [`Kind::String`] flag.
    String(String),
    /// Default of a [`Kind::Int`] flag.
    Int(i64),
    /// Default of a [`Kind::Bool`] flag.
    Bool(bool),
}

impl DefaultValue {
    /// The kind this default belongs to.
    pub fn kind(&self) -> Kind {
        match self {
            DefaultValue::String(_) => Kind::String,
            DefaultValue::Int(_) => Kind::Int,
            DefaultValue::Bool(_) => Kind::Bool,
        }
    }
}

impl std::fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefaultValue::String(value) => write!(f, "{value:?}"),
            DefaultValue::Int(value) => write!(f, "{value}"),
            DefaultValue::Bool(value) => write!(f, "{value}"),
        }
    }
}
