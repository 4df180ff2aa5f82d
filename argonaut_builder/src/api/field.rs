use std::str::FromStr;

use crate::api::capture::InvalidCapture;
use crate::constant::IMPLICIT_VALUE;
use crate::model::Kind;

/// The text associated with one flag occurrence, before conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RawValue {
    /// Attached via `=`, or consumed from the following token.
    Explicit(String),
    /// The flag appeared bare.
    Implicit,
}

impl RawValue {
    pub(crate) fn as_str(&self) -> &str {
        match self {
            RawValue::Explicit(token) => token.as_str(),
            RawValue::Implicit => IMPLICIT_VALUE,
        }
    }
}

/// Caller owned storage that a flag writes its value into.
///
/// The parser only ever holds the borrow; the variable itself lives (and outlives the parser) on the caller's side.
pub(crate) enum Slot<'a> {
    String(&'a mut String),
    Int(&'a mut i64),
    Bool(&'a mut bool),
}

impl<'a> std::fmt::Debug for Slot<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Slot").field(&self.kind()).finish()
    }
}

impl<'a> Slot<'a> {
    pub(crate) fn kind(&self) -> Kind {
        match self {
            Slot::String(_) => Kind::String,
            Slot::Int(_) => Kind::Int,
            Slot::Bool(_) => Kind::Bool,
        }
    }

    /// Convert the raw value into this slot's kind, and on success overwrite the variable.
    /// On failure the variable is left untouched.
    pub(crate) fn capture(&mut self, raw: &RawValue) -> Result<(), InvalidCapture> {
        match (&mut *self, raw) {
            (Slot::String(variable), RawValue::Explicit(token)) => {
                **variable = token.clone();
                Ok(())
            }
            (Slot::Int(variable), RawValue::Explicit(token)) => {
                let value = i64::from_str(token).map_err(|_| InvalidCapture {
                    token: token.clone(),
                    kind: Kind::Int,
                })?;
                **variable = value;
                Ok(())
            }
            (Slot::Bool(variable), raw) => {
                **variable = match raw.as_str() {
                    "true" => true,
                    "false" => false,
                    token => {
                        return Err(InvalidCapture {
                            token: token.to_string(),
                            kind: Kind::Bool,
                        })
                    }
                };
                Ok(())
            }
            // A value taking flag without its value.
            (slot, RawValue::Implicit) => Err(InvalidCapture {
                token: IMPLICIT_VALUE.to_string(),
                kind: slot.kind(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn string_capture() {
        let mut variable = String::default();
        let mut slot = Slot::String(&mut variable);
        slot.capture(&RawValue::Explicit("Jane".to_string())).unwrap();
        assert_eq!(variable, "Jane");
    }

    #[rstest]
    #[case("25", 25)]
    #[case("025", 25)]
    #[case("+7", 7)]
    #[case("-13", -13)]
    #[case("0", 0)]
    fn int_capture(#[case] token: &str, #[case] expected: i64) {
        let mut variable: i64 = 99;
        let mut slot = Slot::Int(&mut variable);
        slot.capture(&RawValue::Explicit(token.to_string())).unwrap();
        assert_eq!(variable, expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("")]
    #[case("1.5")]
    #[case(" 1")]
    #[case("99999999999999999999")]
    fn int_capture_invalid(#[case] token: &str) {
        let mut variable: i64 = 4;
        let mut slot = Slot::Int(&mut variable);
        let error = slot
            .capture(&RawValue::Explicit(token.to_string()))
            .unwrap_err();
        assert_eq!(
            error,
            InvalidCapture {
                token: token.to_string(),
                kind: Kind::Int,
            }
        );
        assert_eq!(variable, 4);
    }

    #[rstest]
    #[case(RawValue::Implicit, true)]
    #[case(RawValue::Explicit("true".to_string()), true)]
    #[case(RawValue::Explicit("false".to_string()), false)]
    fn bool_capture(#[case] raw: RawValue, #[case] expected: bool) {
        let mut variable = !expected;
        let mut slot = Slot::Bool(&mut variable);
        slot.capture(&raw).unwrap();
        assert_eq!(variable, expected);
    }

    #[rstest]
    #[case("TRUE")]
    #[case("False")]
    #[case("1")]
    #[case("yes")]
    #[case("")]
    fn bool_capture_invalid(#[case] token: &str) {
        let mut variable = false;
        let mut slot = Slot::Bool(&mut variable);
        let error = slot
            .capture(&RawValue::Explicit(token.to_string()))
            .unwrap_err();
        assert_eq!(error.kind, Kind::Bool);
        assert_eq!(error.token, token);
        assert!(!variable);
    }

    #[test]
    fn implicit_capture_value_taking() {
        let mut name = "default".to_string();
        let mut slot = Slot::String(&mut name);
        let error = slot.capture(&RawValue::Implicit).unwrap_err();
        assert_eq!(error.token, "true");
        assert_eq!(error.kind, Kind::String);
        assert_eq!(name, "default");

        let mut age: i64 = 3;
        let mut slot = Slot::Int(&mut age);
        let error = slot.capture(&RawValue::Implicit).unwrap_err();
        assert_eq!(error.to_string(), "cannot convert 'true' to int.");
        assert_eq!(age, 3);
    }

    #[test]
    fn value_overwritten() {
        let mut variable: i64 = 0;
        let mut slot = Slot::Int(&mut variable);
        slot.capture(&RawValue::Explicit("5".to_string())).unwrap();
        slot.capture(&RawValue::Explicit("6".to_string())).unwrap();
        assert_eq!(variable, 6);
    }

    #[test]
    fn raw_value() {
        assert_eq!(RawValue::Implicit.as_str(), "true");
        assert_eq!(RawValue::Explicit("x=y".to_string()).as_str(), "x=y");
    }
}
