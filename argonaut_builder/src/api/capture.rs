use thiserror::Error;

use crate::model::Kind;

/// A raw value could not be converted into the kind of its slot.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot convert '{token}' to {kind}.")]
pub(crate) struct InvalidCapture {
    pub(crate) token: String,
    pub(crate) kind: Kind,
}
