use crate::value::ValueKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A pair list or argument string did not have an accepted shape.
    #[error("Malformed arguments: {reason}")]
    MalformedConstruction { reason: String },

    /// A mandatory argument was found in neither the instance nor the global store.
    #[error("Missing required argument {key:?}")]
    MissingRequiredArgument { key: String },

    #[error("Argument {key:?} holds {found} but {requested} was requested")]
    TypeMismatch {
        key: String,
        found: ValueKind,
        requested: ValueKind,
    },
}

impl Error {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedConstruction {
            reason: reason.into(),
        }
    }
}
