use thiserror::Error;

/// Why an input could not be decoded as a record.
///
/// Every failure is terminal for the decode attempt: no partially decoded
/// record is ever returned alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("field '{field}' is missing")]
    MissingField { field: String },

    #[error("field '{field}' is not {expected}")]
    TypeMismatch { field: String, expected: String },

    #[error("input for '{record}' is not a string-keyed object")]
    NotAnObject { record: String },

    #[error("no decoder named '{name}'")]
    UnknownDecoder { name: String },

    #[error("decoder '{name}' takes {expected} decoder argument(s), got {found}")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("local '{local}' is not bound")]
    UnboundLocal { local: String },

    #[error("decode routine for '{record}' ended without constructing it")]
    Incomplete { record: String },
}

impl DecodeError {
    /// The field this failure is attributed to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            DecodeError::MissingField { field } | DecodeError::TypeMismatch { field, .. } => {
                Some(field)
            }
            _ => None,
        }
    }
}
