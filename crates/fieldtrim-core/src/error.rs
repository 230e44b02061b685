use std::fmt;
use thiserror::Error as ThisError;

///
/// TrimError
///
/// Precondition failure raised at the start of a trim operation.
/// Raised before any member is read, so a failed call never leaves a target
/// partially trimmed.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{message}")]
pub struct TrimError {
    pub class: ErrorClass,

    /// Name of the offending argument as it appears in the public signature.
    pub argument: &'static str,

    pub message: String,
}

impl TrimError {
    pub fn new(class: ErrorClass, argument: &'static str, message: impl Into<String>) -> Self {
        Self {
            class,
            argument,
            message: message.into(),
        }
    }

    /// Construct a null-reference error for a missing target.
    pub fn null_reference(argument: &'static str) -> Self {
        Self::new(
            ErrorClass::NullReference,
            argument,
            format!("value cannot be null (parameter '{argument}')"),
        )
    }

    /// Construct an invalid-argument error.
    pub fn invalid_argument(argument: &'static str, reason: impl AsRef<str>) -> Self {
        let reason = reason.as_ref();

        Self::new(
            ErrorClass::InvalidArgument,
            argument,
            format!("{reason} (parameter '{argument}')"),
        )
    }

    #[must_use]
    pub const fn is_null_reference(&self) -> bool {
        matches!(self.class, ErrorClass::NullReference)
    }

    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self.class, ErrorClass::InvalidArgument)
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}: {}", self.class, self.message)
    }
}

///
/// ErrorClass
/// Precondition taxonomy. Every variant is a caller bug, never transient.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    InvalidArgument,
    NullReference,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvalidArgument => "invalid_argument",
            Self::NullReference => "null_reference",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///
