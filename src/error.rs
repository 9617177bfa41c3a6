//! # Decode Failure Surface
//!
//! Decoding fails in exactly two ways, and both are ordinary recoverable
//! results:
//!
//! - [`DecodeError::Syntax`]: the document does not conform to the JSON
//!   grammar. Carries the byte offset where the scan stopped.
//! - [`DecodeError::TypeMismatch`]: the document is grammatical but a
//!   value's kind disagrees with the declared kind of the target field.
//!   Carries the dotted field path plus both kind names.
//!
//! Unknown keys and absent optional fields are documented non-errors and
//! never surface here. Encoding has no error type at all: a record
//! instance is kind-conforming by construction, so emission cannot fail.
//!
//! The enum implements `std::error::Error`, so callers using `eyre` can
//! propagate it with `?` and get the message intact.

use std::error::Error as StdError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The document violates the textual grammar at `offset` (in bytes).
    Syntax { offset: usize, message: String },
    /// A grammatical value does not match the declared kind of `field`.
    ///
    /// `field` is the dotted path from the root schema, e.g.
    /// `person.address.zipcode`.
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl DecodeError {
    pub fn syntax(offset: usize, message: impl Into<String>) -> Self {
        DecodeError::Syntax {
            offset,
            message: message.into(),
        }
    }

    pub fn type_mismatch(field: impl Into<String>, expected: &'static str, actual: &'static str) -> Self {
        DecodeError::TypeMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// Byte offset for syntax failures, `None` for type mismatches.
    pub fn offset(&self) -> Option<usize> {
        match self {
            DecodeError::Syntax { offset, .. } => Some(*offset),
            DecodeError::TypeMismatch { .. } => None,
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, DecodeError::Syntax { .. })
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Syntax { offset, message } => {
                write!(f, "syntax error at byte {offset}: {message}")
            }
            DecodeError::TypeMismatch {
                field,
                expected,
                actual,
            } => {
                write!(f, "type mismatch at {field}: expected {expected}, found {actual}")
            }
        }
    }
}

impl StdError for DecodeError {}
