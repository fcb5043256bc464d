//! Error types for HL7v2 encoding and decoding.
//!
//! All fallible operations in this crate return [`crate::Result`], whose error
//! type is the single [`Error`] enum defined here.
//!
//! ## Error Categories
//!
//! - **Wrong segment id**: a raw line was handed to a schema it does not belong to
//! - **Malformed scalars**: a leaf token does not parse as its slot's primitive type
//! - **Malformed escapes**: an escape sequence uses an unknown mnemonic (only
//!   reported by explicit validation; the codec itself passes unknown sequences
//!   through verbatim)
//! - **Inconsistent separators**: a [`Separators`](crate::Separators) value with
//!   duplicate characters across its five roles, rejected at construction time
//!
//! Every decode-side error that concerns a particular slot carries the slot's
//! 1-based field position so a caller can point at the offending field in the
//! original line.
//!
//! ## Examples
//!
//! ```rust
//! use hl7v2_codec::{decode_segment, catalog, Error};
//!
//! let result = decode_segment("XYZ|1|2", catalog::NTE);
//! assert!(matches!(result, Err(Error::WrongSegmentId { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur during HL7v2 encoding/decoding.
///
/// Each error variant includes contextual information to aid debugging.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// The first token of a raw segment line does not match the schema's id.
    ///
    /// This is the one fail-fast structural validation the segment codec
    /// performs; it is always surfaced, never recovered, because it means the
    /// caller handed the wrong line to the wrong schema.
    #[error("wrong segment id: expected {expected:?}, found {found:?}")]
    WrongSegmentId { expected: String, found: String },

    /// A leaf token could not be parsed as the primitive type its slot declares.
    #[error("malformed {expected} in field {position}: {token:?}")]
    MalformedScalar {
        /// 1-based field position within the segment or composite.
        position: usize,
        /// Human-readable name of the expected primitive type.
        expected: &'static str,
        /// The offending token as it appeared on the wire.
        token: String,
    },

    /// An escape sequence uses a mnemonic code this codec does not recognize.
    ///
    /// The decode path never raises this; unknown sequences pass through
    /// verbatim. It is produced only by [`escape::validate`](crate::escape::validate)
    /// for callers that want strict checking up front.
    #[error("unrecognized escape sequence {sequence:?}")]
    MalformedEscape { sequence: String },

    /// A [`Separators`](crate::Separators) value was constructed with the same
    /// character in more than one of its five roles.
    #[error("inconsistent separators: {0:?} appears in more than one role")]
    InconsistentSeparators(char),

    /// A composite slot was declared below the subcomponent level, where the
    /// wire format has no further separator to split on.
    #[error("composite slot in field {position} nests below the subcomponent level")]
    NestingTooDeep { position: usize },

    /// A value handed to the encoder does not match its slot's declared kind.
    #[error("type mismatch in field {position}: expected {expected}, found {found}")]
    TypeMismatch {
        position: usize,
        expected: &'static str,
        found: &'static str,
    },

    /// A raw line's leading id has no schema in the registry being consulted.
    #[error("no schema registered for segment id {0:?}")]
    UnknownSegment(String),

    /// Generic message.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a wrong-segment-id error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hl7v2_codec::Error;
    ///
    /// let err = Error::wrong_segment_id("NTE", "OBX");
    /// assert!(err.to_string().contains("NTE"));
    /// ```
    pub fn wrong_segment_id(expected: &str, found: &str) -> Self {
        Error::WrongSegmentId {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates a malformed-scalar error for the given 1-based field position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hl7v2_codec::Error;
    ///
    /// let err = Error::malformed_scalar(3, "unsigned integer", "abc");
    /// assert!(err.to_string().contains("field 3"));
    /// ```
    pub fn malformed_scalar(position: usize, expected: &'static str, token: &str) -> Self {
        Error::MalformedScalar {
            position,
            expected,
            token: token.to_string(),
        }
    }

    /// Creates a malformed-escape error for an unrecognized sequence.
    pub fn malformed_escape(sequence: &str) -> Self {
        Error::MalformedEscape {
            sequence: sequence.to_string(),
        }
    }

    /// Creates a type-mismatch error for a value that does not fit its slot.
    pub fn type_mismatch(position: usize, expected: &'static str, found: &'static str) -> Self {
        Error::TypeMismatch {
            position,
            expected,
            found,
        }
    }

    /// Stamps a 1-based field position onto a position-carrying error raised
    /// by a layer that did not know where in the segment it was working.
    pub(crate) fn at_field(self, position: usize) -> Self {
        match self {
            Error::MalformedScalar {
                expected, token, ..
            } => Error::MalformedScalar {
                position,
                expected,
                token,
            },
            Error::TypeMismatch {
                expected, found, ..
            } => Error::TypeMismatch {
                position,
                expected,
                found,
            },
            Error::NestingTooDeep { .. } => Error::NestingTooDeep { position },
            other => other,
        }
    }

    /// Creates a generic error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hl7v2_codec::Error;
    ///
    /// let err = Error::message("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn message<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
