//! Error kinds for tri-state operations.
//!
//! The mapping functions are total and never fail. Errors only arise at
//! the edges: strict parsing, reading a caller-owned field whose storage
//! holds something that is not a tri-state member, and form lookups by
//! key or position.

use thiserror::Error;

/// Errors raised by the tri-state core and its glue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriStateError {
    /// Strict parsing met text other than `"true"`, `"false"`, `"null"` or `""`.
    #[error("invalid serialized tri-state value '{input}' (expected true, false or null)")]
    InvalidSerializedValue { input: String },

    /// A mutable-field handle holds a value outside the three members.
    #[error("tri-state field contract violated: {detail}")]
    ContractViolation { detail: String },

    /// A form operation named a field the form does not have.
    #[error("unknown form field '{key}'")]
    UnknownField { key: String },

    /// A form operation addressed a position past the last field.
    #[error("no form field at position {index} (form has {len})")]
    FieldIndexOutOfRange { index: usize, len: usize },
}
