//! Crate-level error type and `Result` alias.
//!
//! Every reportable condition in the library maps to one variant of
//! [`InputError`]. Whether a condition actually surfaces as an `Err`, a
//! console warning or nothing at all is decided per device through its
//! `raise_errors`/`warnings` flags (see [`crate::device::InputDevice`]);
//! the variants themselves are simple descriptive-message failures.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, InputError>;

#[derive(Debug, Error)]
pub enum InputError {
    /// The line source failed to produce a line.
    #[error("Couldn't read line: {0}")]
    Io(#[from] std::io::Error),

    /// The type list is malformed or doesn't line up with the values.
    #[error("{0}")]
    TypeList(String),

    /// A single scalar cast failed.
    #[error("{0}")]
    ValueCast(String),

    /// A token expected to hold an iterable literal has no bracket envelope.
    #[error("Invalid iterable syntax <{0}>")]
    IterableSyntax(String),

    /// Two mutually-exclusive arguments collided, or a setter received
    /// empty arguments.
    #[error("{0}")]
    WrongArgument(String),

    /// `set_field` was called with a name the device doesn't recognize.
    #[error("Attribute: {0} not found")]
    AttributeNotFound(String),

    /// A recognized field rejected the value's type; the prior value is
    /// retained.
    #[error("Invalid value type for \"{field}\" expected {expected}, found {found}")]
    InvalidFieldType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}
