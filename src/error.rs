//! Contains the Error and Result type used by the tag store and editor.
use std::fmt::Display;

use crate::Kind;

/// An error from reading or mutating a tag tree. A failed operation never
/// leaves a partially modified tree behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The operation does not apply to this kind of tag, for example asking
    /// a compound for its value, or indexing a compound by position.
    TypeKindMismatch,

    /// No compound entry with the given key.
    KeyNotFound,

    /// A list index outside `[0, len)`.
    IndexOutOfRange,

    /// A tag of one kind was put into a list holding another kind.
    ListKindMismatch,

    /// Renaming onto a key that is already taken.
    KeyConflict,

    /// User text could not be converted into a value of the requested kind.
    Conversion,

    /// The tree nests deeper than the configured maximum.
    TooDeep,

    /// Binary NBT could not be read or written.
    Codec,

    /// Any other errors. Users should not match on this variant and should
    /// instead use a wildcard `_`.
    Other,
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    fn new(kind: ErrorKind, msg: String) -> Self {
        Self { msg, kind }
    }

    pub(crate) fn type_mismatch(expected: &str, found: Kind) -> Error {
        Error::new(
            ErrorKind::TypeKindMismatch,
            format!("expected {}, found {}", expected, found),
        )
    }

    pub(crate) fn key_not_found(key: impl Display) -> Error {
        Error::new(ErrorKind::KeyNotFound, format!("no such key: {}", key))
    }

    pub(crate) fn index_out_of_range(index: usize, len: usize) -> Error {
        Error::new(
            ErrorKind::IndexOutOfRange,
            format!("index {} out of range for list of length {}", index, len),
        )
    }

    pub(crate) fn list_kind_mismatch(expected: Kind, found: Kind) -> Error {
        Error::new(
            ErrorKind::ListKindMismatch,
            format!("list holds {}, cannot take {}", expected, found),
        )
    }

    pub(crate) fn key_conflict(key: &str) -> Error {
        Error::new(
            ErrorKind::KeyConflict,
            format!("key already exists: {:?}", key),
        )
    }

    pub(crate) fn conversion(kind: Kind, text: &str) -> Error {
        Error::new(
            ErrorKind::Conversion,
            format!("cannot convert {:?} to {}", text, kind),
        )
    }

    pub(crate) fn too_deep(max: usize) -> Error {
        Error::new(
            ErrorKind::TooDeep,
            format!("tag tree nests deeper than {}", max),
        )
    }

    pub(crate) fn codec(err: impl Display) -> Error {
        Error::new(ErrorKind::Codec, format!("nbt: {}", err))
    }

    pub(crate) fn bespoke(msg: impl Into<String>) -> Error {
        Error::new(ErrorKind::Other, msg.into())
    }
}
