//! nbtedit is an in-memory, editable tree of NBT tags from *Minecraft: Java
//! Edition*, along with the model behind a tree-view NBT editor.
//!
//! * For the tag tree itself see [`Tag`], [`Compound`] and [`List`].
//! * For path based access and mutation of a whole document see
//!   [`TagStore`].
//! * For turning user typed text into values see [`convert`].
//! * For a toolkit independent editor panel and edit dialog see
//!   [`editor`].
//!
//! Reading and writing the binary format is left to
//! [fastnbt](https://docs.rs/fastnbt). [`TagStore::from_bytes`] and
//! [`TagStore::to_bytes`] go through it while keeping compound order and
//! the root name.
//!
//! # Quick example
//!
//! ```
//! use nbtedit::{path, Compound, Kind, Tag, TagStore, Value};
//!
//! # fn main() -> nbtedit::error::Result<()> {
//! let root: Compound = [("DataVersion", Tag::Int(3120))].into_iter().collect();
//! let mut store = TagStore::new("", Tag::Compound(root));
//!
//! store.set_child(&path![], "Name", Tag::from("world"))?;
//! store.retype(&path!["DataVersion"], Kind::Long, Value::Long(3120))?;
//!
//! assert_eq!(store.get_kind(&path!["DataVersion"])?, Kind::Long);
//! # Ok(())
//! # }
//! ```
//!
//! # Threading
//!
//! Nothing here is internally synchronized. A host that loads in the
//! background while the user edits has to put its own lock around the
//! whole store.

use std::convert::TryFrom;

pub mod convert;
pub mod editor;
pub mod error;

mod interop;
mod kind;
mod path;
mod store;
mod tag;
mod walk;

pub use kind::*;
pub use path::*;
pub use store::TagStore;
pub use tag::*;
pub use walk::Walk;

#[cfg(test)]
mod test;

/// The kind of an NBT tag. This does not carry the value or the name of the
/// data. Discriminants are the tag ids of the binary format.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[repr(u8)]
pub enum Kind {
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (i8).
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents a list of other tags, all of the same kind.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
    /// Represents as array of Int (i32).
    IntArray = 11,
    /// Represents as array of Long (i64).
    LongArray = 12,
}

impl TryFrom<u8> for Kind {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Kind::*;
        Ok(match value {
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            0 | 13..=u8::MAX => return Err(()),
        })
    }
}

impl From<Kind> for u8 {
    fn from(kind: Kind) -> Self {
        kind as u8
    }
}

/// What to do when renaming a compound entry onto a key that is already in
/// use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenamePolicy {
    /// Fail with [`ErrorKind::KeyConflict`][`error::ErrorKind::KeyConflict`]
    /// and leave both entries alone.
    #[default]
    Reject,
    /// Discard the entry currently under the new key.
    Overwrite,
}

/// Options for customizing a [`TagStore`]. Mainly for how mutations that
/// could clobber data are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOpts {
    pub(crate) rename_policy: RenamePolicy,
    pub(crate) max_depth: usize,
}

impl Default for StoreOpts {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreOpts {
    /// Create the default options.
    pub fn new() -> Self {
        Self {
            rename_policy: RenamePolicy::Reject,
            max_depth: 512,
        }
    }

    /// Set how renames onto an existing key are handled.
    pub fn rename_policy(mut self, policy: RenamePolicy) -> Self {
        self.rename_policy = policy;
        self
    }

    /// Maximum nesting of containers accepted. The root sits at depth 0.
    /// Trees from untrusted files can nest arbitrarily deep, this bounds the
    /// work done walking them.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
