mod compound;
mod de;
mod list;
mod ser;

use log::trace;

use crate::{
    error::{Error, Result},
    Kind, Path, RenamePolicy, Segment, Walk,
};

pub use self::compound::Compound;
pub use self::list::List;

/// Tag is a complete, owned NBT tag. Compounds and lists own their children,
/// so a tree of tags is strictly a tree: removing a tag from its parent
/// hands the whole subtree to the caller.
///
/// ```
/// # use nbtedit::{Compound, Tag, ValueRef};
/// # fn main() -> nbtedit::error::Result<()> {
/// let mut root = Tag::Compound(Compound::new());
/// root.set_child("test1", Tag::Int(100))?;
/// root.set_child("test1", Tag::Int(200))?;
///
/// assert_eq!(root.get_child("test1")?.value()?, ValueRef::Int(200));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    ByteArray(Vec<i8>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
    List(List),
    Compound(Compound),
}

/// The payload of a scalar or array tag, owned. This is what callers hand to
/// [`Tag::retype`] once they have converted user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    ByteArray(Vec<i8>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

/// The payload of a scalar or array tag, borrowed from the tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueRef<'a> {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(&'a str),
    ByteArray(&'a [i8]),
    IntArray(&'a [i32]),
    LongArray(&'a [i64]),
}

impl Value {
    pub fn kind(&self) -> Kind {
        ValueRef::from(self).kind()
    }
}

impl<'a> ValueRef<'a> {
    pub fn kind(&self) -> Kind {
        match self {
            ValueRef::Byte(_) => Kind::Byte,
            ValueRef::Short(_) => Kind::Short,
            ValueRef::Int(_) => Kind::Int,
            ValueRef::Long(_) => Kind::Long,
            ValueRef::Float(_) => Kind::Float,
            ValueRef::Double(_) => Kind::Double,
            ValueRef::String(_) => Kind::String,
            ValueRef::ByteArray(_) => Kind::ByteArray,
            ValueRef::IntArray(_) => Kind::IntArray,
            ValueRef::LongArray(_) => Kind::LongArray,
        }
    }

    pub fn to_value(&self) -> Value {
        match *self {
            ValueRef::Byte(v) => Value::Byte(v),
            ValueRef::Short(v) => Value::Short(v),
            ValueRef::Int(v) => Value::Int(v),
            ValueRef::Long(v) => Value::Long(v),
            ValueRef::Float(v) => Value::Float(v),
            ValueRef::Double(v) => Value::Double(v),
            ValueRef::String(v) => Value::String(v.to_owned()),
            ValueRef::ByteArray(v) => Value::ByteArray(v.to_vec()),
            ValueRef::IntArray(v) => Value::IntArray(v.to_vec()),
            ValueRef::LongArray(v) => Value::LongArray(v.to_vec()),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            ValueRef::Byte(v) => Some(v as i64),
            ValueRef::Short(v) => Some(v as i64),
            ValueRef::Int(v) => Some(v as i64),
            ValueRef::Long(v) => Some(v),
            ValueRef::Float(v) => Some(v as i64),
            ValueRef::Double(v) => Some(v as i64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            ValueRef::Byte(v) => Some(v as f64),
            ValueRef::Short(v) => Some(v as f64),
            ValueRef::Int(v) => Some(v as f64),
            ValueRef::Long(v) => Some(v as f64),
            ValueRef::Float(v) => Some(v as f64),
            ValueRef::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            ValueRef::String(v) => Some(v),
            _ => None,
        }
    }
}

impl<'a> From<&'a Value> for ValueRef<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Byte(v) => ValueRef::Byte(*v),
            Value::Short(v) => ValueRef::Short(*v),
            Value::Int(v) => ValueRef::Int(*v),
            Value::Long(v) => ValueRef::Long(*v),
            Value::Float(v) => ValueRef::Float(*v),
            Value::Double(v) => ValueRef::Double(*v),
            Value::String(v) => ValueRef::String(v),
            Value::ByteArray(v) => ValueRef::ByteArray(v),
            Value::IntArray(v) => ValueRef::IntArray(v),
            Value::LongArray(v) => ValueRef::LongArray(v),
        }
    }
}

impl From<Value> for Tag {
    fn from(value: Value) -> Self {
        match value {
            Value::Byte(v) => Tag::Byte(v),
            Value::Short(v) => Tag::Short(v),
            Value::Int(v) => Tag::Int(v),
            Value::Long(v) => Tag::Long(v),
            Value::Float(v) => Tag::Float(v),
            Value::Double(v) => Tag::Double(v),
            Value::String(v) => Tag::String(v),
            Value::ByteArray(v) => Tag::ByteArray(v),
            Value::IntArray(v) => Tag::IntArray(v),
            Value::LongArray(v) => Tag::LongArray(v),
        }
    }
}

impl Tag {
    /// The kind of this tag. Never fails.
    pub fn kind(&self) -> Kind {
        match self {
            Tag::Byte(_) => Kind::Byte,
            Tag::Short(_) => Kind::Short,
            Tag::Int(_) => Kind::Int,
            Tag::Long(_) => Kind::Long,
            Tag::Float(_) => Kind::Float,
            Tag::Double(_) => Kind::Double,
            Tag::String(_) => Kind::String,
            Tag::ByteArray(_) => Kind::ByteArray,
            Tag::IntArray(_) => Kind::IntArray,
            Tag::LongArray(_) => Kind::LongArray,
            Tag::List(_) => Kind::List,
            Tag::Compound(_) => Kind::Compound,
        }
    }

    /// The payload of a scalar or array tag. Containers have no value and
    /// give `TypeKindMismatch`.
    pub fn value(&self) -> Result<ValueRef<'_>> {
        Ok(match self {
            Tag::Byte(v) => ValueRef::Byte(*v),
            Tag::Short(v) => ValueRef::Short(*v),
            Tag::Int(v) => ValueRef::Int(*v),
            Tag::Long(v) => ValueRef::Long(*v),
            Tag::Float(v) => ValueRef::Float(*v),
            Tag::Double(v) => ValueRef::Double(*v),
            Tag::String(v) => ValueRef::String(v),
            Tag::ByteArray(v) => ValueRef::ByteArray(v),
            Tag::IntArray(v) => ValueRef::IntArray(v),
            Tag::LongArray(v) => ValueRef::LongArray(v),
            Tag::List(_) | Tag::Compound(_) => {
                return Err(Error::type_mismatch("a scalar or array", self.kind()))
            }
        })
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Tag::Compound(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Tag::Compound(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Tag::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Tag::List(l) => Some(l),
            _ => None,
        }
    }

    /// Number of children of a container, `None` for anything else.
    pub fn len(&self) -> Option<usize> {
        match self {
            Tag::Compound(c) => Some(c.len()),
            Tag::List(l) => Some(l.len()),
            _ => None,
        }
    }

    /// Look up a child by key in a compound or by index in a list.
    pub fn get_child(&self, segment: impl Into<Segment>) -> Result<&Tag> {
        self.child(&segment.into())
    }

    pub(crate) fn child(&self, segment: &Segment) -> Result<&Tag> {
        match (self, segment) {
            (Tag::Compound(c), Segment::Key(key)) => {
                c.get(key).ok_or_else(|| Error::key_not_found(key))
            }
            (Tag::List(l), Segment::Index(i)) => {
                l.get(*i).ok_or_else(|| Error::index_out_of_range(*i, l.len()))
            }
            _ => Err(mismatched(self, segment)),
        }
    }

    // Not public: a list element handed out like this could change kind
    // behind the list's back.
    pub(crate) fn child_mut(&mut self, segment: &Segment) -> Result<&mut Tag> {
        match (self, segment) {
            (Tag::Compound(c), Segment::Key(key)) => {
                c.get_mut(key).ok_or_else(|| Error::key_not_found(key))
            }
            (Tag::List(l), Segment::Index(i)) => {
                let len = l.len();
                l.get_mut(*i).ok_or_else(|| Error::index_out_of_range(*i, len))
            }
            (tag, _) => Err(mismatched(tag, segment)),
        }
    }

    /// Put `tag` under `segment`, returning the child it replaced.
    ///
    /// Compounds insert or replace. Lists only replace an existing index and
    /// check the element kind; use [`Tag::append_child`] to grow a list.
    pub fn set_child(&mut self, segment: impl Into<Segment>, tag: Tag) -> Result<Option<Tag>> {
        let segment = segment.into();
        trace!("set {} at {}", tag.kind(), segment);
        match (self, segment) {
            (Tag::Compound(c), Segment::Key(key)) => Ok(c.insert(key, tag)),
            (Tag::List(l), Segment::Index(i)) => l.set(i, tag).map(Some),
            (parent, segment) => Err(mismatched(parent, &segment)),
        }
    }

    /// Append `tag` to a list. An empty list takes on the kind of `tag`.
    pub fn append_child(&mut self, tag: Tag) -> Result<()> {
        match self {
            Tag::List(l) => l.push(tag),
            _ => Err(Error::type_mismatch(Kind::List.display_name(), self.kind())),
        }
    }

    /// Take the child under `segment` out of this container.
    pub fn remove_child(&mut self, segment: impl Into<Segment>) -> Result<Tag> {
        let segment = segment.into();
        match (self, &segment) {
            (Tag::Compound(c), Segment::Key(key)) => {
                c.remove(key).ok_or_else(|| Error::key_not_found(key))
            }
            (Tag::List(l), Segment::Index(i)) => l.remove(*i),
            (parent, _) => Err(mismatched(parent, &segment)),
        }
    }

    /// Move a compound entry to a new key. Fails with `KeyConflict` if the
    /// new key is already in use.
    pub fn rename_child(&mut self, old: &str, new: &str) -> Result<()> {
        self.rename_child_with(old, new, RenamePolicy::Reject)
    }

    pub(crate) fn rename_child_with(&mut self, old: &str, new: &str, policy: RenamePolicy) -> Result<()> {
        match self {
            Tag::Compound(c) => c.rename(old, new, policy),
            _ => Err(Error::type_mismatch(Kind::Compound.display_name(), self.kind())),
        }
    }

    /// Replace a scalar or array tag with `value`, changing its kind to
    /// `kind`. The value must already be of that kind; no conversion happens
    /// here.
    ///
    /// List elements are never reachable as `&mut Tag` from outside the
    /// crate; they are retyped through [`Tag::retype_child`].
    pub fn retype(&mut self, kind: Kind, value: Value) -> Result<()> {
        check_retype(self, kind, &value)?;
        *self = Tag::from(value);
        Ok(())
    }

    /// [`Tag::retype`] the child under `segment`. In a list holding other
    /// elements `kind` must be the list's element kind; a list's only
    /// element can change to any kind, taking the list with it.
    pub fn retype_child(&mut self, segment: impl Into<Segment>, kind: Kind, value: Value) -> Result<()> {
        let segment = segment.into();
        match (self, &segment) {
            (Tag::List(l), Segment::Index(i)) => l.retype(*i, kind, value),
            (parent, _) => parent.child_mut(&segment)?.retype(kind, value),
        }
    }

    /// Follow `path` down from this tag.
    pub fn get_path(&self, path: &Path) -> Result<&Tag> {
        path.segments()
            .iter()
            .try_fold(self, |tag, segment| tag.child(segment))
    }

    pub(crate) fn get_path_mut(&mut self, path: &Path) -> Result<&mut Tag> {
        path.segments()
            .iter()
            .try_fold(self, |tag, segment| tag.child_mut(segment))
    }

    /// Depth-first, pre-order walk over this tag and everything below it.
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(self)
    }
}

/// Whether `tag` may become `value`, which has to be of `kind`.
pub(crate) fn check_retype(tag: &Tag, kind: Kind, value: &Value) -> Result<()> {
    if tag.kind().is_container() {
        return Err(Error::type_mismatch("a scalar or array", tag.kind()));
    }
    if value.kind() != kind {
        return Err(Error::type_mismatch(kind.display_name(), value.kind()));
    }
    Ok(())
}

fn mismatched(tag: &Tag, segment: &Segment) -> Error {
    match segment {
        Segment::Key(_) => Error::type_mismatch(Kind::Compound.display_name(), tag.kind()),
        Segment::Index(_) => Error::type_mismatch(Kind::List.display_name(), tag.kind()),
    }
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $($part:tt)+)?) => {
        impl From<$type> for Tag {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
        impl From<$type> for Value {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
    };
}
from!(i8, Byte);
from!(i16, Short);
from!(i32, Int);
from!(i64, Long);
from!(f32, Float);
from!(f64, Double);
from!(String, String);
from!(&str, String, .to_owned());
from!(Vec<i8>, ByteArray);
from!(Vec<i32>, IntArray);
from!(Vec<i64>, LongArray);

impl From<bool> for Tag {
    fn from(val: bool) -> Self {
        Self::Byte(i8::from(val))
    }
}

impl From<Compound> for Tag {
    fn from(val: Compound) -> Self {
        Self::Compound(val)
    }
}

impl From<List> for Tag {
    fn from(val: List) -> Self {
        Self::List(val)
    }
}
