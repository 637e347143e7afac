//! Reading and writing the binary format through fastnbt.
//!
//! Decoding goes straight into a [`Tag`], so compound entries keep the order
//! they have in the file. Writing serializes the tree directly, which keeps
//! that order too. `fastnbt::Value` stores compounds in a `HashMap`, so
//! converting to it is only for hosts that already work with fastnbt values.
//!
//! ```
//! use nbtedit::{path, StoreOpts, TagStore, Tag};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let root = [("SpawnX", Tag::Int(10)), ("SpawnY", Tag::Int(64))]
//!     .into_iter()
//!     .collect();
//! let bytes = TagStore::new("Data", Tag::Compound(root)).to_bytes()?;
//!
//! let store = TagStore::from_bytes(&bytes, StoreOpts::new())?;
//! assert_eq!(store.name(), "Data");
//! assert_eq!(store.get_value(&path!["SpawnX"])?.as_i64(), Some(10));
//! # Ok(())
//! # }
//! ```
use byteorder::{BigEndian, ByteOrder, WriteBytesExt};
use serde::Serialize;

use crate::{
    error::{Error, Result},
    Kind, StoreOpts, Tag, TagStore,
};

impl From<Tag> for fastnbt::Value {
    fn from(tag: Tag) -> Self {
        use fastnbt::Value as V;

        match tag {
            Tag::Byte(v) => V::Byte(v),
            Tag::Short(v) => V::Short(v),
            Tag::Int(v) => V::Int(v),
            Tag::Long(v) => V::Long(v),
            Tag::Float(v) => V::Float(v),
            Tag::Double(v) => V::Double(v),
            Tag::String(v) => V::String(v),
            Tag::ByteArray(v) => V::ByteArray(fastnbt::ByteArray::new(v)),
            Tag::IntArray(v) => V::IntArray(fastnbt::IntArray::new(v)),
            Tag::LongArray(v) => V::LongArray(fastnbt::LongArray::new(v)),
            Tag::List(l) => V::List(l.into_iter().map(V::from).collect()),
            Tag::Compound(c) => V::Compound(c.into_iter().map(|(k, v)| (k, V::from(v))).collect()),
        }
    }
}

impl TagStore {
    /// Decode a binary NBT document, keeping the root name. List kinds and
    /// nesting depth are checked on the way.
    ///
    /// The bytes must already be decompressed.
    pub fn from_bytes(bytes: &[u8], opts: StoreOpts) -> Result<Self> {
        let name = root_name(bytes)?;
        let root: Tag = fastnbt::from_bytes(bytes).map_err(Error::codec)?;
        TagStore::with_opts(name, root, opts)
    }

    /// Encode the document, root name included. The root has to be a
    /// compound.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        if self.root().kind() != Kind::Compound {
            return Err(Error::type_mismatch(
                Kind::Compound.display_name(),
                self.root().kind(),
            ));
        }
        let body = fastnbt::to_bytes(&Nbt(self.root())).map_err(Error::codec)?;

        // fastnbt writes an unnamed root: the tag id then a zero length.
        let rest = body.get(3..).ok_or_else(|| Error::codec("truncated root"))?;
        let name = cesu8::to_java_cesu8(self.name());
        let len = u16::try_from(name.len()).map_err(|_| Error::codec("root name too long"))?;

        let mut out = Vec::with_capacity(body.len() + name.len());
        out.push(u8::from(Kind::Compound));
        // Writing to a Vec cannot fail.
        let _ = out.write_u16::<BigEndian>(len);
        out.extend_from_slice(&name);
        out.extend_from_slice(rest);
        Ok(out)
    }

    /// The root name and the tree as a fastnbt value. Compound order is not
    /// kept by `fastnbt::Value`; use [`TagStore::to_bytes`] to write a file.
    pub fn into_value(self) -> (String, fastnbt::Value) {
        let (name, root) = self.into_parts();
        (name, root.into())
    }
}

/// The name stored in the header of a binary document.
fn root_name(bytes: &[u8]) -> Result<String> {
    let header = bytes.get(..3).ok_or_else(|| Error::codec("missing root tag"))?;
    if header[0] != u8::from(Kind::Compound) {
        return Err(Error::codec(format!("root tag id {} is not a compound", header[0])));
    }
    let len = BigEndian::read_u16(&header[1..3]) as usize;
    let raw = bytes
        .get(3..3 + len)
        .ok_or_else(|| Error::codec("truncated root name"))?;
    let name = cesu8::from_java_cesu8(raw).map_err(|_| Error::codec("root name is not valid modified UTF-8"))?;
    Ok(name.into_owned())
}

/// Serializes a tag the way fastnbt expects NBT data, with arrays marked as
/// arrays and compounds in their own order.
struct Nbt<'a>(&'a Tag);

impl<'a> Serialize for Nbt<'a> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self.0 {
            Tag::Byte(v) => serializer.serialize_i8(*v),
            Tag::Short(v) => serializer.serialize_i16(*v),
            Tag::Int(v) => serializer.serialize_i32(*v),
            Tag::Long(v) => serializer.serialize_i64(*v),
            Tag::Float(v) => serializer.serialize_f32(*v),
            Tag::Double(v) => serializer.serialize_f64(*v),
            Tag::String(v) => serializer.serialize_str(v),
            Tag::ByteArray(v) => fastnbt::ByteArray::new(v.clone()).serialize(serializer),
            Tag::IntArray(v) => fastnbt::IntArray::new(v.clone()).serialize(serializer),
            Tag::LongArray(v) => fastnbt::LongArray::new(v.clone()).serialize(serializer),
            Tag::List(l) => serializer.collect_seq(l.iter().map(Nbt)),
            Tag::Compound(c) => serializer.collect_map(c.iter().map(|(k, v)| (k, Nbt(v)))),
        }
    }
}
