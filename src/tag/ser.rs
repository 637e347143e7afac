use serde::Serialize;

use crate::{Tag, Value, ValueRef};

// Tags serialize as the plain data they hold, which is what a JSON dump of a
// tree wants. The kind is not recoverable from the output.
impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Tag::List(v) => v.serialize(serializer),
            Tag::Compound(v) => v.serialize(serializer),
            leaf => match leaf.value() {
                Ok(value) => value.serialize(serializer),
                Err(e) => Err(serde::ser::Error::custom(e)),
            },
        }
    }
}

impl<'a> Serialize for ValueRef<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match *self {
            ValueRef::Byte(v) => serializer.serialize_i8(v),
            ValueRef::Short(v) => serializer.serialize_i16(v),
            ValueRef::Int(v) => serializer.serialize_i32(v),
            ValueRef::Long(v) => serializer.serialize_i64(v),
            ValueRef::Float(v) => serializer.serialize_f32(v),
            ValueRef::Double(v) => serializer.serialize_f64(v),
            ValueRef::String(v) => serializer.serialize_str(v),
            ValueRef::ByteArray(v) => v.serialize(serializer),
            ValueRef::IntArray(v) => v.serialize(serializer),
            ValueRef::LongArray(v) => v.serialize(serializer),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        ValueRef::from(self).serialize(serializer)
    }
}
