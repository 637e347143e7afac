use byteorder::{BigEndian, ByteOrder};
use serde::{
    de::{self, DeserializeSeed, Visitor},
    Deserialize,
};
use serde_bytes::ByteBuf;

use crate::{Compound, List, Tag};

// fastnbt hands NBT arrays to `deserialize_any` as a single entry map keyed
// by one of these.
const BYTE_ARRAY_TOKEN: &str = "__fastnbt_byte_array";
const INT_ARRAY_TOKEN: &str = "__fastnbt_int_array";
const LONG_ARRAY_TOKEN: &str = "__fastnbt_long_array";

/// Compounds are filled in the order their entries are read, so decoding
/// with `fastnbt::from_bytes::<Tag>` keeps the order of the file.
impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct TagVisitor;
        impl<'de> Visitor<'de> for TagVisitor {
            type Value = Tag;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("valid NBT")
            }

            fn visit_i8<E>(self, v: i8) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Tag::Byte(v))
            }

            fn visit_i16<E>(self, v: i16) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Tag::Short(v))
            }

            fn visit_i32<E>(self, v: i32) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Tag::Int(v))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Tag::Long(v))
            }

            fn visit_f32<E>(self, v: f32) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Tag::Float(v))
            }

            fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Tag::Double(v))
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Tag::String(v.to_owned()))
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Tag::String(v))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut list = List::new();
                while let Some(el) = seq.next_element::<Tag>()? {
                    list.push(el).map_err(de::Error::custom)?;
                }
                Ok(Tag::List(list))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                match map.next_key_seed(KeyClassifier)? {
                    Some(KeyClass::Compound(first_key)) => {
                        let mut compound = Compound::new();

                        compound.insert(first_key, map.next_value()?);
                        while let Some((key, value)) = map.next_entry::<String, Tag>()? {
                            compound.insert(key, value);
                        }

                        Ok(Tag::Compound(compound))
                    }
                    Some(KeyClass::ByteArray) => {
                        let data = map.next_value::<ByteBuf>()?;
                        Ok(Tag::ByteArray(data.iter().map(|&b| b as i8).collect()))
                    }
                    Some(KeyClass::IntArray) => {
                        let data = map.next_value::<ByteBuf>()?;
                        if data.len() % 4 != 0 {
                            return Err(de::Error::custom("could not read int array"));
                        }
                        Ok(Tag::IntArray(
                            data.chunks_exact(4).map(BigEndian::read_i32).collect(),
                        ))
                    }
                    Some(KeyClass::LongArray) => {
                        let data = map.next_value::<ByteBuf>()?;
                        if data.len() % 8 != 0 {
                            return Err(de::Error::custom("could not read long array"));
                        }
                        Ok(Tag::LongArray(
                            data.chunks_exact(8).map(BigEndian::read_i64).collect(),
                        ))
                    }
                    // No keys just means an empty compound.
                    None => Ok(Tag::Compound(Compound::new())),
                }
            }
        }

        deserializer.deserialize_any(TagVisitor)
    }
}

impl<'de> Deserialize<'de> for Compound {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match Tag::deserialize(deserializer)? {
            Tag::Compound(c) => Ok(c),
            other => Err(de::Error::custom(format!(
                "expected TAG_Compound, found {}",
                other.kind()
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for List {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match Tag::deserialize(deserializer)? {
            Tag::List(l) => Ok(l),
            other => Err(de::Error::custom(format!(
                "expected TAG_List, found {}",
                other.kind()
            ))),
        }
    }
}

struct KeyClassifier;

enum KeyClass {
    Compound(String),
    ByteArray,
    IntArray,
    LongArray,
}

impl KeyClass {
    fn of(key: &str) -> Option<KeyClass> {
        match key {
            BYTE_ARRAY_TOKEN => Some(KeyClass::ByteArray),
            INT_ARRAY_TOKEN => Some(KeyClass::IntArray),
            LONG_ARRAY_TOKEN => Some(KeyClass::LongArray),
            _ => None,
        }
    }
}

impl<'de> DeserializeSeed<'de> for KeyClassifier {
    type Value = KeyClass;

    fn deserialize<D>(self, deserializer: D) -> Result<KeyClass, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(self)
    }
}

impl<'de> Visitor<'de> for KeyClassifier {
    type Value = KeyClass;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("an nbt field string")
    }

    fn visit_string<E>(self, s: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(KeyClass::of(&s).unwrap_or(KeyClass::Compound(s)))
    }

    fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(KeyClass::of(s).unwrap_or_else(|| KeyClass::Compound(s.to_owned())))
    }
}
