use std::fmt;

use serde::Serialize;

use crate::Kind;

/// The broad shape of a kind. Editors branch on this to decide whether a
/// tag has a value field, and whether children can be added to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Scalar,
    Array,
    Compound,
    List,
}

/// Static display information about a [`Kind`].
#[derive(Debug, PartialEq, Eq)]
pub struct KindInfo {
    pub kind: Kind,
    /// Name shown in type choices, eg `TAG_Int`.
    pub display_name: &'static str,
    /// File name of the 16x16 icon used for this kind in a tree view.
    pub icon: &'static str,
    pub category: Category,
}

// Ordered by tag id, so a kind's entry lives at `id - 1`.
static KINDS: [KindInfo; 12] = [
    info(Kind::Byte, "TAG_Byte", "nbt_tag_byte.png", Category::Scalar),
    info(Kind::Short, "TAG_Short", "nbt_tag_short.png", Category::Scalar),
    info(Kind::Int, "TAG_Int", "nbt_tag_int.png", Category::Scalar),
    info(Kind::Long, "TAG_Long", "nbt_tag_long.png", Category::Scalar),
    info(Kind::Float, "TAG_Float", "nbt_tag_float.png", Category::Scalar),
    info(Kind::Double, "TAG_Double", "nbt_tag_double.png", Category::Scalar),
    info(Kind::ByteArray, "TAG_Byte_Array", "nbt_tag_array.png", Category::Array),
    info(Kind::String, "TAG_String", "nbt_tag_string.png", Category::Scalar),
    info(Kind::List, "TAG_List", "nbt_tag_list.png", Category::List),
    info(Kind::Compound, "TAG_Compound", "nbt_tag_compound.png", Category::Compound),
    info(Kind::IntArray, "TAG_Int_Array", "nbt_tag_array.png", Category::Array),
    info(Kind::LongArray, "TAG_Long_Array", "nbt_tag_array.png", Category::Array),
];

const fn info(
    kind: Kind,
    display_name: &'static str,
    icon: &'static str,
    category: Category,
) -> KindInfo {
    KindInfo {
        kind,
        display_name,
        icon,
        category,
    }
}

impl Kind {
    /// Every kind, in the order an editor presents them as type choices.
    pub const ALL: [Kind; 12] = [
        Kind::Byte,
        Kind::Short,
        Kind::Int,
        Kind::Long,
        Kind::Float,
        Kind::Double,
        Kind::String,
        Kind::Compound,
        Kind::List,
        Kind::ByteArray,
        Kind::IntArray,
        Kind::LongArray,
    ];

    pub fn info(self) -> &'static KindInfo {
        &KINDS[u8::from(self) as usize - 1]
    }

    pub fn display_name(self) -> &'static str {
        self.info().display_name
    }

    pub fn category(self) -> Category {
        self.info().category
    }

    /// Whether tags of this kind hold other tags rather than a value.
    pub fn is_container(self) -> bool {
        matches!(self.category(), Category::Compound | Category::List)
    }

    /// Reverse of [`Kind::display_name`].
    pub fn from_display_name(name: &str) -> Option<Kind> {
        Some(match name {
            "TAG_Byte" => Kind::Byte,
            "TAG_Short" => Kind::Short,
            "TAG_Int" => Kind::Int,
            "TAG_Long" => Kind::Long,
            "TAG_Float" => Kind::Float,
            "TAG_Double" => Kind::Double,
            "TAG_Byte_Array" => Kind::ByteArray,
            "TAG_String" => Kind::String,
            "TAG_List" => Kind::List,
            "TAG_Compound" => Kind::Compound,
            "TAG_Int_Array" => Kind::IntArray,
            "TAG_Long_Array" => Kind::LongArray,
            _ => return None,
        })
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Serialize for Kind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.display_name())
    }
}
