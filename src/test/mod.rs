use std::convert::TryFrom;

use crate::{Compound, Kind, List, Tag};

mod convert;
mod walk;

/// `{"x": Int(1), "y": [Byte(1), Byte(2)]}`
pub(crate) fn small_tree() -> Tag {
    let list = List::try_from(vec![Tag::Byte(1), Tag::Byte(2)]).unwrap();
    let root: Compound = [("x", Tag::Int(1)), ("y", Tag::List(list))]
        .into_iter()
        .collect();
    Tag::Compound(root)
}

/// The tree the editor panel is usually demonstrated with.
pub(crate) fn editor_tree() -> Tag {
    let bytes = (1..=4).map(Tag::Byte).collect::<Vec<_>>();
    let root: Compound = [
        ("test1", Tag::Int(100)),
        ("test2", Tag::from("test string")),
        ("test3", Tag::List(List::try_from(bytes).unwrap())),
        ("test4", Tag::IntArray(vec![])),
    ]
    .into_iter()
    .collect();
    Tag::Compound(root)
}

macro_rules! check_kinds {
    {$($kind:ident = $val:literal),* $(,)?} => {
        $(
            assert_eq!(u8::from(Kind::$kind), $val);
            assert_eq!(Kind::try_from($val as u8), Ok(Kind::$kind));
        )*
    };
}

#[test]
fn exhaustive_kind_check() {
    check_kinds! {
        Byte = 1,
        Short = 2,
        Int = 3,
        Long = 4,
        Float = 5,
        Double = 6,
        ByteArray = 7,
        String = 8,
        List = 9,
        Compound = 10,
        IntArray = 11,
        LongArray = 12,
    }

    assert!(Kind::try_from(0u8).is_err());
    for value in 13..=u8::MAX {
        assert!(Kind::try_from(value).is_err())
    }
}

#[test]
fn kind_table_is_indexed_by_kind() {
    for kind in Kind::ALL {
        assert_eq!(kind.info().kind, kind);
        assert_eq!(Kind::from_display_name(kind.display_name()), Some(kind));
        assert_eq!(kind.to_string(), kind.display_name());
    }
}

#[test]
fn kind_display_names() {
    assert_eq!(Kind::Byte.display_name(), "TAG_Byte");
    assert_eq!(Kind::ByteArray.display_name(), "TAG_Byte_Array");
    assert_eq!(Kind::Compound.display_name(), "TAG_Compound");
    assert_eq!(Kind::LongArray.display_name(), "TAG_Long_Array");
    assert_eq!(Kind::from_display_name("TAG_Nope"), None);
    assert_eq!(Kind::from_display_name("Int"), None);
}

#[test]
fn kind_categories() {
    use crate::Category;

    assert_eq!(Kind::Short.category(), Category::Scalar);
    assert_eq!(Kind::String.category(), Category::Scalar);
    assert_eq!(Kind::IntArray.category(), Category::Array);
    assert_eq!(Kind::List.category(), Category::List);
    assert_eq!(Kind::Compound.category(), Category::Compound);

    let containers: Vec<_> = Kind::ALL.into_iter().filter(|k| k.is_container()).collect();
    assert_eq!(containers, [Kind::Compound, Kind::List]);
}

#[test]
fn array_kinds_share_an_icon() {
    assert_eq!(Kind::ByteArray.info().icon, "nbt_tag_array.png");
    assert_eq!(Kind::IntArray.info().icon, "nbt_tag_array.png");
    assert_eq!(Kind::LongArray.info().icon, "nbt_tag_array.png");
    assert_eq!(Kind::Compound.info().icon, "nbt_tag_compound.png");
}

#[test]
fn kind_serializes_as_display_name() {
    let json = serde_json::to_string(&[Kind::Int, Kind::List]).unwrap();
    assert_eq!(json, r#"["TAG_Int","TAG_List"]"#);
}
