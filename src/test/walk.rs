use crate::{path, Compound, List, Path, Tag};

use super::{editor_tree, small_tree};

#[test]
fn pre_order_in_insertion_order() {
    let root = small_tree();
    let walked: Vec<(Path, Tag)> = root.walk().map(|(p, t)| (p, t.clone())).collect();

    let list = root.get_child("y").unwrap().clone();
    let expected = vec![
        (path![], root.clone()),
        (path!["x"], Tag::Int(1)),
        (path!["y"], list),
        (path!["y", 0], Tag::Byte(1)),
        (path!["y", 1], Tag::Byte(2)),
    ];
    assert_eq!(walked, expected);
}

#[test]
fn walk_is_restartable() {
    let mut root = small_tree();
    assert_eq!(root.walk().count(), 5);
    assert_eq!(root.walk().count(), 5);

    root.remove_child("y").unwrap();
    assert_eq!(root.walk().count(), 2);
}

#[test]
fn walk_is_lazy() {
    let root = editor_tree();
    let mut walk = root.walk();
    assert_eq!(walk.next().map(|(p, _)| p), Some(path![]));
    assert_eq!(walk.next().map(|(p, _)| p), Some(path!["test1"]));
}

#[test]
fn walk_nested_containers() {
    let inner: Compound = [("b", Tag::Int(2)), ("a", Tag::Int(1))].into_iter().collect();
    let mut list = List::new();
    list.push(Tag::Compound(inner)).unwrap();
    let root = Tag::Compound([("l", Tag::List(list))].into_iter().collect());

    let paths: Vec<String> = root.walk().map(|(p, _)| p.to_string()).collect();
    assert_eq!(paths, ["/", "l", "l[0]", "l[0].b", "l[0].a"]);
}

#[test]
fn walk_leaf_root() {
    let root = Tag::Long(1);
    let walked: Vec<_> = root.walk().collect();
    assert_eq!(walked, vec![(Path::root(), &root)]);
}

#[test]
fn walk_empty_containers() {
    let root = Tag::Compound(
        [
            ("c", Tag::Compound(Compound::new())),
            ("l", Tag::List(List::new())),
        ]
        .into_iter()
        .collect(),
    );
    assert_eq!(root.walk().count(), 3);
}
