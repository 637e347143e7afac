use crate::{Path, Segment, Tag};

/// Lazy depth-first, pre-order iterator over a tag tree, yielding each tag
/// with its path from where the walk started. Compound entries come in
/// insertion order, list elements by index.
///
/// Created by [`Tag::walk`] or [`crate::TagStore::walk`]. The walk borrows
/// the tree, so a fresh walk always sees the tree as it is now.
pub struct Walk<'a> {
    // Pending nodes, next to visit on top.
    stack: Vec<(Path, &'a Tag)>,
}

impl<'a> Walk<'a> {
    pub(crate) fn new(root: &'a Tag) -> Self {
        Self {
            stack: vec![(Path::root(), root)],
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (Path, &'a Tag);

    fn next(&mut self) -> Option<Self::Item> {
        let (path, tag) = self.stack.pop()?;

        match tag {
            Tag::Compound(c) => {
                for (key, child) in c.iter().rev() {
                    self.stack.push((path.child(Segment::Key(key.clone())), child));
                }
            }
            Tag::List(l) => {
                for (i, child) in l.iter().enumerate().rev() {
                    self.stack.push((path.child(i), child));
                }
            }
            _ => {}
        }

        Some((path, tag))
    }
}
