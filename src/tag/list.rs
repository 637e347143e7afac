use std::convert::TryFrom;

use serde::Serialize;

use crate::{
    error::{Error, Result},
    Kind, Tag, Value,
};

use super::check_retype;

/// Children of a list tag. Every element has the same [`Kind`].
///
/// The element kind is set by the first element in the list. An empty list
/// takes whatever kind is added to it next, and remembers the kind it last
/// held so that it can still be written out with one.
///
/// Elements are only changed through [`List::set`] and [`List::retype`],
/// which check the kind.
#[derive(Debug, Clone, Default)]
pub struct List {
    kind: Option<Kind>,
    items: Vec<Tag>,
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty list that reports `kind` as its element kind until something
    /// is added.
    pub fn with_kind(kind: Kind) -> Self {
        Self {
            kind: Some(kind),
            items: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn element_kind(&self) -> Option<Kind> {
        self.items.first().map(Tag::kind).or(self.kind)
    }

    pub fn get(&self, index: usize) -> Option<&Tag> {
        self.items.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Tag> {
        self.items.get_mut(index)
    }

    fn check(&self, tag: &Tag) -> Result<()> {
        match self.items.first().map(Tag::kind) {
            Some(kind) if kind != tag.kind() => {
                Err(Error::list_kind_mismatch(kind, tag.kind()))
            }
            _ => Ok(()),
        }
    }

    /// Append `tag`. Fails with `ListKindMismatch` if the list already holds
    /// tags of another kind.
    pub fn push(&mut self, tag: Tag) -> Result<()> {
        self.check(&tag)?;
        self.kind = Some(tag.kind());
        self.items.push(tag);
        Ok(())
    }

    /// Replace the element at `index`, returning the old one. Only existing
    /// slots can be set. The sole element of a list may be replaced by any
    /// kind.
    pub fn set(&mut self, index: usize, tag: Tag) -> Result<Tag> {
        if index >= self.items.len() {
            return Err(Error::index_out_of_range(index, self.items.len()));
        }
        if self.items.len() > 1 {
            self.check(&tag)?;
        }
        self.kind = Some(tag.kind());
        Ok(std::mem::replace(&mut self.items[index], tag))
    }

    /// Replace the scalar or array element at `index` with `value`, which
    /// must be of `kind`. Like [`List::set`], only the sole element may
    /// change kind.
    pub fn retype(&mut self, index: usize, kind: Kind, value: Value) -> Result<()> {
        let current = self
            .items
            .get(index)
            .ok_or_else(|| Error::index_out_of_range(index, self.items.len()))?;
        check_retype(current, kind, &value)?;
        self.set(index, Tag::from(value))?;
        Ok(())
    }

    /// Remove the element at `index`, shifting later elements down.
    pub fn remove(&mut self, index: usize) -> Result<Tag> {
        if index >= self.items.len() {
            return Err(Error::index_out_of_range(index, self.items.len()));
        }
        Ok(self.items.remove(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Tag] {
        &self.items
    }
}

impl TryFrom<Vec<Tag>> for List {
    type Error = Error;

    /// Fails with `ListKindMismatch` if the tags are not all the same kind.
    fn try_from(items: Vec<Tag>) -> Result<Self> {
        let mut list = List::new();
        list.items.reserve(items.len());
        for tag in items {
            list.push(tag)?;
        }
        Ok(list)
    }
}

impl IntoIterator for List {
    type Item = Tag;
    type IntoIter = std::vec::IntoIter<Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Serialize for List {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(&self.items)
    }
}
