use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    error::{Error, Result},
    RenamePolicy, Tag,
};

/// Named children of a compound tag. Keys are unique and iterate in the order
/// they were first inserted.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Compound(IndexMap<String, Tag>);

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Tag> {
        self.0.get_mut(key)
    }

    /// Insert `tag` under `key`, returning whatever was there before. An
    /// existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, tag: Tag) -> Option<Tag> {
        self.0.insert(key.into(), tag)
    }

    /// Remove the entry under `key`. Later entries shift down, so the order
    /// of the rest is unchanged.
    pub fn remove(&mut self, key: &str) -> Option<Tag> {
        self.0.shift_remove(key)
    }

    /// Move the entry under `old` to `new`. The entry goes to the end, as if
    /// removed and inserted again.
    ///
    /// If `new` is taken by a different entry, `policy` decides between
    /// failing with `KeyConflict` and discarding that entry. Nothing is
    /// changed on failure.
    pub fn rename(&mut self, old: &str, new: &str, policy: RenamePolicy) -> Result<()> {
        if !self.0.contains_key(old) {
            return Err(Error::key_not_found(old));
        }
        if old == new {
            return Ok(());
        }
        if self.0.contains_key(new) {
            match policy {
                RenamePolicy::Reject => return Err(Error::key_conflict(new)),
                RenamePolicy::Overwrite => {
                    self.0.shift_remove(new);
                }
            }
        }

        if let Some(tag) = self.0.shift_remove(old) {
            self.0.insert(new.to_owned(), tag);
        }
        Ok(())
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Tag> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, Tag> {
        self.0.iter_mut()
    }
}

impl<K: Into<String>> FromIterator<(K, Tag)> for Compound {
    fn from_iter<T: IntoIterator<Item = (K, Tag)>>(iter: T) -> Self {
        Compound(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl IntoIterator for Compound {
    type Item = (String, Tag);
    type IntoIter = indexmap::map::IntoIter<String, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Tag);
    type IntoIter = indexmap::map::Iter<'a, String, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
