use log::debug;

use crate::{
    error::{Error, Result},
    Kind, Path, Segment, StoreOpts, Tag, Value, ValueRef, Walk,
};

/// One NBT document: a root tag and the name it was stored under, with
/// mutation addressed by [`Path`].
///
/// Every mutation is a single step that either happens completely or fails
/// leaving the tree untouched. On top of the [`Tag`] methods, the store
/// bounds nesting depth and picks the rename policy according to its
/// [`StoreOpts`].
#[derive(Debug, Clone, PartialEq)]
pub struct TagStore {
    name: String,
    root: Tag,
    opts: StoreOpts,
}

impl TagStore {
    /// Create a store with default options.
    pub fn new(name: impl Into<String>, root: Tag) -> Self {
        Self {
            name: name.into(),
            root,
            opts: StoreOpts::new(),
        }
    }

    /// Create a store, checking `root` against `opts`.
    pub fn with_opts(name: impl Into<String>, root: Tag, opts: StoreOpts) -> Result<Self> {
        check_depth(&root, 0, opts.max_depth)?;
        Ok(Self {
            name: name.into(),
            root,
            opts,
        })
    }

    /// Name of the root tag. Usually the empty string.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn root(&self) -> &Tag {
        &self.root
    }

    pub fn opts(&self) -> &StoreOpts {
        &self.opts
    }

    pub fn into_parts(self) -> (String, Tag) {
        (self.name, self.root)
    }

    pub fn get(&self, path: &Path) -> Result<&Tag> {
        self.root.get_path(path)
    }

    pub fn get_kind(&self, path: &Path) -> Result<Kind> {
        Ok(self.get(path)?.kind())
    }

    pub fn get_value(&self, path: &Path) -> Result<ValueRef<'_>> {
        self.get(path)?.value()
    }

    /// The child under `segment` of the container at `path`.
    pub fn get_child(&self, path: &Path, segment: impl Into<Segment>) -> Result<&Tag> {
        self.get(path)?.child(&segment.into())
    }

    /// Insert or replace a child of the container at `path`. See
    /// [`Tag::set_child`].
    pub fn set_child(
        &mut self,
        path: &Path,
        segment: impl Into<Segment>,
        tag: Tag,
    ) -> Result<Option<Tag>> {
        check_depth(&tag, path.depth() + 1, self.opts.max_depth)?;
        let segment = segment.into();
        debug!("set {} at {}", tag.kind(), path.child(segment.clone()));
        self.root.get_path_mut(path)?.set_child(segment, tag)
    }

    /// Append to the list at `path`, returning the index of the new element.
    pub fn append_child(&mut self, path: &Path, tag: Tag) -> Result<usize> {
        check_depth(&tag, path.depth() + 1, self.opts.max_depth)?;
        let parent = self.root.get_path_mut(path)?;
        parent.append_child(tag)?;
        let index = parent.len().unwrap_or(1) - 1;
        debug!("appended {}", path.child(index));
        Ok(index)
    }

    /// Take the child under `segment` out of the container at `path`.
    pub fn remove_child(&mut self, path: &Path, segment: impl Into<Segment>) -> Result<Tag> {
        let segment = segment.into();
        let removed = self.root.get_path_mut(path)?.remove_child(segment.clone())?;
        debug!("removed {}", path.child(segment));
        Ok(removed)
    }

    /// Rename an entry of the compound at `path`. Collisions are handled per
    /// the store's [`crate::RenamePolicy`].
    pub fn rename_child(&mut self, path: &Path, old: &str, new: &str) -> Result<()> {
        let policy = self.opts.rename_policy;
        self.root
            .get_path_mut(path)?
            .rename_child_with(old, new, policy)?;
        debug!("renamed {:?} to {:?} in {}", old, new, path);
        Ok(())
    }

    /// Change the kind and value of the scalar or array tag at `path`.
    ///
    /// If the tag is an element of a list holding other elements, `kind` must
    /// be the list's element kind. A list's only element can change to any
    /// kind, taking the list with it.
    pub fn retype(&mut self, path: &Path, kind: Kind, value: Value) -> Result<()> {
        match (path.parent(), path.last()) {
            (Some(parent), Some(segment)) => self
                .root
                .get_path_mut(&parent)?
                .retype_child(segment.clone(), kind, value)?,
            _ => self.root.retype(kind, value)?,
        }
        debug!("retyped {} to {}", path, kind);
        Ok(())
    }

    /// Depth-first, pre-order walk of the whole document.
    pub fn walk(&self) -> Walk<'_> {
        self.root.walk()
    }
}

/// Fails if `tag`, placed at `depth`, has containers nested below
/// `max_depth`.
fn check_depth(tag: &Tag, depth: usize, max_depth: usize) -> Result<()> {
    for (path, tag) in tag.walk() {
        if tag.kind().is_container() && depth + path.depth() > max_depth {
            return Err(Error::too_deep(max_depth));
        }
    }
    Ok(())
}
