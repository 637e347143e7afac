//! A toolkit independent model of a tree-view NBT editor.
//!
//! [`Editor`] holds what a tree-view panel needs: the rows to show, the
//! selected row, whether "Add Tag" applies to it, and the add and edit
//! actions. [`TagDraft`] is the state of the edit dialog: the name, value
//! text and type choice.
//!
//! A UI forwards its events here. A rejected draft comes back as an error
//! with the tree untouched, so the dialog can stay open and show the
//! message.
//!
//! ```
//! use nbtedit::{editor::Editor, path, Compound, Kind, Tag, TagStore};
//!
//! # fn main() -> nbtedit::error::Result<()> {
//! let root: Compound = [("test1", Tag::Int(100))].into_iter().collect();
//! let mut editor = Editor::new(TagStore::new("tag_compound_test", Tag::Compound(root)));
//!
//! let mut draft = editor.new_draft();
//! draft.name = "test2".into();
//! draft.set_kind(Kind::String)?;
//! draft.value = "test string".into();
//! editor.add_tag(&draft)?;
//!
//! editor.select(path!["test1"])?;
//! let mut draft = editor.draft_for_selection()?;
//! draft.value = "200".into();
//! editor.edit_tag(&draft)?;
//!
//! let labels: Vec<_> = editor.rows().into_iter().map(|r| r.label).collect();
//! assert_eq!(labels, ["tag_compound_test", "test1: 200", "test2: test string"]);
//! # Ok(())
//! # }
//! ```
use log::debug;

use crate::{
    convert::{convert_value, default_value, format_value, parse_value},
    error::{Error, Result},
    Compound, Kind, KindInfo, List, Path, Segment, Tag, TagStore,
};

type CommitHook = Box<dyn FnMut(&str, &Tag)>;

/// One line of the tree view.
#[derive(Debug, Clone, PartialEq)]
pub struct Row<'a> {
    pub path: Path,
    pub depth: usize,
    pub label: String,
    /// Display name and icon for the tag's kind.
    pub info: &'static KindInfo,
    pub tag: &'a Tag,
}

/// The fields of the add/edit dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct TagDraft {
    pub name: String,
    /// Value as typed. Ignored for compound and list kinds.
    pub value: String,
    pub kind: Kind,
    /// False for list elements and an unnamed root, which have no name to
    /// edit.
    pub name_editable: bool,
}

impl TagDraft {
    /// A draft for an existing tag.
    pub fn for_tag(name: impl Into<String>, tag: &Tag, name_editable: bool) -> Self {
        Self {
            name: name.into(),
            value: tag.value().map(format_value).unwrap_or_default(),
            kind: tag.kind(),
            name_editable,
        }
    }

    /// Switch the type choice, converting the value text to the new kind.
    ///
    /// Fails with `Conversion` if the current text cannot be read as `kind`,
    /// leaving the draft as it was.
    pub fn set_kind(&mut self, kind: Kind) -> Result<()> {
        let value = if kind.is_container() {
            String::new()
        } else if self.kind.is_container() {
            default_value(kind).map(|v| format_value((&v).into())).unwrap_or_default()
        } else {
            // Text that reads as the new kind is kept as typed. Otherwise the
            // old value is converted, which also covers one array kind to
            // another.
            let value = match parse_value(kind, &self.value) {
                Ok(value) => value,
                Err(_) => convert_value(&parse_value(self.kind, &self.value)?, kind)?,
            };
            format_value((&value).into())
        };
        self.kind = kind;
        self.value = value;
        Ok(())
    }

    /// The tag this draft describes. Container kinds give an empty
    /// container.
    pub fn to_tag(&self) -> Result<Tag> {
        Ok(match self.kind {
            Kind::Compound => Tag::Compound(Compound::new()),
            Kind::List => Tag::List(List::new()),
            kind => Tag::from(parse_value(kind, &self.value)?),
        })
    }
}

/// The editor panel: a [`TagStore`] with a selection and a commit hook.
pub struct Editor {
    store: TagStore,
    selection: Path,
    on_commit: Option<CommitHook>,
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("store", &self.store)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

impl Editor {
    /// Start editing `store` with the root selected.
    pub fn new(store: TagStore) -> Self {
        Self {
            store,
            selection: Path::root(),
            on_commit: None,
        }
    }

    /// Set the callback run by [`Editor::commit`]. It gets the root name and
    /// root tag.
    pub fn on_commit(&mut self, hook: impl FnMut(&str, &Tag) + 'static) {
        self.on_commit = Some(Box::new(hook));
    }

    /// Hand the current tree to the commit hook, if there is one. Edits are
    /// applied to the store as they happen, so there is nothing else to
    /// commit.
    pub fn commit(&mut self) {
        if let Some(hook) = self.on_commit.as_mut() {
            debug!("committing {:?}", self.store.name());
            hook(self.store.name(), self.store.root());
        }
    }

    pub fn store(&self) -> &TagStore {
        &self.store
    }

    pub fn into_store(self) -> TagStore {
        self.store
    }

    /// Rows of the tree view, parents before children.
    pub fn rows(&self) -> Vec<Row<'_>> {
        self.store
            .walk()
            .map(|(path, tag)| Row {
                label: self.label(&path, tag),
                depth: path.depth(),
                info: tag.kind().info(),
                path,
                tag,
            })
            .collect()
    }

    fn label(&self, path: &Path, tag: &Tag) -> String {
        let value = tag.value().ok().map(format_value);
        match (path.last(), value) {
            (None, _) => self.store.name().to_owned(),
            (Some(Segment::Key(key)), Some(value)) => format!("{}: {}", key, value),
            (Some(Segment::Key(key)), None) => key.clone(),
            (Some(Segment::Index(_)), Some(value)) => value,
            (Some(Segment::Index(i)), None) => format!("[{}]", i),
        }
    }

    /// Select the tag at `path`. Fails if there is no such tag.
    pub fn select(&mut self, path: Path) -> Result<()> {
        self.store.get(&path)?;
        self.selection = path;
        Ok(())
    }

    pub fn selection(&self) -> &Path {
        &self.selection
    }

    pub fn selected(&self) -> Result<&Tag> {
        self.store.get(&self.selection)
    }

    /// Whether tags can be added under the selection, ie it is a compound or
    /// a list.
    pub fn can_add(&self) -> bool {
        self.selected()
            .map(|tag| tag.kind().is_container())
            .unwrap_or(false)
    }

    /// The add dialog's starting state: an unnamed `TAG_Byte` of 0. Only a
    /// compound's children are named.
    pub fn new_draft(&self) -> TagDraft {
        let name_editable = matches!(self.selected(), Ok(Tag::Compound(_)));
        TagDraft::for_tag("", &Tag::Byte(0), name_editable)
    }

    /// The edit dialog's starting state for the selected tag.
    pub fn draft_for_selection(&self) -> Result<TagDraft> {
        let tag = self.selected()?;
        Ok(match self.selection.last() {
            None => {
                let name = self.store.name();
                TagDraft::for_tag(name, tag, !name.is_empty())
            }
            Some(Segment::Key(key)) => TagDraft::for_tag(key.as_str(), tag, true),
            Some(Segment::Index(_)) => TagDraft::for_tag("", tag, false),
        })
    }

    /// Add the tag described by `draft` under the selected container and
    /// return its path. In a compound it goes under `draft.name`, replacing
    /// any entry already there; in a list it is appended.
    pub fn add_tag(&mut self, draft: &TagDraft) -> Result<Path> {
        let tag = draft.to_tag()?;
        let parent = self.selection.clone();

        let path = match self.store.get(&parent)?.kind() {
            Kind::Compound => {
                self.store.set_child(&parent, draft.name.as_str(), tag)?;
                parent.child(draft.name.as_str())
            }
            Kind::List => {
                let index = self.store.append_child(&parent, tag)?;
                parent.child(index)
            }
            kind => {
                debug!("cannot add to {} at {}", kind, parent);
                return Err(Error::type_mismatch("a compound or list", kind));
            }
        };
        debug!("added {} at {}", draft.kind, path);
        Ok(path)
    }

    /// Apply `draft` to the selected tag: rename it, change its value, or
    /// change its kind.
    ///
    /// Everything is checked before the tree is touched. A compound or list
    /// can be renamed but not changed to another kind.
    pub fn edit_tag(&mut self, draft: &TagDraft) -> Result<()> {
        let current = self.selected()?.kind();
        let value = if current.is_container() {
            if draft.kind != current {
                debug!("rejected changing {} to {}", current, draft.kind);
                return Err(Error::type_mismatch(current.display_name(), draft.kind));
            }
            None
        } else {
            Some(parse_value(draft.kind, &draft.value)?)
        };

        let path = self.selection.clone();
        match path.last() {
            None => {
                if let Some(value) = value {
                    self.store.retype(&path, draft.kind, value)?;
                }
                if draft.name != self.store.name() {
                    self.store.set_name(draft.name.as_str());
                }
            }
            Some(Segment::Key(old)) => {
                let parent = path.parent().unwrap_or_default();
                // Renaming is the only step that can fail here, so it goes
                // first.
                if *old != draft.name {
                    self.store.rename_child(&parent, old, &draft.name)?;
                    self.selection = parent.child(draft.name.as_str());
                }
                if let Some(value) = value {
                    self.store.retype(&self.selection, draft.kind, value)?;
                }
            }
            Some(Segment::Index(_)) => {
                if let Some(value) = value {
                    self.store.retype(&path, draft.kind, value)?;
                }
            }
        }
        debug!("edited {}", self.selection);
        Ok(())
    }

    /// Remove the selected tag and select its parent. The root cannot be
    /// removed.
    pub fn remove_selected(&mut self) -> Result<Tag> {
        let (parent, segment) = match (self.selection.parent(), self.selection.last()) {
            (Some(parent), Some(segment)) => (parent, segment.clone()),
            _ => return Err(Error::bespoke("cannot remove the root tag")),
        };
        let removed = self.store.remove_child(&parent, segment)?;
        self.selection = parent;
        Ok(removed)
    }
}
