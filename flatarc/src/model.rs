//! Tree navigation facade
//! ----------------------
//!
//! A row-addressable view over [`DirectoryStore`] for incremental
//! disclosure: a consumer (CLI walker, GUI tree, test) asks how many rows a
//! node currently has, whether it can still be expanded, and where a node
//! sits among its siblings. Expansion is an explicit two-phase protocol —
//! `can_expand` is free, `expand` pays the one archive-index query — so a
//! presentation layer can show an expansion affordance without ever
//! resolving the subtree behind it.

use crate::error::{Error, Result};
use crate::index::ArchiveIndex;
use crate::store::{DirectoryNode, DirectoryStore, FileEntry, NodeId};

pub struct LazyTreeModel<I> {
    store: DirectoryStore<I>,
}

impl<I: ArchiveIndex> LazyTreeModel<I> {
    pub fn new(index: I) -> Result<Self> {
        Ok(LazyTreeModel {
            store: DirectoryStore::new(index)?,
        })
    }

    pub fn root(&self) -> NodeId {
        self.store.root()
    }

    pub fn node(&self, id: NodeId) -> Result<&DirectoryNode> {
        self.store.node(id)
    }

    /// Number of currently materialized children. Zero before the first
    /// expansion, which is not the same as "no subdirectories" — check
    /// [`can_expand`](Self::can_expand).
    pub fn row_count(&self, id: NodeId) -> usize {
        self.store.node(id).map_or(0, |node| node.children().len())
    }

    /// Whether expanding `id` could still discover children, i.e. whether
    /// the node is unfetched. True even when the index hinted at no
    /// subdirectories; only a fetch settles it.
    pub fn can_expand(&self, id: NodeId) -> bool {
        self.store.node(id).map_or(false, |node| !node.is_fetched())
    }

    /// Force-fetch the children of `id`. Idempotent; no-op once fetched.
    pub fn expand(&mut self, id: NodeId) -> Result<()> {
        self.store.children_of(id).map(|_| ())
    }

    pub fn children(&mut self, id: NodeId) -> Result<&[NodeId]> {
        self.store.children_of(id)
    }

    /// Position of `id` among its parent's children; 0 for the root.
    pub fn row_of(&self, id: NodeId) -> Result<usize> {
        let node = self.store.node(id)?;
        match node.parent {
            // Within the arena only the root is parentless; a detached node
            // cannot be represented here, but a stale foreign id is caught
            // by the `node` lookup above.
            None => Ok(0),
            Some(parent) => self
                .store
                .node(parent)?
                .children()
                .iter()
                .position(|&sibling| sibling == id)
                .ok_or(Error::DetachedNode),
        }
    }

    /// Fresh file listing for `path`; see [`DirectoryStore::files_of`].
    pub fn files_of(&self, path: &str) -> Result<Vec<FileEntry>> {
        self.store.files_of(path)
    }

    /// Resolve a `/`-separated directory path to its node, expanding along
    /// the way. `None` when the archive has no such directory.
    pub fn node_at(&mut self, path: &str) -> Result<Option<NodeId>> {
        let mut current = self.root();
        if path.is_empty() {
            return Ok(Some(current));
        }
        let mut prefix = String::new();
        for segment in path.split('/') {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(segment);
            let children = self.store.children_of(current)?.to_vec();
            let mut found = None;
            for child in children {
                if self.store.node(child)?.path == prefix {
                    found = Some(child);
                    break;
                }
            }
            match found {
                Some(child) => current = child,
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }

    /// First file under `path`, directly or in any descendant directory.
    ///
    /// Direct files win; otherwise descendant directories are traversed
    /// depth-first in natural order, checking each directory's direct files
    /// before descending, and the traversal stops at the first hit. Only
    /// the directories actually visited are fetched, so an empty prefix of
    /// a large subtree stays cheap. `None` iff the whole subtree holds no
    /// files.
    pub fn first_descendant_file(&mut self, path: &str) -> Result<Option<FileEntry>> {
        let mut files = self.files_of(path)?;
        if !files.is_empty() {
            return Ok(Some(files.remove(0)));
        }
        let start = match self.node_at(path)? {
            Some(id) => id,
            None => return Ok(None),
        };

        let mut pending = self.store.children_of(start)?.to_vec();
        pending.reverse();
        while let Some(id) = pending.pop() {
            let dir_path = self.store.node(id)?.path.clone();
            let mut files = self.store.files_of(&dir_path)?;
            if !files.is_empty() {
                return Ok(Some(files.remove(0)));
            }
            // The has_subdirs hint spares a query on leaf directories.
            if self.store.node(id)?.has_subdirs {
                let mut subdirs = self.store.children_of(id)?.to_vec();
                subdirs.reverse();
                pending.extend(subdirs);
            }
        }
        Ok(None)
    }

    /// The underlying store, for consumers that need direct access (for
    /// example to the archive index).
    pub fn store(&self) -> &DirectoryStore<I> {
        &self.store
    }
}
