//! Directory node store
//! --------------------
//!
//! The store owns the tree of directory nodes discovered so far and
//! mediates all archive-index access for directory structure. Each
//! directory is queried for its children at most once: the first
//! `children_of` call issues one [`ArchiveIndex::get_subdir_infos`] query,
//! sorts the result naturally, caches it, and every later call answers from
//! the cache without I/O.
//!
//! Nodes live in a store-owned arena and are addressed by [`NodeId`]; the
//! parent link is an arena index, not shared ownership, so upward
//! navigation can never form a reference cycle. Nodes are never evicted:
//! only visited directories materialize children, and a browsing session
//! touches a tiny fraction of a multi-million-entry archive.
//!
//! File listings are deliberately not cached. Directory structure is
//! bounded and reused across navigation; file lists can be huge and are
//! typically viewed once per selection, so `files_of` is a fresh query
//! every time.

use crate::error::{Error, Result};
use crate::index::{final_segment, ArchiveIndex};
use crate::natural;

/// Handle to a node inside a [`DirectoryStore`]. Only meaningful for the
/// store that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One file of a directory listing: final path segment and payload size.
/// Transient; never retained in the node tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub size: u64,
}

/// Child state of a directory node. `Unfetched` means the archive index has
/// not been asked yet; `Fetched` with an empty list means the directory
/// genuinely has no subdirectories. There is no state in between, and no
/// way back.
#[derive(Debug, Clone)]
enum Children {
    Unfetched,
    Fetched(Vec<NodeId>),
}

/// One directory prefix within the archive's virtual namespace.
#[derive(Debug)]
pub struct DirectoryNode {
    /// Full directory path; the root node has the empty path.
    pub path: String,
    /// Bytes transitively under this path, snapshotted from the archive
    /// index at discovery time. Never recomputed from children.
    pub size: u64,
    /// Entries transitively under this path, same snapshot.
    pub count: u64,
    /// Index hint used to offer expansion before children are fetched.
    pub has_subdirs: bool,
    /// Arena index of the parent; `None` only for the root.
    pub parent: Option<NodeId>,
    children: Children,
}

impl DirectoryNode {
    /// Final path segment; empty for the root.
    pub fn name(&self) -> &str {
        final_segment(&self.path)
    }

    pub fn is_fetched(&self) -> bool {
        matches!(self.children, Children::Fetched(_))
    }

    /// Materialized children, natural order. Empty until fetched.
    pub fn children(&self) -> &[NodeId] {
        match self.children {
            Children::Fetched(ref ids) => ids,
            Children::Unfetched => &[],
        }
    }
}

pub struct DirectoryStore<I> {
    index: I,
    nodes: Vec<DirectoryNode>,
}

impl<I: ArchiveIndex> DirectoryStore<I> {
    /// Create a store over `index`. The root's aggregate stats are queried
    /// eagerly (the root is always visible); its children are not.
    pub fn new(index: I) -> Result<Self> {
        let info = index.get_dir_info("")?;
        let root = DirectoryNode {
            path: String::new(),
            size: info.size,
            count: info.count,
            has_subdirs: info.has_subdirs,
            parent: None,
            children: Children::Unfetched,
        };
        Ok(DirectoryStore {
            index,
            nodes: vec![root],
        })
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> Result<&DirectoryNode> {
        self.nodes.get(id.0).ok_or(Error::DetachedNode)
    }

    /// Children of `id`, fetching them from the archive index on first use.
    ///
    /// The query and the cache mutation are one logical step behind the
    /// `&mut self` borrow, so no caller can observe a half-populated node.
    /// On failure the node stays unfetched and the call can be retried.
    pub fn children_of(&mut self, id: NodeId) -> Result<&[NodeId]> {
        if !self.node(id)?.is_fetched() {
            self.fetch_children(id)?;
        }
        Ok(self.nodes[id.0].children())
    }

    fn fetch_children(&mut self, id: NodeId) -> Result<()> {
        let path = self.node(id)?.path.clone();
        let mut infos = self.index.get_subdir_infos(&path)?;
        infos.sort_by(|a, b| natural::compare(final_segment(&a.path), final_segment(&b.path)));

        let mut ids = Vec::with_capacity(infos.len());
        for info in infos {
            let child = NodeId(self.nodes.len());
            self.nodes.push(DirectoryNode {
                path: info.path,
                size: info.size,
                count: info.count,
                has_subdirs: info.has_subdirs,
                parent: Some(id),
                children: Children::Unfetched,
            });
            ids.push(child);
        }
        self.nodes[id.0].children = Children::Fetched(ids);
        Ok(())
    }

    /// Immediate files under `path`, natural order, freshly queried on every
    /// call. Empty when the directory holds only subdirectories.
    pub fn files_of(&self, path: &str) -> Result<Vec<FileEntry>> {
        let mut files: Vec<FileEntry> = self
            .index
            .get_files_with_size(path)?
            .into_iter()
            .map(|(file_path, size)| FileEntry {
                name: final_segment(&file_path).to_string(),
                size,
            })
            .collect();
        files.sort_by(|a, b| natural::compare(&a.name, &b.name));
        Ok(files)
    }

    /// The archive index collaborator, for walk-style consumers.
    pub fn index(&self) -> &I {
        &self.index
    }
}
