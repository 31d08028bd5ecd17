//! Flat archive browsing
//! ---------------------
//!
//! A flat archive is a read-only, path-keyed store of byte payloads. Keys
//! look like file paths (`a/b/x.bin`) but the archive itself has no
//! directory objects; the directory tree is purely virtual. Archives of
//! interest hold millions of entries, so this crate never materializes the
//! whole tree. Instead it expands exactly the directories a caller visits,
//! one archive-index query per directory, and keeps precomputed aggregate
//! size/count statistics attached to every visited level.
//!
//! The crate is layered strictly:
//!
//! - [`index::ArchiveIndex`] is the collaborator answering directory-summary
//!   queries in better-than-linear time relative to total entry count.
//!   [`mem_index::MemoryIndex`] is the bundled in-memory implementation,
//!   loadable from a JSON manifest.
//! - [`store::DirectoryStore`] owns the tree of directory nodes discovered
//!   so far and guarantees each directory is queried for its children at
//!   most once.
//! - [`model::LazyTreeModel`] is the row-addressable facade a presentation
//!   layer (CLI walker, GUI, test) drives: expand/collapse decisions, row
//!   lookups, file listings, and the first-file-in-subtree fallback.
//!
//! ```rust
//! use flatarc::mem_index::MemoryIndex;
//! use flatarc::model::LazyTreeModel;
//!
//! fn main() -> flatarc::error::Result<()> {
//!     let index = MemoryIndex::from_entries(vec![
//!         ("a/x.bin".to_string(), 10),
//!         ("a/b/y.bin".to_string(), 20),
//!     ])?;
//!     let mut model = LazyTreeModel::new(index)?;
//!     let root = model.root();
//!     let children = model.children(root)?.to_vec();
//!     for child in children {
//!         let node = model.node(child)?;
//!         println!("{} ({} entries)", node.name(), node.count);
//!     }
//!     Ok(())
//! }
//! ```

#[macro_use]
extern crate serde_derive;

pub mod error;
pub mod format;
pub mod index;
pub mod mem_index;
pub mod model;
pub mod natural;
pub mod store;

pub use error::{Error, Result};
pub use index::{ArchiveIndex, DirInfo, SubdirInfo, Walk, WalkEntry};
pub use mem_index::MemoryIndex;
pub use model::LazyTreeModel;
pub use store::{DirectoryNode, DirectoryStore, FileEntry, NodeId};
