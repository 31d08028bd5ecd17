//! Archive index interface.
//!
//! A flat archive keeps its payloads under path-like keys; the index is the
//! side structure that can answer directory-shaped questions about that key
//! space without scanning it. Implementations are expected to answer in
//! better-than-linear time relative to the total entry count (a sorted key
//! index, a precomputed directory table, a database). The bundled
//! implementation is [`crate::mem_index::MemoryIndex`].
//!
//! All paths are relative, `/`-separated, with the empty string naming the
//! archive root. Queries are synchronous and may block on I/O; result order
//! is unspecified (callers sort).

use crate::error::Result;
use crate::natural;

/// Summary for a single directory prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirInfo {
    /// Total bytes of everything transitively under the path.
    pub size: u64,
    /// Total entries transitively under the path.
    pub count: u64,
    pub has_subdirs: bool,
    pub has_files: bool,
}

/// Summary for an immediate subdirectory of a queried path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubdirInfo {
    /// Full path of the subdirectory within the archive.
    pub path: String,
    pub size: u64,
    pub count: u64,
    pub has_subdirs: bool,
    pub has_files: bool,
}

pub trait ArchiveIndex {
    /// Aggregate summary for `path` itself.
    fn get_dir_info(&self, path: &str) -> Result<DirInfo>;

    /// Summaries for the immediate subdirectories of `path`.
    fn get_subdir_infos(&self, path: &str) -> Result<Vec<SubdirInfo>>;

    /// `(full_path, size)` for the immediate files of `path`.
    fn get_files_with_size(&self, path: &str) -> Result<Vec<(String, u64)>>;

    /// Lazy depth-first traversal starting at `path`, in natural order,
    /// querying one directory per step. Visits only what the consumer pulls.
    fn walk(&self, path: &str) -> Walk<'_, Self>
    where
        Self: Sized,
    {
        Walk {
            index: self,
            pending: vec![path.to_string()],
            failed: false,
        }
    }
}

/// One directory visited during a [`ArchiveIndex::walk`] traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub dir: String,
    /// Immediate subdirectory paths, natural order.
    pub subdirs: Vec<String>,
    /// Immediate file paths, natural order.
    pub files: Vec<String>,
}

/// Iterator behind [`ArchiveIndex::walk`]. Yields directories depth-first;
/// stops after the first index failure.
pub struct Walk<'a, I> {
    index: &'a I,
    pending: Vec<String>,
    failed: bool,
}

impl<I: ArchiveIndex> Iterator for Walk<'_, I> {
    type Item = Result<WalkEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let dir = self.pending.pop()?;
        match self.visit(&dir) {
            Ok(entry) => Some(Ok(entry)),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl<I: ArchiveIndex> Walk<'_, I> {
    fn visit(&mut self, dir: &str) -> Result<WalkEntry> {
        let mut subdir_infos = self.index.get_subdir_infos(dir)?;
        subdir_infos
            .sort_by(|a, b| natural::compare(final_segment(&a.path), final_segment(&b.path)));
        let subdirs: Vec<String> = subdir_infos.into_iter().map(|info| info.path).collect();

        let mut files: Vec<String> = self
            .index
            .get_files_with_size(dir)?
            .into_iter()
            .map(|(path, _size)| path)
            .collect();
        files.sort_by(|a, b| natural::compare(final_segment(a), final_segment(b)));

        // Depth-first: push in reverse so the natural-first subdirectory is
        // visited next.
        self.pending.extend(subdirs.iter().rev().cloned());

        Ok(WalkEntry {
            dir: dir.to_string(),
            subdirs,
            files,
        })
    }
}

/// Final segment of a `/`-separated archive path; the whole path when it has
/// a single segment.
pub fn final_segment(path: &str) -> &str {
    match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}
