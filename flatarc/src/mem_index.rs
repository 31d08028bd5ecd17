//! In-memory reference implementation of [`ArchiveIndex`].
//!
//! Production archives ship their own index (typically a database keyed by
//! directory prefix); this implementation exists so the browsing layers have
//! a concrete collaborator for CLIs and tests. It is built once from a flat
//! `(path, size)` listing and precomputes, per directory, the aggregate
//! stats and the immediate child/file lists, so every query afterwards is
//! proportional to the size of its answer rather than to the archive.
//!
//! The listing can come from a JSON manifest:
//!
//! ```json
//! { "entries": [ { "path": "a/x.bin", "size": 10 } ] }
//! ```

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{Error, Result};
use crate::index::{ArchiveIndex, DirInfo, SubdirInfo};

/// One archive entry as it appears in a JSON manifest.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ManifestEntry {
    pub path: String,
    pub size: u64,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
}

#[derive(Debug, Default)]
struct DirRecord {
    size: u64,
    count: u64,
    subdirs: Vec<String>,
    files: Vec<(String, u64)>,
}

#[derive(Debug)]
pub struct MemoryIndex {
    dirs: HashMap<String, DirRecord>,
}

impl MemoryIndex {
    /// Build an index from `(path, size)` pairs, one per archive entry.
    /// Paths are validated; duplicates and malformed keys are rejected.
    pub fn from_entries<E>(entries: E) -> Result<Self>
    where
        E: IntoIterator<Item = (String, u64)>,
    {
        let mut dirs: HashMap<String, DirRecord> = HashMap::new();
        dirs.insert(String::new(), DirRecord::default());

        let mut seen_files: HashSet<String> = HashSet::new();
        let mut seen_links: HashSet<(String, String)> = HashSet::new();

        for (path, size) in entries {
            validate_path(&path)?;
            if !seen_files.insert(path.clone()) {
                return Err(Error::InvalidFormat(format!("duplicate entry: {path}")));
            }

            let ancestors = ancestor_dirs(&path);
            for dir in &ancestors {
                let record = dirs.entry(dir.clone()).or_default();
                record.size += size;
                record.count += 1;
            }
            for pair in ancestors.windows(2) {
                let link = (pair[0].clone(), pair[1].clone());
                if seen_links.insert(link) {
                    if let Some(record) = dirs.get_mut(&pair[0]) {
                        record.subdirs.push(pair[1].clone());
                    }
                }
            }
            let parent = ancestors.last().cloned().unwrap_or_default();
            if let Some(record) = dirs.get_mut(&parent) {
                record.files.push((path, size));
            }
        }

        Ok(MemoryIndex { dirs })
    }

    /// Load a JSON manifest file and build the index from its entries.
    pub fn from_manifest_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let manifest: Manifest = serde_json::from_reader(reader)?;
        Self::from_entries(
            manifest
                .entries
                .into_iter()
                .map(|entry| (entry.path, entry.size)),
        )
    }
}

impl ArchiveIndex for MemoryIndex {
    fn get_dir_info(&self, path: &str) -> Result<DirInfo> {
        // A read-only archive has no "missing directory" distinct from an
        // empty one; unknown prefixes answer with zeros.
        let record = self.dirs.get(path);
        Ok(DirInfo {
            size: record.map_or(0, |r| r.size),
            count: record.map_or(0, |r| r.count),
            has_subdirs: record.map_or(false, |r| !r.subdirs.is_empty()),
            has_files: record.map_or(false, |r| !r.files.is_empty()),
        })
    }

    fn get_subdir_infos(&self, path: &str) -> Result<Vec<SubdirInfo>> {
        let record = match self.dirs.get(path) {
            Some(record) => record,
            None => return Ok(Vec::new()),
        };
        let mut infos = Vec::with_capacity(record.subdirs.len());
        for subdir in &record.subdirs {
            let child = self.dirs.get(subdir).ok_or_else(|| {
                Error::IndexUnavailable(format!("missing directory record for {subdir}"))
            })?;
            infos.push(SubdirInfo {
                path: subdir.clone(),
                size: child.size,
                count: child.count,
                has_subdirs: !child.subdirs.is_empty(),
                has_files: !child.files.is_empty(),
            });
        }
        Ok(infos)
    }

    fn get_files_with_size(&self, path: &str) -> Result<Vec<(String, u64)>> {
        Ok(self
            .dirs
            .get(path)
            .map_or_else(Vec::new, |record| record.files.clone()))
    }
}

fn validate_path(path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(Error::InvalidFormat("empty entry path".to_string()));
    }
    if path.starts_with('/') || path.ends_with('/') {
        return Err(Error::InvalidFormat(format!(
            "entry path must be relative without trailing slash: {path}"
        )));
    }
    for segment in path.split('/') {
        if segment.is_empty() || segment == "." || segment == ".." {
            return Err(Error::InvalidFormat(format!(
                "invalid path segment in: {path}"
            )));
        }
    }
    Ok(())
}

/// Directory prefixes of an entry path, outermost first, starting with the
/// root: `a/b/x.bin` -> `["", "a", "a/b"]`.
fn ancestor_dirs(path: &str) -> Vec<String> {
    let mut dirs = vec![String::new()];
    for (pos, ch) in path.char_indices() {
        if ch == '/' {
            dirs.push(path[..pos].to_string());
        }
    }
    dirs
}
