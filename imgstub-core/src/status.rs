use crate::provision::resolve_entry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StatusReport {
    /// Targets holding real content (non-empty).
    pub filled: u64,
    /// Zero-byte placeholders still waiting for artwork.
    pub pending: u64,
    /// Targets with no file at all.
    pub missing: u64,
    /// Files under the managed directories that are not targets.
    pub orphaned: u64,
}

/// Read-only audit of the target list. Creates and modifies nothing.
pub fn status<S: AsRef<str>>(entries: &[S], base: &Path) -> StatusReport {
    let mut report = StatusReport::default();
    let mut expected = BTreeSet::new();

    for entry in entries {
        let path = resolve_entry(base, entry.as_ref());
        match fs::metadata(&path) {
            Ok(md) if md.len() > 0 => {
                report.filled += 1;
                println!("✔ listo: {} ({} bytes)", path.display(), md.len());
            }
            Ok(_) => {
                report.pending += 1;
                println!("• pendiente: {}", path.display());
            }
            Err(_) => {
                report.missing += 1;
                println!("✖ falta: {}", path.display());
            }
        }
        expected.insert(path);
    }

    for dir in managed_dirs(entries, base) {
        for item in WalkDir::new(&dir).into_iter().filter_map(|e| e.ok()) {
            if item.file_type().is_file() && !expected.contains(item.path()) {
                report.orphaned += 1;
                println!("? extra: {}", item.path().display());
            }
        }
    }

    report
}

/// Top-level directories owned by the target list, e.g. `public/frames`.
fn managed_dirs<S: AsRef<str>>(entries: &[S], base: &Path) -> Vec<PathBuf> {
    let mut dirs = BTreeSet::new();
    for entry in entries {
        let rel = entry.as_ref();
        let rel = rel.strip_prefix('/').unwrap_or(rel);
        if let Some(first) = Path::new(rel).components().next() {
            dirs.insert(base.join(first));
        }
    }
    dirs.into_iter().collect()
}
