use crate::stats::Stats;
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default)]
pub struct ProvisionOptions {
    /// Root under which every entry is resolved.
    pub base_dir: PathBuf,
    /// Print resolved paths before each entry and failure details.
    pub debug: bool,
}

enum Outcome {
    Created,
    Existed,
}

/// Resolve one entry against the base directory. A single leading separator
/// is dropped so absolute-looking entries stay inside the base.
pub fn resolve_entry(base: &Path, entry: &str) -> PathBuf {
    base.join(entry.strip_prefix('/').unwrap_or(entry))
}

fn ensure_empty_file(path: &Path) -> std::io::Result<Outcome> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    // Exclusive create: an existing file is never truncated.
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => Ok(Outcome::Created),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(Outcome::Existed),
        Err(e) => Err(e),
    }
}

/// Create a zero-byte file for every entry that does not exist yet.
/// Per-entry failures are counted and never stop the run.
pub fn provision<S: AsRef<str>>(entries: &[S], opts: &ProvisionOptions) -> Stats {
    let mut stats = Stats::default();

    for entry in entries {
        let out_path = resolve_entry(&opts.base_dir, entry.as_ref());
        if opts.debug {
            println!("-> {}", out_path.display());
        }
        match ensure_empty_file(&out_path) {
            Ok(Outcome::Created) => {
                stats.created += 1;
                println!("✔ creado: {}", out_path.display());
            }
            Ok(Outcome::Existed) => {
                stats.existed += 1;
                println!("• ya existe: {}", out_path.display());
            }
            Err(e) => {
                stats.errored += 1;
                if opts.debug {
                    eprintln!("!! Error creando {}: {e}", out_path.display());
                }
                println!("✖ error:   {}", out_path.display());
            }
        }
    }

    stats
}
