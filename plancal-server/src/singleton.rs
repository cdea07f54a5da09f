//! One writer per store file.
//!
//! The server takes an exclusive lock on `<store>.lock` next to the entry
//! store, so a second server pointed at the same file refuses to start.

use anyhow::{Context, Result};
use fs2::FileExt;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Holds the lock until dropped
pub struct LockGuard {
    _file: File,
    path: PathBuf,
}

impl LockGuard {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub fn lock_path_for(store_path: &Path) -> PathBuf {
    let mut name = store_path.as_os_str().to_owned();
    name.push(".lock");
    PathBuf::from(name)
}

/// Acquire an exclusive lock for `store_path`, failing if another server holds it
pub fn acquire_lock(store_path: &Path) -> Result<LockGuard> {
    let path = lock_path_for(store_path);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(&path)
        .with_context(|| format!("Failed to create lock file {}", path.display()))?;

    file.try_lock_exclusive().map_err(|_| {
        anyhow::anyhow!(
            "Another plancal-server is already using {}.\n\
            If you believe this is an error, remove: {}",
            store_path.display(),
            path.display()
        )
    })?;

    Ok(LockGuard { _file: file, path })
}
