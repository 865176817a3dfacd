use crate::core::errors::{Error, Result};
use crate::models::file_entry::DirectoryListing;
use crate::services::fs::stat::stat_entry;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use tokio::task;
use tracing::debug;

/// Name under which the queried directory reports itself.
pub const ROOT_NAME: &str = ".";

pub async fn list_dir(path: impl Into<PathBuf>) -> Result<DirectoryListing> {
    // Use a blocking task for filesystem IO to avoid blocking async executors.
    let path = path.into();
    task::spawn_blocking(move || list_dir_impl(&path)).await?
}

/// Synchronous variant; the CLI uses this directly.
pub fn list_dir_sync(path: impl AsRef<Path>) -> Result<DirectoryListing> {
    list_dir_impl(path.as_ref())
}

fn list_dir_impl(dir: &Path) -> Result<DirectoryListing> {
    let unlistable = |source: std::io::Error| Error::Unlistable {
        path: dir.to_path_buf(),
        source,
    };

    // Names first, in read order. Any failure here means the root itself is
    // not listable.
    let mut names: Vec<OsString> = Vec::new();
    for entry in fs::read_dir(dir).map_err(unlistable)? {
        let entry = entry.map_err(unlistable)?;
        names.push(entry.file_name());
    }
    debug!(path = %dir.display(), entries = names.len(), "enumerated directory");

    let root = stat_entry(dir, ROOT_NAME);
    let children = names
        .into_iter()
        .map(|name| stat_entry(&dir.join(&name), &os_str_to_string(&name)))
        .collect();

    Ok(DirectoryListing { root, children })
}

fn os_str_to_string(s: impl AsRef<OsStr>) -> String {
    s.as_ref().to_string_lossy().into_owned()
}
