use std::fs::{self, Metadata};
use std::os::unix::fs::MetadataExt;
use std::path::Path;

use tracing::debug;

use crate::models::file_entry::{EntryMetadata, StatInfo, UNKNOWN};
use crate::services::fs::accounts::{group_name, user_name};
use crate::services::fs::mode::mode_string;

/// Collects metadata for one node without ever failing.
///
/// A missing or unreadable node yields an inaccessible placeholder record;
/// secondary lookups (target type, link text, account names) fall back to
/// sentinels one field at a time.
pub fn stat_entry(full_path: &Path, name: &str) -> EntryMetadata {
    let md = match fs::symlink_metadata(full_path) {
        Ok(md) => md,
        Err(err) => {
            debug!(path = %full_path.display(), error = %err, "entry inaccessible");
            return EntryMetadata::inaccessible(name);
        }
    };

    // Dangling links and unreadable targets are simply "not a directory".
    let isdir = fs::metadata(full_path).map(|t| t.is_dir()).unwrap_or(false);

    let link_target = if md.file_type().is_symlink() {
        match fs::read_link(full_path) {
            Ok(target) => target.to_string_lossy().into_owned(),
            Err(err) => {
                debug!(path = %full_path.display(), error = %err, "unreadable link target");
                UNKNOWN.to_string()
            }
        }
    } else {
        UNKNOWN.to_string()
    };

    EntryMetadata {
        filename: name.to_string(),
        isdir,
        link_target,
        inaccessible: false,
        stat: stat_info(&md),
    }
}

fn stat_info(md: &Metadata) -> StatInfo {
    stat_info_with(md, user_name, group_name)
}

/// Builds the stat record with the given account resolvers; each unknown id
/// falls back to `"?"` on its own.
fn stat_info_with(
    md: &Metadata,
    resolve_user: impl Fn(u32) -> Option<String>,
    resolve_group: impl Fn(u32) -> Option<String>,
) -> StatInfo {
    let uid = md.uid();
    let gid = md.gid();
    StatInfo {
        inaccessible: false,
        mode: md.mode(),
        mode_str: mode_string(md.mode()),
        uid,
        owner: resolve_user(uid).unwrap_or_else(|| UNKNOWN.to_string()),
        gid,
        group: resolve_group(gid).unwrap_or_else(|| UNKNOWN.to_string()),
        size: md.size(),
        atime: epoch_seconds(md.atime(), md.atime_nsec()),
        mtime: epoch_seconds(md.mtime(), md.mtime_nsec()),
        ctime: epoch_seconds(md.ctime(), md.ctime_nsec()),
    }
}

fn epoch_seconds(secs: i64, nsec: i64) -> f64 {
    secs as f64 + nsec as f64 / 1e9
}
