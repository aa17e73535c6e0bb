//! core::write
//!
//! Refuse-to-clobber file writes.
//!
//! # Invariants
//!
//! - An existing file is never replaced unless `force` is set
//! - The target holds either its previous content or the complete new
//!   content; readers never observe a partial write
//! - Exactly one file is created or replaced; parent directories are not
//!   created
//! - A new file gets the same mode as any file the process creates (0666
//!   less the umask); a replaced file keeps its previous mode
//! - A symlinked target is written through: the link stays and the file it
//!   points at receives the content
//!
//! Content is staged in a temporary file next to the target and then
//! persisted over it. Without `force` the persist is a no-clobber rename,
//! so a file that appears after the existence check is still left alone.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};
use thiserror::Error;

/// Errors from writing the output file.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("File already exists: {}\nUse --force to overwrite.", .path.display())]
    AlreadyExists { path: PathBuf },

    #[error("failed to write '{}': {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// Write `content` to `path`.
///
/// # Errors
///
/// - [`WriteError::AlreadyExists`] if `path` exists and `force` is false
/// - [`WriteError::Io`] for any other failure, including a missing parent
///   directory
pub fn safe_write(path: &Path, content: &str, force: bool) -> Result<(), WriteError> {
    if !force && path.exists() {
        return Err(WriteError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    let io_err = |source: io::Error| WriteError::Io {
        path: path.to_path_buf(),
        source,
    };

    let target = resolve_link(path);
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = stage_in(dir).map_err(io_err)?;
    if force {
        if let Ok(existing) = fs::metadata(&target) {
            staged
                .as_file()
                .set_permissions(existing.permissions())
                .map_err(io_err)?;
        }
    }
    staged.write_all(content.as_bytes()).map_err(io_err)?;
    staged.as_file().sync_all().map_err(io_err)?;

    let persisted = if force {
        staged.persist(&target)
    } else {
        staged.persist_noclobber(&target)
    };

    persisted.map(|_| ()).map_err(|e| {
        if e.error.kind() == io::ErrorKind::AlreadyExists {
            WriteError::AlreadyExists {
                path: path.to_path_buf(),
            }
        } else {
            io_err(e.error)
        }
    })
}

/// Follow `path` to the file it names when it is a symlink that resolves.
fn resolve_link(path: &Path) -> PathBuf {
    let is_link = fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false);
    if is_link {
        if let Ok(resolved) = fs::canonicalize(path) {
            return resolved;
        }
    }
    path.to_path_buf()
}

/// Create the staging file with a umask-respecting mode.
#[cfg(unix)]
fn stage_in(dir: &Path) -> io::Result<NamedTempFile> {
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    Builder::new()
        .prefix(".readmecraft")
        .permissions(Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn stage_in(dir: &Path) -> io::Result<NamedTempFile> {
    Builder::new().prefix(".readmecraft").tempfile_in(dir)
}
