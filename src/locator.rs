//! Find the lenv installation root from the `lenv` executable on PATH.
//!
//! lenv is installed as `<root>/bin/lenv` (or similar) and exposed on PATH through a symlink,
//! e.g. `/usr/local/bin/lenv -> ../../Users/me/lenv/bin/lenv`. One level of link is read,
//! resolved against the link's own directory, and the root is two levels above that file.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use which::which;

/// External tool driven by the menu.
pub const LENV_COMMAND: &str = "lenv";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolInstall {
    /// Executable as found on PATH.
    pub link: PathBuf,
    /// File the link points at (equal to `link` for a plain install).
    pub target: PathBuf,
    /// Installation root containing `config.yaml`.
    pub root: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum LocateError {
    #[error("{command} command doesn't exist.")]
    NotFound { command: String },
    #[error("cannot read link {}: {source}", .link.display())]
    ReadLink {
        link: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} has no installation root two levels up", .target.display())]
    NoRoot { target: PathBuf },
}

impl LocateError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LocateError::NotFound { .. })
    }
}

/// Lexically normalize `.` and `..` without touching the filesystem.
fn normalize(p: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for c in p.components() {
        match c {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Resolve `target` (as read from `link`) and return `(resolved file, root)`.
pub fn install_root_from_link(link: &Path, target: &Path) -> Option<(PathBuf, PathBuf)> {
    let base = link.parent().unwrap_or_else(|| Path::new(""));
    let resolved = normalize(&base.join(target));
    let root = resolved.parent()?.parent()?.to_path_buf();
    if root.as_os_str().is_empty() {
        return None;
    }
    Some((resolved, root))
}

/// Locate `command` on PATH and derive its installation root.
pub fn locate_tool_root(command: &str) -> Result<ToolInstall, LocateError> {
    let not_found = || LocateError::NotFound {
        command: command.to_string(),
    };
    let link = which(command).map_err(|_| not_found())?;
    let link = if link.is_absolute() {
        link
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(&link))
            .unwrap_or(link)
    };
    tracing::debug!(link = %link.display(), "found executable");
    install_from_link(&link, command)
}

/// Same as [`locate_tool_root`] for an already known executable path.
pub fn install_from_link(link: &Path, command: &str) -> Result<ToolInstall, LocateError> {
    let meta = fs::symlink_metadata(link).map_err(|_| LocateError::NotFound {
        command: command.to_string(),
    })?;
    let target = if meta.file_type().is_symlink() {
        fs::read_link(link).map_err(|source| LocateError::ReadLink {
            link: link.to_path_buf(),
            source,
        })?
    } else {
        link.file_name().map(PathBuf::from).unwrap_or_default()
    };

    let (resolved, root) =
        install_root_from_link(link, &target).ok_or_else(|| LocateError::NoRoot {
            target: target.clone(),
        })?;
    if !resolved.exists() {
        return Err(LocateError::NotFound {
            command: command.to_string(),
        });
    }
    tracing::debug!(target = %resolved.display(), root = %root.display(), "resolved install root");
    Ok(ToolInstall {
        link: link.to_path_buf(),
        target: resolved,
        root,
    })
}
