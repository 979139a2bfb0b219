//! Manifest path resolution
//!
//! Converts the user-supplied `--manifest` value into an explicit base
//! directory plus file name. The base directory is carried alongside the
//! file name instead of repositioning the process working directory, so
//! anything that later resolves paths relative to the manifest (e.g.
//! subproject files) gets its context without process-global state.

use std::path::{Path, PathBuf};

use normpath::PathExt;

use crate::error::{ObsctlError, Result};

/// Default manifest file name when `--manifest` is not given
pub const DEFAULT_MANIFEST: &str = "projects.yaml";

/// A resolved manifest location: the directory the manifest lives in and
/// its base file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedManifest {
    /// Absolute directory containing the manifest; relative references
    /// inside the manifest resolve against this
    pub base_dir: PathBuf,

    /// Manifest file name within `base_dir`
    pub file_name: PathBuf,
}

impl ResolvedManifest {
    /// Full path to the manifest file
    pub fn path(&self) -> PathBuf {
        self.base_dir.join(&self.file_name)
    }
}

/// Resolve `requested` against the process's current working directory.
///
/// Absolute paths are rebased under the working directory; a path that lies
/// outside the working-directory tree fails rather than producing a bogus
/// relative reference. The resolved path must exist as a regular file.
pub fn resolve(requested: &Path) -> Result<ResolvedManifest> {
    let cwd = std::env::current_dir()?;
    resolve_from(&cwd, requested)
}

/// Resolve `requested` against an explicit working directory.
pub fn resolve_from(cwd: &Path, requested: &Path) -> Result<ResolvedManifest> {
    // Resolve symlinks in the base so prefix comparison is stable
    // (e.g. /var vs /private/var on macOS)
    let cwd = normalize_lenient(cwd);

    let absolute = if requested.is_absolute() {
        requested.to_path_buf()
    } else {
        cwd.join(requested)
    };
    let normalized = normalize_lenient(&absolute);

    let relative = normalized
        .strip_prefix(&cwd)
        .map_err(|_| ObsctlError::ManifestPathOutsideCwd {
            path: requested.display().to_string(),
        })?
        .to_path_buf();

    if !normalized.is_file() {
        return Err(ObsctlError::ManifestNotFound {
            path: relative.display().to_string(),
        });
    }

    let file_name = relative
        .file_name()
        .map(PathBuf::from)
        .ok_or_else(|| ObsctlError::ManifestNotFound {
            path: relative.display().to_string(),
        })?;
    let base_dir = normalized
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| cwd.clone());

    Ok(ResolvedManifest {
        base_dir,
        file_name,
    })
}

/// Normalize a path, tolerating non-existent trailing components.
///
/// Normalizes the longest existing ancestor and appends the remaining
/// components, so symlink resolution stays consistent for paths that do not
/// (yet) exist.
fn normalize_lenient(path: &Path) -> PathBuf {
    if let Ok(norm) = path.normalize() {
        return norm.into_path_buf();
    }

    let mut current = path;
    let mut components = Vec::new();

    while !current.exists() {
        if let Some(file_name) = current.file_name() {
            components.push(file_name.to_os_string());
            if let Some(parent) = current.parent() {
                current = parent;
            } else {
                return path.to_path_buf();
            }
        } else {
            return path.to_path_buf();
        }
    }

    let mut result = current
        .normalize()
        .map(normpath::BasePathBuf::into_path_buf)
        .unwrap_or_else(|_| current.to_path_buf());
    for component in components.iter().rev() {
        result.push(component);
    }
    result
}
