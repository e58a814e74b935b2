use crate::errors::{ExtractorError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Asset directory relative to both the skill root and the install target
pub const ASSETS_SUBDIR: [&str; 2] = ["assets", "elementary"];

/// Source and destination of an asset installation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallationPaths {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Compute installation paths. Pure path joining, no filesystem access.
pub fn prepare_installation(source_root: impl AsRef<Path>, target_root: impl AsRef<Path>) -> InstallationPaths {
    InstallationPaths {
        from: assets_dir(source_root.as_ref()),
        to: assets_dir(target_root.as_ref()),
    }
}

fn assets_dir(root: &Path) -> PathBuf {
    ASSETS_SUBDIR.iter().fold(root.to_path_buf(), |path, part| path.join(part))
}

/// Canonicalize the deepest existing ancestor of `path` and re-attach the
/// components that do not exist yet.
fn resolve_existing_prefix(path: &Path) -> std::io::Result<PathBuf> {
    let mut missing = Vec::new();
    let mut current = path;
    loop {
        if current.exists() {
            let mut resolved = current.canonicalize()?;
            resolved.extend(missing.iter().rev());
            return Ok(resolved);
        }
        match (current.parent(), current.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                current = parent;
            }
            _ => return Ok(path.to_path_buf()),
        }
    }
}

/// Recursively copy `paths.from` into `paths.to`, creating directories as
/// needed. Returns the number of files copied.
pub fn copy_assets(paths: &InstallationPaths) -> Result<usize> {
    if !paths.from.is_dir() {
        return Err(ExtractorError::AssetsNotFound {
            path: paths.from.display().to_string(),
        });
    }

    let install_error = |e: std::io::Error| ExtractorError::InstallError {
        path: paths.to.display().to_string(),
        message: e.to_string(),
    };

    // Copying onto the source truncates it; copying below it never terminates.
    let source = paths.from.canonicalize().map_err(install_error)?;
    let target = resolve_existing_prefix(&paths.to).map_err(install_error)?;
    if target.starts_with(&source) {
        return Err(ExtractorError::InstallError {
            path: paths.to.display().to_string(),
            message: "target is inside the asset source".to_string(),
        });
    }

    fs::create_dir_all(&paths.to).map_err(install_error)?;

    let root = glob::Pattern::escape(&paths.from.to_string_lossy());
    let pattern = format!("{}/**/*", root);

    let mut copied = 0;
    for entry in glob::glob(&pattern)? {
        let source = entry?;
        let relative = match source.strip_prefix(&paths.from) {
            Ok(relative) => relative,
            Err(_) => continue,
        };
        let destination = paths.to.join(relative);

        if source.is_dir() {
            fs::create_dir_all(&destination).map_err(install_error)?;
        } else {
            if let Some(parent) = destination.parent() {
                fs::create_dir_all(parent).map_err(install_error)?;
            }
            fs::copy(&source, &destination).map_err(install_error)?;
            tracing::debug!(file = %relative.display(), "copied asset");
            copied += 1;
        }
    }

    Ok(copied)
}
