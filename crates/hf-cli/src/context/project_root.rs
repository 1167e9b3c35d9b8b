use std::path::{Path, PathBuf};

use anyhow::Context;
use hf_config::PROJECT_DIR;

/// Nearest ancestor of `start` (itself included) holding a `.homefix` directory.
#[must_use]
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(PROJECT_DIR).is_dir())
        .map(Path::to_path_buf)
}

/// Pick the directory whose `.homefix` holds config and the database.
///
/// An explicit `--project` may name the root or the `.homefix` directory
/// itself. Without one, the nearest marked ancestor of `cwd` wins, and a first
/// run falls back to `cwd`.
pub fn resolve_project_root(project: Option<&str>, cwd: &Path) -> anyhow::Result<PathBuf> {
    let Some(project) = project else {
        return Ok(find_project_root(cwd).unwrap_or_else(|| cwd.to_path_buf()));
    };

    let explicit = PathBuf::from(project);
    if explicit.file_name().is_some_and(|name| name == PROJECT_DIR) {
        return explicit
            .parent()
            .map(Path::to_path_buf)
            .context("invalid --project: '.homefix' has no parent directory");
    }
    anyhow::ensure!(
        explicit.is_dir(),
        "invalid --project '{}': directory does not exist",
        explicit.display()
    );
    Ok(explicit)
}
