use super::containing_dir;
use crate::error::LookupFailure;
use crate::io::VersionControl;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Human-readable project name and, when inside one, the repository root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub root: Option<PathBuf>,
}

pub fn resolve_project(
    file: &Path,
    vcs: &dyn VersionControl,
) -> Project {
    let dir = containing_dir(file);
    vcs.metadata_dir(dir)
        .and_then(|meta| project_from_metadata_dir(&meta, dir))
        .unwrap_or_else(|e| {
            debug!("no repository for {}: {e}", file.display());
            Project {
                name: dir_name(dir),
                root: None,
            }
        })
}

/// The project is the directory that holds the metadata directory.
///
/// `/repos/myproj/.git` names `myproj`, never `.git`. A relative metadata
/// path such as `.git` is taken relative to the working directory. A root
/// with no name of its own (`/`) keeps the repository but borrows the name
/// of `dir`.
pub fn project_from_metadata_dir(
    meta: &Path,
    dir: &Path,
) -> Result<Project, LookupFailure> {
    let meta = std::path::absolute(meta)?;
    let root = meta
        .parent()
        .ok_or_else(|| LookupFailure::NotFound(format!("parent of {}", meta.display())))?;
    let name = match root.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => dir_name(dir),
    };
    Ok(Project {
        name,
        root: Some(root.to_path_buf()),
    })
}

fn dir_name(dir: &Path) -> String {
    let abs = std::path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf());
    match abs.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => abs.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_is_parent_of_metadata_dir() {
        let p = project_from_metadata_dir(
            Path::new("/repos/myproj/.git"),
            Path::new("/repos/myproj/src"),
        )
        .unwrap();
        assert_eq!(p.name, "myproj");
        assert_eq!(p.root.as_deref(), Some(Path::new("/repos/myproj")));
    }

    #[test]
    fn nested_repository_uses_innermost_parent() {
        let p = project_from_metadata_dir(
            Path::new("/repos/outer/vendor/inner/.git"),
            Path::new("/repos/outer/vendor/inner"),
        )
        .unwrap();
        assert_eq!(p.name, "inner");
    }

    #[test]
    fn relative_metadata_dir_is_not_named_dot() -> anyhow::Result<()> {
        let cwd = std::env::current_dir()?;
        let p = project_from_metadata_dir(Path::new(".git"), Path::new("."))?;
        assert_eq!(p.root.as_deref(), Some(cwd.as_path()));
        assert_ne!(p.name, ".");
        assert_ne!(p.name, ".git");
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn repository_at_filesystem_root_keeps_root() {
        let p = project_from_metadata_dir(Path::new("/.git"), Path::new("/srv/app")).unwrap();
        assert_eq!(p.root.as_deref(), Some(Path::new("/")));
        assert_eq!(p.name, "app");
    }

    #[test]
    fn plain_directory_name() {
        assert_eq!(dir_name(Path::new("/tmp/standalone")), "standalone");
    }
}
