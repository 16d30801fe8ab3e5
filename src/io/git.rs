use super::VersionControl;
use crate::constants::{GIT_METADATA_DIR, GIT_PROGRAM};
use crate::error::LookupFailure;
use crate::resolve::containing_dir;
use std::{
    path::{Path, PathBuf},
    process::Command,
};
use tracing::debug;

/// `VersionControl` backed by the `git` executable.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new(GIT_PROGRAM)
    }
}

impl GitCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Runs `git -C <dir> <args>` and returns trimmed stdout.
    fn run(
        &self,
        dir: &Path,
        args: &[&str],
    ) -> Result<String, LookupFailure> {
        debug!("{} -C {} {}", self.program, dir.display(), args.join(" "));
        let output = Command::new(&self.program)
            .arg("-C")
            .arg(dir)
            .args(args)
            .output()
            .map_err(|source| LookupFailure::Spawn {
                program: self.program.clone(),
                source,
            })?;
        if !output.status.success() {
            return Err(LookupFailure::Status {
                program: self.program.clone(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if stdout.is_empty() {
            return Err(LookupFailure::EmptyOutput);
        }
        Ok(stdout)
    }
}

impl VersionControl for GitCli {
    fn first_commit_log(
        &self,
        file: &Path,
    ) -> Result<String, LookupFailure> {
        let file_arg = file.to_string_lossy();
        self.run(
            containing_dir(file),
            &[
                "log",
                "--format=%ad",
                "--date=iso",
                "--reverse",
                "--",
                &*file_arg,
            ],
        )
    }

    fn metadata_dir(
        &self,
        dir: &Path,
    ) -> Result<PathBuf, LookupFailure> {
        let start = std::path::absolute(dir)?;
        start
            .ancestors()
            .map(|ancestor| ancestor.join(GIT_METADATA_DIR))
            .find(|candidate| candidate.exists())
            .ok_or_else(|| {
                LookupFailure::NotFound(format!("repository above {}", start.display()))
            })
    }

    fn config_value(
        &self,
        repo_root: &Path,
        key: &str,
    ) -> Result<String, LookupFailure> {
        self.run(repo_root, &["config", "--get", key])
    }
}
