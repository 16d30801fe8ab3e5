pub mod document;
pub mod git;
pub mod host;

pub use document::{Document, FileDocument};
pub use git::GitCli;
pub use host::LocalHost;

use crate::error::LookupFailure;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Queries against the version-control system.
pub trait VersionControl {
    /// Raw `log` output for `file`, oldest commit first.
    fn first_commit_log(
        &self,
        file: &Path,
    ) -> Result<String, LookupFailure>;

    /// Nearest repository metadata directory at or above `dir`.
    fn metadata_dir(
        &self,
        dir: &Path,
    ) -> Result<PathBuf, LookupFailure>;

    /// A configuration value as seen from `repo_root` (local or global).
    fn config_value(
        &self,
        repo_root: &Path,
        key: &str,
    ) -> Result<String, LookupFailure>;
}

/// Facts about the machine the tool runs on.
pub trait Host {
    fn creation_date(
        &self,
        path: &Path,
    ) -> Result<NaiveDate, LookupFailure>;

    fn os_user(&self) -> Result<String, LookupFailure>;

    fn today(&self) -> NaiveDate;
}
