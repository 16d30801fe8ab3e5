use crate::constants::UNKNOWN_USER;
use crate::error::LookupFailure;
use crate::io::{Host, VersionControl};
use std::path::Path;
use tracing::debug;

/// Author of the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    /// Empty when unknown.
    pub email: String,
}

/// Configured repository user when a root is known, otherwise the OS account.
pub fn resolve_identity(
    repo_root: Option<&Path>,
    vcs: &dyn VersionControl,
    host: &dyn Host,
) -> Identity {
    repo_root
        .ok_or_else(|| LookupFailure::NotFound("repository root".to_string()))
        .and_then(|root| repository_identity(root, vcs))
        .inspect_err(|e| debug!("falling back to OS user: {e}"))
        .unwrap_or_else(|_| os_identity(host))
}

fn repository_identity(
    root: &Path,
    vcs: &dyn VersionControl,
) -> Result<Identity, LookupFailure> {
    let name = vcs.config_value(root, "user.name")?;
    let email = vcs
        .config_value(root, "user.email")
        .inspect_err(|e| debug!("no user.email in {}: {e}", root.display()))
        .unwrap_or_default();
    Ok(Identity { name, email })
}

fn os_identity(host: &dyn Host) -> Identity {
    let name = host.os_user().unwrap_or_else(|e| {
        debug!("{e}");
        UNKNOWN_USER.to_string()
    });
    Identity {
        name,
        email: String::new(),
    }
}
