//! Header field resolvers.
//!
//! Each resolver walks an ordered chain of lookups and takes the first one
//! that succeeds. Lookup failures are logged at debug level and never leave
//! the resolver; the last link of every chain always produces a value.

pub mod date;
pub mod identity;
pub mod project;

pub use date::resolve_date;
pub use identity::{Identity, resolve_identity};
pub use project::{Project, resolve_project};

use std::path::Path;

/// Directory holding `path`, or `.` for a bare file name.
pub fn containing_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}
