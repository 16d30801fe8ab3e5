use std::path::PathBuf;

/// Why a single metadata lookup produced no result.
///
/// Resolvers never surface these; they log them and move on to the next
/// strategy in their fallback chain.
#[derive(Debug)]
pub enum LookupFailure {
    /// The external program could not be started at all.
    Spawn {
        program: String,
        source: std::io::Error,
    },
    /// The program ran but exited unsuccessfully.
    Status {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
    /// The program succeeded but printed nothing useful.
    EmptyOutput,
    /// Output was present but could not be interpreted.
    Parse(String),
    /// Nothing to find (no repository, no creation time, no user).
    NotFound(String),
    Io(std::io::Error),
}

impl std::fmt::Display for LookupFailure {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            LookupFailure::Spawn { program, source } => {
                write!(f, "could not run {program}: {source}")
            }
            LookupFailure::Status {
                program,
                code,
                stderr,
            } => match code {
                Some(code) => write!(f, "{program} exited with {code}: {}", stderr.trim()),
                None => write!(f, "{program} terminated by signal: {}", stderr.trim()),
            },
            LookupFailure::EmptyOutput => write!(f, "empty output"),
            LookupFailure::Parse(raw) => write!(f, "unparsable output {raw:?}"),
            LookupFailure::NotFound(what) => write!(f, "{what} not found"),
            LookupFailure::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LookupFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LookupFailure::Spawn { source, .. } => Some(source),
            LookupFailure::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LookupFailure {
    fn from(e: std::io::Error) -> Self {
        LookupFailure::Io(e)
    }
}

/// Conditions that abort a header insertion and reach the user.
#[derive(Debug)]
pub enum HeaderError {
    /// There is no document to operate on.
    NoActiveDocument(PathBuf),
    /// No comment rule is known for the document's language.
    UnsupportedLanguage(String),
    /// The header was composed but could not be written into the document.
    Insert {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl HeaderError {
    /// Process exit code the binary uses for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            HeaderError::NoActiveDocument(_) => 3,
            HeaderError::UnsupportedLanguage(_) => 4,
            HeaderError::Insert { .. } => 1,
        }
    }
}

impl std::fmt::Display for HeaderError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            HeaderError::NoActiveDocument(path) => {
                write!(f, "no document to add a header to: {}", path.display())
            }
            HeaderError::UnsupportedLanguage(id) => {
                write!(f, "no comment syntax known for language '{id}'")
            }
            HeaderError::Insert { path, source } => {
                write!(f, "could not write header into {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for HeaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HeaderError::Insert { source, .. } => Some(source),
            _ => None,
        }
    }
}
