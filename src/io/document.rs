use crate::comment::rules::language_for_extension;
use crate::error::HeaderError;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Language id used when none is given and the extension is not recognised.
pub const PLAIN_TEXT: &str = "plaintext";

const BOM: char = '\u{FEFF}';

/// A document a header can be inserted into.
pub trait Document {
    fn path(&self) -> &Path;

    fn language_id(&self) -> &str;

    /// Inserts `text` before the first character of the document.
    fn insert_at_start(
        &mut self,
        text: &str,
    ) -> std::io::Result<()>;
}

/// A source file on disk.
#[derive(Debug, Clone)]
pub struct FileDocument {
    path: PathBuf,
    language_id: String,
}

impl FileDocument {
    /// Opens `path`, inferring the language from its extension unless given.
    pub fn open(
        path: &Path,
        language_id: Option<&str>,
    ) -> Result<Self, HeaderError> {
        if !path.is_file() {
            return Err(HeaderError::NoActiveDocument(path.to_path_buf()));
        }
        let path = dunce::canonicalize(path)
            .map_err(|_| HeaderError::NoActiveDocument(path.to_path_buf()))?;
        let language_id = match language_id {
            Some(id) => id.to_string(),
            None => path
                .extension()
                .and_then(|ext| language_for_extension(&ext.to_string_lossy()))
                .unwrap_or(PLAIN_TEXT)
                .to_string(),
        };
        Ok(Self { path, language_id })
    }
}

impl Document for FileDocument {
    fn path(&self) -> &Path {
        &self.path
    }

    fn language_id(&self) -> &str {
        &self.language_id
    }

    fn insert_at_start(
        &mut self,
        text: &str,
    ) -> std::io::Result<()> {
        let contents = fs::read_to_string(&self.path)?;
        let (bom, body) = match contents.strip_prefix(BOM) {
            Some(rest) => (Some(BOM), rest),
            None => (None, contents.as_str()),
        };
        let text = match_line_endings(text, body);

        let mut out = String::with_capacity(text.len() + contents.len());
        out.extend(bom);
        out.push_str(&text);
        out.push_str(body);
        fs::write(&self.path, out)
    }
}

/// Rewrites `\n` in `text` as `\r\n` when `body` uses CRLF line endings.
fn match_line_endings(
    text: &str,
    body: &str,
) -> String {
    if body.contains("\r\n") {
        text.replace("\r\n", "\n").replace('\n', "\r\n")
    } else {
        text.to_string()
    }
}
