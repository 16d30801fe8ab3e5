use super::template::{Placeholders, Template, fill_line};
use crate::comment::{CommentRules, FormatOptions, border_line, surround_with_comments};
use crate::constants::MAX_COLUMNS;
use crate::error::HeaderError;
use crate::io::{Document, Host, VersionControl};
use crate::resolve::{resolve_date, resolve_identity, resolve_project};
use chrono::Datelike;
use std::path::Path;
use tracing::debug;

/// Builds header text from resolved metadata.
///
/// Composition is a pure function of its collaborators: it never touches the
/// target document. Insertion is done separately by [`add_header`].
pub struct HeaderComposer<'a> {
    vcs: &'a dyn VersionControl,
    host: &'a dyn Host,
    rules: &'a dyn CommentRules,
    max_columns: usize,
    template: Template,
}

impl<'a> HeaderComposer<'a> {
    pub fn new(
        vcs: &'a dyn VersionControl,
        host: &'a dyn Host,
        rules: &'a dyn CommentRules,
    ) -> Self {
        Self {
            vcs,
            host,
            rules,
            max_columns: MAX_COLUMNS,
            template: Template::standard(),
        }
    }

    pub fn max_columns(
        mut self,
        max_columns: usize,
    ) -> Self {
        self.max_columns = max_columns;
        self
    }

    pub fn template(
        mut self,
        template: Template,
    ) -> Self {
        self.template = template;
        self
    }

    /// Renders the header for `file` in the comment syntax of `language_id`.
    pub fn compose(
        &self,
        file: &Path,
        language_id: &str,
    ) -> Result<String, HeaderError> {
        let rule = self
            .rules
            .lookup(language_id)
            .ok_or_else(|| HeaderError::UnsupportedLanguage(language_id.to_string()))?;

        let project = resolve_project(file, self.vcs);
        let date = resolve_date(file, self.vcs, self.host);
        let identity = resolve_identity(project.root.as_deref(), self.vcs, self.host);
        let current_year = self.host.today().year();
        debug!(
            "header for {}: project={} date={} author={}",
            file.display(),
            project.name,
            date,
            identity.name
        );

        let values = Placeholders {
            filename: file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.display().to_string()),
            project: project.name,
            date: date.format("%Y-%m-%d").to_string(),
            year: copyright_years(date.year(), current_year),
            user_name: identity.name,
            user_email: identity.email,
        };

        let border = border_line(&rule, self.max_columns);
        let content = FormatOptions::content(self.max_columns);
        let mut lines = Vec::with_capacity(self.template.lines().len() + 4);
        lines.push(border.clone());
        for line in self.template.lines() {
            let text = fill_line(line, &values);
            lines.push(surround_with_comments(&rule, &text, &content));
        }
        lines.push(border);
        lines.push(String::new());
        lines.push(String::new());
        Ok(lines.join("\n"))
    }
}

/// `"2020"` when the file is from this year, `"2019 - 2024"` otherwise.
pub fn copyright_years(
    year: i32,
    current_year: i32,
) -> String {
    if year == current_year {
        year.to_string()
    } else {
        format!("{year} - {current_year}")
    }
}

/// Composes a header for `doc` and inserts it at the start of the document.
///
/// The document is only written once the header composed successfully.
pub fn add_header(
    composer: &HeaderComposer<'_>,
    doc: &mut dyn Document,
) -> Result<String, HeaderError> {
    let header = composer.compose(doc.path(), doc.language_id())?;
    doc.insert_at_start(&header)
        .map_err(|source| HeaderError::Insert {
            path: doc.path().to_path_buf(),
            source,
        })?;
    Ok(header)
}
