pub mod format;
pub mod rules;

pub use format::{FormatOptions, border_line, surround_with_comments};
pub use rules::{BuiltinRules, CommentRules};

/// Comment delimiter syntax for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentRule {
    /// `//`-style: the token decorates both ends of every line.
    Line(String),
    /// `/* */`-style: opened and closed on every line.
    Block { open: String, close: String },
}

impl CommentRule {
    pub fn line(token: impl Into<String>) -> Self {
        CommentRule::Line(token.into())
    }

    pub fn block(
        open: impl Into<String>,
        close: impl Into<String>,
    ) -> Self {
        CommentRule::Block {
            open: open.into(),
            close: close.into(),
        }
    }

    /// The `(start, end)` decoration of a rendered line.
    pub fn delimiters(&self) -> (&str, &str) {
        match self {
            CommentRule::Line(token) => (token.as_str(), token.as_str()),
            CommentRule::Block { open, close } => (open.as_str(), close.as_str()),
        }
    }
}
