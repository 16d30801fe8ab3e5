use super::CommentRule;
use crate::constants::{BORDER_FILL, CONTENT_FILL, MAX_COLUMNS};
use tracing::warn;
use unicode_width::UnicodeWidthStr;

/// How a single line is padded out to the target width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub max_columns: usize,
    pub fill_char: char,
    pub pad_left: bool,
    pub pad_right: bool,
}

impl FormatOptions {
    /// Options for a header content line: text followed by spaces.
    pub fn content(max_columns: usize) -> Self {
        Self {
            max_columns,
            fill_char: CONTENT_FILL,
            pad_left: false,
            pad_right: true,
        }
    }

    /// Options for the full-width top/bottom rule.
    pub fn border(max_columns: usize) -> Self {
        Self {
            max_columns,
            fill_char: BORDER_FILL,
            pad_left: false,
            pad_right: true,
        }
    }

    fn is_border(&self) -> bool {
        self.fill_char == BORDER_FILL
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::content(MAX_COLUMNS)
    }
}

/// Wraps `text` in the rule's delimiters and fills it to `max_columns`.
///
/// Border options ignore `text` and fill the whole interior. Content wider
/// than the interior gets no fill at all, so the line comes out wider than
/// `max_columns` instead of being cut.
pub fn surround_with_comments(
    rule: &CommentRule,
    text: &str,
    options: &FormatOptions,
) -> String {
    let (start, end) = rule.delimiters();
    let decoration = start.width() + end.width();
    let interior = options.max_columns.saturating_sub(decoration);
    let fill = options.fill_char.to_string();

    if options.is_border() {
        return format!("{start}{}{end}", fill.repeat(interior));
    }

    let text_width = text.width();
    if text_width > interior {
        warn!(
            "header line is {} columns wide, {} available; emitting it unpadded",
            text_width, interior
        );
    }
    let free = interior.saturating_sub(text_width);
    let (left, right) = match (options.pad_left, options.pad_right) {
        (true, true) => (free / 2, free - free / 2),
        (true, false) => (free, 0),
        (false, true) => (0, free),
        (false, false) => (0, 0),
    };
    format!(
        "{start}{}{text}{}{end}",
        fill.repeat(left),
        fill.repeat(right)
    )
}

/// The full-width decorative rule for `rule` at `max_columns`.
pub fn border_line(
    rule: &CommentRule,
    max_columns: usize,
) -> String {
    surround_with_comments(rule, "", &FormatOptions::border(max_columns))
}
