use super::CommentRule;

/// Language id to comment syntax lookup.
pub trait CommentRules {
    fn lookup(
        &self,
        language_id: &str,
    ) -> Option<CommentRule>;
}

/// Static table of the languages the tool knows out of the box.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinRules;

const SLASHES: &[&str] = &[
    "c",
    "cpp",
    "csharp",
    "java",
    "javascript",
    "javascriptreact",
    "typescript",
    "typescriptreact",
    "rust",
    "go",
    "swift",
    "kotlin",
    "scala",
    "dart",
];
const HASHES: &[&str] = &[
    "python",
    "shellscript",
    "ruby",
    "perl",
    "r",
    "makefile",
    "yaml",
    "toml",
    "dockerfile",
];
const DASHES: &[&str] = &["lua", "sql", "haskell"];
const MARKUP: &[&str] = &["html", "xml", "markdown"];

impl CommentRules for BuiltinRules {
    fn lookup(
        &self,
        language_id: &str,
    ) -> Option<CommentRule> {
        let id = language_id.to_ascii_lowercase();
        let id = id.as_str();
        if SLASHES.contains(&id) {
            Some(CommentRule::line("//"))
        } else if HASHES.contains(&id) {
            Some(CommentRule::line("##"))
        } else if DASHES.contains(&id) {
            Some(CommentRule::line("--"))
        } else if id == "css" {
            Some(CommentRule::block("/*", "*/"))
        } else if MARKUP.contains(&id) {
            Some(CommentRule::block("<!--", "-->"))
        } else {
            None
        }
    }
}

/// Guesses a language id from a file extension.
pub fn language_for_extension(ext: &str) -> Option<&'static str> {
    let id = match ext.to_ascii_lowercase().as_str() {
        "c" | "h" => "c",
        "cc" | "cpp" | "cxx" | "hh" | "hpp" | "hxx" => "cpp",
        "cs" => "csharp",
        "java" => "java",
        "js" | "mjs" | "cjs" => "javascript",
        "jsx" => "javascriptreact",
        "ts" | "mts" | "cts" => "typescript",
        "tsx" => "typescriptreact",
        "rs" => "rust",
        "go" => "go",
        "swift" => "swift",
        "kt" | "kts" => "kotlin",
        "scala" => "scala",
        "dart" => "dart",
        "css" => "css",
        "py" => "python",
        "sh" | "bash" | "zsh" => "shellscript",
        "rb" => "ruby",
        "pl" | "pm" => "perl",
        "r" => "r",
        "mk" => "makefile",
        "yml" | "yaml" => "yaml",
        "toml" => "toml",
        "lua" => "lua",
        "sql" => "sql",
        "hs" => "haskell",
        "html" | "htm" => "html",
        "xml" => "xml",
        "md" | "markdown" => "markdown",
        _ => return None,
    };
    Some(id)
}
