// Centralized magic numbers & default values
pub const MAX_COLUMNS: usize = 80;
pub const BORDER_FILL: char = '-';
pub const CONTENT_FILL: char = ' ';
pub const GIT_PROGRAM: &str = "git";
pub const GIT_METADATA_DIR: &str = ".git";
pub const UNKNOWN_USER: &str = "unknown";
