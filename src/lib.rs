pub mod cli;
pub mod comment;
pub mod config;
pub mod constants;
pub mod error;
pub mod header;
pub mod io;
pub mod resolve;

pub use comment::{BuiltinRules, CommentRule, CommentRules};
pub use error::{HeaderError, LookupFailure};
pub use header::{HeaderComposer, add_header};
