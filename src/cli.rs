use crate::constants::MAX_COLUMNS;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mdheader")]
#[command(
    about = "Insert a commented project/date/author header at the top of a source file, \
                   using git metadata when available."
)]
pub struct Cli {
    /// Source file to add the header to.
    pub file: PathBuf,

    /// Language id (e.g. "javascript", "python"); inferred from the extension if omitted.
    #[arg(short = 'l', long = "language")]
    pub language: Option<String>,

    /// Width of every header line, comment delimiters included.
    #[arg(short = 'w', long = "max-columns", default_value_t = MAX_COLUMNS, value_parser = parse_columns)]
    pub max_columns: usize,

    /// Print the header to stdout instead of inserting it into the file.
    #[arg(short = 'o', long = "stdout")]
    pub stdout: bool,

    /// Put the decorative ASCII-art banner above the header fields.
    #[arg(short = 'b', long = "banner")]
    pub banner: bool,

    /// Log every metadata lookup and fallback.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

fn parse_columns(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|e| format!("{e}"))?;
    if n == 0 {
        return Err("must be greater than zero".to_string());
    }
    Ok(n)
}
