use crate::cli::Cli;
use crate::header::Template;
use clap::Parser;
use std::path::PathBuf;

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub file: PathBuf,
    pub language: Option<String>,
    pub max_columns: usize,
    pub stdout: bool,
    pub banner: bool,
    pub verbose: bool,
}

impl Config {
    /// Parse CLI arguments into a Config
    pub fn from_cli() -> Self {
        Cli::parse().into()
    }

    pub fn template(&self) -> Template {
        if self.banner {
            Template::with_banner()
        } else {
            Template::standard()
        }
    }

    /// Default tracing filter when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            file: cli.file,
            language: cli.language,
            max_columns: cli.max_columns,
            stdout: cli.stdout,
            banner: cli.banner,
            verbose: cli.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_bare_file_argument() {
        let config: Config = Cli::try_parse_from(["mdheader", "a.js"]).unwrap().into();
        assert_eq!(config.file, PathBuf::from("a.js"));
        assert_eq!(config.max_columns, 80);
        assert_eq!(config.language, None);
        assert_eq!(config.template(), Template::standard());
        assert_eq!(config.log_level(), "warn");
    }

    #[test]
    fn zero_columns_is_rejected() {
        assert!(Cli::try_parse_from(["mdheader", "-w", "0", "a.js"]).is_err());
    }

    #[test]
    fn banner_flag_selects_banner_template() {
        let config: Config = Cli::try_parse_from(["mdheader", "-b", "-v", "a.js"]).unwrap().into();
        assert_eq!(config.template(), Template::with_banner());
        assert_eq!(config.log_level(), "debug");
    }
}
