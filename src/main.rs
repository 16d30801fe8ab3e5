use anyhow::Result;
use mdheader::{
    BuiltinRules, HeaderComposer, HeaderError, add_header,
    config::Config,
    io::{Document, FileDocument, GitCli, LocalHost},
};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = Config::from_cli();
    init_tracing(&config);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            let code = e
                .downcast_ref::<HeaderError>()
                .map(HeaderError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code as u8)
        }
    }
}

fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(config: &Config) -> Result<()> {
    let mut doc = FileDocument::open(&config.file, config.language.as_deref())?;

    let git = GitCli::default();
    let host = LocalHost;
    let composer = HeaderComposer::new(&git, &host, &BuiltinRules)
        .max_columns(config.max_columns)
        .template(config.template());

    if config.stdout {
        print!("{}", composer.compose(doc.path(), doc.language_id())?);
    } else {
        add_header(&composer, &mut doc)?;
        eprintln!("Added header to {}", doc.path().display());
    }
    Ok(())
}
