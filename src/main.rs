use clap::Parser;
use fieldtag::application::ParseTagService;
use fieldtag::cli::{render_tag, Cli, Commands};
use fieldtag::error::FieldTagError;
use fieldtag::infrastructure::{Config, OutputFormat};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            print!("{}", output);
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Logs go to stderr, filtered by FIELDTAG_LOG (default: warn)
fn init_logging() {
    let filter =
        EnvFilter::try_from_env("FIELDTAG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<String, FieldTagError> {
    let service = ParseTagService::new(Config::resolve(cli.config.as_deref())?);

    // Flag overrides config
    let format = match cli.format.as_deref() {
        Some(f) => OutputFormat::from_str(f).map_err(FieldTagError::Config)?,
        None => service.config().format,
    };

    match cli.command {
        Commands::Parse { raw } => render_tag(&service.parse_raw(&raw), format),
        Commands::Field { field_tags, name } => {
            render_tag(&service.parse_field(&field_tags, name.as_deref()), format)
        }
        Commands::HasKey { raw, key } => Ok(format!("{}\n", service.has_key(&raw, &key))),
        Commands::OptionValue { raw, name } => {
            let value = service.option(&raw, &name)?;
            Ok(format!("{}\n", value))
        }
    }
}
