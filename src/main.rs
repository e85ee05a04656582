//! clockangle - analog clock hand angle tool
//!
//! Prints the angle between the hour and minute hands for a given time.

use clap::Parser;
use clockangle::cli::args::{generate_completions, Cli, Commands};
use clockangle::commands::run_angle;
use clockangle::config::{Config, ConfigBuilder};
use clockangle::error::{AppError, ConfigError, DomainError};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    let result = run(&cli);

    if let Err(e) = result {
        log::debug!("{:?}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    match &cli.command {
        Some(Commands::Completions { shell }) => {
            generate_completions(*shell);
            Ok(())
        }

        None => {
            let config = build_config(cli)?;
            init_logging(config.log_level());
            log::debug!("Using configuration: {:?}", config);

            let hour = cli.hour.as_deref().unwrap_or_default();
            let minute = cli.minute.as_deref().unwrap_or_default();
            run_angle(hour, minute, &config)
        }
    }
}

/// Initialize logging; `RUST_LOG` overrides the configured level
fn init_logging(level: log::LevelFilter) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.to_string()))
        .format_timestamp(None)
        .init();
}

fn build_config(cli: &Cli) -> Result<Config, AppError> {
    let config = ConfigBuilder::new()
        .with_file(cli.config.as_deref())?
        .with_verbose(cli.verbose.then_some(true))
        .with_format(cli.format)
        .with_strict(Some(cli.strict))
        .build();
    Ok(config)
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Domain(DomainError::InvalidNumber { .. }) => {
            eprintln!();
            eprintln!("Hint: HOUR and MINUTE must be whole numbers, e.g. 'clockangle 3 15'.");
        }
        AppError::Domain(DomainError::NumberTooLarge { .. }) => {
            eprintln!();
            eprintln!("Hint: HOUR and MINUTE must fit in a 64-bit signed integer.");
        }
        AppError::Domain(DomainError::InvalidHour(_) | DomainError::InvalidMinute(_)) => {
            eprintln!();
            eprintln!("Hint: Drop --strict (or set validation.policy = \"warn\") to compute anyway.");
        }
        AppError::Config(ConfigError::FileNotFound(_)) => {
            eprintln!();
            eprintln!("Hint: Check the --config path or the CLOCKANGLE_CONFIG variable.");
        }
        _ => {}
    }
}
