use anyhow::{Context, Result};
use clap::Parser;
use gqlpeer_config::{ConfigLoader, LogLevel, PeerConfig};
use gqlpeer_errors::{ErrorTranslator, OperationOptions, ServiceError};
use gqlpeer_logging::init_logging_from_config;
use serde_json::Value as JsonValue;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

mod cli;
use cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(level) = &cli.log_level {
        config.logging.level = level
            .parse::<LogLevel>()
            .map_err(|e| anyhow::anyhow!(e))
            .context("Invalid --log-level")?;
    }

    init_logging_from_config(&config.logging)?;
    debug!("Effective log level: {}", config.logging.level);

    match cli.command {
        Commands::Translate {
            file,
            operation_name,
            pretty,
        } => {
            let payload = read_payload(file.as_deref())?;
            let mut options = OperationOptions::new();
            if let Some(name) = operation_name {
                options = options.with_operation_name(name);
            }

            let service_errors = translate_payload(&config, &payload, &options);
            info!("Translated payload into {} service error(s)", service_errors.len());

            let output = if pretty {
                serde_json::to_string_pretty(&service_errors)?
            } else {
                serde_json::to_string(&service_errors)?
            };
            println!("{}", output);
        }
        Commands::Config { config_cmd } => match config_cmd {
            ConfigCommands::Show => {
                let yaml = serde_yaml::to_string(&config).context("Failed to render configuration")?;
                print!("{}", yaml);
            }
        },
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<PeerConfig> {
    let loader = ConfigLoader::new();
    match path {
        Some(path) => loader
            .from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => loader.from_env().context("Failed to load configuration from environment"),
    }
}

fn read_payload(file: Option<&Path>) -> Result<JsonValue> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read operation result from stdin")?;
            buffer
        }
    };

    serde_json::from_str(&text).context("Operation result is not valid JSON")
}

fn translate_payload(
    config: &PeerConfig,
    payload: &JsonValue,
    options: &OperationOptions,
) -> Vec<ServiceError> {
    ErrorTranslator::from_config(config.translator.clone()).translate_value(payload, options)
}
