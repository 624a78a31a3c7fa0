//! Implementation of the `strata config` command.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Path => {
            println!("{}", AppConfig::config_path().display());
        }
        ConfigCommands::List => {
            let rendered = toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                message: "failed to render configuration".into(),
                source: Some(Box::new(e)),
            })?;
            output.print(rendered.trim_end())?;
        }
    }

    Ok(())
}
