//! Implementation of the `strata layers` command.

use strata_core::application::layer_catalog;

use crate::{
    cli::{LayersArgs, LayersFormat, global::GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: LayersArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let catalog = layer_catalog();

    match args.format {
        LayersFormat::Table => {
            output.header("Layers:")?;
            for layer in &catalog {
                output.print(&format!("  {}/", layer.name))?;
                output.print("    __init__")?;
                for file in &layer.files {
                    output.print(&format!("    {file}"))?;
                }
                for folder in &layer.folders {
                    output.print(&format!("    {}/", folder.name))?;
                    for file in &folder.files {
                        output.print(&format!("      {file}"))?;
                    }
                }
            }
            output.print("  .env")?;
        }

        LayersFormat::List => {
            for layer in &catalog {
                println!("{}", layer.name);
            }
        }

        LayersFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let json = serde_json::to_string_pretty(&catalog).map_err(|e| CliError::IoError {
                message: "failed to serialize layer catalog".into(),
                source: std::io::Error::other(e),
            })?;
            println!("{json}");
        }
    }

    Ok(())
}
