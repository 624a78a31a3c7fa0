//! Implementation of the `strata new` command.
//!
//! Responsibility: translate CLI arguments into a scaffold invocation,
//! call the core service, and display results. No business logic lives
//! here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use strata_adapters::LocalFilesystem;
use strata_core::{application::ScaffoldService, domain::FsEntry};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `strata new` command.
///
/// Dispatch sequence:
/// 1. Parse and validate the app name / target path
/// 2. Warn if the target already exists (content will be overwritten)
/// 3. Confirm with user unless `--yes` or `--quiet`
/// 4. Early-exit if `--dry-run`
/// 5. Execute scaffolding via `ScaffoldService`
/// 6. Print next-steps guidance
#[instrument(skip_all, fields(app = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve app path
    let (app_name, root) = resolve_app_path(&args.name)?;
    validate_app_name(&app_name)?;

    debug!(app = %app_name, root = %root.display(), "Target resolved");

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));

    // 2. Existing target: the layout is overwrite-safe by design, but say so.
    if root.exists() {
        output.warning(&format!(
            "'{}' already exists; layer files will be overwritten",
            root.display()
        ))?;
    }

    // 3. Show configuration and confirm
    let skip_confirm = args.yes || config.scaffold.always_yes;
    if !global.quiet && !skip_confirm && !args.dry_run {
        show_configuration(&app_name, &root, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 4. Dry run: describe but do not write.
    if args.dry_run {
        let plan = service.plan(&app_name, &root).map_err(CliError::Core)?;
        output.info(&format!(
            "Dry run: would create '{}' at {}",
            app_name,
            root.display(),
        ))?;
        for entry in plan.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    output.print(&format!("  {}/", root.join(&dir.path).display()))?
                }
                FsEntry::File(file) => {
                    output.print(&format!("  {}", root.join(&file.path).display()))?
                }
            }
        }
        return Ok(());
    }

    // 5. Scaffold
    output.header(&format!("Creating '{app_name}'..."))?;
    info!(app = %app_name, path = %root.display(), "Scaffold started");

    let summary = service.setup(&app_name, &root).map_err(CliError::Core)?;

    info!(
        app = %app_name,
        directories = summary.directories,
        files = summary.files,
        "Scaffold completed"
    );

    // 6. Success + next steps
    output.success(&format!(
        "The layered structure was created for the app '{app_name}'"
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {app_name}"))?;
        output.print("  # Move your models into infrastructure/, wire up urls, build!")?;
    }

    Ok(())
}

// ── Path resolution ───────────────────────────────────────────────────────────

/// Split the NAME argument into the app name (last path segment) and the
/// full target root directory.
pub fn resolve_app_path(name: &str) -> CliResult<(String, PathBuf)> {
    let path = Path::new(name);

    let app_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CliError::InvalidAppName {
            name: name.into(),
            reason: "cannot extract valid app name".into(),
        })?
        .to_string();

    // The full path to the app directory, not just the parent.
    let root = path.to_path_buf();

    Ok((app_name, root))
}

fn validate_app_name(name: &str) -> CliResult<()> {
    if name.is_empty() {
        return Err(CliError::InvalidAppName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if name.starts_with('.') {
        return Err(CliError::InvalidAppName {
            name: name.into(),
            reason: "name cannot start with '.'".into(),
        });
    }
    if name.contains('/') || name.contains('\\') {
        return Err(CliError::InvalidAppName {
            name: name.into(),
            reason: "name cannot contain path separators".into(),
        });
    }
    Ok(())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(app_name: &str, root: &Path, out: &OutputManager) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  App:      {app_name}"))?;
    out.print(&format!("  Location: {}", root.display()))?;
    out.print("  Layers:   presentation, application, domain, infrastructure")?;
    out.print("")?;
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout()
        .flush()
        .with_cli_context(|| "failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .with_cli_context(|| "failed to read confirmation input")?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
