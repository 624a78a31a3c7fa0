//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "strata",
    bin_name = "strata",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f4c2} Layered Django app scaffolding",
    long_about = "Strata creates the layered folder structure for a Django \
                  application: presentation, application, domain, and \
                  infrastructure layers with starter boilerplate and a .env file.",
    after_help = "EXAMPLES:\n\
        \x20 strata new blog\n\
        \x20 strata new ../apps/shop --yes\n\
        \x20 strata layers --format json\n\
        \x20 strata completions bash > /usr/share/bash-completion/completions/strata",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the layered structure for a new app.
    #[command(
        visible_alias = "n",
        about = "Create the layered structure for an app",
        after_help = "EXAMPLES:\n\
            \x20 strata new blog\n\
            \x20 strata new blog --dry-run\n\
            \x20 strata new ../apps/shop --yes"
    )]
    New(NewArgs),

    /// Show the fixed layer map.
    #[command(
        visible_alias = "ls",
        about = "List the layers and files that will be created",
        after_help = "EXAMPLES:\n\
            \x20 strata layers\n\
            \x20 strata layers --format json"
    )]
    Layers(LayersArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 strata completions bash > ~/.local/share/bash-completion/completions/strata\n\
            \x20 strata completions zsh  > ~/.zfunc/_strata\n\
            \x20 strata completions fish > ~/.config/fish/completions/strata.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Strata configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 strata config path\n\
            \x20 strata config list"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `strata new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// App name or path.  A plain name creates `./name`; a path like
    /// `../apps/foo` places the app one level up.
    #[arg(value_name = "NAME", help = "App name or path")]
    pub name: String,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── layers ────────────────────────────────────────────────────────────────────

/// Arguments for `strata layers`.
#[derive(Debug, Args)]
pub struct LayersArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: LayersFormat,
}

/// Output format for the `layers` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LayersFormat {
    /// Human-readable table.
    Table,
    /// One layer name per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `strata completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `strata config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the path to the active configuration file.
    Path,
    /// Print all configuration values.
    List,
}

// ── tests ─────────────────────────────────────────────────────────────────────
