//! CLI argument definitions
//!
//! All Clap derive structs for `roadmap` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

// ============================================================================
// Root CLI
// ============================================================================

/// Render roadmap pages with a grouped sidebar and markdown content.
#[derive(Parser, Debug)]
#[command(name = "roadmap", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "ROADMAP_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true, env = "ROADMAP_LOG_FORMAT")]
    pub log_format: LogFormatArg,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a roadmap page to HTML.
    Render(RenderArgs),

    /// Print the computed sidebar for a descriptor.
    Sidebar(SidebarArgs),

    /// Validate descriptors and check their content resolves.
    Validate(ValidateArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Render / Sidebar / Validate
// ============================================================================

/// Arguments for `render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Path to the roadmap descriptor (YAML or JSON).
    #[arg(short, long, env = "ROADMAP_DESCRIPTOR")]
    pub descriptor: PathBuf,

    /// Directory containing markdown content.
    #[arg(short, long, default_value = "./content", env = "ROADMAP_CONTENT_DIR")]
    pub content: PathBuf,

    /// Site configuration file (YAML).
    #[arg(long, env = "ROADMAP_SITE")]
    pub site: Option<PathBuf>,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Render with the mobile sidebar open.
    #[arg(long)]
    pub menu_open: bool,

    /// Wrap the fragment in a complete HTML document.
    #[arg(long)]
    pub standalone: bool,
}

/// Arguments for `sidebar`.
#[derive(Args, Debug)]
pub struct SidebarArgs {
    /// Path to the roadmap descriptor (YAML or JSON).
    #[arg(short, long, env = "ROADMAP_DESCRIPTOR")]
    pub descriptor: PathBuf,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Descriptor files to validate.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Directory containing markdown content.
    #[arg(short, long, default_value = "./content", env = "ROADMAP_CONTENT_DIR")]
    pub content: PathBuf,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Enable strict validation (warnings become errors).
    #[arg(long)]
    pub strict: bool,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Log output format flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormatArg {
    /// Human-readable lines.
    #[default]
    Human,
    /// Newline-delimited JSON.
    Json,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
