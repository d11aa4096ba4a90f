//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "goinit",
    bin_name = "goinit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold Go services from a layout and a few toggles",
    long_about = "goinit assembles a ready-to-build Go project (layout, go.mod, \
                  Docker, CI) and writes it as a zip archive or a directory.",
    after_help = "EXAMPLES:\n\
        \x20 goinit new myapi --module github.com/acme/myapi --router gin -f docker,github\n\
        \x20 goinit new myapi --module github.com/acme/myapi --extract .\n\
        \x20 goinit preview --structure hexagonal -f logger\n\
        \x20 goinit deps --router chi --dep \"Gin Web Framework\"\n\
        \x20 goinit completions bash > /usr/share/bash-completion/completions/goinit",
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
    /// Generate a new project.
    #[command(
        visible_alias = "n",
        about = "Generate a new project archive or directory",
        after_help = "EXAMPLES:\n\
            \x20 goinit new myapi -m github.com/acme/myapi\n\
            \x20 goinit new myapi -m github.com/acme/myapi -s feature -f docker,database\n\
            \x20 goinit new --from request.json --output build/myapi.zip\n\
            \x20 goinit new myapi -m github.com/acme/myapi --extract ~/src --yes"
    )]
    New(NewArgs),

    /// Show the files a project would contain.
    #[command(
        visible_alias = "p",
        about = "Preview the file list of a project",
        after_help = "EXAMPLES:\n\
            \x20 goinit preview\n\
            \x20 goinit preview --structure flat -f docker\n\
            \x20 goinit preview --from request.json --format json"
    )]
    Preview(ProjectArgs),

    /// Show the pinned Go modules of a project.
    #[command(
        about = "Resolve the go.mod requirements of a project",
        after_help = "EXAMPLES:\n\
            \x20 goinit deps --router gin -f database,redis\n\
            \x20 goinit deps --dep \"Chi Router\" --dep github.com/spf13/viper"
    )]
    Deps(ProjectArgs),

    /// List layout variants.
    #[command(
        visible_alias = "ls",
        about = "List layout variants and their files",
        after_help = "EXAMPLES:\n\
            \x20 goinit list\n\
            \x20 goinit list --structure hexagonal\n\
            \x20 goinit list --format json"
    )]
    List(ListArgs),

    /// Initialise a goinit configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 goinit init           # platform config directory\n\
            \x20 goinit init --local   # .goinit.toml in the current directory"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 goinit completions bash > ~/.local/share/bash-completion/completions/goinit\n\
            \x20 goinit completions zsh  > ~/.zfunc/_goinit\n\
            \x20 goinit completions fish > ~/.config/fish/completions/goinit.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the goinit configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 goinit config get defaults.router\n\
            \x20 goinit config list\n\
            \x20 goinit config path"
    )]
    Config(ConfigCommands),
}

// ── project inputs ────────────────────────────────────────────────────────────

/// Everything that describes a project.  Shared by `new`, `preview` and
/// `deps`; flags override values read with `--from`.
#[derive(Debug, Clone, Default, Args)]
pub struct ProjectArgs {
    /// Project name; also the archive root directory.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// Go module path.
    #[arg(
        short = 'm',
        long = "module",
        value_name = "PATH",
        help = "Go module path (e.g. github.com/acme/myapi)"
    )]
    pub module: Option<String>,

    /// JSON request file.
    #[arg(
        long = "from",
        value_name = "FILE",
        help = "Read the project description from a JSON request file"
    )]
    pub from: Option<PathBuf>,

    #[arg(short = 'd', long = "description", value_name = "TEXT")]
    pub description: Option<String>,

    #[arg(long = "go-version", value_name = "VERSION")]
    pub go_version: Option<String>,

    /// Layout variant.
    #[arg(short = 's', long = "structure", value_enum, help = "Layout variant")]
    pub structure: Option<Structure>,

    #[arg(short = 't', long = "type", value_enum, help = "Project type")]
    pub kind: Option<ProjectKind>,

    #[arg(short = 'r', long = "router", value_enum, help = "HTTP router")]
    pub router: Option<Router>,

    #[arg(short = 'l', long = "logger", value_enum, help = "Logging library")]
    pub logger: Option<Logger>,

    /// Feature toggles, comma separated or repeated.
    #[arg(
        short = 'f',
        long = "feature",
        value_enum,
        value_delimiter = ',',
        value_name = "FEATURE",
        help = "Enable a feature (docker, github, config, logger, database, redis, jwt, air)"
    )]
    pub features: Vec<FeatureFlag>,

    /// Enable every feature toggle.
    #[arg(long = "all-features", conflicts_with = "features")]
    pub all_features: bool,

    /// Extra library by display name or module path.
    #[arg(
        long = "dep",
        value_name = "NAME",
        help = "Add a library by display name (\"Gin Web Framework\") or module path"
    )]
    pub deps: Vec<String>,
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `goinit new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Archive destination.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Write the archive here (default: ./<NAME>.zip)"
    )]
    pub output: Option<PathBuf>,

    /// Write a directory instead of an archive.
    #[arg(
        short = 'x',
        long = "extract",
        value_name = "DIR",
        conflicts_with = "output",
        help = "Write the project as a directory below DIR"
    )]
    pub extract: Option<PathBuf>,

    /// Overwrite an existing archive file.
    #[arg(long = "force", help = "Overwrite an existing archive")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `goinit list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show a single layout.
    #[arg(short = 's', long = "structure", value_enum, help = "Show one layout")]
    pub structure: Option<Structure>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `goinit init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.goinit.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `goinit completions`.
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
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `goinit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.router`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Layout variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Structure {
    Standard,
    Flat,
    #[value(alias = "feature-based")]
    Feature,
    #[value(aliases = ["hex", "ports-and-adapters"])]
    Hexagonal,
}

/// Project types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum ProjectKind {
    #[value(aliases = ["rest", "api", "http"])]
    RestApi,
    Cli,
    Grpc,
    Library,
}

/// HTTP routers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Router {
    Chi,
    Gin,
    Echo,
    Fiber,
    /// `net/http` only.
    #[value(alias = "none")]
    Stdlib,
}

/// Logging libraries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Logger {
    Zerolog,
    Zap,
    Slog,
    Logrus,
    Stdlib,
}

/// Feature toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FeatureFlag {
    Docker,
    #[value(alias = "ci")]
    Github,
    Config,
    Logger,
    #[value(alias = "db")]
    Database,
    Redis,
    Jwt,
    #[value(alias = "hot-reload")]
    Air,
}

// ── tests ─────────────────────────────────────────────────────────────────────
