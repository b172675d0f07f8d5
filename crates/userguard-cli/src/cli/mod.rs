//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No validation rules live here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "userguard",
    bin_name = "userguard",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Check user records against the shared input rules",
    long_about = "userguard applies the same email, name and bio rules the \
                  server and the signup form use, so a record can be checked \
                  before it is ever submitted.",
    after_help = "EXAMPLES:\n\
        \x20 userguard check create --email a@b.com --first-name John --last-name Doe\n\
        \x20 userguard check update --input patch.json\n\
        \x20 userguard create --input user.json --output-format json\n\
        \x20 userguard rules",
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
    /// Validate a record without acting on it.
    #[command(
        visible_alias = "c",
        about = "Validate a create record or an update patch",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 userguard check create --email a@b.com --first-name John --last-name Doe\n\
            \x20 userguard check update --bio \"short bio\"\n\
            \x20 cat user.json | userguard check create --input -"
    )]
    Check(CheckCommands),

    /// Validate a create record and print the resulting user.
    #[command(
        about = "Build a new user from a valid record",
        after_help = "EXAMPLES:\n\
            \x20 userguard create --email a@b.com --first-name John --last-name Doe\n\
            \x20 userguard create --input user.json"
    )]
    Create(RecordArgs),

    /// Validate a patch and apply it to an existing user.
    #[command(
        about = "Apply a valid patch to a stored user",
        after_help = "EXAMPLES:\n\
            \x20 userguard update --user john.json --bio \"short bio\"\n\
            \x20 userguard update --user john.json --input patch.json"
    )]
    Update(UpdateArgs),

    /// Print the field rules.
    #[command(
        about = "Show the validation rules",
        after_help = "EXAMPLES:\n\
            \x20 userguard rules\n\
            \x20 userguard rules --field first-name\n\
            \x20 userguard rules --format json"
    )]
    Rules(RulesArgs),

    /// Initialise a userguard configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 userguard init           # default location\n\
            \x20 userguard init --local   # .userguard.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 userguard completions bash > ~/.local/share/bash-completion/completions/userguard\n\
            \x20 userguard completions zsh  > ~/.zfunc/_userguard"
    )]
    Completions(CompletionsArgs),

    /// Manage the userguard configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 userguard config get output.format\n\
            \x20 userguard config set output.no_color true\n\
            \x20 userguard config list"
    )]
    Config(ConfigCommands),
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Which rule set `check` applies.
#[derive(Debug, Subcommand)]
pub enum CheckCommands {
    /// All of email, first name and last name are required.
    Create(RecordArgs),
    /// Only the supplied fields are checked.
    Update(PatchArgs),
}

// ── record input ──────────────────────────────────────────────────────────────

/// Where a record comes from: a JSON document, individual flags, or both.
///
/// Flags override fields read from `--input`.
#[derive(Debug, Default, Args)]
pub struct RecordArgs {
    /// JSON document with camelCase fields; `-` reads stdin.
    #[arg(short = 'i', long = "input", value_name = "FILE", help = "Read the record from a JSON file ('-' for stdin)")]
    pub input: Option<PathBuf>,

    #[arg(short = 'e', long = "email", value_name = "EMAIL", help = "Email address")]
    pub email: Option<String>,

    #[arg(long = "first-name", value_name = "NAME", help = "First name")]
    pub first_name: Option<String>,

    #[arg(long = "last-name", value_name = "NAME", help = "Last name")]
    pub last_name: Option<String>,

    #[arg(long = "bio", value_name = "TEXT", help = "Short biography")]
    pub bio: Option<String>,
}

/// A record plus the update-only `isActive` flag.
#[derive(Debug, Default, Args)]
pub struct PatchArgs {
    #[command(flatten)]
    pub record: RecordArgs,

    /// Activate or deactivate the user.
    #[arg(long = "active", value_name = "BOOL", help = "Set isActive (true/false)")]
    pub active: Option<bool>,
}

// ── update ────────────────────────────────────────────────────────────────────

/// Arguments for `userguard update`.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Stored user, as printed by `userguard create --output-format json`.
    #[arg(short = 'u', long = "user", value_name = "FILE", help = "JSON file holding the current user")]
    pub user: PathBuf,

    #[command(flatten)]
    pub patch: PatchArgs,
}

// ── rules ─────────────────────────────────────────────────────────────────────

/// Arguments for `userguard rules`.
#[derive(Debug, Args)]
pub struct RulesArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: RulesFormat,

    /// Show one field only (`email`, `firstName`, `lastName`, `bio`).
    #[arg(long = "field", value_name = "FIELD", help = "Only show the rule for this field")]
    pub field: Option<String>,
}

/// Output format for the `rules` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RulesFormat {
    /// Human-readable table.
    Table,
    /// JSON object.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `userguard init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.userguard.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `userguard completions`.
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

/// Subcommands for `userguard config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.format`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_check_create_flags() {
        let cli = Cli::parse_from([
            "userguard",
            "check",
            "create",
            "--email",
            "a@b.com",
            "--first-name",
            "John",
            "--last-name",
            "Doe",
        ]);
        match cli.command {
            Commands::Check(CheckCommands::Create(args)) => {
                assert_eq!(args.email.as_deref(), Some("a@b.com"));
                assert_eq!(args.first_name.as_deref(), Some("John"));
                assert!(args.bio.is_none());
                assert!(args.input.is_none());
            }
            other => panic!("expected check create, got {other:?}"),
        }
    }

    #[test]
    fn explicit_empty_flag_is_present() {
        let cli = Cli::parse_from(["userguard", "check", "update", "--email", ""]);
        match cli.command {
            Commands::Check(CheckCommands::Update(args)) => {
                assert_eq!(args.record.email.as_deref(), Some(""));
            }
            other => panic!("expected check update, got {other:?}"),
        }
    }

    #[test]
    fn update_requires_user_file() {
        let result = Cli::try_parse_from(["userguard", "update", "--bio", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn active_flag_parses_bool() {
        let cli = Cli::parse_from(["userguard", "update", "-u", "u.json", "--active", "false"]);
        match cli.command {
            Commands::Update(args) => assert_eq!(args.patch.active, Some(false)),
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn check_alias() {
        let cli = Cli::parse_from(["userguard", "c", "create", "-i", "-"]);
        assert!(matches!(cli.command, Commands::Check(CheckCommands::Create(_))));
    }

    #[test]
    fn rules_field_is_optional() {
        let cli = Cli::parse_from(["userguard", "rules", "--field", "bio"]);
        match cli.command {
            Commands::Rules(args) => assert_eq!(args.field.as_deref(), Some("bio")),
            other => panic!("expected rules, got {other:?}"),
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["userguard", "--quiet", "--verbose", "rules"]);
        assert!(result.is_err());
    }
}
