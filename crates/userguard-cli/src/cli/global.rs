//! Flags shared by every `userguard` subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};
use serde::{Deserialize, Serialize};

/// Logging, colour, config and format flags, accepted before or after the
/// subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Repeat for more log detail on stderr: `-v` info, `-vv` debug,
    /// `-vvv` trace. The default shows warnings only.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print only the result document and errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never colour output. Also set by `NO_COLOR`.
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Read settings from this file instead of `.userguard.toml` or the
    /// per-user config.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How reports and users are printed. `auto` defers to the config file,
    /// then to whether stdout is a terminal.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// `true` when error rendering should include the cause chain.
    pub fn shows_causes(&self) -> bool {
        self.verbose > 0
    }
}

/// Rendering of command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pick `human` on a terminal, `plain` otherwise.
    #[default]
    Auto,
    /// Coloured lines and user summaries.
    Human,
    /// The same lines without colour; users as JSON.
    Plain,
    /// Reports, users and error payloads as JSON documents.
    Json,
}

impl OutputFormat {
    /// Settle `auto`: first on `fallback` (the configured format), then on
    /// whether stdout is a terminal. Never returns `Auto`.
    pub fn resolve(self, fallback: OutputFormat, stdout_is_terminal: bool) -> OutputFormat {
        match (self, fallback) {
            (Self::Auto, Self::Auto) if stdout_is_terminal => Self::Human,
            (Self::Auto, Self::Auto) => Self::Plain,
            (Self::Auto, configured) => configured,
            (explicit, _) => explicit,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Human => "human",
            Self::Plain => "plain",
            Self::Json => "json",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_format_wins() {
        assert_eq!(
            OutputFormat::Json.resolve(OutputFormat::Plain, true),
            OutputFormat::Json
        );
    }

    #[test]
    fn auto_takes_configured_format() {
        assert_eq!(
            OutputFormat::Auto.resolve(OutputFormat::Json, true),
            OutputFormat::Json
        );
    }

    #[test]
    fn auto_everywhere_follows_terminal() {
        assert_eq!(
            OutputFormat::Auto.resolve(OutputFormat::Auto, true),
            OutputFormat::Human
        );
        assert_eq!(
            OutputFormat::Auto.resolve(OutputFormat::Auto, false),
            OutputFormat::Plain
        );
    }

    #[test]
    fn display_matches_value_names() {
        for format in OutputFormat::value_variants() {
            let name = format.to_possible_value().map(|v| v.get_name().to_owned());
            assert_eq!(name, Some(format.to_string()));
        }
    }
}
