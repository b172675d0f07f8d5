//! Diagnostics on stderr.
//!
//! `userguard-core` only emits events; this module installs the one
//! subscriber. Level comes from `-v`/`-q` unless `USERGUARD_LOG` holds a
//! filter directive. Colour follows `--no-color`, the `output.no_color`
//! config key and whether stderr is a terminal.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::{cli::GlobalArgs, config::AppConfig};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "USERGUARD_LOG";

/// Crates whose events are shown at the chosen level.
const TARGETS: [&str; 2] = ["userguard", "userguard_core"];

/// Resolved subscriber settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSettings {
    pub level: LevelFilter,
    pub ansi: bool,
}

impl LogSettings {
    /// Combine flags and loaded config. `stderr_is_terminal` is passed in so
    /// the decision can be tested.
    pub fn resolve(args: &GlobalArgs, config: &AppConfig, stderr_is_terminal: bool) -> Self {
        let level = if args.quiet {
            LevelFilter::ERROR
        } else {
            match args.verbose {
                0 => LevelFilter::WARN,
                1 => LevelFilter::INFO,
                2 => LevelFilter::DEBUG,
                _ => LevelFilter::TRACE,
            }
        };
        Self {
            level,
            ansi: stderr_is_terminal && !args.no_color && !config.output.no_color,
        }
    }

    /// Directive used when `USERGUARD_LOG` is unset.
    fn directive(&self) -> String {
        TARGETS
            .iter()
            .map(|target| format!("{target}={}", self.level))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Install the global subscriber. Call once, after the config is loaded.
pub fn init_logging(args: &GlobalArgs, config: &AppConfig) -> anyhow::Result<()> {
    let settings = LogSettings::resolve(args, config, std::io::stderr().is_terminal());

    let filter = EnvFilter::builder()
        .with_env_var(LOG_ENV)
        .try_from_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.directive()));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(settings.ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}
