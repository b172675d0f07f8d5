//! `userguard config` — read and write configuration values.

use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::{
    cli::{ConfigCommands, OutputFormat},
    config::{AppConfig, KNOWN_KEYS},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config_file: Option<&PathBuf>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = config.get(&key).ok_or_else(|| unknown_key(&key))?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::Set { key, value } => {
            let path = AppConfig::resolve_path(config_file);
            set_value(&path, &key, &value)?;
            output.success(&format!("Set {key} = {value} in {}", path.display()))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised = toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                message: format!("Failed to serialise config: {e}"),
                source: Some(Box::new(e)),
            })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::resolve_path(config_file).display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn unknown_key(key: &str) -> CliError {
    CliError::ConfigError {
        message: format!("Unknown config key: '{key}' (known: {})", KNOWN_KEYS.join(", ")),
        source: None,
    }
}

/// Parse `raw` into the TOML value `key` expects.
fn parse_value(key: &str, raw: &str) -> CliResult<toml::Value> {
    let invalid = |expected: &str| CliError::ConfigError {
        message: format!("Invalid value '{raw}' for {key}: expected {expected}"),
        source: None,
    };
    match key {
        "output.no_color" => raw
            .parse::<bool>()
            .map(toml::Value::Boolean)
            .map_err(|_| invalid("true or false")),
        "output.format" => OutputFormat::from_str(raw, true)
            .map(|format| toml::Value::String(format.to_string()))
            .map_err(|_| invalid("auto, human, plain or json")),
        _ => Err(unknown_key(key)),
    }
}

/// Write one dotted key into the file at `path`, keeping everything else.
fn set_value(path: &Path, key: &str, raw: &str) -> CliResult<()> {
    let value = parse_value(key, raw)?;
    let (section, field) = key.split_once('.').ok_or_else(|| unknown_key(key))?;

    let mut table: toml::Table = if path.exists() {
        let text = std::fs::read_to_string(path)
            .with_cli_context(|| format!("Failed to read '{}'", path.display()))?;
        text.parse().map_err(|e: toml::de::Error| CliError::ConfigError {
            message: format!("Failed to parse '{}'", path.display()),
            source: Some(Box::new(e)),
        })?
    } else {
        toml::Table::new()
    };

    let entry = table
        .entry(section)
        .or_insert_with(|| toml::Value::Table(toml::Table::new()));
    let toml::Value::Table(section_table) = entry else {
        return Err(CliError::ConfigError {
            message: format!("'{section}' in '{}' is not a table", path.display()),
            source: None,
        });
    };
    section_table.insert(field.to_owned(), value);

    let text = toml::to_string_pretty(&table).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, text).with_cli_context(|| format!("Failed to write '{}'", path.display()))
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_values() {
        assert_eq!(
            parse_value("output.no_color", "true").unwrap(),
            toml::Value::Boolean(true)
        );
        assert_eq!(
            parse_value("output.format", "JSON").unwrap(),
            toml::Value::String("json".into())
        );
    }

    #[test]
    fn parse_rejects_bad_values() {
        assert!(parse_value("output.no_color", "maybe").is_err());
        assert!(parse_value("output.format", "yaml").is_err());
        assert!(matches!(
            parse_value("defaults.lang", "rust"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn set_creates_file_and_round_trips_through_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        set_value(&path, "output.format", "json").unwrap();
        set_value(&path, "output.no_color", "true").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.output.format, OutputFormat::Json);
        assert!(cfg.output.no_color);
    }

    #[test]
    fn set_keeps_unrelated_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "# mine\n[output]\nno_color = true\n").unwrap();

        set_value(&path, "output.format", "plain").unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("no_color = true"));
        assert!(text.contains("format = \"plain\""));
    }
}
