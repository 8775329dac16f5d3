//! CLI configuration.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding `dismiss_after_ms`.
pub const DISMISS_ENV_VAR: &str = "ROSTER_DISMISS_AFTER_MS";

/// How a roster is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "table" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown format: {other}")),
        }
    }
}

/// Top-level roster configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    /// How long a notification stays up before it clears itself.
    #[serde(default = "default_dismiss_after_ms")]
    pub dismiss_after_ms: u64,
    /// Format used when `--format` is not given.
    #[serde(default)]
    pub default_format: OutputFormat,
}

fn default_dismiss_after_ms() -> u64 {
    5000
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            dismiss_after_ms: default_dismiss_after_ms(),
            default_format: OutputFormat::default(),
        }
    }
}

impl RosterConfig {
    pub fn dismiss_after(&self) -> Duration {
        Duration::from_millis(self.dismiss_after_ms)
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `roster.toml` in the current directory
/// 2. `~/.config/roster/config.toml`
///
/// `ROSTER_DISMISS_AFTER_MS` overrides the file.
pub fn load_config_from(path: Option<&Path>) -> Result<RosterConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("roster.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => RosterConfig::default(),
    };

    apply_env_override(&mut config, std::env::var(DISMISS_ENV_VAR).ok().as_deref())?;
    Ok(config)
}

/// Apply a `ROSTER_DISMISS_AFTER_MS` value, if one is set.
fn apply_env_override(config: &mut RosterConfig, value: Option<&str>) -> Result<()> {
    if let Some(value) = value {
        config.dismiss_after_ms = value
            .trim()
            .parse()
            .with_context(|| format!("invalid {DISMISS_ENV_VAR}: '{value}'"))?;
        tracing::debug!(dismiss_after_ms = config.dismiss_after_ms, "dismiss delay from environment");
    }
    Ok(())
}

/// Parse a TOML config string.
pub fn parse_config(content: &str) -> Result<RosterConfig> {
    Ok(toml::from_str::<RosterConfig>(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("roster"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = RosterConfig::default();
        assert_eq!(config.dismiss_after_ms, 5000);
        assert_eq!(config.dismiss_after(), Duration::from_secs(5));
        assert_eq!(config.default_format, OutputFormat::Text);
    }

    #[test]
    fn parse_full_config() {
        let config = parse_config(
            r#"
dismiss_after_ms = 1500
default_format = "html"
"#,
        )
        .unwrap();
        assert_eq!(config.dismiss_after_ms, 1500);
        assert_eq!(config.default_format, OutputFormat::Html);
    }

    #[test]
    fn parse_partial_config_uses_defaults() {
        let config = parse_config("default_format = \"json\"").unwrap();
        assert_eq!(config.dismiss_after_ms, 5000);
        assert_eq!(config.default_format, OutputFormat::Json);
    }

    #[test]
    fn parse_rejects_unknown_format() {
        assert!(parse_config("default_format = \"pdf\"").is_err());
    }

    #[test]
    fn load_missing_explicit_path_fails() {
        let err = load_config_from(Some(Path::new("definitely-missing-roster.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.toml");
        std::fs::write(&path, "dismiss_after_ms = 250\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        // The env override may be set by the surrounding environment.
        if std::env::var(DISMISS_ENV_VAR).is_err() {
            assert_eq!(config.dismiss_after_ms, 250);
        }
    }

    #[test]
    fn env_override_replaces_file_value() {
        let mut config = parse_config("dismiss_after_ms = 250\n").unwrap();
        apply_env_override(&mut config, Some(" 1200 ")).unwrap();
        assert_eq!(config.dismiss_after(), Duration::from_millis(1200));

        apply_env_override(&mut config, None).unwrap();
        assert_eq!(config.dismiss_after_ms, 1200);
    }

    #[test]
    fn env_override_rejects_non_numbers() {
        let mut config = RosterConfig::default();
        for value in ["abc", "-5", "1.5", ""] {
            let err = apply_env_override(&mut config, Some(value)).unwrap_err();
            assert!(err.to_string().contains("invalid ROSTER_DISMISS_AFTER_MS"), "{value}");
        }
        assert_eq!(config.dismiss_after_ms, 5000);
    }

    #[test]
    fn output_format_parse_and_display() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("HTML".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert!("pdf".parse::<OutputFormat>().is_err());
    }
}
