//! Settings file and command-line merging.

use anyhow::{Context, Result};
use clap::ValueEnum;
use log::debug;
use serde::Deserialize;
use shams_diff::{DiffConfig, DiffOptions};
use std::path::Path;
use std::time::Duration;

/// How the comparison is laid out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Unified,
    Split,
    /// The full result as JSON, for other front-ends
    Json,
}

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Settings read from a TOML file. Every field is optional; missing ones
/// fall back to the command line or the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub ignore_whitespace: Option<bool>,
    pub ignore_case: Option<bool>,
    pub detect_moved: Option<bool>,
    pub view: Option<ViewMode>,
    pub color: Option<ColorMode>,
    pub max_lines: Option<usize>,
    pub timeout_ms: Option<u64>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings = Self::parse(&text)
            .with_context(|| format!("parsing settings in {}", path.display()))?;
        debug!("loaded settings from {:?}: {:?}", path, settings);
        Ok(settings)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// Values given on the command line, before merging
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub ignore_whitespace: Option<bool>,
    pub ignore_case: Option<bool>,
    pub detect_moved: Option<bool>,
    pub view: Option<ViewMode>,
    pub color: Option<ColorMode>,
    pub max_lines: Option<usize>,
    pub timeout_ms: Option<u64>,
}

/// The effective settings of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub options: DiffOptions,
    pub view: ViewMode,
    pub color: ColorMode,
    pub max_lines: Option<usize>,
    pub timeout: Option<Duration>,
}

impl Resolved {
    /// Merge defaults, the settings file and the command line, later ones winning
    pub fn merge(settings: &Settings, overrides: &Overrides) -> Self {
        let switch = |flag: Option<bool>, file: Option<bool>| flag.or(file).unwrap_or(false);
        let options = DiffOptions::new()
            .ignore_whitespace(switch(overrides.ignore_whitespace, settings.ignore_whitespace))
            .ignore_case(switch(overrides.ignore_case, settings.ignore_case))
            .detect_moved(switch(overrides.detect_moved, settings.detect_moved));

        Self {
            options,
            view: overrides.view.or(settings.view).unwrap_or_default(),
            color: overrides.color.or(settings.color).unwrap_or_default(),
            max_lines: overrides.max_lines.or(settings.max_lines),
            timeout: overrides
                .timeout_ms
                .or(settings.timeout_ms)
                .map(Duration::from_millis),
        }
    }

    pub fn config(&self) -> DiffConfig {
        let mut config = DiffConfig::new(self.options);
        if let Some(max_lines) = self.max_lines {
            config = config.max_lines(max_lines);
        }
        if let Some(timeout) = self.timeout {
            config = config.timeout(timeout);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_parse_settings() {
        let settings = Settings::parse(
            r#"
            ignore_case = true
            view = "split"
            color = "never"
            timeout_ms = 250
            "#,
        )
        .unwrap();

        assert_eq!(
            settings,
            Settings {
                ignore_case: Some(true),
                view: Some(ViewMode::Split),
                color: Some(ColorMode::Never),
                timeout_ms: Some(250),
                ..Settings::default()
            }
        );
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(Settings::parse("ignore_cases = true").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "detect_moved = true\nmax_lines = 10").unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.detect_moved, Some(true));
        assert_eq!(settings.max_lines, Some(10));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("reading settings"));
    }

    #[test]
    fn test_command_line_wins() {
        let settings = Settings {
            ignore_whitespace: Some(true),
            view: Some(ViewMode::Split),
            max_lines: Some(100),
            timeout_ms: Some(50),
            ..Settings::default()
        };
        let overrides = Overrides {
            ignore_case: Some(true),
            view: Some(ViewMode::Unified),
            max_lines: Some(5),
            ..Overrides::default()
        };

        let resolved = Resolved::merge(&settings, &overrides);
        assert_eq!(
            resolved,
            Resolved {
                options: DiffOptions::new().ignore_whitespace(true).ignore_case(true),
                view: ViewMode::Unified,
                color: ColorMode::Auto,
                max_lines: Some(5),
                timeout: Some(Duration::from_millis(50)),
            }
        );

        let config = resolved.config();
        assert_eq!(config.get_max_lines(), Some(5));
        assert_eq!(config.get_timeout(), Some(Duration::from_millis(50)));
    }

    #[test]
    fn test_command_line_turns_switches_off() {
        let settings = Settings {
            ignore_case: Some(true),
            detect_moved: Some(true),
            ..Settings::default()
        };
        let overrides = Overrides {
            ignore_case: Some(false),
            ..Overrides::default()
        };

        let resolved = Resolved::merge(&settings, &overrides);
        assert_eq!(resolved.options, DiffOptions::new().detect_moved(true));
    }

    #[test]
    fn test_defaults() {
        let resolved = Resolved::merge(&Settings::default(), &Overrides::default());
        assert_eq!(resolved.options, DiffOptions::default());
        assert_eq!(resolved.view, ViewMode::Unified);
        assert_eq!(resolved.max_lines, None);

        let config = resolved.config();
        assert_eq!(config.get_max_lines(), Some(shams_diff::DEFAULT_MAX_LINES));
        assert_eq!(config.get_timeout(), Some(shams_diff::DEFAULT_TIMEOUT));
    }
}
