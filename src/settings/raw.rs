use anyhow::Result;
use serde::Deserialize;

use filterlist::UiConfig;
use filterlist::logging;
use filterlist::ui::style;

use crate::cli::CliArgs;

use super::errors::ConfigError;
use super::resolved::ResolvedConfig;

const DEFAULT_THEME: &str = "slate";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    ui: UiSection,
    items: ItemsSection,
    log: LogSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    title: Option<String>,
    filter_label: Option<String>,
    placeholder: Option<String>,
    empty_label: Option<String>,
    initial_query: Option<String>,
    theme: Option<String>,
    log_pane: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ItemsSection {
    skip_empty: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LogSection {
    level: Option<String>,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(title) = cli.title.clone() {
            self.ui.title = Some(title);
        }
        if let Some(label) = cli.filter_label.clone() {
            self.ui.filter_label = Some(label);
        }
        if let Some(label) = cli.empty_label.clone() {
            self.ui.empty_label = Some(label);
        }
        if let Some(query) = cli.initial_query.clone() {
            self.ui.initial_query = Some(query);
        }
        if let Some(theme) = cli.theme.clone() {
            self.ui.theme = Some(theme);
        }
        if let Some(value) = cli.log_pane {
            self.ui.log_pane = Some(value);
        }
        if let Some(value) = cli.skip_empty {
            self.items.skip_empty = Some(value);
        }
        if let Some(level) = cli.log_level.clone() {
            self.log.level = Some(level);
        }
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self) -> Result<ResolvedConfig> {
        let mut ui = UiConfig::default();
        ui.title = self.ui.title.filter(|title| !title.trim().is_empty());
        if let Some(label) = self.ui.filter_label {
            ui.filter_label = label;
        }
        if let Some(placeholder) = self.ui.placeholder {
            ui.placeholder = placeholder;
        }
        if let Some(label) = self.ui.empty_label {
            ui.empty_label = label;
        }

        let theme_name = self
            .ui
            .theme
            .map(|name| name.trim().to_string())
            .unwrap_or_else(|| DEFAULT_THEME.to_string());
        let theme = style::by_name(&theme_name)
            .ok_or_else(|| ConfigError::unknown_theme(&theme_name, &style::names()))?;

        let log_level = match self.log.level {
            Some(value) => logging::parse_level(&value)
                .ok_or(ConfigError::InvalidLogLevel { value })?,
            None => log::LevelFilter::Info,
        };

        Ok(ResolvedConfig {
            ui,
            initial_query: self.ui.initial_query.unwrap_or_default(),
            theme_name,
            theme,
            log_pane: self.ui.log_pane.unwrap_or(false),
            log_level,
            skip_empty: self.items.skip_empty.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use filterlist::ui::style::LIGHT;
    use log::LevelFilter;

    #[test]
    fn cli_overrides_take_precedence() {
        let cli = CliArgs::parse_from([
            "filterlist",
            "--title",
            "States",
            "--filter-label",
            "Find",
            "--empty-label",
            "Nothing",
            "--query",
            "ar",
            "--theme",
            "light",
            "--log-pane",
            "--skip-empty",
            "--log-level",
            "debug",
        ]);

        let mut config = RawConfig::default();
        config.ui.filter_label = Some("from file".into());
        config.apply_cli_overrides(&cli);

        assert_eq!(config.ui.title.as_deref(), Some("States"));
        assert_eq!(config.ui.filter_label.as_deref(), Some("Find"));
        assert_eq!(config.ui.empty_label.as_deref(), Some("Nothing"));
        assert_eq!(config.ui.initial_query.as_deref(), Some("ar"));
        assert_eq!(config.ui.log_pane, Some(true));
        assert_eq!(config.items.skip_empty, Some(true));

        let resolved = config.resolve().expect("resolves");
        assert_eq!(resolved.theme, LIGHT);
        assert_eq!(resolved.log_level, LevelFilter::Debug);
    }

    #[test]
    fn defaults_resolve_without_any_input() {
        let resolved = RawConfig::default().resolve().expect("resolves");
        assert_eq!(resolved.ui, UiConfig::default());
        assert_eq!(resolved.theme_name, DEFAULT_THEME);
        assert_eq!(resolved.initial_query, "");
        assert!(!resolved.log_pane);
        assert!(!resolved.skip_empty);
    }

    #[test]
    fn blank_title_means_no_title() {
        let mut config = RawConfig::default();
        config.ui.title = Some("   ".into());
        assert_eq!(config.resolve().expect("resolves").ui.title, None);
    }

    #[test]
    fn unknown_theme_lists_available_names() {
        let mut config = RawConfig::default();
        config.ui.theme = Some("neon".into());
        let err = config.resolve().expect_err("unknown theme");
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::UnknownTheme {
                name: "neon".into(),
                available: "light, slate, solarized".into(),
            })
        );
    }

    #[test]
    fn invalid_log_level_is_rejected() {
        let mut config = RawConfig::default();
        config.log.level = Some("chatty".into());
        let err = config.resolve().expect_err("bad level");
        assert!(err.to_string().contains("chatty"));
    }
}
