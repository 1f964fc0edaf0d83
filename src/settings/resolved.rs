use filterlist::UiConfig;
use filterlist::ui::style::Theme;
use log::LevelFilter;

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
    pub ui: UiConfig,
    pub initial_query: String,
    pub theme_name: String,
    pub theme: Theme,
    pub log_pane: bool,
    pub log_level: LevelFilter,
    pub skip_empty: bool,
}

impl ResolvedConfig {
    /// Print a human readable summary of the effective configuration.
    pub fn print_summary(&self) {
        println!("Effective configuration:");
        println!("  Title: {}", self.ui.title.as_deref().unwrap_or("(none)"));
        println!("  Filter label: {}", self.ui.filter_label);
        println!("  Placeholder: {}", self.ui.placeholder);
        println!("  Empty label: {}", self.ui.empty_label);
        if !self.initial_query.is_empty() {
            println!("  Initial query: {}", self.initial_query);
        }
        println!("  UI theme: {}", self.theme_name);
        println!("  Log pane: {}", bool_to_word(self.log_pane));
        println!("  Log level: {}", self.log_level);
        println!("  Skip empty items: {}", bool_to_word(self.skip_empty));
    }
}

fn bool_to_word(value: bool) -> &'static str {
    if value { "enabled" } else { "disabled" }
}
