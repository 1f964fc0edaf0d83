use std::fmt;

use anyhow::Result;
use log::{debug, warn};

use super::App;
use super::config::UiConfig;
use super::host::TerminalMode;
use super::outcome::DialogOutcome;
use super::style::{self, Theme};
use crate::items::ItemStore;
use crate::selection::SelectionCallback;

/// Builder for the terminal filterable list dialog.
pub struct PickerUi {
    items: ItemStore,
    ui: UiConfig,
    theme: Theme,
    initial_query: String,
    log_pane: bool,
    on_selected: SelectionCallback,
}

impl PickerUi {
    pub fn new(items: impl Into<ItemStore>) -> Self {
        Self {
            items: items.into(),
            ui: UiConfig::default(),
            theme: Theme::default(),
            initial_query: String::new(),
            log_pane: false,
            on_selected: Box::new(|item| debug!("selected {item:?}")),
        }
    }

    #[must_use]
    pub fn with_ui_config(mut self, ui: UiConfig) -> Self {
        self.ui = ui;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.ui.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_filter_label(mut self, label: impl Into<String>) -> Self {
        self.ui.filter_label = label.into();
        self
    }

    #[must_use]
    pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
        self.initial_query = query.into();
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Use a built-in theme by name; unknown names keep the current theme.
    #[must_use]
    pub fn with_theme_name(mut self, name: &str) -> Self {
        match style::by_name(name) {
            Some(theme) => self.theme = theme,
            None => warn!("unknown theme {name:?}, keeping the current theme"),
        }
        self
    }

    #[must_use]
    pub fn with_log_pane(mut self, enabled: bool) -> Self {
        self.log_pane = enabled;
        self
    }

    /// Callback fired once with the selected item, before the dialog closes.
    #[must_use]
    pub fn on_selected<F>(mut self, callback: F) -> Self
    where
        F: FnOnce(String) + 'static,
    {
        self.on_selected = Box::new(callback);
        self
    }

    pub(crate) fn into_app<'a>(self, mode: TerminalMode) -> (App<'a>, String) {
        let mut app = App::new(self.items, self.on_selected, mode, self.ui, self.theme);
        app.show_logs = self.log_pane;
        (app, self.initial_query)
    }

    /// Run the dialog on the current terminal until an item is selected or
    /// the dialog is dismissed.
    pub fn run(self) -> Result<DialogOutcome> {
        let (mut app, initial_query) = self.into_app(TerminalMode::Interactive);
        app.run(&initial_query)
    }
}

impl fmt::Debug for PickerUi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerUi")
            .field("items", &self.items.len())
            .field("ui", &self.ui)
            .field("initial_query", &self.initial_query)
            .field("log_pane", &self.log_pane)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::ui::style::SOLARIZED;

    #[test]
    fn builder_options_reach_the_app() {
        let (mut app, query) = PickerUi::new(vec!["Alabama".to_string(), "Arizona".to_string()])
            .with_title("States")
            .with_filter_label("Find")
            .with_initial_query("ari")
            .with_theme_name("solarized")
            .with_log_pane(true)
            .into_app(TerminalMode::Headless);

        assert_eq!(query, "ari");
        assert_eq!(app.ui.title.as_deref(), Some("States"));
        assert_eq!(app.ui.filter_label, "Find");
        assert_eq!(app.theme, SOLARIZED);
        assert!(app.show_logs);

        app.open(&query).expect("opens");
        assert_eq!(app.dialog.presenter().displayed(), ["Arizona"]);
    }

    #[test]
    fn unknown_theme_keeps_previous_choice() {
        let (app, _) = PickerUi::new(ItemStore::default())
            .with_theme(SOLARIZED)
            .with_theme_name("neon")
            .into_app(TerminalMode::Headless);
        assert_eq!(app.theme, SOLARIZED);
    }

    #[test]
    fn selection_callback_receives_the_item() {
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        let (mut app, query) = PickerUi::new(ItemStore::new(["abc", "abd", "xyz"]))
            .on_selected(move |item| *sink.borrow_mut() = Some(item))
            .into_app(TerminalMode::Headless);
        app.open(&query).expect("opens");

        app.handle_event(Event::Key(KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE)))
            .expect("typing");
        app.handle_event(Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)))
            .expect("enter");

        assert_eq!(seen.borrow().as_deref(), Some("xyz"));
        assert_eq!(app.outcome(), Some(DialogOutcome::selected("y", "xyz")));
    }
}
