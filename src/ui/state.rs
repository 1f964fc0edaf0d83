use anyhow::Result;

use super::config::UiConfig;
use super::host::{TerminalHost, TerminalMode};
use super::input::SearchInput;
use super::outcome::DialogOutcome;
use super::style::Theme;
use crate::dialog::{DialogHandle, DialogState, FilterableListDialog};
use crate::items::ItemStore;
use crate::selection::SelectionCallback;

/// Terminal front end state: the dialog core plus the widgets around it.
pub struct App<'a> {
    pub(crate) dialog: DialogHandle<TerminalHost>,
    pub search_input: SearchInput<'a>,
    pub(crate) ui: UiConfig,
    pub theme: Theme,
    pub(crate) show_logs: bool,
}

impl<'a> App<'a> {
    pub(crate) fn new(
        items: ItemStore,
        on_selected: SelectionCallback,
        mode: TerminalMode,
        ui: UiConfig,
        theme: Theme,
    ) -> Self {
        let host = TerminalHost::new(mode, theme);
        let dialog = FilterableListDialog::create(host, items, on_selected);
        let search_input = placeholder_input("", &ui, &theme);
        Self {
            dialog,
            search_input,
            ui,
            theme,
            show_logs: false,
        }
    }

    /// Show the dialog and apply the initial query as the first edit.
    pub(crate) fn open(&mut self, initial_query: &str) -> Result<()> {
        self.dialog.show()?;
        if !initial_query.is_empty() {
            self.search_input = placeholder_input(initial_query, &self.ui, &self.theme);
            self.dialog.on_query_text_changed(self.search_input.text());
        }
        Ok(())
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.dialog.state().is_terminal()
    }

    /// The outcome once the dialog reached a terminal state.
    pub(crate) fn outcome(&self) -> Option<DialogOutcome> {
        let query = self.search_input.text();
        match self.dialog.state() {
            DialogState::Selected => self
                .dialog
                .selection()
                .map(|item| DialogOutcome::selected(query, item)),
            DialogState::Dismissed => Some(DialogOutcome::dismissed(query)),
            DialogState::Created | DialogState::Showing => None,
        }
    }

    pub(crate) fn displayed_len(&self) -> usize {
        self.dialog.presenter().row_count()
    }

    pub(crate) fn total_len(&self) -> usize {
        self.dialog.presenter().store().len()
    }
}

fn placeholder_input<'a>(text: &str, ui: &UiConfig, theme: &Theme) -> SearchInput<'a> {
    let mut input = SearchInput::new(text);
    input.set_placeholder(ui.placeholder.clone(), theme.empty_style());
    input
}
