use std::io;

use log::{debug, warn};
use ratatui::crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use ratatui::crossterm::execute;

use super::style::Theme;
use super::surface::ListSurface;
use crate::dialog::DialogHost;

/// Whether the host talks to a real terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalMode {
    Interactive,
    /// No terminal side effects; used when rendering into a test backend.
    Headless,
}

/// [`DialogHost`] for the ratatui front end.
#[derive(Debug)]
pub struct TerminalHost {
    mode: TerminalMode,
    theme: Theme,
    visible: bool,
    window_configured: bool,
}

impl TerminalHost {
    #[must_use]
    pub fn new(mode: TerminalMode, theme: Theme) -> Self {
        Self {
            mode,
            theme,
            visible: false,
            window_configured: false,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Undo [`DialogHost::apply_window_config`] before the terminal is
    /// handed back.
    pub fn restore_window_config(&mut self) {
        if !self.window_configured {
            return;
        }
        if let Err(err) = execute!(io::stdout(), DisableBracketedPaste, DisableMouseCapture) {
            warn!("failed to restore terminal input modes: {err}");
        }
        self.window_configured = false;
    }
}

impl DialogHost for TerminalHost {
    type Surface = ListSurface;

    fn create_surface(&mut self) -> Self::Surface {
        ListSurface::new(self.theme)
    }

    fn apply_window_config(&mut self) {
        if self.mode == TerminalMode::Headless {
            return;
        }
        match execute!(io::stdout(), EnableMouseCapture, EnableBracketedPaste) {
            Ok(()) => self.window_configured = true,
            Err(err) => {
                warn!("mouse capture unavailable, rows must be chosen with the keyboard: {err}")
            }
        }
    }

    fn show(&mut self) {
        debug!("dialog visible");
        self.visible = true;
    }

    fn dismiss(&mut self) {
        debug!("dialog closing");
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_host_tracks_visibility_without_touching_the_terminal() {
        let mut host = TerminalHost::new(TerminalMode::Headless, Theme::default());
        host.apply_window_config();
        assert!(!host.window_configured);

        host.show();
        assert!(host.is_visible());
        host.dismiss();
        assert!(!host.is_visible());
        host.restore_window_config();
    }
}
