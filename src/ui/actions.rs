use anyhow::Result;
use log::debug;
use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;

/// Whether handling an event replaced the displayed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Refresh {
    None,
    Content,
}

impl<'a> App<'a> {
    pub(crate) fn handle_event(&mut self, event: Event) -> Result<Refresh> {
        if self.is_closed() {
            return Ok(Refresh::None);
        }
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Paste(text) => Ok(self.paste(&text)),
            _ => Ok(Refresh::None),
        }
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Refresh> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => {
                self.dialog.cancel();
            }
            KeyCode::Char('c') if ctrl => {
                self.dialog.cancel();
            }
            KeyCode::Enter => self.tap_highlighted()?,
            KeyCode::Up => self.dialog.surface_mut().select_previous(),
            KeyCode::Char('p') if ctrl => self.dialog.surface_mut().select_previous(),
            KeyCode::Down => self.dialog.surface_mut().select_next(),
            KeyCode::Char('n') if ctrl => self.dialog.surface_mut().select_next(),
            KeyCode::PageUp => self.dialog.surface_mut().page_up(),
            KeyCode::PageDown => self.dialog.surface_mut().page_down(),
            KeyCode::Home => self.dialog.surface_mut().select_first(),
            KeyCode::End => self.dialog.surface_mut().select_last(),
            _ => {
                if self.search_input.input(key) {
                    return Ok(self.publish_query());
                }
            }
        }
        Ok(Refresh::None)
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<Refresh> {
        let row = self.dialog.presenter().surface().row_at(mouse.column, mouse.row);
        match (mouse.kind, row) {
            (MouseEventKind::Down(MouseButton::Left), Some(position)) => {
                self.dialog.surface_mut().state_mut().select(Some(position));
                self.dialog.on_row_tapped(position)?;
            }
            (MouseEventKind::Down(MouseButton::Right), Some(position)) => {
                self.dialog.on_row_long_tapped(position);
            }
            (MouseEventKind::ScrollUp, _) => self.dialog.surface_mut().select_previous(),
            (MouseEventKind::ScrollDown, _) => self.dialog.surface_mut().select_next(),
            _ => {}
        }
        Ok(Refresh::None)
    }

    fn paste(&mut self, text: &str) -> Refresh {
        let mut changed = false;
        for ch in text.chars().filter(|ch| !ch.is_control()) {
            changed |= self
                .search_input
                .input(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
        }
        if changed {
            self.publish_query()
        } else {
            Refresh::None
        }
    }

    fn tap_highlighted(&mut self) -> Result<()> {
        match self.dialog.presenter().surface().selected() {
            Some(position) => {
                self.dialog.on_row_tapped(position)?;
            }
            None => debug!("enter pressed with no highlighted row"),
        }
        Ok(())
    }

    fn publish_query(&mut self) -> Refresh {
        let text = self.search_input.text().to_owned();
        self.dialog.on_query_text_changed(&text);
        Refresh::Content
    }
}
