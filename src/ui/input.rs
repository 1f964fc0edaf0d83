use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

/// Single-line filter box backed by `tui-textarea`.
#[derive(Debug, Clone)]
pub struct SearchInput<'a> {
    textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
    pub fn new(initial: impl Into<String>) -> Self {
        let initial = flatten(&initial.into());
        let mut textarea = TextArea::new(vec![initial]);
        textarea.set_cursor_line_style(Style::default());
        textarea.move_cursor(tui_textarea::CursorMove::End);
        Self { textarea }
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>, style: Style) {
        self.textarea.set_placeholder_text(placeholder);
        self.textarea
            .set_placeholder_style(style.add_modifier(Modifier::ITALIC));
    }

    /// Full current text of the box.
    #[must_use]
    pub fn text(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Apply an editing key. Returns `true` when the text changed.
    ///
    /// Newlines are swallowed so the box stays on a single line.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        let before = self.text().to_owned();
        self.textarea.input(key);
        if self.textarea.lines().len() > 1 {
            let joined = flatten(&self.textarea.lines().concat());
            self.textarea = rebuilt(joined, &self.textarea);
        }
        self.text() != before
    }

    pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(&self.textarea, area);
    }
}

fn flatten(text: &str) -> String {
    text.replace(['\r', '\n'], "")
}

fn rebuilt<'a>(text: String, previous: &TextArea<'a>) -> TextArea<'a> {
    let mut textarea = TextArea::new(vec![text]);
    textarea.set_cursor_line_style(previous.cursor_line_style());
    textarea.set_placeholder_text(previous.placeholder_text());
    textarea.set_placeholder_style(previous.placeholder_style().unwrap_or_default());
    textarea.move_cursor(tui_textarea::CursorMove::End);
    textarea
}
