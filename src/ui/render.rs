use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, HighlightSpacing, List, Paragraph};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};
use unicode_width::UnicodeWidthStr;

use super::App;

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const DIALOG_WIDTH_PERCENT: u16 = 90;
const DIALOG_HEIGHT_PERCENT: u16 = 90;
const LOG_PANE_HEIGHT: u16 = 8;

impl<'a> App<'a> {
    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = dialog_area(frame.area());
        frame.render_widget(Clear, area);

        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style());
        if let Some(title) = &self.ui.title {
            block = block.title(Line::from(format!(" {title} ")).style(self.theme.prompt_style()));
        }
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let (main, logs) = if self.show_logs {
            let [main, logs] =
                Layout::vertical([Constraint::Min(3), Constraint::Length(LOG_PANE_HEIGHT)])
                    .areas(inner);
            (main, Some(logs))
        } else {
            (inner, None)
        };

        let [input_row, list_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(main);
        self.render_input_row(frame, input_row);
        self.render_list(frame, list_area);

        if let Some(logs) = logs {
            self.render_logs(frame, logs);
        }
    }

    fn render_input_row(&self, frame: &mut Frame, area: Rect) {
        let prompt = format!("{} > ", self.ui.filter_label);
        let count = format!(" {}/{}", self.displayed_len(), self.total_len());
        let prompt_width = u16::try_from(prompt.width()).unwrap_or(u16::MAX);
        let count_width = u16::try_from(count.width()).unwrap_or(u16::MAX);

        let [prompt_area, input_area, count_area] = Layout::horizontal([
            Constraint::Length(prompt_width),
            Constraint::Min(1),
            Constraint::Length(count_width),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(prompt).style(self.theme.prompt_style()),
            prompt_area,
        );
        self.search_input.render_textarea(frame, input_area);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(count, self.theme.count_style())))
                .alignment(Alignment::Right),
            count_area,
        );
    }

    fn render_list(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::new()
            .borders(Borders::TOP)
            .border_style(self.theme.border_style());
        let rows_area = block.inner(area);
        frame.render_widget(block, area);

        let rows = self.dialog.presenter().bind_rows();
        let empty = rows.is_empty();
        let list = List::new(rows)
            .highlight_style(self.theme.row_highlight_style())
            .highlight_symbol(HIGHLIGHT_SYMBOL)
            .highlight_spacing(HighlightSpacing::Always);

        let surface = self.dialog.surface_mut();
        surface.set_viewport(rows_area);
        frame.render_stateful_widget(list, rows_area, surface.state_mut());

        if empty {
            let message = Paragraph::new(self.ui.empty_label.as_str())
                .alignment(Alignment::Center)
                .style(self.theme.empty_style());
            frame.render_widget(message, rows_area);
        }
    }

    fn render_logs(&self, frame: &mut Frame, area: Rect) {
        let widget = TuiLoggerWidget::default()
            .block(
                Block::bordered()
                    .title(" Log ")
                    .border_style(self.theme.border_style()),
            )
            .output_level(Some(TuiLoggerLevelOutput::Abbreviated));
        frame.render_widget(widget, area);
    }
}

/// Centre the dialog inside the terminal.
fn dialog_area(area: Rect) -> Rect {
    let [column] = Layout::horizontal([Constraint::Percentage(DIALOG_WIDTH_PERCENT)])
        .flex(Flex::Center)
        .areas(area);
    let [dialog] = Layout::vertical([Constraint::Percentage(DIALOG_HEIGHT_PERCENT)])
        .flex(Flex::Center)
        .areas(column);
    dialog
}
