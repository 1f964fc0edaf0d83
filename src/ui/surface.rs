use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{ListItem, ListState};

use super::style::Theme;
use crate::filter::QueryMatcher;
use crate::presenter::RenderSurface;

/// Render surface backed by a ratatui [`List`](ratatui::widgets::List).
///
/// Tracks the highlighted row and the scroll offset, and remembers where the
/// list was last drawn so mouse clicks can be mapped back to row positions.
#[derive(Debug, Default)]
pub struct ListSurface {
    row_count: usize,
    state: ListState,
    matcher: QueryMatcher,
    theme: Theme,
    viewport: Rect,
}

impl ListSurface {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub(crate) fn state_mut(&mut self) -> &mut ListState {
        &mut self.state
    }

    pub fn select_previous(&mut self) {
        self.move_selection(-1);
    }

    pub fn select_next(&mut self) {
        self.move_selection(1);
    }

    pub fn select_first(&mut self) {
        if self.row_count > 0 {
            self.state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if self.row_count > 0 {
            self.state.select(Some(self.row_count - 1));
        }
    }

    pub fn page_up(&mut self) {
        self.move_selection(-self.page_size());
    }

    pub fn page_down(&mut self) {
        self.move_selection(self.page_size());
    }

    fn page_size(&self) -> isize {
        isize::try_from(self.viewport.height.max(1)).unwrap_or(1)
    }

    fn move_selection(&mut self, delta: isize) {
        let Some(selected) = self.state.selected() else {
            return;
        };
        let last = self.row_count.saturating_sub(1);
        let target = selected.saturating_add_signed(delta).min(last);
        self.state.select(Some(target));
    }

    /// Remember the area the list occupied on the last frame.
    pub(crate) fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
    }

    /// Map a terminal cell to the displayed row under it, if any.
    #[must_use]
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.viewport;
        let inside = column >= area.x
            && column < area.x.saturating_add(area.width)
            && row >= area.y
            && row < area.y.saturating_add(area.height);
        if !inside {
            return None;
        }
        let position = self.state.offset() + usize::from(row - area.y);
        (position < self.row_count).then_some(position)
    }
}

impl RenderSurface for ListSurface {
    type Row = ListItem<'static>;

    fn on_content_replaced(&mut self, row_count: usize, query: &str) {
        self.row_count = row_count;
        self.matcher = QueryMatcher::new(query);
        *self.state.offset_mut() = 0;
        self.state.select((row_count > 0).then_some(0));
    }

    fn bind_row(&self, _position: usize, item: &str) -> Self::Row {
        let line = match self.matcher.match_range(item) {
            Some(range) => Line::from(vec![
                Span::raw(item[..range.start].to_owned()),
                Span::styled(item[range.clone()].to_owned(), self.theme.highlight_style()),
                Span::raw(item[range.end..].to_owned()),
            ]),
            None => Line::from(item.to_owned()),
        };
        ListItem::new(line)
    }

    fn row_count(&self) -> usize {
        self.row_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface_with_rows(rows: usize) -> ListSurface {
        let mut surface = ListSurface::new(Theme::default());
        surface.on_content_replaced(rows, "");
        surface.set_viewport(Rect::new(2, 3, 20, 4));
        surface
    }

    #[test]
    fn replacing_content_resets_selection() {
        let mut surface = surface_with_rows(5);
        surface.select_last();
        assert_eq!(surface.selected(), Some(4));

        surface.on_content_replaced(2, "a");
        assert_eq!(surface.selected(), Some(0));
        assert_eq!(surface.row_count(), 2);

        surface.on_content_replaced(0, "zz");
        assert_eq!(surface.selected(), None);
    }

    #[test]
    fn selection_is_clamped_to_rows() {
        let mut surface = surface_with_rows(3);
        surface.select_previous();
        assert_eq!(surface.selected(), Some(0));
        surface.page_down();
        assert_eq!(surface.selected(), Some(2));
        surface.select_next();
        assert_eq!(surface.selected(), Some(2));
        surface.page_up();
        assert_eq!(surface.selected(), Some(0));
    }

    #[test]
    fn navigation_on_empty_list_selects_nothing() {
        let mut surface = surface_with_rows(0);
        surface.select_next();
        surface.select_last();
        assert_eq!(surface.selected(), None);
    }

    #[test]
    fn maps_clicks_to_rows_within_the_viewport() {
        let surface = surface_with_rows(2);
        assert_eq!(surface.row_at(2, 3), Some(0));
        assert_eq!(surface.row_at(10, 4), Some(1));
        assert_eq!(surface.row_at(10, 5), None);
        assert_eq!(surface.row_at(1, 3), None);
        assert_eq!(surface.row_at(30, 3), None);
    }

    #[test]
    fn binds_rows_with_the_match_split_out() {
        let mut surface = surface_with_rows(1);
        surface.on_content_replaced(1, "KAN");
        let row = surface.bind_row(0, "Arkansas");
        assert_eq!(row.height(), 1);

        let line = Line::from(vec![
            Span::raw("Ar"),
            Span::styled("kan", Theme::default().highlight_style()),
            Span::raw("sas"),
        ]);
        assert_eq!(row, ListItem::new(line));
    }
}
