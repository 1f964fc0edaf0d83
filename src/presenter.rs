//! The displayed list and the rendering capability it drives.

use log::debug;

use crate::error::DialogError;
use crate::filter::filter;
use crate::items::ItemStore;

/// Capability interface implemented by whatever draws the list.
///
/// The presenter never inspects the rows a surface produces; it only tells the
/// surface when the whole content changed and asks it to bind individual rows.
pub trait RenderSurface {
    /// Renderable representation of one bound row.
    type Row;

    /// The displayed list was replaced wholesale. Called synchronously, before
    /// the presenter returns control to the event loop.
    fn on_content_replaced(&mut self, row_count: usize, query: &str);

    /// Produce the renderable row for `item` at `position`.
    fn bind_row(&self, position: usize, item: &str) -> Self::Row;

    /// Number of rows the surface currently believes it is showing.
    fn row_count(&self) -> usize;
}

/// Owns the currently displayed subset of an [`ItemStore`].
#[derive(Debug)]
pub struct ListPresenter<S> {
    store: ItemStore,
    displayed: Vec<String>,
    query: String,
    surface: S,
}

impl<S: RenderSurface> ListPresenter<S> {
    pub fn new(store: ItemStore, mut surface: S) -> Self {
        let displayed = store.as_slice().to_vec();
        surface.on_content_replaced(displayed.len(), "");
        Self {
            store,
            displayed,
            query: String::new(),
            surface,
        }
    }

    /// Re-filter the full item list for `query` and republish the result.
    ///
    /// Every query is evaluated against the complete store, never against the
    /// previous displayed subset.
    pub fn on_query_changed(&mut self, query: &str) {
        self.displayed = filter(self.store.as_slice(), query);
        query.clone_into(&mut self.query);
        debug!(
            "query {:?} matched {} of {} items",
            self.query,
            self.displayed.len(),
            self.store.len()
        );
        self.surface.on_content_replaced(self.displayed.len(), &self.query);
    }

    /// Resolve a displayed row position to its item.
    ///
    /// # Errors
    ///
    /// Returns [`DialogError::OutOfRange`] when `position` is not a row of the
    /// current displayed list.
    pub fn get_item_at(&self, position: usize) -> Result<&str, DialogError> {
        self.displayed
            .get(position)
            .map(String::as_str)
            .ok_or_else(|| DialogError::out_of_range(position, self.displayed.len()))
    }

    /// Bind a single displayed row through the render surface.
    ///
    /// # Errors
    ///
    /// Returns [`DialogError::OutOfRange`] for positions outside the
    /// displayed list.
    pub fn bind_row(&self, position: usize) -> Result<S::Row, DialogError> {
        let item = self.get_item_at(position)?;
        Ok(self.surface.bind_row(position, item))
    }

    /// Bind every displayed row, in order.
    pub fn bind_rows(&self) -> Vec<S::Row> {
        self.displayed
            .iter()
            .enumerate()
            .map(|(position, item)| self.surface.bind_row(position, item))
            .collect()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.displayed.len()
    }

    #[must_use]
    pub fn displayed(&self) -> &[String] {
        &self.displayed
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Surface that records every notification it receives.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSurface {
        pub(crate) rows: usize,
        pub(crate) notifications: Vec<(usize, String)>,
    }

    impl RenderSurface for RecordingSurface {
        type Row = String;

        fn on_content_replaced(&mut self, row_count: usize, query: &str) {
            self.rows = row_count;
            self.notifications.push((row_count, query.to_string()));
        }

        fn bind_row(&self, position: usize, item: &str) -> Self::Row {
            format!("{position}:{item}")
        }

        fn row_count(&self) -> usize {
            self.rows
        }
    }

    fn presenter(items: &[&str]) -> ListPresenter<RecordingSurface> {
        ListPresenter::new(ItemStore::new(items.iter().copied()), RecordingSurface::default())
    }

    #[test]
    fn starts_with_full_list_and_notifies_surface() {
        let presenter = presenter(&["Alabama", "Alaska"]);
        assert_eq!(presenter.displayed(), ["Alabama", "Alaska"]);
        assert_eq!(presenter.query(), "");
        assert_eq!(presenter.surface().notifications, vec![(2, String::new())]);
    }

    #[test]
    fn query_change_replaces_content_and_keeps_surface_in_sync() {
        let mut presenter = presenter(&["Alabama", "Alaska", "Arizona", "Arkansas"]);
        presenter.on_query_changed("ar");

        assert_eq!(presenter.displayed(), ["Arizona", "Arkansas"]);
        assert_eq!(presenter.surface().row_count(), presenter.row_count());
        assert_eq!(
            presenter.surface().notifications.last(),
            Some(&(2, "ar".to_string()))
        );
    }

    #[test]
    fn queries_are_evaluated_against_the_full_list() {
        let mut presenter = presenter(&["abc", "abd", "xyz"]);

        presenter.on_query_changed("a");
        assert_eq!(presenter.displayed(), ["abc", "abd"]);
        presenter.on_query_changed("ab");
        assert_eq!(presenter.displayed(), ["abc", "abd"]);
        presenter.on_query_changed("a");
        assert_eq!(presenter.displayed(), ["abc", "abd"]);

        presenter.on_query_changed("abc");
        assert_eq!(presenter.displayed(), ["abc"]);
        presenter.on_query_changed("");
        assert_eq!(presenter.displayed(), ["abc", "abd", "xyz"]);
    }

    #[test]
    fn every_change_notifies_even_when_rows_are_unchanged() {
        let mut presenter = presenter(&["abc"]);
        presenter.on_query_changed("a");
        presenter.on_query_changed("ab");
        assert_eq!(presenter.surface().notifications.len(), 3);
    }

    #[test]
    fn resolves_positions_against_the_current_list() {
        let mut presenter = presenter(&["Alabama", "Alaska", "Arizona", "Arkansas"]);
        assert_eq!(presenter.get_item_at(0), Ok("Alabama"));

        presenter.on_query_changed("ar");
        assert_eq!(presenter.get_item_at(0), Ok("Arizona"));
        assert_eq!(presenter.get_item_at(1), Ok("Arkansas"));
        assert_eq!(
            presenter.get_item_at(2),
            Err(DialogError::OutOfRange {
                position: 2,
                len: 2
            })
        );
    }

    #[test]
    fn empty_result_is_zero_rows() {
        let mut presenter = presenter(&["Texas"]);
        presenter.on_query_changed("zz");
        assert_eq!(presenter.row_count(), 0);
        assert!(presenter.bind_rows().is_empty());
        assert!(presenter.get_item_at(0).is_err());
    }

    #[test]
    fn binds_rows_through_the_surface() {
        let mut presenter = presenter(&["abc", "abd", "xyz"]);
        presenter.on_query_changed("ab");
        assert_eq!(presenter.bind_rows(), ["0:abc", "1:abd"]);
        assert_eq!(presenter.bind_row(1), Ok("1:abd".to_string()));
        assert!(presenter.bind_row(2).is_err());
    }
}
