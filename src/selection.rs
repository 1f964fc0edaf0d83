//! Resolving taps on displayed rows into a single selection event.

use std::fmt;

use log::{debug, info};

use crate::error::DialogError;
use crate::presenter::{ListPresenter, RenderSurface};

/// Callback invoked with the chosen item.
pub type SelectionCallback = Box<dyn FnOnce(String)>;

/// Single-shot bridge between row taps and the external selection callback.
pub struct SelectionNotifier {
    callback: Option<SelectionCallback>,
}

impl SelectionNotifier {
    pub fn new<F>(callback: F) -> Self
    where
        F: FnOnce(String) + 'static,
    {
        Self {
            callback: Some(Box::new(callback)),
        }
    }

    /// Resolve `position` against the presenter's current list and fire the
    /// callback with the item found there.
    ///
    /// The callback stays armed when resolution fails.
    ///
    /// # Errors
    ///
    /// [`DialogError::AlreadySelected`] once the callback has fired, and
    /// [`DialogError::OutOfRange`] when `position` is not a displayed row.
    pub fn on_tap<S: RenderSurface>(
        &mut self,
        position: usize,
        presenter: &ListPresenter<S>,
    ) -> Result<String, DialogError> {
        if self.callback.is_none() {
            return Err(DialogError::AlreadySelected);
        }

        let item = presenter.get_item_at(position)?.to_owned();
        let callback = self.callback.take().ok_or(DialogError::AlreadySelected)?;
        info!("selected {item:?} at row {position}");
        callback(item.clone());
        Ok(item)
    }

    /// Long taps are accepted but intentionally do nothing.
    pub fn on_long_tap(&self, position: usize) {
        debug!("ignoring long tap on row {position}");
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.callback.is_none()
    }
}

impl fmt::Debug for SelectionNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionNotifier")
            .field("armed", &self.callback.is_some())
            .finish()
    }
}
