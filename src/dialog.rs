//! The dialog lifecycle tying filtering, presentation and selection together.
//!
//! A dialog moves through `Created → Showing → Selected | Dismissed`. Query
//! edits keep it in `Showing`; both `Selected` and `Dismissed` are terminal and
//! every event that arrives afterwards is ignored.

use std::fmt;

use log::{debug, info, warn};

use crate::error::DialogError;
use crate::items::ItemStore;
use crate::presenter::{ListPresenter, RenderSurface};
use crate::selection::SelectionNotifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogState {
    Created,
    Showing,
    /// An item was chosen and the callback fired.
    Selected,
    /// Closed without a selection.
    Dismissed,
}

impl DialogState {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Selected | Self::Dismissed)
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Showing => "showing",
            Self::Selected => "selected",
            Self::Dismissed => "dismissed",
        }
    }
}

impl fmt::Display for DialogState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the dialog reacted to an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    Handled,
    /// The event selected an item and closed the dialog.
    Selected,
    /// The event closed the dialog without a selection.
    Dismissed,
    /// The dialog was not showing, so the event had no effect.
    Ignored,
}

/// The environment a dialog is displayed in.
///
/// Hosts supply the render surface and own the window chrome; the dialog only
/// tells them when to appear and when to go away.
pub trait DialogHost {
    type Surface: RenderSurface;

    /// Build the surface the presenter will drive.
    fn create_surface(&mut self) -> Self::Surface;

    /// Apply host window configuration. Called exactly once, right before
    /// [`DialogHost::show`].
    fn apply_window_config(&mut self) {}

    fn show(&mut self);

    fn dismiss(&mut self);
}

/// Entry point for building dialogs.
#[derive(Debug, Clone, Copy)]
pub struct FilterableListDialog;

impl FilterableListDialog {
    /// Create a dialog over `items` that reports the chosen item to
    /// `on_selected`. The dialog is not visible until [`DialogHandle::show`].
    pub fn create<H, I, F>(mut host: H, items: I, on_selected: F) -> DialogHandle<H>
    where
        H: DialogHost,
        I: Into<ItemStore>,
        F: FnOnce(String) + 'static,
    {
        let store = items.into();
        let surface = host.create_surface();
        debug!("created dialog with {} items", store.len());
        DialogHandle {
            presenter: ListPresenter::new(store, surface),
            notifier: SelectionNotifier::new(on_selected),
            host,
            state: DialogState::Created,
            selection: None,
        }
    }
}

/// A live dialog instance.
pub struct DialogHandle<H: DialogHost> {
    host: H,
    presenter: ListPresenter<H::Surface>,
    notifier: SelectionNotifier,
    state: DialogState,
    selection: Option<String>,
}

impl<H: DialogHost> DialogHandle<H> {
    /// Make the dialog visible.
    ///
    /// # Errors
    ///
    /// [`DialogError::InvalidTransition`] unless the dialog is `Created`.
    pub fn show(&mut self) -> Result<(), DialogError> {
        if self.state != DialogState::Created {
            return Err(DialogError::InvalidTransition {
                from: self.state,
                action: "show",
            });
        }
        self.host.apply_window_config();
        self.host.show();
        self.state = DialogState::Showing;
        Ok(())
    }

    /// Feed the full current text of the filter box.
    pub fn on_query_text_changed(&mut self, text: &str) -> EventDisposition {
        if !self.accepts_events("query change") {
            return EventDisposition::Ignored;
        }
        self.presenter.on_query_changed(text);
        EventDisposition::Handled
    }

    /// Select the item displayed at `position` and close the dialog.
    ///
    /// # Errors
    ///
    /// [`DialogError::OutOfRange`] when `position` is not a displayed row. The
    /// dialog keeps showing in that case.
    pub fn on_row_tapped(&mut self, position: usize) -> Result<EventDisposition, DialogError> {
        if !self.accepts_events("row tap") {
            return Ok(EventDisposition::Ignored);
        }
        let item = self.notifier.on_tap(position, &self.presenter)?;
        self.selection = Some(item);
        self.host.dismiss();
        self.state = DialogState::Selected;
        Ok(EventDisposition::Selected)
    }

    /// Long taps are part of the tap surface but perform no action.
    pub fn on_row_long_tapped(&mut self, position: usize) -> EventDisposition {
        if !self.accepts_events("long tap") {
            return EventDisposition::Ignored;
        }
        self.notifier.on_long_tap(position);
        EventDisposition::Handled
    }

    /// Close the dialog without selecting anything.
    pub fn cancel(&mut self) -> EventDisposition {
        if self.state.is_terminal() {
            warn!("ignoring cancel for a dialog that is {}", self.state);
            return EventDisposition::Ignored;
        }
        if self.state == DialogState::Showing {
            self.host.dismiss();
        }
        info!("dialog dismissed without a selection");
        self.state = DialogState::Dismissed;
        EventDisposition::Dismissed
    }

    fn accepts_events(&self, event: &str) -> bool {
        match self.state {
            DialogState::Showing => true,
            DialogState::Created => {
                debug!("ignoring {event} before the dialog is shown");
                false
            }
            DialogState::Selected | DialogState::Dismissed => {
                warn!("ignoring {event} for a dialog that is {}", self.state);
                false
            }
        }
    }

    #[must_use]
    pub fn state(&self) -> DialogState {
        self.state
    }

    /// The item chosen by the user, once the dialog is `Selected`.
    #[must_use]
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn presenter(&self) -> &ListPresenter<H::Surface> {
        &self.presenter
    }

    pub fn surface_mut(&mut self) -> &mut H::Surface {
        self.presenter.surface_mut()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<H> fmt::Debug for DialogHandle<H>
where
    H: DialogHost + fmt::Debug,
    H::Surface: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogHandle")
            .field("state", &self.state)
            .field("host", &self.host)
            .field("presenter", &self.presenter)
            .field("notifier", &self.notifier)
            .field("selection", &self.selection)
            .finish()
    }
}
