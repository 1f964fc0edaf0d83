//! A modal list of strings with a live text filter above it.
//!
//! The dialog core ([`FilterableListDialog`], [`ListPresenter`],
//! [`SelectionNotifier`] and the [`filter`](filter::filter) function) has no
//! knowledge of any UI toolkit: hosts plug in through [`DialogHost`] and
//! [`RenderSurface`]. The [`ui`] module provides a ratatui host, and
//! [`PickerUi`] is the quickest way to show a dialog in a terminal.

pub mod app_dirs;
pub mod dialog;
pub mod error;
pub mod filter;
pub mod items;
pub mod logging;
pub mod presenter;
pub mod selection;
pub mod ui;

pub use dialog::{DialogHandle, DialogHost, DialogState, EventDisposition, FilterableListDialog};
pub use error::DialogError;
pub use filter::{QueryMatcher, filter};
pub use items::ItemStore;
pub use presenter::{ListPresenter, RenderSurface};
pub use selection::{SelectionCallback, SelectionNotifier};
pub use ui::{DialogOutcome, PickerUi, UiConfig, run};
