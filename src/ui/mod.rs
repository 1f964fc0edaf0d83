//! Terminal front end for the filterable list dialog.
//!
//! [`PickerUi`] is the public builder. The remaining submodules provide the
//! ratatui implementation of the dialog's host and render surface, the event
//! loop, key and mouse handling, and the colour themes.

mod actions;
mod builder;
mod config;
mod host;
pub mod input;
mod outcome;
mod render;
mod runtime;
mod state;
pub mod style;
mod surface;

pub use builder::PickerUi;
pub use config::UiConfig;
pub use host::{TerminalHost, TerminalMode};
pub use outcome::DialogOutcome;
pub use runtime::run;
pub(crate) use state::App;
pub use surface::ListSurface;
