//! Log capture for the terminal UI.
//!
//! Standard output belongs to the TUI while a dialog is running, so records
//! from the `log` facade are buffered by `tui-logger` and shown in the
//! optional log pane instead of being written to the terminal. The logger
//! moves buffered records into its history on a thread of its own.

use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Install the in-UI logger. Later calls are no-ops.
pub fn initialize(level: LevelFilter) {
    INIT.call_once(|| {
        if tui_logger::init_logger(LevelFilter::Trace).is_ok() {
            tui_logger::set_default_level(level);
        }
    });
}

/// Parse a level name as accepted on the command line and in config files.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse().ok()
}
