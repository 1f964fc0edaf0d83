use thiserror::Error;

use crate::dialog::DialogState;

/// Contract violations reported by the dialog core.
///
/// None of these are user-facing conditions: each one means the host drove the
/// dialog out of sequence, so callers are expected to surface them as bugs
/// rather than retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DialogError {
    /// A row position was resolved against a displayed list that does not
    /// contain it; the render surface and presenter are out of sync.
    #[error("row {position} is outside the displayed list of {len} rows")]
    OutOfRange { position: usize, len: usize },

    /// The single-shot selection callback has already fired.
    #[error("an item has already been selected from this dialog")]
    AlreadySelected,

    /// The requested lifecycle transition is not allowed from the current state.
    #[error("cannot {action} a dialog that is {from}")]
    InvalidTransition {
        from: DialogState,
        action: &'static str,
    },
}

impl DialogError {
    pub(crate) fn out_of_range(position: usize, len: usize) -> Self {
        Self::OutOfRange { position, len }
    }
}
