/// Result of running the terminal dialog to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogOutcome {
    /// `true` when an item was selected, `false` when the dialog was dismissed.
    pub accepted: bool,
    /// Filter text at the moment the dialog closed.
    pub query: String,
    pub selection: Option<String>,
}

impl DialogOutcome {
    #[must_use]
    pub fn selected(query: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            accepted: true,
            query: query.into(),
            selection: Some(item.into()),
        }
    }

    #[must_use]
    pub fn dismissed(query: impl Into<String>) -> Self {
        Self {
            accepted: false,
            query: query.into(),
            selection: None,
        }
    }
}
