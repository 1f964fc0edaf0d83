/// Text shown around the filter box and the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    /// Dialog title drawn on the border; no title when `None`.
    pub title: Option<String>,
    /// Prompt rendered in front of the filter box.
    pub filter_label: String,
    /// Placeholder shown while the filter box is empty.
    pub placeholder: String,
    /// Message shown in place of the list when nothing matches.
    pub empty_label: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: None,
            filter_label: "Filter".to_string(),
            placeholder: "Type to filter".to_string(),
            empty_label: "No matches".to_string(),
        }
    }
}
