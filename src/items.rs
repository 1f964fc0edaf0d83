//! The authoritative, immutable list of selectable items.

use std::sync::Arc;

/// Ordered collection of items handed to a dialog at construction.
///
/// The store is cheap to clone and never mutated after it is built, so the
/// presenter and any host code can share it freely. Duplicates and empty
/// strings are kept exactly as supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStore {
    items: Arc<[String]>,
}

impl ItemStore {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        items.into_iter().map(Into::into).collect()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for ItemStore {
    fn from(items: Vec<String>) -> Self {
        Self {
            items: items.into(),
        }
    }
}

impl FromIterator<String> for ItemStore {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
