//! Case-insensitive substring filtering over an item list.
//!
//! Matching is deliberately plain: the query is lower-cased once and every
//! item is kept when its lower-cased text contains the query as a contiguous
//! substring. There is no tokenization, ranking or diacritic folding, and the
//! relative order of the input is always preserved.

use std::ops::Range;

/// Return the items that match `query`, in their original order.
///
/// An empty query is the "no filter" sentinel and yields a copy of `items`
/// with the same order and multiplicity. The query is not trimmed.
#[must_use]
pub fn filter(items: &[String], query: &str) -> Vec<String> {
    if query.is_empty() {
        return items.to_vec();
    }

    let matcher = QueryMatcher::new(query);
    items
        .iter()
        .filter(|item| matcher.matches(item))
        .cloned()
        .collect()
}

/// A query prepared for repeated matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMatcher {
    needle: String,
}

impl QueryMatcher {
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// Whether this matcher accepts every item.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    #[must_use]
    pub fn matches(&self, item: &str) -> bool {
        self.needle.is_empty() || item.to_lowercase().contains(&self.needle)
    }

    /// Byte range of the first match within `item`, for highlighting.
    ///
    /// Each character is lower-cased on its own and the match is mapped back
    /// to the original offsets. `None` when the match starts or ends inside
    /// the expansion of a single character.
    #[must_use]
    pub fn match_range(&self, item: &str) -> Option<Range<usize>> {
        if self.needle.is_empty() {
            return None;
        }

        let mut lowered = String::with_capacity(item.len());
        // (offset in `lowered`, offset in `item`) at every character start.
        let mut offsets = Vec::with_capacity(item.len() + 1);
        for (index, ch) in item.char_indices() {
            offsets.push((lowered.len(), index));
            lowered.extend(ch.to_lowercase());
        }
        offsets.push((lowered.len(), item.len()));

        let start = lowered.find(&self.needle)?;
        let end = start + self.needle.len();
        let original = |at: usize| {
            offsets
                .binary_search_by_key(&at, |&(lowered_at, _)| lowered_at)
                .ok()
                .map(|slot| offsets[slot].1)
        };
        Some(original(start)?..original(end)?)
    }
}
