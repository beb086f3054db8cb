//! A single entry of the command list.

use crate::scorer::{RelevanceScorer, NEUTRAL_RELEVANCE, NO_MATCH};

/// One selectable command.
///
/// `index` is the position in the list the item was created from. It never
/// changes while the item lives and is only used as the ordering tie-break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandItem {
    index: usize,
    text: String,
}

impl CommandItem {
    pub(crate) fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    /// Insertion position in the original list
    pub fn index(&self) -> usize {
        self.index
    }

    /// Display and match text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Relevance of this item for `query`.
    ///
    /// An empty query ranks every item equally, so the order falls back to
    /// insertion order without consulting the scorer.
    pub fn relevance<S>(&self, query: &str, scorer: &S) -> i64
    where
        S: RelevanceScorer + ?Sized,
    {
        if query.is_empty() {
            NEUTRAL_RELEVANCE
        } else {
            scorer.score(&self.text, query)
        }
    }

    /// Whether this item survives the filter for `query`.
    pub fn is_visible<S>(&self, query: &str, scorer: &S) -> bool
    where
        S: RelevanceScorer + ?Sized,
    {
        Self::passes_filter(query, self.relevance(query, scorer))
    }

    /// Filter rule for an already computed relevance: everything passes an
    /// empty query, otherwise the score must beat the sentinel.
    pub(crate) fn passes_filter(query: &str, relevance: i64) -> bool {
        query.is_empty() || relevance > NO_MATCH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn never(_: &str, _: &str) -> i64 {
        NO_MATCH
    }

    #[test]
    fn test_empty_query_is_neutral_and_visible() {
        let item = CommandItem::new(3, "anything");
        assert_eq!(item.relevance("", &never), NEUTRAL_RELEVANCE);
        assert!(item.is_visible("", &never));
    }

    #[test]
    fn test_sentinel_boundary() {
        let item = CommandItem::new(0, "Open");

        let zero = |_: &str, _: &str| -> i64 { 0 };
        assert!(item.is_visible("o", &zero));

        assert!(!item.is_visible("o", &never));

        let below = |_: &str, _: &str| -> i64 { -5 };
        assert!(!item.is_visible("o", &below));
    }

    #[test]
    fn test_passes_filter() {
        assert!(CommandItem::passes_filter("", NO_MATCH));
        assert!(CommandItem::passes_filter("o", NO_MATCH + 1));
        assert!(!CommandItem::passes_filter("o", NO_MATCH));
    }

    #[test]
    fn test_relevance_delegates_to_scorer() {
        let item = CommandItem::new(0, "Open");
        let length = |text: &str, query: &str| (text.len() + query.len()) as i64;
        assert_eq!(item.relevance("ab", &length), 6);
    }
}
