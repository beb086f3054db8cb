//! Relevance scoring for command items.
//!
//! The engine only depends on the [`RelevanceScorer`] contract. The default
//! [`NucleoScorer`] is backed by `nucleo-matcher`.

use nucleo_matcher::pattern::{AtomKind, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use std::fmt;
use std::sync::Mutex;

/// Sentinel score meaning "no match". Any score at or below it hides the item.
pub const NO_MATCH: i64 = -1;

/// Relevance of every item while the query is empty.
pub const NEUTRAL_RELEVANCE: i64 = 0;

/// Scores a candidate text against a query.
///
/// Implementations must be pure and deterministic: the same `(text, query)`
/// pair always yields the same score. Higher is more relevant, and a value
/// `<= NO_MATCH` means the text does not match at all.
pub trait RelevanceScorer: Send + Sync {
    fn score(&self, text: &str, query: &str) -> i64;
}

impl<F> RelevanceScorer for F
where
    F: Fn(&str, &str) -> i64 + Send + Sync,
{
    fn score(&self, text: &str, query: &str) -> i64 {
        self(text, query)
    }
}

/// Case sensitivity of the fuzzy matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMatching {
    /// Always case-insensitive
    #[default]
    Ignore,
    /// Always case-sensitive
    Respect,
    /// Case-sensitive only when the query contains an uppercase letter
    Smart,
}

impl From<CaseMatching> for nucleo_matcher::pattern::CaseMatching {
    fn from(value: CaseMatching) -> Self {
        match value {
            CaseMatching::Ignore => Self::Ignore,
            CaseMatching::Respect => Self::Respect,
            CaseMatching::Smart => Self::Smart,
        }
    }
}

/// Fuzzy scorer backed by `nucleo-matcher`.
///
/// The matcher keeps scratch buffers between calls, so it sits behind a
/// mutex to satisfy the `&self` scoring contract.
pub struct NucleoScorer {
    matcher: Mutex<Matcher>,
    case_matching: CaseMatching,
}

impl NucleoScorer {
    pub fn new(case_matching: CaseMatching) -> Self {
        Self {
            matcher: Mutex::new(Matcher::new(Config::DEFAULT)),
            case_matching,
        }
    }

    pub fn case_matching(&self) -> CaseMatching {
        self.case_matching
    }
}

impl Default for NucleoScorer {
    fn default() -> Self {
        Self::new(CaseMatching::default())
    }
}

impl fmt::Debug for NucleoScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NucleoScorer")
            .field("case_matching", &self.case_matching)
            .finish_non_exhaustive()
    }
}

impl RelevanceScorer for NucleoScorer {
    fn score(&self, text: &str, query: &str) -> i64 {
        let pattern = Pattern::new(
            query,
            self.case_matching.into(),
            Normalization::Smart,
            AtomKind::Fuzzy,
        );

        let mut buf = Vec::with_capacity(text.len());
        let haystack = Utf32Str::new(text, &mut buf);

        // A poisoned lock only means another scorer call panicked; the
        // matcher holds no state that outlives a call.
        let mut matcher = self
            .matcher
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        pattern
            .score(haystack, &mut matcher)
            .map_or(NO_MATCH, i64::from)
    }
}
