//! The command list engine.
//!
//! Owns the full candidate set, the query, the derived visible sequence and
//! the selection. Every mutation recomputes what it invalidates before it
//! returns.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::action::ListAction;
use crate::event::ListEvent;
use crate::item::CommandItem;
use crate::scorer::{NucleoScorer, RelevanceScorer};
use crate::source::ActionSource;

/// How visible items are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortPolicy {
    /// Insertion order, whatever the scores are. Scores only decide
    /// visibility. This is the behaviour of the classic HUD menu.
    #[default]
    InsertionOrder,
    /// Highest relevance first, ties broken by insertion order.
    Relevance,
}

impl SortPolicy {
    /// Compare two visible items given their relevance for the current query.
    pub fn compare(
        self,
        a: &CommandItem,
        a_score: i64,
        b: &CommandItem,
        b_score: i64,
    ) -> Ordering {
        let by_index = a.index().cmp(&b.index());
        match self {
            Self::InsertionOrder => by_index,
            Self::Relevance => b_score.cmp(&a_score).then(by_index),
        }
    }
}

/// Filter, sort and selection state of a command list.
///
/// The visible sequence holds positions into `items`; the selection is a
/// position into the visible sequence. `selected_value` mirrors the selected
/// item's text and is empty exactly when the visible sequence is empty.
pub struct CommandListEngine<S: ?Sized = NucleoScorer> {
    items: Vec<CommandItem>,
    query: String,
    visible: Vec<usize>,
    selection: Option<usize>,
    selected_value: String,
    sort_policy: SortPolicy,
    scorer: Arc<S>,
}

impl CommandListEngine<NucleoScorer> {
    /// Empty engine using the default fuzzy scorer
    pub fn new() -> Self {
        Self::with_scorer(NucleoScorer::default())
    }
}

impl Default for CommandListEngine<NucleoScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RelevanceScorer> CommandListEngine<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Self::from_shared(Arc::new(scorer))
    }
}

impl<S: RelevanceScorer + ?Sized> CommandListEngine<S> {
    /// Build an engine around a scorer that is shared with other engines.
    pub fn from_shared(scorer: Arc<S>) -> Self {
        Self {
            items: Vec::new(),
            query: String::new(),
            visible: Vec::new(),
            selection: None,
            selected_value: String::new(),
            sort_policy: SortPolicy::default(),
            scorer,
        }
    }

    pub fn with_sort_policy(mut self, sort_policy: SortPolicy) -> Self {
        self.sort_policy = sort_policy;
        self.recompute();
        self
    }

    // === Accessors ===

    pub fn items(&self) -> &[CommandItem] {
        &self.items
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort_policy(&self) -> SortPolicy {
        self.sort_policy
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Visible items in display order.
    pub fn visible(&self) -> impl Iterator<Item = &CommandItem> + '_ {
        self.visible.iter().map(|&pos| &self.items[pos])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn visible_at(&self, position: usize) -> Option<&CommandItem> {
        self.visible.get(position).map(|&pos| &self.items[pos])
    }

    /// Position of the selected row in the visible sequence, 0 when nothing
    /// is selected.
    pub fn selection_index(&self) -> usize {
        self.selection.unwrap_or(0)
    }

    pub fn selected(&self) -> Option<&CommandItem> {
        self.selection.and_then(|position| self.visible_at(position))
    }

    /// Text of the selected item, or `""` when nothing is selected.
    pub fn selected_value(&self) -> &str {
        &self.selected_value
    }

    // === Mutations ===

    /// Apply one action and return the selection events it produced.
    pub fn handle_action(&mut self, action: ListAction) -> Vec<ListEvent> {
        match action {
            ListAction::ReplaceItems(names) => vec![self.replace_items(names)],
            ListAction::SetQuery(query) => vec![self.set_query(query)],
            ListAction::SelectPrevious => self.select_previous().into_iter().collect(),
            ListAction::SelectNext => self.select_next().into_iter().collect(),
            ListAction::Pick(position) => {
                self.selection_changed(Some(position)).into_iter().collect()
            }
        }
    }

    /// Replace the candidate set wholesale.
    ///
    /// Indices are assigned from the position in `names`. The query is kept;
    /// clearing it is the caller's decision.
    pub fn replace_items<I>(&mut self, names: I) -> ListEvent
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.items = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| CommandItem::new(index, name))
            .collect();
        log::debug!("Command list replaced with {} items", self.items.len());
        self.recompute()
    }

    /// Set the query, re-filter and re-sort, and select the first row.
    pub fn set_query(&mut self, query: impl Into<String>) -> ListEvent {
        self.query = query.into();
        self.recompute()
    }

    /// Switch the ordering policy and recompute.
    pub fn set_sort_policy(&mut self, sort_policy: SortPolicy) -> ListEvent {
        self.sort_policy = sort_policy;
        self.recompute()
    }

    pub fn select_previous(&mut self) -> Option<ListEvent> {
        self.move_selection(-1)
    }

    pub fn select_next(&mut self) -> Option<ListEvent> {
        self.move_selection(1)
    }

    /// Move the selection by `delta` rows.
    ///
    /// A target outside the visible sequence leaves the state untouched: no
    /// wraparound and no clamping to the edge.
    pub fn move_selection(&mut self, delta: isize) -> Option<ListEvent> {
        let target = self
            .selection_index()
            .checked_add_signed(delta)
            .filter(|&target| target < self.visible.len());

        match target {
            Some(target) => self.select_position(target),
            None => {
                log::trace!(
                    "Selection move by {} from {} ignored ({} visible)",
                    delta,
                    self.selection_index(),
                    self.visible.len()
                );
                None
            }
        }
    }

    /// External highlight change, e.g. a pointer picking a row.
    ///
    /// `Some(position)` within the visible sequence selects that row. Anything
    /// else only has an effect when the visible sequence is empty, in which
    /// case the selection is already cleared, so a non-empty list always
    /// keeps a selected row.
    pub fn selection_changed(&mut self, position: Option<usize>) -> Option<ListEvent> {
        match position {
            Some(position) if position < self.visible.len() => self.select_position(position),
            _ if self.visible.is_empty() => {
                self.clear_selection();
                None
            }
            _ => None,
        }
    }

    /// Run the selected command through `source`.
    ///
    /// Returns whether the source was invoked. Failures are logged and
    /// otherwise dropped; selection and query stay as they are.
    pub fn execute<A>(&self, source: &A) -> bool
    where
        A: ActionSource + ?Sized,
    {
        if self.selected_value.is_empty() {
            log::debug!("Execute ignored, nothing selected");
            return false;
        }

        log::info!("Executing command: {}", self.selected_value);
        if let Err(e) = source.execute(&self.selected_value) {
            log::warn!("Command '{}' failed: {}", self.selected_value, e);
        }
        true
    }

    // === Derivation ===

    /// Rebuild the visible sequence from `(items, query)` and reset the
    /// selection to the first row.
    fn recompute(&mut self) -> ListEvent {
        let query = self.query.as_str();
        let scorer = &*self.scorer;

        // Score once per item; the score decides visibility and feeds the sort.
        let mut ranked: Vec<(usize, i64)> = self
            .items
            .iter()
            .enumerate()
            .filter_map(|(pos, item)| {
                let relevance = item.relevance(query, scorer);
                CommandItem::passes_filter(query, relevance).then_some((pos, relevance))
            })
            .collect();

        let items = &self.items;
        let policy = self.sort_policy;
        ranked.sort_by(|&(a, a_score), &(b, b_score)| {
            policy.compare(&items[a], a_score, &items[b], b_score)
        });

        self.visible = ranked.into_iter().map(|(pos, _)| pos).collect();
        log::debug!(
            "Filtered {}/{} commands for query {:?}",
            self.visible.len(),
            self.items.len(),
            self.query
        );

        match self.select_position(0) {
            Some(event) => event,
            None => {
                self.clear_selection();
                ListEvent::SelectionCleared
            }
        }
    }

    fn select_position(&mut self, position: usize) -> Option<ListEvent> {
        let value = self.visible_at(position)?.text().to_string();
        self.selection = Some(position);
        self.selected_value.clone_from(&value);
        Some(ListEvent::SelectionChanged { position, value })
    }

    fn clear_selection(&mut self) {
        self.selection = None;
        self.selected_value.clear();
    }
}

impl<S: ?Sized> Clone for CommandListEngine<S> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            query: self.query.clone(),
            visible: self.visible.clone(),
            selection: self.selection,
            selected_value: self.selected_value.clone(),
            sort_policy: self.sort_policy,
            scorer: Arc::clone(&self.scorer),
        }
    }
}

impl<S: ?Sized> fmt::Debug for CommandListEngine<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandListEngine")
            .field("items", &self.items.len())
            .field("query", &self.query)
            .field("visible", &self.visible)
            .field("selection", &self.selection)
            .field("selected_value", &self.selected_value)
            .field("sort_policy", &self.sort_policy)
            .finish_non_exhaustive()
    }
}
