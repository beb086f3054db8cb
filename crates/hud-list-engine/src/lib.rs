//! # hud-list-engine
//!
//! The decision engine behind a command palette: given a fixed list of
//! command names and a live query, it decides which commands are visible,
//! in which order, and which one is selected.
//!
//! ## Design Principles
//!
//! The engine is **instrumented** the same way a widget state is: it never
//! renders and never runs commands on its own. Callers feed it
//! [`ListAction`]s and receive [`ListEvent`]s describing selection changes.
//! Running the chosen command goes through an [`ActionSource`] the caller
//! passes in.
//!
//! Every derived view (visible sequence, selection index, selected value)
//! is recomputed synchronously by the operation that invalidates it, so the
//! engine is always consistent between two calls.
//!
//! ## Usage
//!
//! ```rust
//! use hud_list_engine::{CommandListEngine, ListAction};
//!
//! let mut engine = CommandListEngine::new();
//! engine.handle_action(ListAction::ReplaceItems(vec![
//!     "Open".to_string(),
//!     "Close".to_string(),
//!     "Save".to_string(),
//! ]));
//! assert_eq!(engine.selected_value(), "Open");
//!
//! engine.handle_action(ListAction::SelectNext);
//! assert_eq!(engine.selected_value(), "Close");
//! ```

pub mod action;
pub mod engine;
pub mod event;
pub mod item;
pub mod scorer;
pub mod source;

pub use action::ListAction;
pub use engine::{CommandListEngine, SortPolicy};
pub use event::ListEvent;
pub use item::CommandItem;
pub use scorer::{CaseMatching, NucleoScorer, RelevanceScorer, NEUTRAL_RELEVANCE, NO_MATCH};
pub use source::{ActionError, ActionSource};
