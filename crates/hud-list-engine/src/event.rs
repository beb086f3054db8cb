//! Events emitted by the engine for the parent application to handle.

/// Selection notifications.
///
/// The engine does not own any focus or highlight effect. It emits these
/// instead and the UI driver reacts (scrolls the row into view, highlights
/// it, and so on).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// A row became the selected one.
    SelectionChanged {
        /// Position within the visible sequence.
        position: usize,
        /// Text of the selected item.
        value: String,
    },

    /// The visible sequence is empty, nothing is selected.
    SelectionCleared,
}
