//! Command list actions
//!
//! Tagged actions the engine understands. The orchestrating application maps
//! its own input (key presses, text field changes, source notifications) to
//! these and hands them to [`CommandListEngine::handle_action`].
//!
//! [`CommandListEngine::handle_action`]: crate::CommandListEngine::handle_action

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    /// Replace the whole candidate set with these names, in order
    ReplaceItems(Vec<String>),
    /// Set the filter query
    SetQuery(String),
    /// Move the selection one row up
    SelectPrevious,
    /// Move the selection one row down
    SelectNext,
    /// Select the row at this position of the visible sequence (pointer pick)
    Pick(usize),
}
