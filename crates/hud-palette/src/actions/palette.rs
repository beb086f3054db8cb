//! Command palette actions
//!
//! Actions targeting the command list. Keyboard and mouse input is
//! translated into these by the KeyboardMiddleware.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteAction {
    // Text input
    /// Character typed into the search field
    Char(char),
    /// Backspace pressed in the search field
    Backspace,
    /// Clear the entire query
    Clear,
    /// Replace the query (initial query from the command line)
    SetQuery(String),

    // Navigation
    /// Navigate to next command in the list
    NavigateNext,
    /// Navigate to previous command in the list
    NavigatePrev,
    /// Row picked with the pointer (position in the visible list)
    Pick(usize),

    /// Execute selected command
    Execute,
}
