//! Global actions - not tied to the palette itself

use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum GlobalAction {
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Left mouse button pressed at a terminal cell
    MouseClicked { column: u16, row: u16 },
    /// Terminal area changed
    Resize(Rect),
    /// Quit the application
    Quit,
}
