use ratatui::{layout::Rect, Frame};

use crate::state::AppState;

pub mod layout;
pub mod palette_view;

/// Render the whole application
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    palette_view::render(state, area, f);
}
