//! View model for the command palette
//!
//! Pre-computes all display data for the palette view, separating data
//! preparation from rendering logic.

use crate::state::AppState;

/// View model for the command palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteViewModel {
    /// Panel title with match counter
    pub title: String,
    /// Current query
    pub input_text: String,
    /// Is input empty (for placeholder styling)
    pub input_is_empty: bool,
    /// Rows inside the viewport
    pub visible_rows: Vec<CommandRow>,
    /// Text of the status line
    pub status: String,
    /// Status line reports a problem
    pub status_is_error: bool,
}

/// A single row in the command list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRow {
    pub is_selected: bool,
    /// Selection indicator ("> " or "  ")
    pub indicator: &'static str,
    pub text: String,
}

impl PaletteViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let palette = &state.palette;
        let engine = &palette.engine;
        let total = engine.items().len();
        let matching = engine.visible_len();

        let title = format!(" {} ({}/{}) ", state.config.title, matching, total);

        let visible_rows = engine
            .visible()
            .enumerate()
            .skip(palette.scroll_offset)
            .take(palette.viewport_rows)
            .map(|(position, item)| {
                let is_selected =
                    engine.selected().is_some() && position == engine.selection_index();
                CommandRow {
                    is_selected,
                    indicator: if is_selected { "> " } else { "  " },
                    text: item.text().to_string(),
                }
            })
            .collect();

        let (status, status_is_error) = if let Some(error) = &state.status.error {
            (error.clone(), true)
        } else if palette.loading {
            ("Loading commands…".to_string(), false)
        } else if total == 0 {
            ("No commands available".to_string(), false)
        } else if matching == 0 {
            ("No matching commands".to_string(), false)
        } else {
            (String::new(), false)
        };

        Self {
            title,
            input_text: engine.query().to_string(),
            input_is_empty: engine.query().is_empty(),
            visible_rows,
            status,
            status_is_error,
        }
    }
}
