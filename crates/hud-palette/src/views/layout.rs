//! Geometry of the palette panel
//!
//! Shared by the renderer, the reducer (viewport height) and the keyboard
//! middleware (mouse hit testing), so all three agree on where rows are.

use hud_config::AppConfig;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

/// Areas of the palette panel, in terminal coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteLayout {
    /// Whole panel including its border
    pub panel: Rect,
    /// Search input line
    pub input: Rect,
    /// Divider between input and list
    pub divider: Rect,
    /// Command rows
    pub list: Rect,
    /// Status line
    pub status: Rect,
}

impl PaletteLayout {
    pub fn new(area: Rect, config: &AppConfig) -> Self {
        let panel = centered(area, config.width_percent, config.height_percent);
        let inner = panel.inner(Margin::new(1, 1));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        Self {
            panel,
            input: chunks[0],
            divider: chunks[1],
            list: chunks[2],
            status: chunks[3],
        }
    }

    /// Position in the visible list of the row drawn at `(column, row)`.
    pub fn row_at(&self, column: u16, row: u16, scroll_offset: usize) -> Option<usize> {
        let list = self.list;
        let inside = column >= list.x
            && column < list.x + list.width
            && row >= list.y
            && row < list.y + list.height;

        inside.then(|| scroll_offset + usize::from(row - list.y))
    }
}

/// Rect of `percent_x` x `percent_y` of `area`, centered in it
fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let scale = |total: u16, percent: u16| (u32::from(total) * u32::from(percent.min(100)) / 100) as u16;

    // Border, input, divider, one row, status
    let width = scale(area.width, percent_x).max(area.width.min(20));
    let height = scale(area.height, percent_y).max(area.height.min(6));

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
