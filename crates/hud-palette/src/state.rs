//! Application State

use hud_config::AppConfig;
use hud_list_engine::{CommandListEngine, NucleoScorer};
use ratatui::layout::Rect;

/// Command palette state
#[derive(Debug, Clone)]
pub struct PaletteState {
    /// Filter, sort and selection of the command list
    pub engine: CommandListEngine,
    /// A load from the action source is in flight
    pub loading: bool,
    /// First visible row of the list
    pub scroll_offset: usize,
    /// Number of list rows that fit in the panel
    pub viewport_rows: usize,
}

impl PaletteState {
    pub fn new(config: &AppConfig) -> Self {
        let scorer = NucleoScorer::new(config.case_matching.into());
        Self {
            engine: CommandListEngine::with_scorer(scorer).with_sort_policy(config.sort.into()),
            loading: false,
            scroll_offset: 0,
            viewport_rows: 1,
        }
    }

    /// Keep the selected row inside the viewport
    pub fn ensure_selection_visible(&mut self) {
        let selected = self.engine.selection_index();
        let rows = self.viewport_rows.max(1);

        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        } else if selected >= self.scroll_offset + rows {
            self.scroll_offset = selected + 1 - rows;
        }
    }
}

/// Status line state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusState {
    /// Last error reported by the action source
    pub error: Option<String>,
}

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    pub palette: PaletteState,
    pub status: StatusState,
    /// Full terminal area, used to lay out the panel and map mouse clicks
    pub terminal_area: Rect,
    /// Name handed to the action source, if any
    pub executed: Option<String>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            running: true,
            palette: PaletteState::new(&config),
            status: StatusState::default(),
            terminal_area: Rect::default(),
            executed: None,
            config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
