use crate::actions::{Action, GlobalAction, SourceAction};
use crate::reducers::palette_reducer::reduce_palette;
use crate::state::AppState;
use crate::views::layout::PaletteLayout;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates the sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
        }

        Action::Global(GlobalAction::Resize(area)) => {
            state.terminal_area = *area;
            let layout = PaletteLayout::new(*area, &state.config);
            state.palette.viewport_rows = usize::from(layout.list.height);
            state.palette.ensure_selection_visible();
        }

        // Raw input is translated by the KeyboardMiddleware
        Action::Global(GlobalAction::KeyPressed(_) | GlobalAction::MouseClicked { .. }) => {}

        Action::Palette(palette_action) => {
            state.palette = reduce_palette(state.palette, palette_action);
        }

        Action::Source(SourceAction::Load) => {
            state.palette.loading = true;
        }

        Action::Source(SourceAction::Loaded { names, .. }) => {
            state.palette.loading = false;
            state.status.error = None;
            state.palette.engine.replace_items(names.iter().cloned());
            state.palette.scroll_offset = 0;
            log::info!("Loaded {} commands", names.len());
        }

        Action::Source(SourceAction::LoadFailed { message, .. }) => {
            state.palette.loading = false;
            state.status.error = Some(message.clone());
        }

        Action::Source(SourceAction::Executed(name)) => {
            state.executed = Some(name.clone());
        }
    }

    state
}
