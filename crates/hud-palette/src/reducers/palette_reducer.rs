//! Command palette reducer
//!
//! Handles PaletteAction only. Execution is a side effect and lives in the
//! ActionSourceMiddleware; everything here is a state transformation.

use crate::actions::PaletteAction;
use crate::state::PaletteState;

pub fn reduce_palette(mut state: PaletteState, action: &PaletteAction) -> PaletteState {
    match action {
        PaletteAction::Char(c) => {
            let mut query = state.engine.query().to_string();
            query.push(*c);
            set_query(&mut state, query);
        }

        PaletteAction::Backspace => {
            let mut query = state.engine.query().to_string();
            if query.pop().is_some() {
                set_query(&mut state, query);
            }
        }

        PaletteAction::Clear => {
            if !state.engine.query().is_empty() {
                set_query(&mut state, String::new());
            }
        }

        PaletteAction::SetQuery(query) => {
            set_query(&mut state, query.clone());
        }

        PaletteAction::NavigateNext => {
            if state.engine.select_next().is_some() {
                state.ensure_selection_visible();
            }
        }

        PaletteAction::NavigatePrev => {
            if state.engine.select_previous().is_some() {
                state.ensure_selection_visible();
            }
        }

        PaletteAction::Pick(position) => {
            if state.engine.selection_changed(Some(*position)).is_some() {
                state.ensure_selection_visible();
            }
        }

        PaletteAction::Execute => {
            // Side effect handled by the middleware, nothing to reduce
        }
    }

    state
}

/// New query: the list is refiltered, the first row selected and the list
/// scrolled back to the top.
fn set_query(state: &mut PaletteState, query: String) {
    state.engine.set_query(query);
    state.scroll_offset = 0;
}
