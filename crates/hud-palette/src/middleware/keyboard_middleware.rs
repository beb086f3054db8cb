//! KeyboardMiddleware - translates raw input into palette actions
//!
//! The palette always owns a text field, so printable characters go to the
//! query. Everything else is resolved in two layers:
//!
//! ## Layer 1: Priority Keys
//! Ctrl+C and Esc quit, whatever else is going on.
//!
//! ## Layer 2: Palette Keys
//! Navigation, execution, reload and query editing.
//!
//! Mouse clicks on a list row become a pick of that row.

use crate::actions::{Action, GlobalAction, PaletteAction, SourceAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::views::layout::PaletteLayout;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    /// Translate a key into the action it stands for, if any
    fn translate_key(key: KeyEvent) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 1: Priority keys (always work)
        // ═══════════════════════════════════════════════════════════════════

        if key.code == KeyCode::Esc || (ctrl && key.code == KeyCode::Char('c')) {
            return Some(Action::Global(GlobalAction::Quit));
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 2: Palette keys
        // ═══════════════════════════════════════════════════════════════════

        let palette = match key.code {
            KeyCode::Up => PaletteAction::NavigatePrev,
            KeyCode::Down => PaletteAction::NavigateNext,
            KeyCode::Enter => PaletteAction::Execute,

            KeyCode::Char('p' | 'k') if ctrl => PaletteAction::NavigatePrev,
            KeyCode::Char('n' | 'j') if ctrl => PaletteAction::NavigateNext,
            KeyCode::Char('r') if ctrl => return Some(Action::Source(SourceAction::Load)),
            // Ctrl+U - Unix line kill
            KeyCode::Char('u') if ctrl => PaletteAction::Clear,

            KeyCode::Char(c) if !ctrl && !alt => PaletteAction::Char(c),

            // Cmd+Backspace on Mac / Alt+Backspace - clear entire line
            KeyCode::Backspace
                if key.modifiers.contains(KeyModifiers::SUPER) || alt =>
            {
                PaletteAction::Clear
            }
            KeyCode::Backspace => PaletteAction::Backspace,

            _ => return None,
        };

        Some(Action::Palette(palette))
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Global(GlobalAction::KeyPressed(key)) => {
                match Self::translate_key(*key) {
                    Some(translated) => dispatcher.dispatch(translated),
                    None => log::trace!("Unbound key: {:?}", key),
                }
                false
            }

            Action::Global(GlobalAction::MouseClicked { column, row }) => {
                let layout = PaletteLayout::new(state.terminal_area, &state.config);
                if let Some(position) = layout.row_at(*column, *row, state.palette.scroll_offset) {
                    log::debug!("Mouse picked row {}", position);
                    dispatcher.dispatch(Action::Palette(PaletteAction::Pick(position)));
                }
                false
            }

            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::KeyEventKind;
    use ratatui::layout::Rect;
    use std::sync::mpsc;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: ratatui::crossterm::event::KeyEventState::NONE,
        }
    }

    fn dispatched(action: Action, state: &AppState) -> (bool, Vec<Action>) {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware = KeyboardMiddleware::new();
        let continued = middleware.handle(&action, state, &dispatcher);
        (continued, rx.try_iter().collect())
    }

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Vec<Action> {
        let action = Action::Global(GlobalAction::KeyPressed(key(code, modifiers)));
        dispatched(action, &AppState::default()).1
    }

    #[test]
    fn test_priority_keys_quit() {
        let quit = vec![Action::Global(GlobalAction::Quit)];
        assert_eq!(press(KeyCode::Esc, KeyModifiers::NONE), quit);
        assert_eq!(press(KeyCode::Char('c'), KeyModifiers::CONTROL), quit);
    }

    #[test]
    fn test_navigation_keys() {
        let prev = vec![Action::Palette(PaletteAction::NavigatePrev)];
        let next = vec![Action::Palette(PaletteAction::NavigateNext)];
        assert_eq!(press(KeyCode::Up, KeyModifiers::NONE), prev);
        assert_eq!(press(KeyCode::Char('p'), KeyModifiers::CONTROL), prev);
        assert_eq!(press(KeyCode::Down, KeyModifiers::NONE), next);
        assert_eq!(press(KeyCode::Char('n'), KeyModifiers::CONTROL), next);
    }

    #[test]
    fn test_text_keys_edit_query() {
        assert_eq!(
            press(KeyCode::Char('q'), KeyModifiers::NONE),
            vec![Action::Palette(PaletteAction::Char('q'))]
        );
        assert_eq!(
            press(KeyCode::Char('Q'), KeyModifiers::SHIFT),
            vec![Action::Palette(PaletteAction::Char('Q'))]
        );
        assert_eq!(
            press(KeyCode::Backspace, KeyModifiers::NONE),
            vec![Action::Palette(PaletteAction::Backspace)]
        );
        assert_eq!(
            press(KeyCode::Char('u'), KeyModifiers::CONTROL),
            vec![Action::Palette(PaletteAction::Clear)]
        );
    }

    #[test]
    fn test_enter_executes_and_ctrl_r_reloads() {
        assert_eq!(
            press(KeyCode::Enter, KeyModifiers::NONE),
            vec![Action::Palette(PaletteAction::Execute)]
        );
        assert_eq!(
            press(KeyCode::Char('r'), KeyModifiers::CONTROL),
            vec![Action::Source(SourceAction::Load)]
        );
    }

    #[test]
    fn test_unbound_key_is_consumed_silently() {
        assert!(press(KeyCode::F(5), KeyModifiers::NONE).is_empty());
    }

    #[test]
    fn test_mouse_click_picks_row() {
        let mut state = AppState::default();
        state.terminal_area = Rect::new(0, 0, 100, 50);
        let layout = PaletteLayout::new(state.terminal_area, &state.config);

        let click = Action::Global(GlobalAction::MouseClicked {
            column: layout.list.x,
            row: layout.list.y + 2,
        });
        let (continued, actions) = dispatched(click, &state);
        assert!(!continued);
        assert_eq!(actions, vec![Action::Palette(PaletteAction::Pick(2))]);

        let outside = Action::Global(GlobalAction::MouseClicked { column: 0, row: 0 });
        assert!(dispatched(outside, &state).1.is_empty());
    }

    #[test]
    fn test_other_actions_pass_through() {
        let (continued, actions) =
            dispatched(Action::Palette(PaletteAction::Execute), &AppState::default());
        assert!(continued);
        assert!(actions.is_empty());
    }
}
