use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            // Raw input is noisy, the translated action gets logged anyway
            Action::Global(GlobalAction::KeyPressed(_)) => log::trace!("Action: {:?}", action),
            _ => log::debug!("Action: {:?}", action),
        }

        true
    }
}
