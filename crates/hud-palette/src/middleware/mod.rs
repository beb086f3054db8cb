use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod action_source_middleware;
pub mod keyboard_middleware;
pub mod logging_middleware;

pub use action_source_middleware::ActionSourceMiddleware;
pub use keyboard_middleware::KeyboardMiddleware;
pub use logging_middleware::LoggingMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
pub trait Middleware {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
