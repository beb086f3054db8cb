use std::sync::mpsc::{self, Receiver};

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::reduce;
use crate::state::AppState;

/// Store - holds application state and manages the Redux loop
///
/// Everything runs on the thread that owns the store. Actions queued through
/// the dispatcher (by middleware or worker threads) are processed one at a
/// time, in the order they were queued.
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    action_rx: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
        }
    }

    /// Add middleware to the store (they execute in insertion order)
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Process an action, then everything it caused to be queued
    pub fn dispatch(&mut self, action: Action) {
        self.process(action);
        self.process_pending();
    }

    /// Process actions queued by middleware or worker threads
    pub fn process_pending(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            self.process(action);
        }
    }

    fn process(&mut self, action: Action) {
        let mut should_reduce = true;

        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        if should_reduce {
            self.state = reduce(self.state.clone(), &action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{GlobalAction, PaletteAction, SourceAction};

    struct Swallow;

    impl Middleware for Swallow {
        fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
            match action {
                Action::Palette(PaletteAction::Execute) => {
                    dispatcher.dispatch(Action::Global(GlobalAction::Quit));
                    false
                }
                _ => true,
            }
        }
    }

    #[test]
    fn test_dispatch_reduces_action() {
        let mut store = Store::new(AppState::default());
        store.dispatch(Action::Source(SourceAction::Loaded {
            generation: 0,
            names: vec!["Open".to_string()],
        }));
        assert_eq!(store.state().palette.engine.selected_value(), "Open");
    }

    #[test]
    fn test_middleware_can_consume_and_redispatch() {
        let mut store = Store::new(AppState::default());
        store.add_middleware(Box::new(Swallow));
        store.dispatch(Action::Palette(PaletteAction::Execute));
        assert!(!store.state().running);
    }

    #[test]
    fn test_process_pending_drains_worker_actions() {
        let mut store = Store::new(AppState::default());
        let dispatcher = store.dispatcher.clone();
        std::thread::spawn(move || dispatcher.dispatch(Action::Global(GlobalAction::Quit)))
            .join()
            .unwrap();

        assert!(store.state().running);
        store.process_pending();
        assert!(!store.state().running);
    }
}
