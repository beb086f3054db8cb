//! ActionSourceMiddleware - talks to the action source
//!
//! - `Source::Load` lists commands on a worker thread; the result comes back
//!   as `Source::Loaded` / `Source::LoadFailed`.
//! - `Palette::Execute` hands the selected command to the source, then quits.
//!
//! Every load gets a generation number. Only the newest generation is let
//! through to the reducer, so a slow superseded load never overwrites a
//! fresher list.

use std::sync::Arc;
use std::thread;

use hud_list_engine::ActionSource;

use crate::actions::{Action, GlobalAction, PaletteAction, SourceAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct ActionSourceMiddleware {
    source: Arc<dyn ActionSource>,
    generation: u64,
}

impl ActionSourceMiddleware {
    pub fn new(source: Arc<dyn ActionSource>) -> Self {
        Self {
            source,
            generation: 0,
        }
    }

    fn start_load(&mut self, dispatcher: &Dispatcher) {
        self.generation += 1;
        let generation = self.generation;
        let source = Arc::clone(&self.source);
        let worker_dispatcher = dispatcher.clone();

        log::debug!("Loading commands (generation {})", generation);
        let spawned = thread::Builder::new()
            .name("command-loader".to_string())
            .spawn(move || {
                let action = match source.list_commands() {
                    Ok(names) => SourceAction::Loaded { generation, names },
                    Err(e) => {
                        log::error!("Failed to load commands: {}", e);
                        SourceAction::LoadFailed {
                            generation,
                            message: e.to_string(),
                        }
                    }
                };
                worker_dispatcher.dispatch(Action::Source(action));
            });

        if let Err(e) = spawned {
            log::error!("Failed to start command loader: {}", e);
            dispatcher.dispatch(Action::Source(SourceAction::LoadFailed {
                generation,
                message: format!("Failed to start command loader: {}", e),
            }));
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        if generation != self.generation {
            log::debug!(
                "Dropping result of superseded load {} (current {})",
                generation,
                self.generation
            );
            return false;
        }
        true
    }
}

impl Middleware for ActionSourceMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Source(SourceAction::Load) => {
                self.start_load(dispatcher);
                // Let the reducer flag the palette as loading
                true
            }

            Action::Source(
                SourceAction::Loaded { generation, .. } | SourceAction::LoadFailed { generation, .. },
            ) => self.is_current(*generation),

            Action::Palette(PaletteAction::Execute) => {
                let engine = &state.palette.engine;
                if engine.execute(self.source.as_ref()) {
                    dispatcher.dispatch(Action::Source(SourceAction::Executed(
                        engine.selected_value().to_string(),
                    )));
                }
                // The session ends after execute, selected or not
                dispatcher.dispatch(Action::Global(GlobalAction::Quit));
                true
            }

            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use hud_list_engine::ActionError;
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    #[derive(Default)]
    struct FakeSource {
        names: Vec<String>,
        executed: Mutex<Vec<String>>,
        fail_listing: bool,
    }

    impl ActionSource for FakeSource {
        fn list_commands(&self) -> Result<Vec<String>, ActionError> {
            if self.fail_listing {
                return Err(ActionError::Unavailable("no menu".to_string()));
            }
            Ok(self.names.clone())
        }

        fn execute(&self, name: &str) -> Result<(), ActionError> {
            self.executed.lock().unwrap().push(name.to_string());
            Ok(())
        }
    }

    fn store_with(source: Arc<FakeSource>) -> Store {
        let mut store = Store::new(AppState::default());
        store.add_middleware(Box::new(ActionSourceMiddleware::new(source)));
        store
    }

    /// Pump the store until the worker thread's result has been reduced
    fn wait_loaded(store: &mut Store) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while store.state().palette.loading && Instant::now() < deadline {
            store.process_pending();
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_load_fills_the_list() {
        let source = Arc::new(FakeSource {
            names: vec!["Open".to_string(), "Close".to_string()],
            ..FakeSource::default()
        });
        let mut store = store_with(source);

        store.dispatch(Action::Source(SourceAction::Load));
        assert!(store.state().palette.loading);
        wait_loaded(&mut store);

        assert!(!store.state().palette.loading);
        assert_eq!(store.state().palette.engine.visible_len(), 2);
        assert_eq!(store.state().palette.engine.selected_value(), "Open");
    }

    #[test]
    fn test_load_failure_reports_status() {
        let source = Arc::new(FakeSource {
            fail_listing: true,
            ..FakeSource::default()
        });
        let mut store = store_with(source);

        store.dispatch(Action::Source(SourceAction::Load));
        wait_loaded(&mut store);

        assert_eq!(
            store.state().status.error.as_deref(),
            Some("Action source unavailable: no menu")
        );
    }

    #[test]
    fn test_stale_generation_is_dropped() {
        let source = Arc::new(FakeSource::default());
        let mut store = store_with(source);

        store.dispatch(Action::Source(SourceAction::Load));
        store.dispatch(Action::Source(SourceAction::Load));
        store.dispatch(Action::Source(SourceAction::Loaded {
            generation: 1,
            names: vec!["Stale".to_string()],
        }));

        assert_eq!(store.state().palette.engine.visible_len(), 0);
        wait_loaded(&mut store);
    }

    #[test]
    fn test_execute_runs_selected_then_quits() {
        let source = Arc::new(FakeSource::default());
        let mut store = store_with(Arc::clone(&source));
        store.dispatch(Action::Source(SourceAction::Loaded {
            generation: 0,
            names: vec!["Open".to_string(), "Save".to_string()],
        }));
        store.dispatch(Action::Palette(PaletteAction::NavigateNext));

        store.dispatch(Action::Palette(PaletteAction::Execute));

        assert_eq!(*source.executed.lock().unwrap(), vec!["Save".to_string()]);
        assert_eq!(store.state().executed.as_deref(), Some("Save"));
        assert!(!store.state().running);
    }

    #[test]
    fn test_execute_without_selection_only_quits() {
        let source = Arc::new(FakeSource::default());
        let mut store = store_with(Arc::clone(&source));

        store.dispatch(Action::Palette(PaletteAction::Execute));

        assert!(source.executed.lock().unwrap().is_empty());
        assert_eq!(store.state().executed, None);
        assert!(!store.state().running);
    }
}
