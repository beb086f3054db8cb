//! Dispatcher for middleware action dispatch
//!
//! When middleware (or a worker thread it started) needs to dispatch actions
//! that should re-enter the middleware chain, it uses the Dispatcher. The
//! store drains these in order, so every action still runs to completion
//! before the next one starts.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action; it re-enters the middleware chain from the beginning.
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
