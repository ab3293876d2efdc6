//! Helpers for writing hook implementations.

use std::sync::Arc;

use taskhooks_core::result::AppResult;

use crate::hooks::definitions::{HookPayload, HookResult};
use crate::hooks::registry::HookHandler;

type HandlerFn = dyn Fn(&HookPayload) -> AppResult<HookResult> + Send + Sync;

/// A closure-based hook handler for quick handler creation.
pub struct ClosureHandler {
    /// Plugin ID.
    id: String,
    /// Priority.
    priority_val: i32,
    /// Handler function.
    handler: Arc<HandlerFn>,
}

impl std::fmt::Debug for ClosureHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosureHandler")
            .field("id", &self.id)
            .field("priority_val", &self.priority_val)
            .field("handler", &"<closure>")
            .finish()
    }
}

impl ClosureHandler {
    /// Creates a new closure-based handler.
    pub fn new<F>(plugin_id: &str, priority: i32, handler: F) -> Self
    where
        F: Fn(&HookPayload) -> AppResult<HookResult> + Send + Sync + 'static,
    {
        Self {
            id: plugin_id.to_string(),
            priority_val: priority,
            handler: Arc::new(handler),
        }
    }

    /// Wraps the handler into an `Arc<dyn HookHandler>`.
    pub fn into_handler(self) -> Arc<dyn HookHandler> {
        Arc::new(self)
    }
}

impl HookHandler for ClosureHandler {
    fn handle(&self, payload: &HookPayload) -> AppResult<HookResult> {
        (self.handler)(payload)
    }

    fn plugin_id(&self) -> &str {
        &self.id
    }

    fn priority(&self) -> i32 {
        self.priority_val
    }
}
