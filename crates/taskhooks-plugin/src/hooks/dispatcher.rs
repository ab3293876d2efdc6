//! Hook dispatcher: calls every implementation of a hook in priority order.
//!
//! - Implementations run sequentially, lowest priority value first.
//! - Arguments the hook's spec declares but the payload lacks are logged and
//!   the call still goes ahead.
//! - The first implementation error aborts the call and is returned.

use std::sync::Arc;

use tracing::{debug, error, warn};

use taskhooks_core::result::AppResult;

use super::definitions::{HookPayload, HookResult};
use super::registry::HookRegistry;

/// Dispatches hook calls to all registered implementations.
#[derive(Debug)]
pub struct HookDispatcher {
    /// Hook registry.
    registry: Arc<HookRegistry>,
}

impl HookDispatcher {
    /// Creates a new hook dispatcher.
    pub fn new(registry: Arc<HookRegistry>) -> Self {
        Self { registry }
    }

    /// Calls a hook, returning the result of each implementation in call order.
    pub fn call(&self, payload: &HookPayload) -> AppResult<Vec<HookResult>> {
        match self.registry.spec(&payload.hook) {
            Some(spec) => {
                for param in spec.param_names() {
                    if !payload.data.contains_key(param) {
                        warn!(
                            hook = %payload.hook,
                            argument = %param,
                            "Hook called without a declared argument"
                        );
                    }
                }
            }
            None => debug!(hook = %payload.hook, "Calling hook without a spec"),
        }

        let handlers = self.registry.get_handlers(&payload.hook);
        if handlers.is_empty() {
            return Ok(Vec::new());
        }

        debug!(
            hook = %payload.hook,
            handler_count = handlers.len(),
            "Dispatching hook"
        );

        let mut results = Vec::with_capacity(handlers.len());
        for handler in &handlers {
            let result = handler.handle(payload).map_err(|e| {
                error!(
                    hook = %payload.hook,
                    plugin_id = %handler.plugin_id(),
                    error = %e,
                    "Hook handler failed"
                );
                e
            })?;
            results.push(result);
        }

        Ok(results)
    }

    /// Returns a reference to the hook registry.
    pub fn registry(&self) -> &Arc<HookRegistry> {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::hooks::spec::{HookParam, HookSpec};
    use crate::traits::ClosureHandler;
    use taskhooks_core::error::AppError;

    #[test]
    fn test_call_without_handlers_is_empty() {
        let dispatcher = HookDispatcher::new(Arc::new(HookRegistry::new()));
        let results = dispatcher.call(&HookPayload::new("task_start")).expect("call");
        assert!(results.is_empty());
    }

    #[test]
    fn test_call_runs_handlers_in_priority_order() {
        let registry = Arc::new(HookRegistry::new());
        let calls = Arc::new(Mutex::new(Vec::new()));

        for (id, priority) in [("b", 50), ("a", 10)] {
            let calls = calls.clone();
            registry.register(
                id,
                "task_stop",
                Arc::new(ClosureHandler::new(id, priority, move |payload| {
                    calls
                        .lock()
                        .expect("lock")
                        .push((id, payload.get_bool("failed")));
                    Ok(HookResult::with_output(id, serde_json::json!(priority)))
                })),
            );
        }

        let dispatcher = HookDispatcher::new(registry);
        let results = dispatcher
            .call(&HookPayload::new("task_stop").with_bool("failed", false))
            .expect("call");

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].plugin_id, "a");
        assert_eq!(results[1].output, Some(serde_json::json!(50)));
        assert_eq!(
            *calls.lock().expect("lock"),
            vec![("a", Some(false)), ("b", Some(false))]
        );
    }

    #[test]
    fn test_handler_error_stops_call() {
        let registry = Arc::new(HookRegistry::new());
        registry.register(
            "broken",
            "task_start",
            Arc::new(ClosureHandler::new("broken", 10, |_| {
                Err(AppError::plugin("cannot start"))
            })),
        );
        let reached = Arc::new(Mutex::new(false));
        let flag = reached.clone();
        registry.register(
            "after",
            "task_start",
            Arc::new(ClosureHandler::new("after", 20, move |_| {
                *flag.lock().expect("lock") = true;
                Ok(HookResult::none("after"))
            })),
        );

        let dispatcher = HookDispatcher::new(registry);
        let err = dispatcher.call(&HookPayload::new("task_start")).unwrap_err();

        assert_eq!(err.message, "cannot start");
        assert!(!*reached.lock().expect("lock"));
    }

    #[test]
    fn test_missing_declared_argument_still_dispatches() {
        let registry = Arc::new(HookRegistry::new());
        registry
            .register_spec(
                "core",
                HookSpec::new("task_stop", "taskhooks", "a.rs", 1)
                    .with_param(HookParam::new("failed")),
            )
            .expect("spec");
        registry.register(
            "push",
            "task_stop",
            Arc::new(ClosureHandler::new("push", 100, |_| Ok(HookResult::none("push")))),
        );

        let dispatcher = HookDispatcher::new(registry);
        let results = dispatcher.call(&HookPayload::new("task_stop")).expect("call");
        assert_eq!(results.len(), 1);
    }
}
