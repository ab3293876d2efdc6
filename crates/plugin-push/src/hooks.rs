//! Lifecycle hook implementations for the push plugin.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use tracing::{info, warn};

use taskhooks_core::result::AppResult;
use taskhooks_plugin::{HookHandler, HookPayload, HookResult};

use crate::plugin::PLUGIN_ID;

/// Shared state between the start and stop handlers.
#[derive(Debug, Default)]
pub struct TaskClock {
    started: Mutex<Option<Instant>>,
}

impl TaskClock {
    fn start(&self) {
        *self.started.lock().unwrap_or_else(|e| e.into_inner()) = Some(Instant::now());
    }

    fn elapsed_ms(&self) -> Option<u64> {
        self.started
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take()
            .map(|at| u64::try_from(at.elapsed().as_millis()).unwrap_or(u64::MAX))
    }
}

/// Hook handler for task_start: records when the task began.
#[derive(Debug)]
pub struct TaskStartHook {
    clock: Arc<TaskClock>,
}

impl TaskStartHook {
    /// Create a new task_start handler
    pub fn new(clock: Arc<TaskClock>) -> Self {
        Self { clock }
    }
}

impl HookHandler for TaskStartHook {
    fn handle(&self, _payload: &HookPayload) -> AppResult<HookResult> {
        self.clock.start();
        info!("Push task started");
        Ok(HookResult::none(PLUGIN_ID))
    }

    fn plugin_id(&self) -> &str {
        PLUGIN_ID
    }
}

/// Hook handler for task_stop: reports the task outcome and duration.
#[derive(Debug)]
pub struct TaskStopHook {
    clock: Arc<TaskClock>,
}

impl TaskStopHook {
    /// Create a new task_stop handler
    pub fn new(clock: Arc<TaskClock>) -> Self {
        Self { clock }
    }
}

impl HookHandler for TaskStopHook {
    fn handle(&self, payload: &HookPayload) -> AppResult<HookResult> {
        let failed = payload.get_bool("failed").unwrap_or(true);
        let elapsed_ms = self.clock.elapsed_ms();

        if failed {
            warn!(elapsed_ms = ?elapsed_ms, "Push task failed");
        } else {
            info!(elapsed_ms = ?elapsed_ms, "Push task finished");
        }

        Ok(HookResult::with_output(
            PLUGIN_ID,
            serde_json::json!({ "failed": failed, "elapsed_ms": elapsed_ms }),
        ))
    }

    fn plugin_id(&self) -> &str {
        PLUGIN_ID
    }
}
