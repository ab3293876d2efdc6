//! Push plugin implementation: registers with the taskhooks plugin system.

use std::sync::Arc;

use taskhooks_plugin::lifecycle::{TASK_START, TASK_STOP};
use taskhooks_plugin::{HookHandler, HookSpec, Plugin, PluginInfo, plugin_info};

use crate::hooks::{TaskClock, TaskStartHook, TaskStopHook};

/// Plugin id used for registration and hook results.
pub const PLUGIN_ID: &str = "push";

/// Content push task library plugin
#[derive(Debug, Default)]
pub struct PushPlugin {
    clock: Arc<TaskClock>,
}

impl PushPlugin {
    /// Create a new push plugin
    pub fn new() -> Self {
        Self::default()
    }
}

impl Plugin for PushPlugin {
    fn info(&self) -> PluginInfo {
        plugin_info!(
            id: PLUGIN_ID,
            name: "Push",
            version: env!("CARGO_PKG_VERSION"),
            description: "Content push task library",
            author: "taskhooks",
            priority: 10
        )
    }

    fn hookspecs(&self) -> Vec<HookSpec> {
        crate::hookspecs::hookspecs()
    }

    fn hookimpls(&self) -> Vec<(String, Arc<dyn HookHandler>)> {
        vec![
            (
                TASK_START.to_string(),
                Arc::new(TaskStartHook::new(self.clock.clone())) as Arc<dyn HookHandler>,
            ),
            (
                TASK_STOP.to_string(),
                Arc::new(TaskStopHook::new(self.clock.clone())) as Arc<dyn HookHandler>,
            ),
        ]
    }
}
