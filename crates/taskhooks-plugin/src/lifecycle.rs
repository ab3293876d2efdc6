//! Built-in task lifecycle hook specifications.

use crate::hooks::spec::HookSpec;
use crate::registry::{Plugin, PluginInfo};

/// Namespace the built-in specs are attributed to.
pub const LIFECYCLE_NAMESPACE: &str = "taskhooks._impl.lifecycle";

/// Plugin id owning the built-in specs.
pub const LIFECYCLE_PLUGIN_ID: &str = "taskhooks";

/// Hook fired when a task starts.
pub const TASK_START: &str = "task_start";

/// Hook fired when a task ends.
pub const TASK_STOP: &str = "task_stop";

/// Specs for the task lifecycle hooks, in declaration order.
pub fn hookspecs() -> Vec<HookSpec> {
    vec![
        crate::hookspec! {
            in LIFECYCLE_NAMESPACE;
            /// Called when a task starts.
            ///
            /// Implementations may use this hook to register further hook
            /// implementations that need the task's context.
            fn task_start();
        },
        crate::hookspec! {
            in LIFECYCLE_NAMESPACE;
            /// Called when a task ends.
            ///
            /// Hook implementations registered from :func:`task_start` should
            /// be unregistered here.
            ///
            /// :param failed: True if the task is failing, either by returning
            ///                an error or by panicking.
            /// :type failed: bool
            fn task_stop(failed);
        },
    ]
}

/// Plugin contributing the lifecycle specs. Always loaded first.
#[derive(Debug, Default)]
pub struct LifecyclePlugin;

impl LifecyclePlugin {
    /// Creates the lifecycle plugin.
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for LifecyclePlugin {
    fn info(&self) -> PluginInfo {
        crate::plugin_info!(
            id: LIFECYCLE_PLUGIN_ID,
            name: "Task lifecycle",
            version: env!("CARGO_PKG_VERSION"),
            description: "Task start/stop hook specifications",
            author: "taskhooks",
            priority: 0
        )
    }

    fn hookspecs(&self) -> Vec<HookSpec> {
        hookspecs()
    }
}
