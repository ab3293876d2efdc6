//! Plugin manager: lifecycle management for all plugins, the scoped plugin
//! session and the task context.

use std::ops::Deref;
use std::sync::Arc;

use tracing::{error, info, warn};

use taskhooks_core::error::{AppError, ErrorKind};
use taskhooks_core::result::AppResult;

use crate::hooks::definitions::HookPayload;
use crate::hooks::dispatcher::HookDispatcher;
use crate::hooks::registry::HookRegistry;
use crate::hooks::spec::HookSpec;
use crate::lifecycle::{LifecyclePlugin, TASK_START, TASK_STOP};
use crate::registry::{Plugin, PluginInfo, PluginRegistry};

/// Manages the lifecycle of plugins: load, register hooks, unload.
#[derive(Debug)]
pub struct PluginManager {
    /// Plugin registry.
    plugin_registry: Arc<PluginRegistry>,
    /// Hook registry.
    hook_registry: Arc<HookRegistry>,
    /// Hook dispatcher.
    hook_dispatcher: Arc<HookDispatcher>,
}

impl PluginManager {
    /// Creates a new plugin manager with nothing loaded.
    pub fn new() -> Self {
        let hook_registry = Arc::new(HookRegistry::new());
        let hook_dispatcher = Arc::new(HookDispatcher::new(hook_registry.clone()));

        Self {
            plugin_registry: Arc::new(PluginRegistry::new()),
            hook_registry,
            hook_dispatcher,
        }
    }

    /// Loads a compiled-in plugin and registers its specs and implementations.
    ///
    /// On failure nothing of the plugin stays registered, and a plugin whose
    /// `on_load` already ran gets its `on_unload`.
    pub fn load_plugin(&self, plugin: Arc<dyn Plugin>) -> AppResult<()> {
        let info = plugin.info();
        let plugin_id = info.id.clone();

        if self.plugin_registry.contains(&plugin_id) {
            error!(plugin_id = %plugin_id, "Plugin id already loaded");
            let message = format!("Plugin '{plugin_id}' is already loaded");
            return Err(AppError::plugin(message));
        }

        plugin.on_load().map_err(|e| {
            error!(plugin_id = %plugin_id, error = %e, "Plugin load failed");
            AppError::plugin(format!("Plugin '{}' load failed: {}", plugin_id, e))
        })?;

        if let Err(e) = self.plugin_registry.register(plugin.clone()) {
            self.roll_back(&plugin_id, plugin.as_ref());
            let message = format!("Plugin '{plugin_id}' registration failed: {e}");
            return Err(AppError::plugin(message));
        }

        let specs = plugin.hookspecs();
        let spec_count = specs.len();
        for spec in specs {
            if let Err(e) = self.hook_registry.register_spec(&plugin_id, spec) {
                error!(plugin_id = %plugin_id, error = %e, "Plugin hook spec rejected");
                self.hook_registry.unregister_plugin(&plugin_id);
                if let Err(e) = self.plugin_registry.unregister(&plugin_id) {
                    error!(plugin_id = %plugin_id, error = %e, "Plugin rollback failed");
                }
                self.roll_back(&plugin_id, plugin.as_ref());
                let message = format!("Plugin '{plugin_id}' hook spec rejected: {}", e.message);
                return Err(AppError::with_source(ErrorKind::Plugin, message, e));
            }
        }

        let impls = plugin.hookimpls();
        let impl_count = impls.len();
        for (hook, handler) in impls {
            self.hook_registry.register(&plugin_id, &hook, handler);
        }

        info!(
            plugin_id = %plugin_id,
            name = %info.name,
            version = %info.version,
            hookspecs = spec_count,
            hookimpls = impl_count,
            "Plugin loaded"
        );

        Ok(())
    }

    /// Undoes a successful `on_load` for a plugin that did not finish loading.
    fn roll_back(&self, plugin_id: &str, plugin: &dyn Plugin) {
        if let Err(e) = plugin.on_unload() {
            warn!(
                plugin_id = %plugin_id,
                error = %e,
                "Plugin unload returned error"
            );
        }
        warn!(plugin_id = %plugin_id, "Plugin load rolled back");
    }

    /// Loads plugins in order, stopping at the first failure.
    pub fn load_all(&self, plugins: impl IntoIterator<Item = Arc<dyn Plugin>>) -> AppResult<()> {
        for plugin in plugins {
            self.load_plugin(plugin)?;
        }
        Ok(())
    }

    /// Unregisters and unloads a plugin.
    pub fn unload_plugin(&self, plugin_id: &str) -> AppResult<()> {
        let plugin = self
            .plugin_registry
            .get(plugin_id)
            .ok_or_else(|| AppError::not_found(format!("Plugin '{}' not found", plugin_id)))?;

        self.hook_registry.unregister_plugin(plugin_id);

        self.plugin_registry
            .unregister(plugin_id)
            .map_err(|e| AppError::internal(format!("Plugin unregistration failed: {e}")))?;

        if let Err(e) = plugin.on_unload() {
            warn!(
                plugin_id = %plugin_id,
                error = %e,
                "Plugin unload returned error"
            );
        }

        info!(plugin_id = %plugin_id, "Plugin unloaded");

        Ok(())
    }

    /// Unloads all plugins, most recently loaded first.
    pub fn unload_all(&self) -> AppResult<()> {
        let plugin_ids = self.plugin_registry.load_order();

        for plugin_id in plugin_ids.iter().rev() {
            if let Err(e) = self.unload_plugin(plugin_id) {
                error!(
                    plugin_id = %plugin_id,
                    error = %e,
                    "Error unloading plugin"
                );
            }
        }

        info!(count = plugin_ids.len(), "All plugins unloaded");
        Ok(())
    }

    /// Runs `task` inside a task context.
    ///
    /// Fires `task_start`, runs the task, then fires `task_stop` with
    /// `failed` set when the task returned an error or panicked.
    pub fn task_context<T, F>(&self, task: F) -> AppResult<T>
    where
        F: FnOnce() -> AppResult<T>,
    {
        self.hook_dispatcher.call(&HookPayload::new(TASK_START))?;

        let mut stop = TaskStopGuard {
            dispatcher: &self.hook_dispatcher,
            pending: true,
        };

        let result = task();
        let stopped = stop.fire(result.is_err());

        match (result, stopped) {
            (Err(e), _) => Err(e),
            (Ok(_), Err(e)) => Err(e),
            (Ok(value), Ok(())) => Ok(value),
        }
    }

    /// Returns the hook dispatcher for calling hooks.
    pub fn dispatcher(&self) -> &Arc<HookDispatcher> {
        &self.hook_dispatcher
    }

    /// Returns every declared hook spec, sorted by hook name.
    pub fn hook_specs(&self) -> Vec<HookSpec> {
        self.hook_registry.specs()
    }

    /// Returns the hook registry.
    pub fn hook_registry(&self) -> &Arc<HookRegistry> {
        &self.hook_registry
    }

    /// Returns the plugin registry.
    pub fn plugin_registry(&self) -> &Arc<PluginRegistry> {
        &self.plugin_registry
    }

    /// Lists all loaded plugins.
    pub fn list_plugins(&self) -> Vec<PluginInfo> {
        self.plugin_registry.list()
    }
}

impl Default for PluginManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Fires `task_stop` exactly once, from `Drop` if the task unwound.
struct TaskStopGuard<'a> {
    dispatcher: &'a HookDispatcher,
    pending: bool,
}

impl TaskStopGuard<'_> {
    fn fire(&mut self, failed: bool) -> AppResult<()> {
        self.pending = false;
        self.dispatcher
            .call(&HookPayload::new(TASK_STOP).with_bool("failed", failed))
            .map(|_| ())
    }
}

impl Drop for TaskStopGuard<'_> {
    fn drop(&mut self) {
        if self.pending {
            if let Err(e) = self.fire(true) {
                error!(error = %e, "task_stop failed while unwinding");
            }
        }
    }
}

/// A loaded plugin context, unloaded when dropped.
///
/// Opening a session loads the built-in lifecycle specs and then each given
/// plugin. Every plugin is unloaded on drop, whether the work done inside the
/// session succeeded, failed or panicked.
#[derive(Debug)]
pub struct PluginSession {
    manager: PluginManager,
}

impl PluginSession {
    /// Loads the lifecycle specs and `plugins`; any load failure aborts.
    pub fn open(plugins: impl IntoIterator<Item = Arc<dyn Plugin>>) -> AppResult<Self> {
        let session = Self {
            manager: PluginManager::new(),
        };

        session.manager.load_plugin(Arc::new(LifecyclePlugin::new()))?;
        session.manager.load_all(plugins)?;

        let plugin_ids: Vec<String> = session.list_plugins().into_iter().map(|p| p.id).collect();
        info!(plugins = ?plugin_ids, "Plugin session opened");

        Ok(session)
    }
}

impl Deref for PluginSession {
    type Target = PluginManager;

    fn deref(&self) -> &Self::Target {
        &self.manager
    }
}

impl Drop for PluginSession {
    fn drop(&mut self) {
        if let Err(e) = self.manager.unload_all() {
            error!(error = %e, "Plugin session teardown failed");
        }
    }
}
