//! Hook registry: hook specifications by name and priority-ordered
//! implementations by hook name.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, info};

use taskhooks_core::error::AppError;
use taskhooks_core::result::AppResult;

use super::definitions::{HookPayload, HookResult};
use super::spec::HookSpec;

/// Trait for hook implementations.
pub trait HookHandler: Send + Sync + std::fmt::Debug {
    /// Handles a hook call.
    fn handle(&self, payload: &HookPayload) -> AppResult<HookResult>;

    /// Returns the plugin ID owning this handler.
    fn plugin_id(&self) -> &str;

    /// Returns the priority (lower = runs first).
    fn priority(&self) -> i32 {
        100
    }
}

/// Entry in the implementation table.
#[derive(Debug)]
struct HookEntry {
    /// The handler.
    handler: Arc<dyn HookHandler>,
    /// Priority (lower = earlier execution).
    priority: i32,
    /// Plugin that registered this handler.
    plugin_id: String,
}

/// Entry in the specification table.
#[derive(Debug)]
struct SpecEntry {
    spec: HookSpec,
    plugin_id: String,
}

/// Registry of hook specifications and hook implementations.
#[derive(Debug)]
pub struct HookRegistry {
    /// Hook name → declared specification.
    specs: RwLock<HashMap<String, SpecEntry>>,
    /// Hook name → implementations sorted by priority.
    handlers: RwLock<HashMap<String, Vec<HookEntry>>>,
}

impl HookRegistry {
    /// Creates a new empty hook registry.
    pub fn new() -> Self {
        Self {
            specs: RwLock::new(HashMap::new()),
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a hook specification on behalf of a plugin.
    ///
    /// A name can be specified only once.
    pub fn register_spec(&self, plugin_id: &str, spec: HookSpec) -> AppResult<()> {
        let mut specs = self.specs.write().unwrap_or_else(PoisonError::into_inner);

        if let Some(existing) = specs.get(&spec.name) {
            return Err(AppError::conflict(format!(
                "Hook '{}' is already specified by plugin '{}' in {}",
                spec.name, existing.plugin_id, existing.spec.namespace
            )));
        }

        debug!(
            hook = %spec.name,
            namespace = %spec.namespace,
            plugin_id = %plugin_id,
            "Hook spec registered"
        );

        specs.insert(
            spec.name.clone(),
            SpecEntry {
                spec,
                plugin_id: plugin_id.to_string(),
            },
        );
        Ok(())
    }

    /// Registers an implementation for a hook name on behalf of a plugin.
    ///
    /// The entry belongs to `plugin_id`, whatever id the handler reports.
    /// Implementations without a specification are accepted.
    pub fn register(&self, plugin_id: &str, hook: &str, handler: Arc<dyn HookHandler>) {
        let priority = handler.priority();

        let mut handlers = self.handlers.write().unwrap_or_else(PoisonError::into_inner);
        let entries = handlers.entry(hook.to_string()).or_default();

        entries.push(HookEntry {
            handler,
            priority,
            plugin_id: plugin_id.to_string(),
        });

        // Stable: equal priorities keep registration order
        entries.sort_by_key(|e| e.priority);

        info!(
            hook = %hook,
            plugin_id = %plugin_id,
            priority = priority,
            "Hook handler registered"
        );
    }

    /// Removes every spec and implementation contributed by a plugin.
    pub fn unregister_plugin(&self, plugin_id: &str) {
        {
            let mut specs = self.specs.write().unwrap_or_else(PoisonError::into_inner);
            specs.retain(|_, entry| entry.plugin_id != plugin_id);
        }

        let mut handlers = self.handlers.write().unwrap_or_else(PoisonError::into_inner);
        for entries in handlers.values_mut() {
            entries.retain(|e| e.plugin_id != plugin_id);
        }
        handlers.retain(|_, entries| !entries.is_empty());

        info!(plugin_id = %plugin_id, "All hooks unregistered for plugin");
    }

    /// Returns the specification of a hook, if one was declared.
    pub fn spec(&self, hook: &str) -> Option<HookSpec> {
        let specs = self.specs.read().unwrap_or_else(PoisonError::into_inner);
        specs.get(hook).map(|entry| entry.spec.clone())
    }

    /// Returns every declared specification, sorted by hook name.
    pub fn specs(&self) -> Vec<HookSpec> {
        let specs = self.specs.read().unwrap_or_else(PoisonError::into_inner);
        let mut all: Vec<HookSpec> = specs.values().map(|entry| entry.spec.clone()).collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    /// Returns all handlers for a hook name, sorted by priority.
    pub fn get_handlers(&self, hook: &str) -> Vec<Arc<dyn HookHandler>> {
        let handlers = self.handlers.read().unwrap_or_else(PoisonError::into_inner);
        handlers
            .get(hook)
            .map(|entries| entries.iter().map(|e| e.handler.clone()).collect())
            .unwrap_or_default()
    }

    /// Returns whether any handlers are registered for a hook name.
    pub fn has_handlers(&self, hook: &str) -> bool {
        self.handler_count(hook) > 0
    }

    /// Returns the number of handlers registered for a hook name.
    pub fn handler_count(&self, hook: &str) -> usize {
        let handlers = self.handlers.read().unwrap_or_else(PoisonError::into_inner);
        handlers.get(hook).map(|entries| entries.len()).unwrap_or(0)
    }

    /// Returns every known hook name, specified or only implemented, sorted.
    pub fn hook_names(&self) -> Vec<String> {
        let specs = self.specs.read().unwrap_or_else(PoisonError::into_inner);
        let handlers = self.handlers.read().unwrap_or_else(PoisonError::into_inner);

        let names: BTreeSet<&String> = specs.keys().chain(handlers.keys()).collect();
        names.into_iter().cloned().collect()
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}
