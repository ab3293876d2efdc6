//! Plugin registry: stores loaded plugin instances and metadata.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::hooks::registry::HookHandler;
use crate::hooks::spec::HookSpec;

/// Metadata about a loaded plugin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Unique plugin identifier.
    pub id: String,
    /// Human-readable plugin name.
    pub name: String,
    /// Plugin version string.
    pub version: String,
    /// Plugin description.
    pub description: String,
    /// Author or maintainer.
    pub author: String,
    /// Load priority (lower = listed first).
    pub priority: i32,
}

/// Trait that all plugins must implement.
///
/// A plugin contributes hook specifications, hook implementations, or both.
pub trait Plugin: Send + Sync + std::fmt::Debug {
    /// Returns plugin metadata.
    fn info(&self) -> PluginInfo;

    /// Hook specifications declared by this plugin.
    fn hookspecs(&self) -> Vec<HookSpec> {
        Vec::new()
    }

    /// Hook implementations provided by this plugin, keyed by hook name.
    fn hookimpls(&self) -> Vec<(String, Arc<dyn HookHandler>)> {
        Vec::new()
    }

    /// Called once before the plugin's hooks are registered.
    fn on_load(&self) -> Result<(), String> {
        Ok(())
    }

    /// Called once after the plugin's hooks are unregistered.
    fn on_unload(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Registry of all loaded plugins.
#[derive(Debug)]
pub struct PluginRegistry {
    /// Plugin ID → plugin instance.
    plugins: RwLock<HashMap<String, Arc<dyn Plugin>>>,
    /// Plugin ID → metadata.
    metadata: RwLock<HashMap<String, PluginInfo>>,
    /// Plugin IDs in registration order.
    order: RwLock<Vec<String>>,
}

impl PluginRegistry {
    /// Creates a new empty plugin registry.
    pub fn new() -> Self {
        Self {
            plugins: RwLock::new(HashMap::new()),
            metadata: RwLock::new(HashMap::new()),
            order: RwLock::new(Vec::new()),
        }
    }

    /// Registers a plugin.
    pub fn register(&self, plugin: Arc<dyn Plugin>) -> Result<(), String> {
        let info = plugin.info();
        let id = info.id.clone();

        let mut plugins = self.plugins.write().unwrap_or_else(PoisonError::into_inner);
        let mut metadata = self.metadata.write().unwrap_or_else(PoisonError::into_inner);
        let mut order = self.order.write().unwrap_or_else(PoisonError::into_inner);

        if plugins.contains_key(&id) {
            return Err(format!("Plugin '{}' is already registered", id));
        }

        info!(plugin_id = %id, name = %info.name, version = %info.version, "Registering plugin");

        plugins.insert(id.clone(), plugin);
        metadata.insert(id.clone(), info);
        order.push(id);

        Ok(())
    }

    /// Unregisters a plugin by ID.
    pub fn unregister(&self, plugin_id: &str) -> Result<Arc<dyn Plugin>, String> {
        let mut plugins = self.plugins.write().unwrap_or_else(PoisonError::into_inner);
        let mut metadata = self.metadata.write().unwrap_or_else(PoisonError::into_inner);
        let mut order = self.order.write().unwrap_or_else(PoisonError::into_inner);

        let plugin = plugins
            .remove(plugin_id)
            .ok_or_else(|| format!("Plugin '{}' not found", plugin_id))?;

        metadata.remove(plugin_id);
        order.retain(|id| id != plugin_id);

        info!(plugin_id = %plugin_id, "Plugin unregistered");

        Ok(plugin)
    }

    /// Gets a plugin by ID.
    pub fn get(&self, plugin_id: &str) -> Option<Arc<dyn Plugin>> {
        let plugins = self.plugins.read().unwrap_or_else(PoisonError::into_inner);
        plugins.get(plugin_id).cloned()
    }

    /// Lists all registered plugin metadata, ordered by priority then id.
    pub fn list(&self) -> Vec<PluginInfo> {
        let metadata = self.metadata.read().unwrap_or_else(PoisonError::into_inner);
        let mut infos: Vec<PluginInfo> = metadata.values().cloned().collect();
        infos.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.id.cmp(&b.id)));
        infos
    }

    /// Returns the registered plugin IDs, oldest registration first.
    pub fn load_order(&self) -> Vec<String> {
        self.order.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Returns plugin count.
    pub fn count(&self) -> usize {
        let plugins = self.plugins.read().unwrap_or_else(PoisonError::into_inner);
        plugins.len()
    }

    /// Checks whether a plugin is registered.
    pub fn contains(&self, plugin_id: &str) -> bool {
        let plugins = self.plugins.read().unwrap_or_else(PoisonError::into_inner);
        plugins.contains_key(plugin_id)
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Named(&'static str, i32);

    impl Plugin for Named {
        fn info(&self) -> PluginInfo {
            crate::plugin_info!(
                id: self.0,
                name: self.0,
                version: "0.1.0",
                description: "test",
                author: "tests",
                priority: self.1
            )
        }
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let registry = PluginRegistry::new();
        registry.register(Arc::new(Named("push", 10))).expect("first");
        let err = registry.register(Arc::new(Named("push", 20))).unwrap_err();
        assert!(err.contains("already registered"));
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn test_list_ordered_by_priority() {
        let registry = PluginRegistry::new();
        registry.register(Arc::new(Named("late", 200))).expect("late");
        registry.register(Arc::new(Named("core", 0))).expect("core");
        registry.register(Arc::new(Named("push", 100))).expect("push");

        let ids: Vec<String> = registry.list().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["core", "push", "late"]);
    }

    #[test]
    fn test_unregister_missing() {
        let registry = PluginRegistry::new();
        assert!(registry.unregister("ghost").is_err());
        registry.register(Arc::new(Named("push", 1))).expect("push");
        assert!(registry.unregister("push").is_ok());
        assert!(!registry.contains("push"));
        assert!(registry.get("push").is_none());
    }

    #[test]
    fn test_load_order_tracks_registration() {
        let registry = PluginRegistry::new();
        registry.register(Arc::new(Named("b", 10))).expect("b");
        registry.register(Arc::new(Named("a", 10))).expect("a");
        registry.register(Arc::new(Named("c", 0))).expect("c");
        assert_eq!(registry.load_order(), vec!["b", "a", "c"]);

        registry.unregister("a").expect("a");
        assert_eq!(registry.load_order(), vec!["b", "c"]);
    }
}
