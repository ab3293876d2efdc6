//! Discovery of the hook specifications known to a plugin manager.

use tracing::debug;

use taskhooks_plugin::{HookSpec, PluginManager};

/// Returns every public hook specification registered with `manager`.
///
/// Hook names with a leading underscore are private and skipped. Names that
/// only have implementations, with no declared spec, are skipped as well.
/// The result follows hook-name order; callers sort it for output.
pub fn collect_hookspecs(manager: &PluginManager) -> Vec<HookSpec> {
    let mut specs = Vec::new();

    for spec in manager.hook_specs() {
        if spec.is_private() {
            debug!(hook = %spec.name, "Private hook, skipping");
            continue;
        }
        specs.push(spec);
    }

    debug!(count = specs.len(), "Collected hook specs");
    specs
}
