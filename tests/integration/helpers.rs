//! Shared test helpers for integration tests.

use std::path::Path;
use std::sync::Arc;

use taskhooks_core::config::DocsConfig;
use taskhooks_plugin::prelude::*;

/// Docs configuration writing into `dir`.
pub fn docs_config(dir: &Path) -> DocsConfig {
    DocsConfig {
        output_dir: dir.join("docs").join("_generated"),
        ..DocsConfig::default()
    }
}

/// Position of a hook's directive line in a rendered page.
pub fn directive_position(page: &str, signature: &str) -> usize {
    let directive = format!(".. py:function:: {signature}\n");
    page.find(&directive)
        .unwrap_or_else(|| panic!("{directive:?} missing from page:\n{page}"))
}

/// A third-party plugin whose namespace is not in the priority table.
#[derive(Debug)]
pub struct UnlistedPlugin;

impl Plugin for UnlistedPlugin {
    fn info(&self) -> PluginInfo {
        plugin_info!(
            id: "unlisted",
            name: "Unlisted",
            version: "0.1.0",
            description: "hooks from an unranked module",
            author: "tests"
        )
    }

    fn hookspecs(&self) -> Vec<HookSpec> {
        vec![
            // Doc text in the flush-first-line style
            HookSpec::new("catalog_synced", "catalog.hooks", "catalog/hooks.rs", 3)
                .with_param(HookParam::new("entries"))
                .with_param(HookParam::new("full").with_default("False"))
                .with_doc(concat!(
                    "Called after the catalog was synced.\n\n",
                    "    :param entries: synced entries.\n    ",
                )),
        ]
    }

    fn hookimpls(&self) -> Vec<(String, Arc<dyn HookHandler>)> {
        vec![(
            "catalog_checked".to_string(),
            ClosureHandler::new("unlisted", 100, |_| Ok(HookResult::none("unlisted")))
                .into_handler(),
        )]
    }
}
