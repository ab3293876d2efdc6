//! The hook documentation build: enumerate, sort, render, write.

use std::path::PathBuf;

use tracing::info;

use taskhooks_core::config::DocsConfig;
use taskhooks_core::result::AppResult;
use taskhooks_plugin::PluginManager;

use crate::enumerate::collect_hookspecs;
use crate::render::render_all;
use crate::sort::{ModulePriorityTable, NamespaceRules, sort_hookspecs};
use crate::writer::write_docs;

/// Outcome of a documentation build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocBuild {
    /// File the page was written to.
    pub output: PathBuf,
    /// Number of hooks documented.
    pub hook_count: usize,
}

/// Documents every hook spec known to `manager` into the configured file.
pub fn build_docs(manager: &PluginManager, config: &DocsConfig) -> AppResult<DocBuild> {
    let table = ModulePriorityTable::from_config(config);
    let rules = NamespaceRules::from_config(config);

    let specs = sort_hookspecs(collect_hookspecs(manager), &table, &rules);
    let content = render_all(&specs);

    let output = config.output_path();
    write_docs(&output, &content)?;

    info!(
        hooks = specs.len(),
        output = %output.display(),
        "Hook documentation built"
    );

    Ok(DocBuild {
        output,
        hook_count: specs.len(),
    })
}
