//! End-to-end tests of the documentation pipeline.

use std::sync::Arc;

use plugin_push::PushPlugin;
use taskhooks_docs::build_docs;
use taskhooks_plugin::{Plugin, PluginSession};

use crate::helpers::{UnlistedPlugin, directive_position, docs_config};

#[test]
fn test_prioritized_module_documented_before_unlisted_module() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config = docs_config(temp.path());

    let plugins: Vec<Arc<dyn Plugin>> = vec![Arc::new(UnlistedPlugin), Arc::new(PushPlugin::new())];
    let session = PluginSession::open(plugins).expect("open");
    let build = build_docs(&session, &config).expect("build");

    // task_start, task_stop, four push hooks, catalog_synced
    assert_eq!(build.hook_count, 7);

    let page = std::fs::read_to_string(&build.output).expect("read");

    let start = directive_position(&page, "task_start()");
    let stop = directive_position(&page, "task_stop(failed)");
    let pre_publish = directive_position(&page, "push_repository_pre_publish(repository, options)");
    let cleared = directive_position(&page, "push_repositories_cleared(repository_ids)");
    let catalog = directive_position(&page, "catalog_synced(entries, full=False)");

    assert_eq!(start, 0);
    assert!(start < stop);
    assert!(stop < pre_publish);
    assert!(pre_publish < cleared);
    assert!(cleared < catalog);
    assert!(!page.contains("catalog_checked"));
}

#[test]
fn test_blocks_have_indented_bodies() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config = docs_config(temp.path());

    let plugins: Vec<Arc<dyn Plugin>> = vec![Arc::new(UnlistedPlugin)];
    let session = PluginSession::open(plugins).expect("open");
    let build = build_docs(&session, &config).expect("build");

    let page = std::fs::read_to_string(&build.output).expect("read");
    assert!(page.contains(concat!(
        ".. py:function:: catalog_synced(entries, full=False)\n\n",
        "  Called after the catalog was synced.\n\n",
        "  :param entries: synced entries.\n\n",
    )));
    assert!(page.contains(
        ".. py:function:: task_stop(failed)\n\n  Called when a task ends.\n"
    ));
}

#[test]
fn test_rebuild_overwrites_previous_page() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config = docs_config(temp.path());
    std::fs::create_dir_all(&config.output_dir).expect("mkdir");
    std::fs::write(config.output_path(), "stale page\n".repeat(1000)).expect("seed");

    let session = PluginSession::open(Vec::<Arc<dyn Plugin>>::new()).expect("open");
    build_docs(&session, &config).expect("build");

    let page = std::fs::read_to_string(config.output_path()).expect("read");
    assert!(!page.contains("stale page"));
    assert!(page.starts_with(".. py:function:: task_start()"));
}
