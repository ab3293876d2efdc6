//! reStructuredText rendering of hook specifications.

use taskhooks_plugin::HookSpec;

use crate::dedent::{clean_doc, indent};

/// Indentation of the doc body under its directive.
const BODY_INDENT: &str = "  ";

/// Renders one spec as a `py:function` directive followed by its doc body.
///
/// ```text
/// .. py:function:: task_stop(failed)
///
///   Called when a task ends.
///
/// ```
pub fn render_hookspec(spec: &HookSpec) -> String {
    let mut out = format!(".. py:function:: {}{}\n\n", spec.name, spec.signature());

    let body = spec.doc.as_deref().map(clean_doc).unwrap_or_default();
    let body = body.trim_matches('\n');

    if !body.is_empty() {
        out.push_str(&indent(body, BODY_INDENT));
        out.push_str("\n\n");
    }

    out
}

/// Renders specs in the given order and concatenates the blocks.
pub fn render_all(specs: &[HookSpec]) -> String {
    specs.iter().map(render_hookspec).collect()
}
