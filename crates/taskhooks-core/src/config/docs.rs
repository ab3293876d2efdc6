//! Hook documentation build configuration.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Settings for the hook documentation build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Directory the generated reST file is written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Name of the generated file inside `output_dir`.
    #[serde(default = "default_file_name")]
    pub file_name: String,
    /// Top-level namespace shared by this tool and the task libraries.
    #[serde(default = "default_namespace_root")]
    pub namespace_root: String,
    /// Private submodule holding this tool's own implementation.
    ///
    /// Namespaces under `<root>.<internal_namespace>` keep their privacy
    /// marker; every other `<root>._name` is attributed to `<root>.name`.
    #[serde(default = "default_internal_namespace")]
    pub internal_namespace: String,
    /// Extra module priorities, merged over the built-in table.
    #[serde(default)]
    pub module_priority: BTreeMap<String, i32>,
}

impl DocsConfig {
    /// Full path of the generated file.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            file_name: default_file_name(),
            namespace_root: default_namespace_root(),
            internal_namespace: default_internal_namespace(),
            module_priority: BTreeMap::new(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("docs/_generated")
}

fn default_file_name() -> String {
    "hookspecs.rst".to_string()
}

fn default_namespace_root() -> String {
    "taskhooks".to_string()
}

fn default_internal_namespace() -> String {
    "_impl".to_string()
}
