//! Ordering of hook specifications for the reference page.
//!
//! Specs are ordered by the priority of their owning module, then by source
//! file, then by line, so hooks appear grouped the way their authors declared
//! them.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::Serialize;

use taskhooks_core::config::DocsConfig;
use taskhooks_plugin::HookSpec;

/// Priority given to modules absent from the table; sorts after all of them.
pub const UNRANKED_PRIORITY: i32 = 1000;

/// Modules ranked by default, lower first.
const BUILTIN_PRIORITIES: &[(&str, i32)] = &[("taskhooks", 0), ("taskhooks.push", 10)];

/// Public module name → sort priority.
#[derive(Debug, Clone, Serialize)]
pub struct ModulePriorityTable {
    priorities: BTreeMap<String, i32>,
}

impl ModulePriorityTable {
    /// An empty table: every module is unranked.
    pub fn empty() -> Self {
        Self {
            priorities: BTreeMap::new(),
        }
    }

    /// The built-in table.
    pub fn builtin() -> Self {
        Self {
            priorities: BUILTIN_PRIORITIES
                .iter()
                .map(|(module, priority)| (module.to_string(), *priority))
                .collect(),
        }
    }

    /// The built-in table with the configured priorities merged over it.
    pub fn from_config(config: &DocsConfig) -> Self {
        let mut table = Self::builtin();
        table.priorities.extend(
            config
                .module_priority
                .iter()
                .map(|(module, priority)| (module.clone(), *priority)),
        );
        table
    }

    /// Sets one module's priority.
    pub fn with(mut self, module: impl Into<String>, priority: i32) -> Self {
        self.priorities.insert(module.into(), priority);
        self
    }

    /// Priority of `module`, or [`UNRANKED_PRIORITY`].
    pub fn priority(&self, module: &str) -> i32 {
        self.priorities
            .get(module)
            .copied()
            .unwrap_or(UNRANKED_PRIORITY)
    }
}

impl Default for ModulePriorityTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// How namespaces map to public module names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceRules {
    /// Top-level namespace shared with task libraries, e.g. `taskhooks`.
    pub root: String,
    /// This tool's own private implementation submodule, e.g. `_impl`.
    pub internal: String,
}

impl NamespaceRules {
    /// Creates rules for a root namespace and its internal submodule.
    pub fn new(root: impl Into<String>, internal: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            internal: internal.into(),
        }
    }

    /// Rules taken from the docs configuration.
    pub fn from_config(config: &DocsConfig) -> Self {
        Self::new(&config.namespace_root, &config.internal_namespace)
    }

    /// Drops the privacy marker from a task library's private namespace.
    ///
    /// `<root>._name...` becomes `<root>.name...`, except for this tool's own
    /// `<root>.<internal>` namespace, which is returned unchanged.
    pub fn public_namespace<'a>(&self, namespace: &'a str) -> Cow<'a, str> {
        let own = format!("{}.{}", self.root, self.internal);
        let is_own = namespace == own
            || namespace
                .strip_prefix(own.as_str())
                .is_some_and(|rest| rest.starts_with('.'));
        if is_own {
            return Cow::Borrowed(namespace);
        }

        let private_prefix = format!("{}._", self.root);
        match namespace.strip_prefix(private_prefix.as_str()) {
            Some(rest) => Cow::Owned(format!("{}.{}", self.root, rest)),
            None => Cow::Borrowed(namespace),
        }
    }

    /// Public module owning `namespace`: its public form up to the first
    /// remaining `._` private submodule marker.
    pub fn owning_module(&self, namespace: &str) -> String {
        let public = self.public_namespace(namespace);
        match public.find("._") {
            Some(end) => public[..end].to_string(),
            None => public.into_owned(),
        }
    }
}

impl Default for NamespaceRules {
    fn default() -> Self {
        Self::new("taskhooks", "_impl")
    }
}

/// Derived ordering key of one spec.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    /// Owning module's priority.
    pub priority: i32,
    /// Declaring source file.
    pub file: String,
    /// Declaring line.
    pub line: u32,
}

impl SortKey {
    /// Computes the key of `spec`.
    pub fn of(spec: &HookSpec, table: &ModulePriorityTable, rules: &NamespaceRules) -> Self {
        let module = rules.owning_module(&spec.namespace);
        Self {
            priority: table.priority(&module),
            file: spec.location.file.clone(),
            line: spec.location.line,
        }
    }
}

/// Sorts specs by [`SortKey`]. Equal keys keep their input order.
pub fn sort_hookspecs(
    mut specs: Vec<HookSpec>,
    table: &ModulePriorityTable,
    rules: &NamespaceRules,
) -> Vec<HookSpec> {
    specs.sort_by_cached_key(|spec| SortKey::of(spec, table, rules));
    specs
}
