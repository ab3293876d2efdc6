//! Hook specifications: the declared extension points plugins may implement.
//!
//! A [`HookSpec`] carries everything needed to document a hook without
//! looking at its implementations: name, parameters, doc text, the
//! namespace that declared it and where in the source it was declared.
//! Specs are normally built with the [`hookspec!`](crate::hookspec) macro,
//! which captures the source location and `///` doc lines at the call site.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One parameter of a hook specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookParam {
    /// Parameter name.
    pub name: String,
    /// Optional type annotation, rendered as written.
    pub annotation: Option<String>,
    /// Optional default value, rendered as written.
    pub default: Option<String>,
}

impl HookParam {
    /// Creates a parameter with no annotation and no default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotation: None,
            default: None,
        }
    }

    /// Sets the type annotation.
    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    /// Sets the default value.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

impl fmt::Display for HookParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        match (&self.annotation, &self.default) {
            (Some(annotation), Some(default)) => write!(f, ": {annotation} = {default}"),
            (Some(annotation), None) => write!(f, ": {annotation}"),
            (None, Some(default)) => write!(f, "={default}"),
            (None, None) => Ok(()),
        }
    }
}

/// Where a hook specification was declared.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Declaring source file.
    pub file: String,
    /// 1-based line of the declaration.
    pub line: u32,
}

/// A declared hook: signature, documentation and origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookSpec {
    /// Hook name, as used in payloads and implementations.
    pub name: String,
    /// Ordered parameter list.
    pub params: Vec<HookParam>,
    /// Raw doc text, if any.
    pub doc: Option<String>,
    /// Dotted name of the declaring namespace.
    pub namespace: String,
    /// Source location of the declaration.
    pub location: SourceLocation,
}

impl HookSpec {
    /// Creates a spec with no parameters and no doc text.
    ///
    /// Rust module paths (`a::b`) are normalised to dotted names (`a.b`).
    pub fn new(
        name: impl Into<String>,
        namespace: impl AsRef<str>,
        file: impl Into<String>,
        line: u32,
    ) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            doc: None,
            namespace: namespace.as_ref().replace("::", "."),
            location: SourceLocation {
                file: file.into(),
                line,
            },
        }
    }

    /// Appends a parameter.
    pub fn with_param(mut self, param: HookParam) -> Self {
        self.params.push(param);
        self
    }

    /// Replaces the parameter list.
    pub fn with_params(mut self, params: Vec<HookParam>) -> Self {
        self.params = params;
        self
    }

    /// Sets the doc text. Empty text is treated as absent.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        let doc = doc.into();
        self.doc = if doc.is_empty() { None } else { Some(doc) };
        self
    }

    /// Renders the call signature, e.g. `(failed, retries: int = 3)`.
    pub fn signature(&self) -> String {
        let params: Vec<String> = self.params.iter().map(ToString::to_string).collect();
        format!("({})", params.join(", "))
    }

    /// Returns the parameter names in declaration order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|p| p.name.as_str())
    }

    /// Whether the hook name is private (leading underscore).
    pub fn is_private(&self) -> bool {
        self.name.starts_with('_')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_display_forms() {
        assert_eq!(HookParam::new("failed").to_string(), "failed");
        assert_eq!(
            HookParam::new("retries").with_default("3").to_string(),
            "retries=3"
        );
        assert_eq!(
            HookParam::new("failed").with_annotation("bool").to_string(),
            "failed: bool"
        );
        assert_eq!(
            HookParam::new("retries")
                .with_annotation("int")
                .with_default("3")
                .to_string(),
            "retries: int = 3"
        );
    }

    #[test]
    fn test_signature_joins_params() {
        let spec = HookSpec::new("task_stop", "taskhooks._impl.lifecycle", "lifecycle.rs", 10)
            .with_param(HookParam::new("failed"))
            .with_param(HookParam::new("reason").with_default("None"));
        assert_eq!(spec.signature(), "(failed, reason=None)");
    }

    #[test]
    fn test_empty_signature() {
        let spec = HookSpec::new("task_start", "taskhooks", "lifecycle.rs", 1);
        assert_eq!(spec.signature(), "()");
    }

    #[test]
    fn test_namespace_normalised_from_module_path() {
        let spec = HookSpec::new("x", "plugin_push::hookspecs", "hookspecs.rs", 1);
        assert_eq!(spec.namespace, "plugin_push.hookspecs");
    }

    #[test]
    fn test_empty_doc_is_absent() {
        let spec = HookSpec::new("x", "a", "a.rs", 1).with_doc("");
        assert!(spec.doc.is_none());
    }

    #[test]
    fn test_private_name() {
        assert!(HookSpec::new("_internal", "a", "a.rs", 1).is_private());
        assert!(!HookSpec::new("task_start", "a", "a.rs", 1).is_private());
    }
}
