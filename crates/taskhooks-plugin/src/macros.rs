//! Convenience macros for declaring hooks and plugins.

/// Declares a hook specification, capturing its source location.
///
/// The `///` doc lines become the spec's doc text. The namespace defaults to
/// the calling module's path; `in "<namespace>";` overrides it.
///
/// # Example
/// ```rust,ignore
/// let spec = hookspec! {
///     in "taskhooks._push";
///     /// Called after images were tagged.
///     fn images_tagged(source_refs, dest_refs: list);
/// };
/// ```
#[macro_export]
macro_rules! hookspec {
    (
        in $namespace:expr;
        $(#[doc = $doc:literal])*
        fn $name:ident ( $( $param:ident $(: $ty:ty)? $(= $default:expr)? ),* $(,)? ) $(;)?
    ) => {
        $crate::hooks::spec::HookSpec::new(stringify!($name), $namespace, file!(), line!())
            .with_params(::std::vec![
                $(
                    $crate::hooks::spec::HookParam::new(stringify!($param))
                        $(.with_annotation(stringify!($ty)))?
                        $(.with_default(stringify!($default)))?
                ),*
            ])
            .with_doc($crate::macros::join_doc_lines(&[$($doc),*]))
    };
    (
        $(#[doc = $doc:literal])*
        fn $($rest:tt)*
    ) => {
        $crate::hookspec!(in module_path!(); $(#[doc = $doc])* fn $($rest)*)
    };
}

/// Joins `#[doc]` attribute lines back into one doc text.
#[doc(hidden)]
pub fn join_doc_lines(lines: &[&str]) -> String {
    lines.join("\n")
}

/// Macro for creating a plugin info struct.
///
/// # Example
/// ```rust,ignore
/// let info = plugin_info!(
///     id: "push",
///     name: "Push",
///     version: "1.0.0",
///     description: "Publishes content",
///     author: "Dev"
/// );
/// ```
#[macro_export]
macro_rules! plugin_info {
    (
        id: $id:expr,
        name: $name:expr,
        version: $version:expr,
        description: $desc:expr,
        author: $author:expr
    ) => {
        $crate::plugin_info!(
            id: $id,
            name: $name,
            version: $version,
            description: $desc,
            author: $author,
            priority: 100
        )
    };
    (
        id: $id:expr,
        name: $name:expr,
        version: $version:expr,
        description: $desc:expr,
        author: $author:expr,
        priority: $priority:expr
    ) => {
        $crate::registry::PluginInfo {
            id: $id.to_string(),
            name: $name.to_string(),
            version: $version.to_string(),
            description: $desc.to_string(),
            author: $author.to_string(),
            priority: $priority,
        }
    };
}

/// Macro for quickly building a `HookPayload`.
///
/// # Example
/// ```rust,ignore
/// let payload = hook_payload!("task_stop", {
///     "failed" => json!(false),
/// });
/// ```
#[macro_export]
macro_rules! hook_payload {
    ($hook:expr) => {
        $crate::hooks::definitions::HookPayload::new($hook)
    };
    ($hook:expr, { $($key:expr => $value:expr),* $(,)? }) => {{
        let mut payload = $crate::hooks::definitions::HookPayload::new($hook);
        $(
            payload.data.insert($key.to_string(), $value);
        )*
        payload
    }};
}

#[cfg(test)]
mod tests {
    use crate::hooks::spec::HookParam;

    #[test]
    fn test_hookspec_captures_metadata() {
        let spec = hookspec! {
            /// Called after a push.
            ///
            /// More detail.
            fn item_pushed(item, dry_run: bool = false);
        };

        assert_eq!(spec.name, "item_pushed");
        assert_eq!(spec.namespace, "taskhooks_plugin.macros.tests");
        assert!(spec.location.file.ends_with("macros.rs"));
        assert!(spec.location.line > 0);
        assert_eq!(
            spec.params,
            vec![
                HookParam::new("item"),
                HookParam::new("dry_run")
                    .with_annotation("bool")
                    .with_default("false"),
            ]
        );
        assert_eq!(
            spec.doc.as_deref(),
            Some(" Called after a push.\n\n More detail.")
        );
    }

    #[test]
    fn test_hookspec_explicit_namespace_and_no_doc() {
        let spec = hookspec! {
            in "taskhooks._push";
            fn repositories_cleared(repository_ids);
        };
        assert_eq!(spec.namespace, "taskhooks._push");
        assert_eq!(spec.signature(), "(repository_ids)");
        assert!(spec.doc.is_none());
    }

    #[test]
    fn test_hookspecs_in_one_file_keep_line_order() {
        let first = hookspec! { fn first(); };
        let second = hookspec! { fn second(); };
        assert!(first.location.line < second.location.line);
    }

    #[test]
    fn test_plugin_info_default_priority() {
        let info = plugin_info!(
            id: "push",
            name: "Push",
            version: "1.0.0",
            description: "Publishes content",
            author: "Release Engineering"
        );
        assert_eq!(info.priority, 100);
        assert_eq!(info.id, "push");
    }

    #[test]
    fn test_hook_payload_macro() {
        let payload = hook_payload!("task_stop", { "failed" => serde_json::json!(true) });
        assert_eq!(payload.get_bool("failed"), Some(true));
    }
}
