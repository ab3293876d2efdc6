//! Hook specifications of the push task library.

use taskhooks_plugin::{HookSpec, hookspec};

/// Namespace the push hooks are declared in.
pub const PUSH_NAMESPACE: &str = "taskhooks._push";

/// Push hook specifications, in declaration order.
pub fn hookspecs() -> Vec<HookSpec> {
    vec![
        hookspec! {
            in PUSH_NAMESPACE;
            /// Called before a repository is published.
            ///
            /// :param repository: id of the repository about to be published.
            /// :type repository: str
            /// :param options: publish options in effect.
            /// :type options: dict
            fn push_repository_pre_publish(repository, options);
        },
        hookspec! {
            in PUSH_NAMESPACE;
            /// Called after a repository was published.
            ///
            /// :param repository: id of the published repository.
            /// :type repository: str
            /// :param options: publish options that were used.
            /// :type options: dict
            fn push_repository_published(repository, options);
        },
        hookspec! {
            in PUSH_NAMESPACE;
            /// Called after an image was tagged into one or more destinations.
            ///
            /// :param source_ref: reference of the image that was tagged.
            /// :type source_ref: str
            /// :param dest_refs: references the image is now reachable under.
            /// :type dest_refs: list[str]
            fn push_images_tagged(source_ref, dest_refs);
        },
        hookspec! {
            in PUSH_NAMESPACE;
            /// Called after repositories were emptied of all content.
            ///
            /// :param repository_ids: ids of the cleared repositories.
            /// :type repository_ids: list[str]
            fn push_repositories_cleared(repository_ids);
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specs_in_declaration_order() {
        let specs = hookspecs();
        assert_eq!(specs.len(), 4);
        assert!(
            specs
                .windows(2)
                .all(|pair| pair[0].location.line < pair[1].location.line)
        );
        assert!(specs.iter().all(|s| s.namespace == PUSH_NAMESPACE));
        assert_eq!(specs[2].signature(), "(source_ref, dest_refs)");
    }
}
