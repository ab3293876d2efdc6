//! Integration tests for the hook documentation build.

mod binary_test;
mod build_docs_test;
mod helpers;
