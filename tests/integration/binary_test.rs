//! Runs the `build-hook-docs` binary in a scratch directory.

use std::process::Command;

use crate::helpers::directive_position;

fn build_hook_docs(dir: &std::path::Path) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_build-hook-docs"));
    command
        .current_dir(dir)
        .env_remove("TASKHOOKS_ENV")
        .env("RUST_LOG", "warn");
    command
}

#[test]
fn test_binary_creates_missing_output_directory() {
    let temp = tempfile::tempdir().expect("tempdir");

    let output = build_hook_docs(temp.path()).output().expect("run");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let page = std::fs::read_to_string(temp.path().join("docs/_generated/hookspecs.rst"))
        .expect("page written");
    let stop = directive_position(&page, "task_stop(failed)");
    let tagged = directive_position(&page, "push_images_tagged(source_ref, dest_refs)");
    assert!(stop < tagged);
}

#[test]
fn test_binary_reads_environment_overrides() {
    let temp = tempfile::tempdir().expect("tempdir");

    let output = build_hook_docs(temp.path())
        .env("TASKHOOKS__DOCS__OUTPUT_DIR", "site/reference")
        .env("TASKHOOKS__DOCS__FILE_NAME", "hooks.rst")
        .output()
        .expect("run");
    assert!(output.status.success());

    assert!(temp.path().join("site/reference/hooks.rst").is_file());
    assert!(!temp.path().join("docs").exists());
}

#[test]
fn test_binary_fails_when_output_path_blocked() {
    let temp = tempfile::tempdir().expect("tempdir");
    std::fs::write(temp.path().join("docs"), "a file, not a directory").expect("seed");

    let output = build_hook_docs(temp.path()).output().expect("run");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
}
