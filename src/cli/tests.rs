// Author: Dustin Pilgrim
// License: MIT

#[cfg(test)]
use super::*;
use std::fs;

use rstest::rstest;

use crate::Value;

fn plan(args: &[&str]) -> MergePlan {
    let mut argv = vec!["yaml-merge"];
    argv.extend_from_slice(args);
    match parse_args(argv).expect("arguments should parse") {
        Invocation::Merge(plan) => plan,
        Invocation::Info(text) => panic!("expected a merge plan, got info:\n{}", text),
    }
}

fn usage_error(args: &[&str]) -> String {
    let mut argv = vec!["yaml-merge"];
    argv.extend_from_slice(args);
    match parse_args(argv) {
        Err(MergeError::CliUsage { message, .. }) => message,
        other => panic!("expected a usage error, got {:?}", other),
    }
}

// ===== Argument parsing =====

#[test]
fn test_groups_follow_their_src() {
    let plan = plan(&[
        "--src", "a.yaml",
        "--targetPath", "$.x",
        "--src", "{\"k\": 1}",
        "--srcPath", "$.k",
        "--targetPath", "$.y",
        "--src", "z: 3",
        "out.yaml",
    ]);

    assert_eq!(plan.target_file, PathBuf::from("out.yaml"));
    assert_eq!(plan.sources.len(), 3);

    assert_eq!(plan.sources[0].src, "a.yaml");
    assert_eq!(plan.sources[0].src_path(), "$.");
    assert_eq!(plan.sources[0].target_path(), "$.x");

    assert_eq!(plan.sources[1].src_path(), "$.k");
    assert_eq!(plan.sources[1].target_path(), "$.y");

    assert_eq!(plan.sources[2], SourceSpec::new("z: 3"));
    assert!(!plan.dry_run);
    assert_eq!(plan.verbosity, 0);
}

#[test]
fn test_flags_and_verbosity() {
    let plan = plan(&["-vv", "--dry-run", "--src", "a: 1", "out.yaml"]);
    assert!(plan.dry_run);
    assert_eq!(plan.verbosity, 2);
}

#[test]
fn test_hyphen_source_value() {
    let plan = plan(&["--src", "- not a mapping", "out.yaml"]);
    assert_eq!(plan.sources[0].src, "- not a mapping");
}

#[rstest]
#[case(&["out.yaml"], "No sources")]
#[case(&["--src", "a: 1"], "No target file")]
#[case(&["--srcPath", "$.a", "--src", "a: 1", "out.yaml"], "--srcPath without matching --src argument")]
#[case(&["--targetPath", "$.a", "out.yaml"], "--targetPath without matching --src argument")]
#[case(&["--src", "a: 1", "--srcPath", "$.a", "--srcPath", "$.b", "out.yaml"], "--srcPath redeclared for one of sources")]
#[case(&["--src", "a: 1", "--targetPath", "$.a", "--targetPath", "$.b", "out.yaml"], "--targetPath redeclared for one of sources")]
fn test_usage_errors(#[case] args: &[&str], #[case] expected: &str) {
    assert_eq!(usage_error(args), expected);
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let message = usage_error(&["--bogus", "--src", "a: 1", "out.yaml"]);
    assert!(message.contains("--bogus"), "message was: {}", message);
}

#[test]
fn test_help_is_info() {
    match parse_args(["yaml-merge", "--help"]).unwrap() {
        Invocation::Info(text) => {
            assert!(text.contains("--src"));
            assert!(text.contains("TARGET_FILE"));
        }
        other => panic!("expected help text, got {:?}", other),
    }
    assert!(usage().contains("--targetPath"));
}

#[test]
fn test_exit_codes() {
    assert_eq!(exit_code(&MergeError::cli_usage("No sources")), 2);
    assert_eq!(exit_code(&MergeError::parse_error("bad", None)), 1);
}

// ===== End to end =====

#[test]
fn test_merge_into_empty_target_file() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("target.yaml");
    fs::write(&target, "").unwrap();

    let plan = plan(&[
        "--src", r#"{"a":{"x":1}}"#,
        "--src", "y: 2",
        "--targetPath", "$.b",
        target.to_str().unwrap(),
    ]);
    run(&plan, &mut std::io::sink()).unwrap();

    let merged = Document::from_file(&target).unwrap();
    assert_eq!(merged, Document::from_str("a: {x: 1}\nb: {y: 2}\n").unwrap());
    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        "---\na:\n  x: 1\nb:\n  y: 2\n...\n"
    );
}

#[test]
fn test_missing_target_file_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("new.yaml");

    let plan = plan(&["--src", "k: v", target.to_str().unwrap()]);
    run(&plan, &mut std::io::sink()).unwrap();

    assert_eq!(
        Document::from_file(&target).unwrap().get("$.k").unwrap(),
        Value::from("v")
    );
}

#[test]
fn test_empty_sequence_target_and_source() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("target.yaml");
    fs::write(&target, "--- []\n...\n").unwrap();

    let plan = plan(&[
        "--src", "--- []\n...\n",
        "--src", "a: 1",
        target.to_str().unwrap(),
    ]);
    run(&plan, &mut std::io::sink()).unwrap();

    assert_eq!(fs::read_to_string(&target).unwrap(), "---\na: 1\n...\n");
}

#[test]
fn test_source_file_with_src_path() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("source.yaml");
    let target = dir.path().join("target.yaml");
    fs::write(&source, "db:\n  host: localhost\n  port: 5432\nother: ignored\n").unwrap();
    fs::write(&target, "app:\n  db:\n    port: 1\n    user: admin\n").unwrap();

    let plan = plan(&[
        "--src", source.to_str().unwrap(),
        "--srcPath", "$.db",
        "--targetPath", "$.app.db",
        target.to_str().unwrap(),
    ]);
    run(&plan, &mut std::io::sink()).unwrap();

    let merged = Document::from_file(&target).unwrap();
    assert_eq!(
        merged,
        Document::from_str("app: {db: {port: 5432, user: admin, host: localhost}}").unwrap()
    );
    assert!(!merged.has("$.other"));
}

#[test]
fn test_scalar_src_path_sets_leaf() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("target.yaml");

    let plan = plan(&[
        "--src", "a: \"b: 1\"",
        "--srcPath", "$.a",
        "--targetPath", "$.c",
        target.to_str().unwrap(),
    ]);
    run(&plan, &mut std::io::sink()).unwrap();

    let merged = Document::from_file(&target).unwrap();
    assert_eq!(merged.get("$.c").unwrap(), Value::from("b: 1"));
}

#[test]
fn test_dry_run_prints_and_leaves_target() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("target.yaml");
    fs::write(&target, "a: 1\n").unwrap();

    let plan = plan(&["--dry-run", "--src", "b: 2", target.to_str().unwrap()]);
    let mut out = Vec::new();
    run(&plan, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "---\na: 1\nb: 2\n...\n");
    assert_eq!(fs::read_to_string(&target).unwrap(), "a: 1\n");
}

#[test]
fn test_failure_leaves_target_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("target.yaml");
    fs::write(&target, "a: 1\n").unwrap();

    let plan = plan(&[
        "--src", "b: 2",
        "--src", "c: 3",
        "--srcPath", "$.missing",
        target.to_str().unwrap(),
    ]);
    let err = run(&plan, &mut std::io::sink()).unwrap_err();

    assert!(matches!(err, MergeError::PathNotFound { .. }));
    assert_eq!(exit_code(&err), 1);
    assert_eq!(fs::read_to_string(&target).unwrap(), "a: 1\n");
}

#[test]
fn test_invalid_source_text_fails() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("target.yaml");

    let plan = plan(&["--src", "a: [broken", target.to_str().unwrap()]);
    let err = run(&plan, &mut std::io::sink()).unwrap_err();

    assert!(matches!(err, MergeError::ParseError { .. }));
    assert!(!target.exists());
}

#[test]
fn test_unanchored_target_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("target.yaml");

    let plan = plan(&["--src", "a: 1", "--targetPath", "b", target.to_str().unwrap()]);
    let err = run(&plan, &mut std::io::sink()).unwrap_err();

    assert!(matches!(err, MergeError::UnsupportedPath { .. }));
    assert!(!target.exists());
}
