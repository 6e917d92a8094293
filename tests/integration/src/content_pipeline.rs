//! End-to-end tests: ContentSpec rendered and persisted through mfile-fs

use std::fs;
use std::path::Path;

use mfile_content::{Content, ContentSpec, Format, Pattern, PatternLocation};
use mfile_fs::{apply, Outcome};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tempfile::TempDir;

fn pattern_spec(
    path: &Path,
    content: &str,
    pattern: &str,
    location: PatternLocation,
) -> ContentSpec {
    ContentSpec::new(
        path,
        Some(Content::from(content)),
        None,
        Some(Pattern::from(pattern)),
        Some(location),
    )
    .unwrap()
}

#[test]
fn test_json_file_end_to_end() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("test.json");

    let spec = ContentSpec::for_path(&path, json!({"foo": "bar"})).unwrap();
    assert_eq!(apply(&path, &spec).unwrap(), Outcome::Written);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "{\n  \"foo\": \"bar\"\n}\n"
    );

    // The written file parses back to the same value.
    let parsed: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed, json!({"foo": "bar"}));
}

#[test]
fn test_yaml_file_end_to_end() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("test.yaml");

    let spec = ContentSpec::for_path(&path, json!({"foo": "bar"})).unwrap();
    assert_eq!(apply(&path, &spec).unwrap(), Outcome::Written);
    assert_eq!(fs::read_to_string(&path).unwrap(), "---\nfoo: bar\n");

    let parsed: Value = serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed, json!({"foo": "bar"}));
}

#[test]
fn test_text_file_end_to_end() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("motd");

    let spec = ContentSpec::for_path(&path, "welcome\n").unwrap();
    assert_eq!(spec.format(), Format::Text);
    assert_eq!(apply(&path, &spec).unwrap(), Outcome::Written);
    assert_eq!(fs::read_to_string(&path).unwrap(), "welcome\n");
}

#[test]
fn test_replace_end_to_end() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("sample.conf");
    fs::write(&path, "this is\na test\n").unwrap();

    let spec = pattern_spec(&path, "this is not\n", "^this is$", PatternLocation::Replace);
    assert_eq!(apply(&path, &spec).unwrap(), Outcome::Written);
    assert_eq!(fs::read_to_string(&path).unwrap(), "this is not\na test\n");
}

#[test]
fn test_replace_or_add_appends_end_to_end() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("sample.conf");
    fs::write(&path, "this is\na test\n").unwrap();

    let spec = pattern_spec(
        &path,
        "this is not\n",
        "^this was$",
        PatternLocation::ReplaceOrAdd,
    );
    assert_eq!(apply(&path, &spec).unwrap(), Outcome::Written);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "this is\na test\nthis is not\n"
    );
}

#[test]
fn test_before_end_to_end_with_rerun() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("sample.conf");
    fs::write(&path, "this is\na test\n").unwrap();

    let spec = pattern_spec(&path, "probably\n", "^a test$", PatternLocation::Before);
    assert_eq!(apply(&path, &spec).unwrap(), Outcome::Written);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "this is\nprobably\na test\n"
    );

    // Second run is a no-op: no write, identical content.
    let rerun = pattern_spec(&path, "probably\n", "^a test$", PatternLocation::Before);
    assert_eq!(apply(&path, &rerun).unwrap(), Outcome::Unchanged);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "this is\nprobably\na test\n"
    );
}

#[test]
fn test_after_end_to_end_with_rerun() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("sample.conf");
    fs::write(&path, "this is\na test\n").unwrap();

    let spec = pattern_spec(&path, "probably\n", "^a test$", PatternLocation::After);
    assert_eq!(apply(&path, &spec).unwrap(), Outcome::Written);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "this is\na test\nprobably\n"
    );

    let rerun = pattern_spec(&path, "probably\n", "^a test$", PatternLocation::After);
    assert_eq!(apply(&path, &rerun).unwrap(), Outcome::Unchanged);
}

#[test]
fn test_compiled_pattern_end_to_end() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("hosts");
    fs::write(&path, "127.0.0.1 old\n::1 localhost\n").unwrap();

    let spec = ContentSpec::new(
        &path,
        Some(Content::from("127.0.0.1 new\n")),
        None,
        Some(Pattern::from(
            regex::Regex::new("(?m)^127\\.0\\.0\\.1 .*\n").unwrap(),
        )),
        Some(PatternLocation::Replace),
    )
    .unwrap();

    assert_eq!(apply(&path, &spec).unwrap(), Outcome::Written);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "127.0.0.1 new\n::1 localhost\n"
    );
}
