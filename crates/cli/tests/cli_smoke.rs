use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

fn docs_fixture() -> tempfile::TempDir {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("a.md"), b"# First").unwrap();
    fs::write(temp.path().join("b.txt"), b"plain").unwrap();
    fs::create_dir(temp.path().join("sub")).unwrap();
    fs::write(temp.path().join("sub").join("index.md"), b"# Sub Index").unwrap();
    temp
}

fn docshelf() -> Command {
    Command::cargo_bin("docshelf").unwrap()
}

#[test]
fn tree_prints_ordered_json() {
    let docs = docs_fixture();
    let assert = docshelf()
        .args(["tree", docs.path().to_str().unwrap()])
        .assert()
        .success();

    let tree: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let names: Vec<&str> = tree
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["sub", "a.md", "b.txt"]);
}

#[test]
fn tree_honors_the_docs_dir_env_var() {
    let docs = docs_fixture();
    docshelf()
        .arg("tree")
        .env("DOCSHELF_DOCS_DIR", docs.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("sub/index.md"));
}

#[test]
fn tree_fails_cleanly_on_a_missing_directory() {
    docshelf()
        .args(["tree", "/definitely/not/here"])
        .env_remove("DOCSHELF_DOCS_DIR")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn cat_applies_the_index_fallback() {
    let docs = docs_fixture();
    docshelf()
        .args(["cat", "sub", "--docs-dir", docs.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout("# Sub Index");
}

#[test]
fn cat_reports_missing_documents() {
    let docs = docs_fixture();
    docshelf()
        .args([
            "cat",
            "missing.md",
            "--docs-dir",
            docs.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("document not found"));
}

#[test]
fn render_emits_html() {
    let docs = docs_fixture();
    docshelf()
        .args([
            "render",
            "a.md",
            "--docs-dir",
            docs.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>First</h1>"));
}

#[test]
fn render_without_a_path_picks_the_first_document() {
    let docs = docs_fixture();
    // The sub directory sorts first, so its index leads the tree.
    docshelf()
        .args(["render", "--docs-dir", docs.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>Sub Index</h1>"));
}

#[test]
fn render_on_an_empty_tree_fails_with_a_clear_message() {
    let docs = tempdir().unwrap();
    docshelf()
        .args(["render", "--docs-dir", docs.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("documentation tree is empty"));
}
