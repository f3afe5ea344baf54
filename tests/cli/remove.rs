//! Tests for `cellar remove`.

use crate::support::*;

#[test]
fn test_remove_tracked_file() {
    let t = Test::with_files(&[("a.txt", "a"), ("b.txt", "b")]);

    let output = t.remove("a.txt");

    assert_success(&output);
    assert_stdout_contains(&output, "removed");
    let json = t.list_json();
    assert_eq!(json["count"], 1);
    assert!(json["files"][0]["path"].as_str().unwrap().ends_with("b.txt"));
}

#[test]
fn test_remove_leaves_local_file_alone() {
    let t = Test::with_files(&[("a.txt", "keep me")]);

    assert_success(&t.remove("a.txt"));

    assert_eq!(t.read("a.txt"), "keep me");
}

#[test]
fn test_remove_untracked_is_not_an_error() {
    let t = Test::with_files(&[("a.txt", "a")]);
    let before = t.store_contents();

    let output = t.remove("other.txt");

    assert_success(&output);
    assert_stdout_contains(&output, "is not tracked");
    assert_eq!(t.store_contents(), before);
}

#[test]
fn test_remove_alias() {
    let t = Test::with_files(&[("a.txt", "a")]);

    let output = t.cmd().args(["rm", "a.txt"]).output().unwrap();

    assert_success(&output);
    assert_eq!(t.list_json()["count"], 0);
}
