//! Tests for `cellar list`.

use crate::support::*;

#[test]
fn test_list_empty() {
    let t = Test::init();

    let output = t.list();

    assert_success(&output);
    assert_stdout_contains(&output, "no files tracked");
}

#[test]
fn test_list_shows_tracked_files() {
    let t = Test::with_files(&[("a.txt", "a"), ("b.txt", "bb")]);

    let output = t.list();

    assert_success(&output);
    assert_stdout_contains(&output, "2 files");
    assert_stdout_contains(&output, "a.txt");
    assert_stdout_contains(&output, "b.txt");
}

#[test]
fn test_list_alias() {
    let t = Test::with_files(&[("a.txt", "a")]);

    let output = t.cmd().arg("ls").output().unwrap();

    assert_success(&output);
    assert_stdout_contains(&output, "a.txt");
}

#[test]
fn test_list_json_is_sorted_by_path() {
    let t = Test::with_files(&[("b.txt", "b"), ("a.txt", "a")]);

    let json = t.list_json();

    assert_eq!(json["count"], 2);
    let first = json["files"][0]["path"].as_str().unwrap();
    let second = json["files"][1]["path"].as_str().unwrap();
    assert!(first.ends_with("a.txt"));
    assert!(second.ends_with("b.txt"));
}

#[test]
fn test_list_does_not_need_passphrase() {
    let t = Test::with_files(&[("a.txt", "a")]);

    let output = t
        .cmd()
        .env_remove("CELLAR_PASSPHRASE")
        .arg("list")
        .output()
        .unwrap();

    assert_success(&output);
    assert_stdout_contains(&output, "a.txt");
}

#[cfg(unix)]
#[test]
fn test_list_json_records_mode() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::init();
    let path = t.write("script.sh", "#!/bin/sh\n");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o750)).unwrap();
    assert_success(&t.add("script.sh"));

    let json = t.list_json();

    assert_eq!(json["files"][0]["mode"], "750");
}
