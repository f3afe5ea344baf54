//! Tests for `cellar add`.

use crate::support::*;

#[test]
fn test_add_single_file() {
    let t = Test::init();
    t.write("notes.txt", "secret notes");

    let output = t.add("notes.txt");

    assert_success(&output);
    assert_stdout_contains(&output, "added");
    assert_stdout_contains(&output, "notes.txt");
}

#[test]
fn test_add_stores_ciphertext_only() {
    let t = Test::init();
    t.write("notes.txt", "plaintext-marker");

    assert_success(&t.add("notes.txt"));

    let contents = t.store_contents();
    assert!(contents.contains("BEGIN AGE ENCRYPTED FILE"));
    assert!(!contents.contains("plaintext-marker"));
}

#[test]
fn test_add_keys_entries_by_absolute_path() {
    let t = Test::init();
    t.write("notes.txt", "n");

    assert_success(&t.add("notes.txt"));

    let json = t.list_json();
    let path = json["files"][0]["path"].as_str().unwrap();
    assert_eq!(path, t.path("notes.txt").to_str().unwrap());
}

#[test]
fn test_add_same_file_twice_keeps_one_entry() {
    let t = Test::init();
    t.write("notes.txt", "first");
    assert_success(&t.add("notes.txt"));
    t.write("notes.txt", "second version");

    assert_success(&t.add("notes.txt"));

    let json = t.list_json();
    assert_eq!(json["count"], 1);
    assert_eq!(json["files"][0]["size"], 14);
}

#[test]
fn test_add_missing_file_fails() {
    let t = Test::init();

    let output = t.add("missing.txt");

    assert_failure(&output);
    assert_stderr_contains(&output, "file not found");
}

#[test]
fn test_add_directory_after_confirmation() {
    let t = Test::init();
    for (name, contents) in STANDARD_FILES {
        t.write(name, contents);
    }

    let output = t.add_answering("reports", "yes");

    assert_success(&output);
    assert_stdout_contains(&output, "about to add the following files:");
    assert_stdout_contains(&output, "report-q1.txt");
    assert_stdout_contains(&output, "added 2 files");
    assert_eq!(t.list_json()["count"], 2);
}

#[test]
fn test_add_directory_declined() {
    let t = Test::init();
    for (name, contents) in STANDARD_FILES {
        t.write(name, contents);
    }

    let output = t.add_answering(".", "no");

    assert_aborted(&output);
    assert_eq!(t.list_json()["count"], 0);
}

#[test]
fn test_add_directory_requires_exact_yes() {
    let t = Test::init();
    t.write("dir/a.txt", "a");

    let output = t.add_answering("dir", "y");

    assert_failure(&output);
    assert_eq!(t.list_json()["count"], 0);
}

#[test]
fn test_add_directory_with_yes_flag() {
    let t = Test::init();
    t.write("dir/a.txt", "a");
    t.write("dir/nested/b.txt", "b");

    let output = t.cmd().args(["--yes", "add", "dir"]).output().unwrap();

    assert_success(&output);
    assert_stdout_contains(&output, "added 2 files");
}

#[test]
fn test_add_empty_directory_does_not_prompt() {
    let t = Test::init();
    std::fs::create_dir(t.path("empty")).unwrap();

    let output = t.add("empty");

    assert_success(&output);
    assert_stdout_contains(&output, "no files to add");
    assert_stdout_excludes(&output, "about to");
}

#[test]
fn test_add_directory_containing_store() {
    let t = Test::new();
    let store_dir = t.path("state");
    let init = t
        .cmd()
        .env("CELLAR_STORE_DIR", &store_dir)
        .arg("init")
        .output()
        .unwrap();
    assert_success(&init);
    t.write("state/notes.txt", "n");
    t.write("src/lib.rs", "// lib");

    let output = t
        .cmd()
        .env("CELLAR_STORE_DIR", &store_dir)
        .args(["--yes", "add", "."])
        .output()
        .unwrap();

    assert_success(&output);
    assert_stdout_contains(&output, "added 2 files");
    assert_stdout_contains(&output, "notes.txt");
    assert_stdout_excludes(&output, ".toml");
}
