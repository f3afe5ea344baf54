//! Tests for `cellar show`.

use crate::support::*;

#[test]
fn test_show_prints_decrypted_contents() {
    let t = Test::with_files(&[("notes.txt", "line one\nline two\n")]);

    let output = t.show("notes.txt");

    assert_success(&output);
    assert_eq!(stdout(&output), "line one\nline two\n");
}

#[test]
fn test_show_returns_content_at_add_time() {
    let t = Test::with_files(&[("notes.txt", "original")]);
    t.write("notes.txt", "edited later");

    let output = t.show("notes.txt");

    assert_eq!(stdout(&output), "original");
}

#[test]
fn test_show_untracked_fails() {
    let t = Test::init();

    let output = t.show("nope.txt");

    assert_failure(&output);
    assert_stderr_contains(&output, "file is not tracked");
}

#[test]
fn test_show_with_wrong_passphrase_fails() {
    let t = Test::with_files(&[("notes.txt", "secret")]);

    let output = t
        .cmd()
        .env("CELLAR_PASSPHRASE", WRONG_PASSPHRASE)
        .args(["show", "notes.txt"])
        .output()
        .unwrap();

    assert_failure(&output);
    assert_stdout_excludes(&output, "secret");
    assert_stderr_contains(&output, "passphrase");
}

#[test]
fn test_passphrase_from_piped_stdin() {
    let t = Test::with_files(&[("notes.txt", "secret")]);

    let output = t
        .cmd()
        .env_remove("CELLAR_PASSPHRASE")
        .args(["show", "notes.txt"])
        .write_stdin(format!("{}\n", PASSPHRASE))
        .output()
        .unwrap();

    assert_success(&output);
    assert_eq!(stdout(&output), "secret");
}
