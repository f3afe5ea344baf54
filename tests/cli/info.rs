//! Tests for `cellar info` and `cellar backup`.

use crate::support::*;

#[test]
fn test_info_shows_workspace_details() {
    let t = Test::with_files(&[("a.txt", "aaaa"), ("b.txt", "bb")]);

    let output = t.info();

    assert_success(&output);
    assert_stdout_contains(&output, "Workspace");
    assert_stdout_contains(&output, t.root().to_str().unwrap());
    assert_stdout_contains(&output, "2 files");
    assert_stdout_contains(&output, "6 B");
}

#[test]
fn test_backup_writes_copy_next_to_store() {
    let t = Test::with_files(&[("a.txt", "a")]);
    let original = t.store_contents();

    let output = t.backup();

    assert_success(&output);
    assert_stdout_contains(&output, "backed up store to");
    let backups: Vec<_> = std::fs::read_dir(t.store_dir())
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.to_string_lossy().contains(".backup."))
        .collect();
    assert_eq!(backups.len(), 1);
    assert_eq!(std::fs::read_to_string(&backups[0]).unwrap(), original);
}
