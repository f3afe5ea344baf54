//! Test fixtures and constants.

/// Passphrase every test command runs with.
pub const PASSPHRASE: &str = "correct horse battery staple";

/// A different passphrase for negative tests.
pub const WRONG_PASSPHRASE: &str = "tr0ub4dor&3";

/// scrypt work factor that keeps tests fast.
pub const TEST_WORK_FACTOR: &str = "2";

/// Files used across multiple tests.
pub const STANDARD_FILES: &[(&str, &str)] = &[
    ("notes/todo.txt", "buy milk\n"),
    ("reports/report-q1.txt", "revenue up\n"),
    ("reports/report-q2.txt", "revenue down\n"),
    (".bashrc", "export EDITOR=vim\n"),
];
