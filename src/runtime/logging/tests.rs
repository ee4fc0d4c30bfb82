use std::io::Write;

use super::*;

fn with_file(path: Option<std::path::PathBuf>) -> LogSettings {
    LogSettings {
        file: path,
        ..LogSettings::default()
    }
}

#[test]
fn no_log_file_without_a_path() {
    assert!(open_log_file(&with_file(None)).is_none());
}

#[test]
fn log_file_is_created_then_appended() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cadenza.log");

    let mut first = open_log_file(&with_file(Some(path.clone()))).unwrap();
    writeln!(first, "one").unwrap();
    drop(first);

    let mut second = open_log_file(&with_file(Some(path.clone()))).unwrap();
    writeln!(second, "two").unwrap();
    drop(second);

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\ntwo\n");
}

#[test]
fn unopenable_log_file_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be opened for appending.
    assert!(open_log_file(&with_file(Some(dir.path().to_path_buf()))).is_none());
}
