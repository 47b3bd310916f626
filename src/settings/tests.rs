use super::*;

use std::io::Write;

use assert_matches::assert_matches;

use crate::error::Error;

#[test]
fn test_default() {
    let settings = Settings::default();
    assert_eq!(settings.output, "hashes.log");
    assert!(settings.ignore.is_empty());
    assert!(!settings.case_sensitive);
    assert_eq!(settings.concurrency, None);
    assert_eq!(settings.hash_limit, "1 KiB");
}

#[test]
fn test_load_without_file() {
    assert_eq!(Settings::load(None).unwrap(), Settings::default());
}

#[test]
fn test_load_overrides() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "ignore = [\"*.tmp\", \"*/.git/*\"]").unwrap();
    writeln!(file, "case-sensitive = true").unwrap();
    writeln!(file, "concurrency = 2").unwrap();
    file.flush().unwrap();

    let settings = Settings::load(Some(file.path())).unwrap();
    assert_eq!(settings.ignore, vec!["*.tmp".to_owned(), "*/.git/*".to_owned()]);
    assert!(settings.case_sensitive);
    assert_eq!(settings.concurrency, Some(2));
    assert_eq!(settings.output, "hashes.log");
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = Settings::load(Some(dir.path().join("missing.toml").as_path()));
    assert_matches!(result, Err(Error::Config(_)));
}
