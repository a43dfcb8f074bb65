// Unit tests for wordlist loading

use super::*;
use pretty_assertions::assert_eq;
use std::io::Write;

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn loads_candidates_in_file_order() {
    let file = write_temp("admin\nroot\nguest\n");
    let candidates = load(file.path()).unwrap();
    assert_eq!(candidates, vec!["admin", "root", "guest"]);
}

#[test]
fn trims_whitespace_and_skips_blank_lines() {
    let file = write_temp("  admin  \n\n   \n\troot\n");
    let candidates = load(file.path()).unwrap();
    assert_eq!(candidates, vec!["admin", "root"]);
}

#[test]
fn blank_only_file_yields_empty_list() {
    let file = write_temp("\n   \n\t\n");
    let candidates = load(file.path()).unwrap();
    assert!(candidates.is_empty());
}

#[test]
fn empty_file_yields_empty_list() {
    let file = write_temp("");
    let candidates = load(file.path()).unwrap();
    assert!(candidates.is_empty());
}

#[test]
fn missing_file_is_a_configuration_error() {
    let err = load(std::path::Path::new("/nonexistent/users.txt")).unwrap_err();
    assert!(format!("{:#}", err).contains("Configuration error"));
}

#[test]
fn duplicate_candidates_are_preserved() {
    // Only blank lines are dropped; repeated entries stay in order
    let file = write_temp("admin\nadmin\n");
    let candidates = load(file.path()).unwrap();
    assert_eq!(candidates, vec!["admin", "admin"]);
}
