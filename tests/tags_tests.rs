//! Integration tests for the tags command

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{tagdex_cmd, write_item};

#[test]
fn test_tags_no_tags_found() {
    let temp = TempDir::new().unwrap();

    tagdex_cmd().arg("init").arg(temp.path()).assert().success();

    tagdex_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tags found"));
}

#[test]
fn test_tags_lists_deduplicated_sorted_titles() {
    let temp = TempDir::new().unwrap();

    tagdex_cmd().arg("init").arg(temp.path()).assert().success();

    write_item(temp.path(), "a.md", &["Coffee", "coffee"]);
    write_item(temp.path(), "b.md", &["Tea", "post"]);

    let output = tagdex_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["Coffee", "Tea"]);
}

#[test]
fn test_tags_case_collision_first_sorted_title_wins() {
    let temp = TempDir::new().unwrap();

    tagdex_cmd().arg("init").arg(temp.path()).assert().success();

    write_item(temp.path(), "a.md", &["A11y"]);
    write_item(temp.path(), "b.md", &["a11y"]);
    write_item(temp.path(), "c.md", &["A11Y"]);

    let output = tagdex_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .arg("--slugs")
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["A11Y (a11y)"]);
}

#[test]
fn test_tags_shows_slug_for_non_latin_titles() {
    let temp = TempDir::new().unwrap();

    tagdex_cmd().arg("init").arg(temp.path()).assert().success();

    write_item(temp.path(), "a.md", &["日本語"]);

    tagdex_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .arg("--slugs")
        .assert()
        .success()
        .stdout(predicate::str::contains("日本語 (ri-ben-yu)"));
}

#[test]
fn test_tags_not_in_site_directory() {
    let temp = TempDir::new().unwrap();

    tagdex_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a tagdex site"));
}
