use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn tagdex_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tagdex").unwrap();
    cmd.env_remove("TAGDEX_ROOT");
    cmd.env_remove("TAGDEX_CDN_NAME");
    cmd
}

/// Write a markdown content item with a YAML tags list.
#[allow(dead_code)]
pub fn write_item(site: &Path, name: &str, tags: &[&str]) {
    let tag_list = tags
        .iter()
        .map(|t| format!("{:?}", t))
        .collect::<Vec<_>>()
        .join(", ");
    fs::write(
        site.join("content").join(name),
        format!("---\ntags: [{}]\n---\nBody\n", tag_list),
    )
    .unwrap();
}
