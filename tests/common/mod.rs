use assert_cmd::Command;
use std::fs;
use std::path::Path;

#[allow(dead_code)]
pub const ZEBRA_APPLE: &str = r#"[
  {"id": 1, "title": "Zebra", "date": "2021-01-01", "author": "A", "contentHtml": "<p>z</p>"},
  {"id": 2, "title": "Apple", "date": "2021-02-01", "author": "B", "contentHtml": "<p>a</p>"}
]"#;

#[allow(dead_code)]
pub fn poststore_cmd() -> Command {
    let mut cmd = Command::cargo_bin("poststore").unwrap();
    cmd.env_remove("POSTSTORE_ROOT");
    cmd
}

/// Write `data/posts.json` under the given site root
pub fn write_posts(root: &Path, contents: &str) {
    let data_dir = root.join("data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(data_dir.join("posts.json"), contents).unwrap();
}
