#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Mixed catalog: MP4s above and below 360p, a WEBM, an audio-only MP4,
/// and an MP4 with no src. Only the 360p/100B MP4 should win at 360p.
pub const MIXED_CATALOG: &str = r#"{
  "id": "ref:64872679001",
  "sources": [
    { "container": "MP4", "src": "http://cdn.example.com/v-720.mp4", "height": 720, "size": 50 },
    { "container": "MP4", "src": "http://cdn.example.com/v-360.mp4", "height": 360, "size": 100 },
    { "container": "WEBM", "src": "http://cdn.example.com/v-360.webm", "height": 360, "size": 10 },
    { "container": "MP4", "src": "http://cdn.example.com/audio.mp4", "height": 0, "size": 5 },
    { "container": "MP4", "height": 360, "size": 1 }
  ]
}"#;

/// Every rendition is taller than a 360p target.
pub const TALL_CATALOG: &str = r#"[
  { "container": "MP4", "src": "http://cdn.example.com/v-1080.mp4", "height": 1080, "size": 500 },
  { "container": "MP4", "src": "http://cdn.example.com/v-720.mp4", "height": 720, "size": 300 }
]"#;

pub const SINGLE_CATALOG: &str = r#"[
  { "container": "MP4", "src": "http://cdn.example.com/v-1080.mp4", "height": 1080, "size": 500 }
]"#;

pub fn write_catalog(tmp: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = tmp.path().join(name);
    let mut f = File::create(&path).expect("create catalog fixture");
    f.write_all(contents.as_bytes()).expect("write catalog fixture");
    path
}

/// Command for the binary with config lookup pinned to an empty temp HOME,
/// so a developer's own settings cannot leak into assertions.
pub fn bin(tmp: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mp4-fallback"));
    cmd.env_remove("MP4_FALLBACK_CONFIG");
    cmd.env_remove("XDG_CONFIG_HOME");
    cmd.env("HOME", tmp.path());
    cmd.current_dir(tmp.path());
    cmd
}
