//! Integration test: `--output json` emits a singleton source array a
//! player host can swap in for its candidate list.

#[path = "common/mod.rs"]
mod common;

use mp4_fallback::renditions::Rendition;
use tempfile::TempDir;

#[test]
fn json_output_is_a_singleton_source_array() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let catalog = common::write_catalog(&tmp, "mediainfo.json", common::MIXED_CATALOG);

    let output = common::bin(&tmp)
        .arg(&catalog)
        .arg("--output")
        .arg("json")
        .output()?;
    assert!(output.status.success(), "selection run failed: {:?}", output);

    let sources: Vec<Rendition> = serde_json::from_slice(&output.stdout)?;
    assert_eq!(sources.len(), 1, "expected exactly one rendition");
    assert_eq!(sources[0].height, 360);
    assert_eq!(sources[0].size, 100);
    assert_eq!(sources[0].src.as_deref(), Some("http://cdn.example.com/v-360.mp4"));

    Ok(())
}

#[test]
fn json_output_round_trips_as_a_catalog() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let catalog = common::write_catalog(&tmp, "mediainfo.json", common::MIXED_CATALOG);

    let first = common::bin(&tmp)
        .arg(&catalog)
        .arg("--output")
        .arg("json")
        .output()?;
    assert!(first.status.success());

    // feed the singleton back in; a single-source catalog returns itself
    let singleton = common::write_catalog(&tmp, "singleton.json", &String::from_utf8(first.stdout)?);
    let second = common::bin(&tmp)
        .arg(&singleton)
        .arg("--output")
        .arg("json")
        .output()?;
    assert!(second.status.success());

    let sources: Vec<Rendition> = serde_json::from_slice(&second.stdout)?;
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].src.as_deref(), Some("http://cdn.example.com/v-360.mp4"));

    Ok(())
}
