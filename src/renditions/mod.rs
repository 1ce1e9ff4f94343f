pub(crate) mod rendition;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub use rendition::{Rendition, MIN_VIDEO_HEIGHT};

/// Target quality presets and the display height each one caps at.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Deserialize)]
pub enum TargetQuality {
    /// 360p (SD), the classic default target for a fallback selection.
    #[value(name = "360p", alias = "sd", alias = "low")]
    #[serde(rename = "360p", alias = "sd", alias = "low")]
    P360,
    /// 480p (SD+).
    #[value(name = "480p", alias = "dvd", alias = "standard")]
    #[serde(rename = "480p", alias = "dvd", alias = "standard")]
    P480,
    /// 720p (HD).
    #[value(name = "720p", alias = "hd", alias = "hd-ready")]
    #[serde(rename = "720p", alias = "hd", alias = "hd-ready")]
    P720,
    /// 1080p (Full HD).
    #[value(name = "1080p", alias = "full-hd", alias = "fhd")]
    #[serde(rename = "1080p", alias = "full-hd", alias = "fhd")]
    P1080,
    /// 1440p (Quad HD).
    #[value(name = "1440p", alias = "qhd", alias = "2k")]
    #[serde(rename = "1440p", alias = "qhd", alias = "2k")]
    P1440,
    /// 2160p (Ultra HD / 4K).
    #[value(name = "2160p", alias = "uhd", alias = "4k")]
    #[serde(rename = "2160p", alias = "uhd", alias = "4k")]
    P2160,
}

impl TargetQuality {
    pub fn height(self) -> u32 {
        match self {
            TargetQuality::P360 => 360,
            TargetQuality::P480 => 480,
            TargetQuality::P720 => 720,
            TargetQuality::P1080 => 1080,
            TargetQuality::P1440 => 1440,
            TargetQuality::P2160 => 2160,
        }
    }
}

impl std::fmt::Display for TargetQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TargetQuality::P360 => "360p",
            TargetQuality::P480 => "480p",
            TargetQuality::P720 => "720p",
            TargetQuality::P1080 => "1080p",
            TargetQuality::P1440 => "1440p",
            TargetQuality::P2160 => "2160p",
        };
        write!(f, "{}", label)
    }
}

/// A catalog file is either a bare source array or a mediainfo-shaped
/// object carrying a `sources` array.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    MediaInfo { sources: Vec<Rendition> },
    Sources(Vec<Rendition>),
}

/// Read a rendition catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Vec<Rendition>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read rendition catalog at {}", path.display()))?;

    let parsed: CatalogFile = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse rendition catalog at {}", path.display()))?;

    Ok(match parsed {
        CatalogFile::MediaInfo { sources } => sources,
        CatalogFile::Sources(sources) => sources,
    })
}
