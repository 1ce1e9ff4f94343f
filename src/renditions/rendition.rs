//! Rendition descriptors and their selection-relevant fields

use serde::{Deserialize, Serialize};

/// Renditions shorter than this are assumed to be audio-only tracks.
pub const MIN_VIDEO_HEIGHT: u32 = 50;

/// One candidate encoded variant of a media asset.
///
/// Catalog entries frequently carry extra metadata (codec, width, id, ...);
/// anything beyond the fields below is ignored on parse. Entries missing a
/// field get the type default so a malformed descriptor is dropped by the
/// selection filter instead of failing the whole catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendition {
    /// Wrapping media format (e.g. "MP4", "WEBM"), compared case-insensitively
    #[serde(default)]
    pub container: String,

    /// Playable resource locator; descriptors without one are not selectable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// Vertical resolution in pixels
    #[serde(default)]
    pub height: u32,

    /// Byte size, used as a bitrate proxy (no bitrate field exists upstream)
    #[serde(default)]
    pub size: u64,
}

impl Rendition {
    pub fn is_mp4(&self) -> bool {
        self.container.eq_ignore_ascii_case("MP4")
    }

    /// True when the descriptor can be committed to by a player: an MP4
    /// with a source locator that is not an audio-only track.
    pub fn is_selectable(&self) -> bool {
        self.is_mp4() && self.src.is_some() && self.height >= MIN_VIDEO_HEIGHT
    }
}
