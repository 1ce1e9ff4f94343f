//! Default-rendition selection: commit to the one MP4 rendition with the
//! largest resolution not exceeding the target height, cheapest among ties.

use log::debug;

use crate::renditions::Rendition;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SelectError {
    /// The caller supplied an empty source list.
    EmptyCatalog,
}

impl std::fmt::Display for SelectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectError::EmptyCatalog => write!(f, "no renditions supplied to select from"),
        }
    }
}

impl std::error::Error for SelectError {}

/// Pick the default rendition out of `sources` for `target_height`.
///
/// Only MP4 renditions that carry a source locator and are not audio-only
/// (height >= 50) are considered. Among those at or under the target
/// height, the tallest wins; size (a bitrate proxy) breaks ties, smallest
/// first. When nothing qualifies the first supplied source is returned
/// as-is, so a caller always gets a member of its own list back.
///
/// The input is never mutated; filtering and sorting happen on a working
/// list of references.
pub fn select_default(sources: &[Rendition], target_height: u32) -> Result<&Rendition, SelectError> {
    let first = sources.first().ok_or(SelectError::EmptyCatalog)?;

    // only one passed in?
    if sources.len() == 1 {
        return Ok(first);
    }

    // drop non-MP4 files, descriptors without a locator, and audio-only tracks
    let mut working: Vec<&Rendition> = sources.iter().filter(|r| r.is_selectable()).collect();
    debug!(
        "{} of {} renditions remain after the MP4/audio-only filter",
        working.len(),
        sources.len()
    );

    // sort by size with smallest first (no bitrate is provided); the sort is
    // stable, so equal sizes keep their catalog order
    working.sort_by_key(|r| r.size);

    // keep what fits under the target
    working.retain(|r| r.height <= target_height);
    if working.is_empty() {
        debug!(
            "no rendition fits under {}px; falling back to the first supplied source",
            target_height
        );
        return Ok(first);
    }

    // cheapest entry at the tallest height that fits; the list is size-sorted,
    // so the first entry seen at any height is already its cheapest
    let mut pick = working[0];
    for &rendition in &working[1..] {
        if rendition.height > pick.height {
            pick = rendition;
        }
    }

    debug!(
        "selected {}p rendition of {} bytes from {} fitting candidates",
        pick.height,
        pick.size,
        working.len()
    );

    Ok(pick)
}
