pub mod autogen;
pub mod fix;
pub mod info;
pub mod normalize;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use steps_core::notes::sm;
use steps_core::{Layout, NoteData};

/// Read a note data file, rejecting malformed text instead of falling back
/// to empty notes.
pub fn read_notes(path: &Path, layout: Layout) -> Result<(String, NoteData)> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let notes = sm::parse(&text, layout.num_tracks())
        .with_context(|| format!("{} is not valid {} note data", path.display(), layout))?;
    Ok((text, notes))
}
