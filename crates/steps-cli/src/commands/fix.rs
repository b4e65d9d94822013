//! Fix command implementation.

use std::path::Path;

use anyhow::Result;
use steps_core::notes::sm;
use steps_core::{Layout, fix_impossible_rows};
use tracing::info;

use super::read_notes;

/// Run the fix command
pub fn run(path: &Path, layout: Layout) -> Result<()> {
    let (_, mut notes) = read_notes(path, layout)?;
    let before = notes.num_notes();
    fix_impossible_rows(&mut notes, layout);

    info!("Removed {} notes for {}", before - notes.num_notes(), layout);
    println!("{}", sm::serialize(&notes));
    Ok(())
}
