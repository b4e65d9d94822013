//! Info command implementation.

use std::path::Path;

use anyhow::Result;
use serde_json::json;
use steps_core::Layout;
use steps_core::config::timing::ROWS_PER_MEASURE;

use super::read_notes;

/// Run the info command
pub fn run(path: &Path, layout: Layout, json: bool) -> Result<()> {
    let (_, notes) = read_notes(path, layout)?;

    let measures = notes
        .last_row()
        .map_or(0, |row| row / ROWS_PER_MEASURE + 1);
    let per_track: Vec<usize> = (0..notes.num_tracks())
        .map(|track| notes.track(track).count())
        .collect();
    let holds = notes.notes().filter(|(_, _, note)| note.is_hold()).count();

    if json {
        let info = json!({
            "layout": layout.name(),
            "tracks": notes.num_tracks(),
            "notes": notes.num_notes(),
            "holds": holds,
            "measures": measures,
            "notes_per_track": per_track,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Layout:   {} ({} tracks)", layout, notes.num_tracks());
    println!("Notes:    {} ({} holds)", notes.num_notes(), holds);
    println!("Measures: {}", measures);
    for (track, count) in per_track.iter().enumerate() {
        println!("  track {:>2}: {}", track, count);
    }
    Ok(())
}
