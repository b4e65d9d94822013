use tracing::debug;

use crate::chart::Layout;
use crate::notes::NoteData;

/// Removes notes that cannot be played on `layout`.
///
/// 1. A note starting while a hold on the same track is still held (up to
///    and including its release row) is dropped.
/// 2. On each row, steps starting there plus holds still held from earlier
///    rows may not exceed [`Layout::max_notes_per_row`]; the starting steps
///    on the highest tracks are dropped first. Mines are left alone.
pub fn fix_impossible_rows(notes: &mut NoteData, layout: Layout) {
    let mut removed = 0usize;

    for track in 0..notes.num_tracks() {
        let mut hold_end: Option<usize> = None;
        let mut inside_holds = Vec::new();
        for (row, note) in notes.track(track) {
            if hold_end.is_some_and(|end| row <= end) {
                inside_holds.push(row);
                continue;
            }
            hold_end = note.is_hold().then(|| note.end_row(row));
        }
        for row in inside_holds {
            notes.remove_tap_note(track, row);
            removed += 1;
        }
    }

    let max_per_row = layout.max_notes_per_row();
    for row in notes.rows() {
        let held = (0..notes.num_tracks())
            .filter(|&track| notes.is_hold_active(track, row))
            .count();
        let mut starting: Vec<usize> = (0..notes.num_tracks())
            .filter(|&track| notes.tap_note(track, row).is_some_and(|note| note.is_step()))
            .collect();

        while held + starting.len() > max_per_row {
            let Some(track) = starting.pop() else {
                break;
            };
            notes.remove_tap_note(track, row);
            removed += 1;
        }
    }

    if removed > 0 {
        debug!("Removed {} impossible notes for {}", removed, layout);
    }
}
