//! Derivation of a chart for one layout from a chart authored for another.
//!
//! Both functions are pure: the same source and target always give the same
//! grid, which is what lets a derived grid be cached and thrown away freely.

use tracing::debug;

use crate::chart::Layout;
use crate::notes::{NoteData, fix_impossible_rows};

/// Derive the notes of a `to_layout` chart from `source`, then drop the
/// placements that layout cannot play.
pub fn resolve(source: &NoteData, to_layout: Layout) -> NoteData {
    let mut notes = remap_tracks(source, to_layout.num_tracks());
    fix_impossible_rows(&mut notes, to_layout);
    notes
}

/// Remap `source` onto `to_tracks` tracks.
///
/// Reducing: destination track `d` collects source tracks `d`, `d + to`,
/// `d + 2*to`, ... and each of the `from % to` trailing source tracks `x`
/// lands on `(x * from) % to`. Only empty destination cells are filled, so
/// lower source tracks win collisions.
///
/// Expanding or keeping the width: sliding window transform.
pub fn remap_tracks(source: &NoteData, to_tracks: usize) -> NoteData {
    let from_tracks = source.num_tracks();

    let mut notes = NoteData::new(from_tracks);
    if let Some(last_row) = source.last_row() {
        notes.copy_range(source, 0, last_row, 0);
    }

    if to_tracks > 0 && from_tracks > to_tracks {
        let overlap = from_tracks / to_tracks;
        let remainder = from_tracks % to_tracks;
        debug!(
            "Reducing {} tracks to {} (overlap {}, remainder {})",
            from_tracks, to_tracks, overlap, remainder
        );

        for dest in 0..to_tracks {
            for k in 0..overlap {
                notes.merge_track_from(source, dest + k * to_tracks, dest);
            }
        }
        for extra in (from_tracks - remainder)..from_tracks {
            notes.merge_track_from(source, extra, (extra * from_tracks) % to_tracks);
        }
    } else {
        debug!("Expanding {} tracks to {}", from_tracks, to_tracks);
        notes.load_transformed_sliding_window(source, to_tracks);
    }

    notes.set_num_tracks(to_tracks);
    notes
}
