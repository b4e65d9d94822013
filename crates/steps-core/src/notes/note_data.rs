use std::collections::{BTreeMap, BTreeSet};

use crate::config::autogen::SLIDING_WINDOW_MEASURES;
use crate::config::timing::ROWS_PER_MEASURE;

/// A single note event occupying one cell of a [`NoteData`] grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TapNote {
    Tap,
    /// Hold starting at this row and released `duration` rows later.
    Hold { duration: usize },
    Mine,
}

impl TapNote {
    pub fn is_hold(&self) -> bool {
        matches!(self, Self::Hold { .. })
    }

    /// Mines are avoided rather than stepped on.
    pub fn is_step(&self) -> bool {
        !matches!(self, Self::Mine)
    }

    /// Last row covered by this note when it starts at `row`.
    pub fn end_row(&self, row: usize) -> usize {
        match self {
            Self::Hold { duration } => row + duration,
            _ => row,
        }
    }
}

/// Note grid: `num_tracks` tracks, each a sparse row-indexed map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteData {
    tracks: Vec<BTreeMap<usize, TapNote>>,
}

impl NoteData {
    pub fn new(num_tracks: usize) -> Self {
        Self {
            tracks: vec![BTreeMap::new(); num_tracks],
        }
    }

    pub fn num_tracks(&self) -> usize {
        self.tracks.len()
    }

    /// Drops tracks past `num_tracks`, or appends empty ones.
    pub fn set_num_tracks(&mut self, num_tracks: usize) {
        self.tracks.resize_with(num_tracks, BTreeMap::new);
    }

    pub fn tap_note(&self, track: usize, row: usize) -> Option<TapNote> {
        self.tracks.get(track)?.get(&row).copied()
    }

    pub fn set_tap_note(&mut self, track: usize, row: usize, note: TapNote) {
        debug_assert!(track < self.num_tracks(), "track {} out of range", track);
        if let Some(notes) = self.tracks.get_mut(track) {
            notes.insert(row, note);
        }
    }

    pub fn remove_tap_note(&mut self, track: usize, row: usize) -> Option<TapNote> {
        self.tracks.get_mut(track)?.remove(&row)
    }

    pub fn clear_all(&mut self) {
        for notes in &mut self.tracks {
            notes.clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.iter().all(BTreeMap::is_empty)
    }

    pub fn num_notes(&self) -> usize {
        self.tracks.iter().map(BTreeMap::len).sum()
    }

    /// Last row touched by any note, hold releases included.
    pub fn last_row(&self) -> Option<usize> {
        self.notes().map(|(_, row, note)| note.end_row(row)).max()
    }

    /// Notes on one track in row order.
    pub fn track(&self, track: usize) -> impl Iterator<Item = (usize, TapNote)> + '_ {
        self.tracks
            .get(track)
            .into_iter()
            .flat_map(|notes| notes.iter().map(|(&row, &note)| (row, note)))
    }

    /// All notes as `(track, row, note)`, track by track.
    pub fn notes(&self) -> impl Iterator<Item = (usize, usize, TapNote)> + '_ {
        self.tracks.iter().enumerate().flat_map(|(track, notes)| {
            notes.iter().map(move |(&row, &note)| (track, row, note))
        })
    }

    /// Rows on which at least one note starts.
    pub fn rows(&self) -> BTreeSet<usize> {
        self.tracks
            .iter()
            .flat_map(|notes| notes.keys().copied())
            .collect()
    }

    /// Whether a hold on `track` that started before `row` is still held at `row`.
    pub fn is_hold_active(&self, track: usize, row: usize) -> bool {
        self.tracks
            .get(track)
            .and_then(|notes| notes.range(..row).next_back())
            .is_some_and(|(&start, note)| note.is_hold() && note.end_row(start) >= row)
    }

    /// Whether any hold is held from `row - 1` through `row`.
    pub fn hold_crosses(&self, row: usize) -> bool {
        (0..self.num_tracks()).any(|track| self.is_hold_active(track, row))
    }

    /// First note, as `(track, row)`, that no text form can hold: a hold of
    /// zero length, or a note starting while a hold on its track is still
    /// held (release row included).
    pub fn find_hold_conflict(&self) -> Option<(usize, usize)> {
        for (track, notes) in self.tracks.iter().enumerate() {
            let mut hold_end: Option<usize> = None;
            for (&row, note) in notes {
                if hold_end.is_some_and(|end| row <= end)
                    || matches!(note, TapNote::Hold { duration: 0 })
                {
                    return Some((track, row));
                }
                hold_end = note.is_hold().then(|| note.end_row(row));
            }
        }
        None
    }

    /// Copies rows `row_begin..=row_end` of `from` so that `row_begin` lands on
    /// `insert_at`, replacing whatever occupied the destination rows. Only the
    /// tracks both grids have are touched.
    pub fn copy_range(
        &mut self,
        from: &NoteData,
        row_begin: usize,
        row_end: usize,
        insert_at: usize,
    ) {
        if row_end < row_begin {
            return;
        }
        let dest_end = insert_at + (row_end - row_begin);

        for (dest, src) in self.tracks.iter_mut().zip(&from.tracks) {
            dest.retain(|&row, _| row < insert_at || row > dest_end);
            for (&row, &note) in src.range(row_begin..=row_end) {
                dest.insert(row - row_begin + insert_at, note);
            }
        }
    }

    /// Fills the empty cells of track `to` with the notes of track `from`.
    pub fn combine_tracks(&mut self, to: usize, from: usize) {
        if to == from || from >= self.num_tracks() {
            return;
        }
        let source = self.tracks[from].clone();
        self.fill_track(to, &source);
    }

    /// Fills the empty cells of track `dst_track` with the notes of
    /// `src_track` from another grid.
    pub fn merge_track_from(&mut self, from: &NoteData, src_track: usize, dst_track: usize) {
        if let Some(source) = from.tracks.get(src_track) {
            self.fill_track(dst_track, source);
        }
    }

    fn fill_track(&mut self, track: usize, source: &BTreeMap<usize, TapNote>) {
        if let Some(dest) = self.tracks.get_mut(track) {
            for (&row, &note) in source {
                dest.entry(row).or_insert(note);
            }
        }
    }

    /// Replaces this grid with `original` spread over `new_num_tracks` tracks.
    ///
    /// Every track moves by the same offset, wrapping around. The offset
    /// steps by one every [`SLIDING_WINDOW_MEASURES`] measures and bounces
    /// between 0 and the difference in track counts. It stays put at a
    /// boundary that a hold is crossing.
    pub fn load_transformed_sliding_window(&mut self, original: &NoteData, new_num_tracks: usize) {
        self.tracks = vec![BTreeMap::new(); new_num_tracks];
        if new_num_tracks == 0 {
            return;
        }
        let Some(last_row) = original.last_row() else {
            return;
        };

        let window_rows = ROWS_PER_MEASURE * SLIDING_WINDOW_MEASURES;
        let max_offset = new_num_tracks.abs_diff(original.num_tracks());
        let num_windows = last_row / window_rows + 1;

        let mut offsets = Vec::with_capacity(num_windows);
        let mut offset = 0usize;
        let mut increasing = true;
        offsets.push(offset);
        for window in 1..num_windows {
            if max_offset > 0 && !original.hold_crosses(window * window_rows) {
                if increasing {
                    offset += 1;
                } else {
                    offset -= 1;
                }
                if offset == 0 || offset == max_offset {
                    increasing = !increasing;
                }
            }
            offsets.push(offset);
        }

        for (track, row, note) in original.notes() {
            let new_track = (track + offsets[row / window_rows]) % new_num_tracks;
            self.tracks[new_track].entry(row).or_insert(note);
        }
    }
}
