//! Compressed text form of a note grid (the `#NOTES` body of a `.sm` file).
//!
//! Measures are separated by `,`. Each measure holds one line per row and one
//! character per track: `0` empty, `1` tap, `2` hold head, `3` hold release,
//! `M` mine. A measure may use any line count that divides
//! [`ROWS_PER_MEASURE`]. `//` comments and blank lines are ignored.

use thiserror::Error;

use crate::config::timing::{ROWS_PER_BEAT, ROWS_PER_MEASURE};
use crate::notes::{NoteData, TapNote};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("invalid character '{ch}' in measure {measure}, line {line}")]
    InvalidCharacter {
        measure: usize,
        line: usize,
        ch: char,
    },

    #[error("measure {measure}, line {line} has {actual} columns, expected {expected}")]
    WrongRowWidth {
        measure: usize,
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("measure {measure} has {lines} lines, which does not divide a measure evenly")]
    UnevenMeasure { measure: usize, lines: usize },

    #[error("hold release without a hold on track {track} at row {row}")]
    OrphanHoldRelease { track: usize, row: usize },

    #[error("hold on track {track} at row {row} is never released")]
    UnterminatedHold { track: usize, row: usize },
}

/// Serialize a grid. An empty grid gives one measure of empty rows.
pub fn serialize(notes: &NoteData) -> String {
    let num_tracks = notes.num_tracks();
    let num_measures = notes
        .last_row()
        .map_or(1, |last_row| last_row / ROWS_PER_MEASURE + 1);

    let mut cells = vec![vec!['0'; num_tracks]; num_measures * ROWS_PER_MEASURE];
    let mut releases = Vec::new();
    for (track, row, note) in notes.notes() {
        cells[row][track] = match note {
            TapNote::Tap => '1',
            TapNote::Mine => 'M',
            TapNote::Hold { .. } => {
                releases.push((track, note.end_row(row)));
                '2'
            }
        };
    }
    for (track, row) in releases {
        if cells[row][track] == '0' {
            cells[row][track] = '3';
        }
    }

    let empty_row = "0".repeat(num_tracks);
    let mut out = String::new();
    for (measure, rows) in cells.chunks(ROWS_PER_MEASURE).enumerate() {
        if measure > 0 {
            out.push_str(",\n");
        }
        let step = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.iter().any(|&c| c != '0'))
            .fold(ROWS_PER_BEAT, |step, (offset, _)| gcd(step, offset));

        for row in rows.iter().step_by(step) {
            if row.iter().all(|&c| c == '0') {
                out.push_str(&empty_row);
            } else {
                out.extend(row.iter());
            }
            out.push('\n');
        }
    }
    out
}

/// Parse the text form into a grid with `num_tracks` tracks.
pub fn parse(text: &str, num_tracks: usize) -> Result<NoteData, FormatError> {
    let mut notes = NoteData::new(num_tracks);
    let mut open_holds: Vec<Option<usize>> = vec![None; num_tracks];
    let text = text.trim().trim_end_matches(';');

    for (measure, body) in text.split(',').enumerate() {
        let lines: Vec<&str> = body
            .lines()
            .map(|line| strip_comment(line).trim())
            .filter(|line| !line.is_empty())
            .collect();
        if lines.is_empty() {
            continue;
        }
        if ROWS_PER_MEASURE % lines.len() != 0 {
            return Err(FormatError::UnevenMeasure {
                measure,
                lines: lines.len(),
            });
        }
        let rows_per_line = ROWS_PER_MEASURE / lines.len();

        for (line_index, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != num_tracks {
                return Err(FormatError::WrongRowWidth {
                    measure,
                    line: line_index,
                    expected: num_tracks,
                    actual: width,
                });
            }

            let row = measure * ROWS_PER_MEASURE + line_index * rows_per_line;
            for (track, ch) in line.chars().enumerate() {
                match ch {
                    '0' => {}
                    '1' => notes.set_tap_note(track, row, TapNote::Tap),
                    'M' | 'm' => notes.set_tap_note(track, row, TapNote::Mine),
                    '2' => {
                        if let Some(start) = open_holds[track] {
                            return Err(FormatError::UnterminatedHold { track, row: start });
                        }
                        open_holds[track] = Some(row);
                    }
                    '3' => {
                        let start = open_holds[track]
                            .take()
                            .ok_or(FormatError::OrphanHoldRelease { track, row })?;
                        let duration = row - start;
                        notes.set_tap_note(track, start, TapNote::Hold { duration });
                    }
                    _ => {
                        return Err(FormatError::InvalidCharacter {
                            measure,
                            line: line_index,
                            ch,
                        });
                    }
                }
            }
        }
    }

    if let Some((track, row)) = open_holds
        .iter()
        .enumerate()
        .find_map(|(track, start)| start.map(|row| (track, row)))
    {
        return Err(FormatError::UnterminatedHold { track, row });
    }

    Ok(notes)
}

fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(index) => &line[..index],
        None => line,
    }
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 { a } else { gcd(b, a % b) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NoteData {
        let mut notes = NoteData::new(4);
        notes.set_tap_note(0, 0, TapNote::Tap);
        notes.set_tap_note(1, 48, TapNote::Mine);
        notes.set_tap_note(2, 96, TapNote::Hold { duration: 144 });
        notes.set_tap_note(3, 200, TapNote::Tap);
        notes
    }

    #[test]
    fn test_serialize_empty() {
        let notes = NoteData::new(4);
        assert_eq!(serialize(&notes), "0000\n0000\n0000\n0000\n");
    }

    #[test]
    fn test_serialize_quarter_notes() {
        let mut notes = NoteData::new(4);
        notes.set_tap_note(0, 0, TapNote::Tap);
        notes.set_tap_note(3, 144, TapNote::Mine);
        assert_eq!(serialize(&notes), "1000\n0000\n0000\n000M\n");
    }

    #[test]
    fn test_serialize_uses_finer_lines_when_needed() {
        let mut notes = NoteData::new(4);
        notes.set_tap_note(1, 24, TapNote::Tap);
        let text = serialize(&notes);
        assert_eq!(text.lines().count(), 8);
        assert_eq!(text.lines().nth(1), Some("0100"));
    }

    #[test]
    fn test_serialize_hold_across_measures() {
        let mut notes = NoteData::new(4);
        notes.set_tap_note(2, 144, TapNote::Hold { duration: 96 });
        assert_eq!(
            serialize(&notes),
            "0000\n0000\n0000\n0020\n,\n0000\n0030\n0000\n0000\n"
        );
    }

    #[test]
    fn test_round_trip() {
        let notes = sample();
        let parsed = parse(&serialize(&notes), 4).unwrap();
        assert_eq!(parsed, notes);
    }

    #[test]
    fn test_parse_with_comments_and_terminator() {
        let text = "// measure 1\n1000\n0100 // jump soon\n0010\n0001\n,\n2000\n3000\n;";
        let notes = parse(text, 4).unwrap();
        assert_eq!(notes.tap_note(0, 0), Some(TapNote::Tap));
        assert_eq!(notes.tap_note(1, 48), Some(TapNote::Tap));
        assert_eq!(notes.tap_note(3, 144), Some(TapNote::Tap));
        assert_eq!(notes.tap_note(0, 192), Some(TapNote::Hold { duration: 96 }));
        assert_eq!(notes.num_notes(), 5);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse("", 4).unwrap().is_empty());
        assert_eq!(parse("", 6).unwrap().num_tracks(), 6);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse("10x0\n0000\n0000\n0000", 4),
            Err(FormatError::InvalidCharacter {
                measure: 0,
                line: 0,
                ch: 'x'
            })
        );
        assert!(matches!(
            parse("100\n000\n000\n000", 4),
            Err(FormatError::WrongRowWidth { actual: 3, .. })
        ));
        assert!(matches!(
            parse("1000\n0000\n0000\n0000\n0000", 4),
            Err(FormatError::UnevenMeasure { lines: 5, .. })
        ));
        assert!(matches!(
            parse("3000\n0000\n0000\n0000", 4),
            Err(FormatError::OrphanHoldRelease { track: 0, row: 0 })
        ));
        assert!(matches!(
            parse("0200\n0000\n0000\n0000", 4),
            Err(FormatError::UnterminatedHold { track: 1, row: 0 })
        ));
    }
}
