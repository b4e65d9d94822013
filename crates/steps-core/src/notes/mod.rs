//! Note grids and their text form.
//!
//! - `NoteData`, `TapNote` - the rows x tracks note grid
//! - `sm` - compressed text form of a grid
//! - `fix_impossible_rows` - cleanup after track remapping

mod fixer;
mod note_data;
pub mod sm;

pub use fixer::*;
pub use note_data::*;
pub use sm::FormatError;
