//! Autogen command implementation.

use std::path::Path;

use anyhow::Result;
use steps_core::{Chart, ChartConfig, ChartSet, Layout};
use tracing::info;

use super::read_notes;

/// Run the autogen command: print the notes derived for `to`.
pub fn run(path: &Path, from: Layout, to: Layout, config: ChartConfig) -> Result<()> {
    let (text, _) = read_notes(path, from)?;

    let mut set = ChartSet::with_config(config);
    let mut chart = Chart::new(from);
    chart.set_sm_note_data(text);
    let source = set.add(chart);
    let derived = set.add_autogen(source, to)?;

    let notes = set.notes(derived)?;
    info!(
        "Derived {} notes for {} from {}",
        notes.num_notes(),
        to,
        from
    );
    println!("{}", set.sm_note_data(derived)?);
    Ok(())
}
