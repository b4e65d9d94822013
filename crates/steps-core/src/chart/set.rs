use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::autogen;
use crate::chart::types::NoteStorage;
use crate::chart::{Chart, Layout};
use crate::config::ChartConfig;
use crate::error::{Error, Result};
use crate::notes::{NoteData, sm};
use crate::score::HighScore;

/// Handle to a chart inside a [`ChartSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChartId(usize);

impl std::fmt::Display for ChartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "chart #{}", self.0)
    }
}

/// All charts of one song.
///
/// Autogen charts refer to their source by [`ChartId`]. Anything that can
/// change a chart goes through [`ChartSet::chart_mut`], which first turns an
/// autogen chart into a normal one holding a copy of the derived notes and of
/// the source's metadata.
#[derive(Debug, Default)]
pub struct ChartSet {
    charts: Vec<Option<Chart>>,
    config: ChartConfig,
}

impl ChartSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ChartConfig) -> Self {
        Self {
            charts: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.charts.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a chart. Its ranking takes the configured capacity, or keeps
    /// room for the records it already holds.
    pub fn add(&mut self, mut chart: Chart) -> ChartId {
        chart
            .high_scores_mut()
            .set_capacity(self.config.ranking_lines);
        self.charts.push(Some(chart));
        ChartId(self.charts.len() - 1)
    }

    /// Add an empty chart for `layout`.
    pub fn create_blank(&mut self, layout: Layout) -> ChartId {
        self.add(Chart::blank(layout))
    }

    /// Add a chart for `layout` whose notes are derived from `source`.
    pub fn add_autogen(&mut self, source: ChartId, layout: Layout) -> Result<ChartId> {
        self.get(source).ok_or(Error::UnknownChart(source))?;
        Ok(self.add(Chart::autogen(source, layout)))
    }

    /// Turn an existing chart into one derived from `source`, dropping its
    /// own notes.
    pub fn autogen_from(&mut self, id: ChartId, source: ChartId, layout: Layout) -> Result<()> {
        self.get(source).ok_or(Error::UnknownChart(source))?;
        if self.derives_from(source, id) {
            return Err(Error::AutogenCycle {
                chart: id,
                source_chart: source,
            });
        }

        let chart = self.slot_mut(id)?;
        chart.set_layout(layout);
        chart.storage = NoteStorage::Autogen {
            source,
            derived: None,
        };
        self.invalidate_dependents(id);
        Ok(())
    }

    /// Drop the derived notes of every chart whose autogen chain passes
    /// through `id`.
    fn invalidate_dependents(&mut self, id: ChartId) {
        let dependents: Vec<ChartId> = self
            .ids()
            .filter(|&other| other != id && self.derives_from(other, id))
            .collect();
        for dependent in dependents {
            let Ok(chart) = self.slot_mut(dependent) else {
                continue;
            };
            if let NoteStorage::Autogen { derived, .. } = &mut chart.storage {
                if derived.take().is_some() {
                    debug!("Dropped derived notes of {} after {} changed", dependent, id);
                }
            }
        }
    }

    /// Whether `id` is `ancestor` or is derived from it, directly or not.
    fn derives_from(&self, id: ChartId, ancestor: ChartId) -> bool {
        let mut current = Some(id);
        while let Some(cur) = current {
            if cur == ancestor {
                return true;
            }
            current = self.get(cur).and_then(Chart::source);
        }
        false
    }

    pub fn get(&self, id: ChartId) -> Option<&Chart> {
        self.charts.get(id.0)?.as_ref()
    }

    fn slot_mut(&mut self, id: ChartId) -> Result<&mut Chart> {
        self.charts
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(Error::UnknownChart(id))
    }

    /// Mutable access to a chart. An autogen chart is detached first, and
    /// charts derived from it will derive their notes again.
    pub fn chart_mut(&mut self, id: ChartId) -> Result<&mut Chart> {
        self.detach(id)?;
        self.invalidate_dependents(id);
        self.slot_mut(id)
    }

    /// Remove a chart. Charts derived from it are detached first.
    pub fn remove(&mut self, id: ChartId) -> Option<Chart> {
        self.get(id)?;
        let dependents: Vec<ChartId> = self
            .iter()
            .filter(|(_, chart)| chart.source() == Some(id))
            .map(|(dependent, _)| dependent)
            .collect();
        for dependent in dependents {
            if let Err(e) = self.detach(dependent) {
                warn!("Failed to detach {} from {}: {}", dependent, id, e);
            }
        }
        self.charts.get_mut(id.0)?.take()
    }

    pub fn ids(&self) -> impl Iterator<Item = ChartId> + '_ {
        self.iter().map(|(id, _)| id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChartId, &Chart)> {
        self.charts
            .iter()
            .enumerate()
            .filter_map(|(index, chart)| chart.as_ref().map(|chart| (ChartId(index), chart)))
    }

    /// The chart whose metadata `id` reports: itself, or the end of its
    /// autogen chain.
    pub fn real(&self, id: ChartId) -> Option<&Chart> {
        let mut chart = self.get(id)?;
        while let Some(source) = chart.source() {
            chart = self.get(source)?;
        }
        Some(chart)
    }

    /// Copy of the notes of `id`, materializing (and caching) them first.
    pub fn notes(&mut self, id: ChartId) -> Result<NoteData> {
        self.decompress(id)?;
        Ok(self.slot_mut(id)?.notes())
    }

    /// Notes of `id` computed without touching any cache.
    pub fn effective_notes(&self, id: ChartId) -> Result<NoteData> {
        let chart = self.get(id).ok_or(Error::UnknownChart(id))?;
        let notes = match &chart.storage {
            NoteStorage::Empty => NoteData::new(chart.layout().num_tracks()),
            NoteStorage::Compressed(text) => chart.parse_or_empty(text),
            NoteStorage::Decompressed { notes, .. } => notes.clone(),
            NoteStorage::Autogen {
                derived: Some(notes),
                ..
            } => notes.clone(),
            NoteStorage::Autogen {
                source,
                derived: None,
            } => self.derive(*source, chart.layout()),
        };
        Ok(notes)
    }

    fn derive(&self, source: ChartId, layout: Layout) -> NoteData {
        match self.effective_notes(source) {
            Ok(notes) => autogen::resolve(&notes, layout),
            Err(e) => {
                warn!("Cannot derive {} notes: {}, using empty notes", layout, e);
                NoteData::new(layout.num_tracks())
            }
        }
    }

    /// Make the grid of `id` resident: parse its text form, or derive it from
    /// its source if autogen.
    pub fn decompress(&mut self, id: ChartId) -> Result<()> {
        let chart = self.get(id).ok_or(Error::UnknownChart(id))?;
        let pending = match chart.storage {
            NoteStorage::Autogen {
                source,
                derived: None,
            } => Some((source, chart.layout())),
            _ => None,
        };

        match pending {
            Some((source, layout)) => {
                let notes = self.derive(source, layout);
                debug!("Derived {} notes for {} from {}", layout, id, source);
                if let NoteStorage::Autogen { derived, .. } = &mut self.slot_mut(id)?.storage {
                    *derived = Some(notes);
                }
            }
            None => self.slot_mut(id)?.decompress(),
        }
        Ok(())
    }

    /// Free the grid of `id`, keeping only its text form.
    pub fn compress(&mut self, id: ChartId) -> Result<()> {
        self.slot_mut(id)?.compress();
        Ok(())
    }

    /// Text form of the notes of `id`. Autogen charts serialize their derived
    /// notes without keeping the text.
    pub fn sm_note_data(&mut self, id: ChartId) -> Result<String> {
        let chart = self.get(id).ok_or(Error::UnknownChart(id))?;
        if chart.is_autogen() {
            return Ok(sm::serialize(&self.effective_notes(id)?));
        }
        Ok(self.slot_mut(id)?.sm_note_data())
    }

    /// Turn an autogen chart into a normal one: keep the derived notes and
    /// copy the metadata of its real chart. No-op for other charts.
    pub fn detach(&mut self, id: ChartId) -> Result<()> {
        let chart = self.get(id).ok_or(Error::UnknownChart(id))?;
        let Some(source) = chart.source() else {
            return Ok(());
        };
        let notes = match &chart.storage {
            NoteStorage::Autogen {
                derived: Some(notes),
                ..
            } => notes.clone(),
            _ => self.derive(source, chart.layout()),
        };

        let mut detached = Chart::new(chart.layout());
        match self.real(source) {
            Some(real) => detached.copy_metadata_from(real),
            None => {
                warn!("Source {} of {} is missing, keeping own metadata", source, id);
                detached.copy_metadata_from(chart);
            }
        }

        let compress = self.config.compress_on_detach;
        let chart = self.slot_mut(id)?;
        chart.copy_metadata_from(&detached);
        chart.storage = NoteStorage::Decompressed {
            notes,
            compressed: None,
        };
        if compress {
            chart.compress();
        }
        debug!("Detached {} from {}", id, source);
        Ok(())
    }

    /// [`Chart::normalize`] on the chart's effective metadata. An autogen
    /// chart whose real chart needs no change stays attached.
    pub fn normalize(&mut self, id: ChartId) -> Result<()> {
        let chart = self.get(id).ok_or(Error::UnknownChart(id))?;
        if chart.is_autogen()
            && self
                .real(id)
                .is_some_and(|real| !real.needs_normalization())
        {
            return Ok(());
        }
        self.chart_mut(id)?.normalize();
        Ok(())
    }

    /// Add a copy of `source` reinterpreted for `layout`: tracks are cut off
    /// or padded, not remapped.
    pub fn copy_from(&mut self, source: ChartId, layout: Layout) -> Result<ChartId> {
        let mut notes = self.notes(source)?;
        notes.set_num_tracks(layout.num_tracks());

        let real = self.real(source).ok_or(Error::UnknownChart(source))?;
        let mut chart = Chart::new(layout);
        chart.copy_metadata_from(real);
        chart.set_description(format!("Copied from {}", real.description()));
        chart.set_notes(notes)?;

        Ok(self.add(chart))
    }

    /// Record a finished run on `id`. Returns the rank it entered at, if any.
    /// Rankings are not metadata, so an autogen chart stays attached.
    pub fn add_high_score(&mut self, id: ChartId, high_score: HighScore) -> Result<Option<usize>> {
        Ok(self.slot_mut(id)?.high_scores_mut().add(high_score))
    }

    /// Stable sort by difficulty, then meter, then radar sum, using the
    /// effective metadata. Unknown ids go last.
    pub fn sort_by_difficulty(&self, ids: &mut [ChartId]) {
        ids.sort_by(|a, b| match (self.real(*a), self.real(*b)) {
            (Some(a), Some(b)) => a
                .difficulty()
                .cmp(&b.difficulty())
                .then(a.meter().cmp(&b.meter()))
                .then(a.radar_values().sum().total_cmp(&b.radar_values().sum())),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
    }
}
