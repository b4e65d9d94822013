use tracing::{debug, warn};

use crate::chart::{ChartId, Difficulty, Layout, RadarCategory, RadarValues};
use crate::error::{Error, Result};
use crate::notes::{NoteData, sm};
use crate::score::HighScoreList;

/// Where the notes of a chart currently live.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) enum NoteStorage {
    /// No note data at all.
    #[default]
    Empty,
    /// Only the text form is resident.
    Compressed(String),
    /// The grid is resident; `compressed` is a text form known to match it.
    Decompressed {
        notes: NoteData,
        compressed: Option<String>,
    },
    /// No data of its own: notes are derived from `source` on demand.
    Autogen {
        source: ChartId,
        derived: Option<NoteData>,
    },
}

/// One difficulty of a song for one layout.
///
/// Notes are kept in whichever form was last needed and converted lazily.
/// A chart inside a [`ChartSet`](crate::chart::ChartSet) can instead be
/// derived from another chart ("autogen"); such a chart is only reachable
/// through `&Chart` until it is detached.
#[derive(Debug)]
pub struct Chart {
    layout: Layout,
    difficulty: Difficulty,
    meter: i32,
    description: String,
    radar: RadarValues,
    pub(crate) storage: NoteStorage,
    high_scores: HighScoreList,
}

impl Chart {
    /// Chart with no note data and unset metadata.
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            difficulty: Difficulty::Invalid,
            meter: 0,
            description: String::new(),
            radar: RadarValues::default(),
            storage: NoteStorage::Empty,
            high_scores: HighScoreList::default(),
        }
    }

    /// Chart holding an empty grid of the right width.
    pub fn blank(layout: Layout) -> Self {
        let mut chart = Self::new(layout);
        chart.storage = NoteStorage::Decompressed {
            notes: NoteData::new(layout.num_tracks()),
            compressed: None,
        };
        chart
    }

    pub(crate) fn autogen(source: ChartId, layout: Layout) -> Self {
        let mut chart = Self::new(layout);
        chart.storage = NoteStorage::Autogen {
            source,
            derived: None,
        };
        chart
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub(crate) fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    /// Own difficulty. For an autogen chart the effective value is on
    /// [`ChartSet::real`](crate::chart::ChartSet::real).
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn meter(&self) -> i32 {
        self.meter
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn radar_values(&self) -> &RadarValues {
        &self.radar
    }

    pub fn radar_value(&self, category: RadarCategory) -> f32 {
        self.radar.get(category)
    }

    pub fn is_autogen(&self) -> bool {
        matches!(self.storage, NoteStorage::Autogen { .. })
    }

    /// Chart this one is derived from, if autogen.
    pub fn source(&self) -> Option<ChartId> {
        match self.storage {
            NoteStorage::Autogen { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Whether a grid (native or derived) is resident.
    pub fn is_decompressed(&self) -> bool {
        matches!(
            self.storage,
            NoteStorage::Decompressed { .. } | NoteStorage::Autogen { derived: Some(_), .. }
        )
    }

    /// Whether a text form is resident.
    pub fn is_compressed(&self) -> bool {
        matches!(
            self.storage,
            NoteStorage::Compressed(_) | NoteStorage::Decompressed { compressed: Some(_), .. }
        )
    }

    pub fn high_scores(&self) -> &HighScoreList {
        &self.high_scores
    }

    pub fn high_scores_mut(&mut self) -> &mut HighScoreList {
        &mut self.high_scores
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        debug_assert!(!self.is_autogen());
        self.description = description.into();
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        debug_assert!(!self.is_autogen());
        self.difficulty = difficulty;
    }

    pub fn set_meter(&mut self, meter: i32) {
        debug_assert!(!self.is_autogen());
        self.meter = meter;
    }

    pub fn set_radar_value(&mut self, category: RadarCategory, value: f32) -> Result<()> {
        debug_assert!(!self.is_autogen());
        if !self.radar.set(category, value) {
            return Err(Error::InvalidRadarValue { category, value });
        }
        Ok(())
    }

    pub(crate) fn copy_metadata_from(&mut self, other: &Chart) {
        self.difficulty = other.difficulty;
        self.meter = other.meter;
        self.description = other.description.clone();
        self.radar = other.radar;
    }

    /// Replace the notes. The grid must have exactly as many tracks as the
    /// layout, and no note may start inside a hold.
    pub fn set_notes(&mut self, notes: NoteData) -> Result<()> {
        let expected = self.layout.num_tracks();
        if notes.num_tracks() != expected {
            return Err(Error::TrackCountMismatch {
                expected,
                actual: notes.num_tracks(),
            });
        }
        if let Some((track, row)) = notes.find_hold_conflict() {
            return Err(Error::InvalidHold { track, row });
        }
        debug_assert!(!self.is_autogen());

        self.storage = NoteStorage::Decompressed {
            notes,
            compressed: None,
        };
        Ok(())
    }

    /// Replace the notes with their text form. The text is only parsed when
    /// the grid is next needed.
    pub fn set_sm_note_data(&mut self, text: impl Into<String>) {
        debug_assert!(!self.is_autogen());
        self.storage = NoteStorage::Compressed(text.into());
    }

    /// Text form of the notes; empty when there is no data.
    ///
    /// A resident grid without a text form is serialized and the text is
    /// kept for the next call.
    pub fn sm_note_data(&mut self) -> String {
        match &mut self.storage {
            NoteStorage::Empty => String::new(),
            NoteStorage::Compressed(text) => text.clone(),
            NoteStorage::Decompressed { notes, compressed } => compressed
                .get_or_insert_with(|| sm::serialize(notes))
                .clone(),
            NoteStorage::Autogen { derived, .. } => {
                derived.as_ref().map(sm::serialize).unwrap_or_default()
            }
        }
    }

    /// Copy of the notes, decompressing first. A chart without data gives an
    /// empty grid of the layout's width.
    pub fn notes(&mut self) -> NoteData {
        self.decompress();
        match &self.storage {
            NoteStorage::Decompressed { notes, .. } => notes.clone(),
            NoteStorage::Autogen {
                derived: Some(notes),
                ..
            } => notes.clone(),
            _ => NoteData::new(self.layout.num_tracks()),
        }
    }

    /// Make the grid resident. The text form stays cached.
    ///
    /// Autogen charts are derived by their [`ChartSet`](crate::chart::ChartSet).
    pub fn decompress(&mut self) {
        self.storage = match std::mem::take(&mut self.storage) {
            NoteStorage::Compressed(text) => {
                let notes = self.parse_or_empty(&text);
                debug!("Decompressed {} {} ({} notes)", self.layout, self.difficulty, notes.num_notes());
                NoteStorage::Decompressed {
                    notes,
                    compressed: Some(text),
                }
            }
            other => other,
        };
    }

    /// Keep only the text form, freeing the grid. Autogen charts drop their
    /// derived grid instead. Safe to call at any time.
    pub fn compress(&mut self) {
        self.storage = match std::mem::take(&mut self.storage) {
            NoteStorage::Decompressed { notes, compressed } => {
                NoteStorage::Compressed(compressed.unwrap_or_else(|| sm::serialize(&notes)))
            }
            NoteStorage::Autogen { source, .. } => NoteStorage::Autogen {
                source,
                derived: None,
            },
            other => other,
        };
    }

    /// Parse a text form for this chart's layout, falling back to an empty
    /// grid when the text is malformed.
    pub(crate) fn parse_or_empty(&self, text: &str) -> NoteData {
        let num_tracks = self.layout.num_tracks();
        sm::parse(text, num_tracks).unwrap_or_else(|e| {
            warn!(
                "Malformed note data for {} {}: {}, using empty notes",
                self.layout, self.difficulty, e
            );
            NoteData::new(num_tracks)
        })
    }

    pub fn needs_normalization(&self) -> bool {
        !self.difficulty.is_valid() || self.meter < 1 || self.description.is_empty()
    }

    /// Fill in unset difficulty, meter and description from each other.
    /// Applying it twice changes nothing more.
    pub fn normalize(&mut self) {
        if !self.difficulty.is_valid() {
            self.difficulty = Difficulty::from_name(&self.description);
        }
        if !self.difficulty.is_valid() {
            self.difficulty = Difficulty::from_meter(self.meter);
        }

        if self.meter < 1 {
            self.meter = self.difficulty.default_meter();
        }

        if self.description.is_empty() {
            self.description = self.difficulty.display_name().to_string();
        }
    }
}
