use serde::{Deserialize, Serialize};

use crate::config::ranking::NUM_RANKING_LINES;
use crate::score::Grade;

/// One finished run worth remembering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HighScore {
    pub name: String,
    pub grade: Grade,
    pub score: i32,
    pub percent_dp: f32,
}

impl HighScore {
    pub fn new(name: impl Into<String>, grade: Grade, score: i32, percent_dp: f32) -> Self {
        Self {
            name: name.into(),
            grade,
            score,
            percent_dp,
        }
    }

    /// Ranking order: only the score counts, and a tie goes to `self`.
    pub fn ranks_at_least(&self, other: &HighScore) -> bool {
        self.score >= other.score
    }
}

/// Best runs of a chart, highest score first, at most `capacity` long.
///
/// Entries only ever arrive through [`HighScoreList::add`]; nothing else
/// drops or reorders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHighScoreList")]
pub struct HighScoreList {
    scores: Vec<HighScore>,
    capacity: usize,
    num_times_played: u32,
}

#[derive(Deserialize)]
struct RawHighScoreList {
    scores: Vec<HighScore>,
    capacity: usize,
    num_times_played: u32,
}

impl TryFrom<RawHighScoreList> for HighScoreList {
    type Error = String;

    fn try_from(raw: RawHighScoreList) -> Result<Self, Self::Error> {
        if raw.scores.len() > raw.capacity {
            return Err(format!(
                "{} high scores exceed capacity {}",
                raw.scores.len(),
                raw.capacity
            ));
        }
        if raw
            .scores
            .windows(2)
            .any(|pair| pair[1].score > pair[0].score)
        {
            return Err("high scores are not ranked highest first".to_string());
        }
        Ok(Self {
            scores: raw.scores,
            capacity: raw.capacity,
            num_times_played: raw.num_times_played,
        })
    }
}

impl Default for HighScoreList {
    fn default() -> Self {
        Self::with_capacity(NUM_RANKING_LINES)
    }
}

impl HighScoreList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            scores: Vec::new(),
            capacity,
            num_times_played: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the capacity. It never drops below the entries already kept.
    pub(crate) fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(self.scores.len());
    }

    /// Insert before the first entry it ties or beats. Returns the 0-based
    /// rank, or `None` when the list is full of better scores.
    pub fn add(&mut self, high_score: HighScore) -> Option<usize> {
        let index = self
            .scores
            .iter()
            .position(|existing| high_score.ranks_at_least(existing))
            .unwrap_or(self.scores.len());

        if index >= self.capacity {
            return None;
        }

        self.scores.insert(index, high_score);
        self.scores.truncate(self.capacity);
        Some(index)
    }

    pub fn scores(&self) -> &[HighScore] {
        &self.scores
    }

    pub fn iter(&self) -> impl Iterator<Item = &HighScore> {
        self.scores.iter()
    }

    pub fn top(&self) -> Option<&HighScore> {
        self.scores.first()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn num_times_played(&self) -> u32 {
        self.num_times_played
    }

    pub fn record_play(&mut self) {
        self.num_times_played += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hs(name: &str, score: i32) -> HighScore {
        HighScore::new(name, Grade::B, score, 0.5)
    }

    fn scores(list: &HighScoreList) -> Vec<i32> {
        list.iter().map(|hs| hs.score).collect()
    }

    #[test]
    fn test_keeps_highest_in_order() {
        let mut list = HighScoreList::new();
        for score in [100, 200, 150, 50, 300, 250, 175] {
            list.add(hs("P1", score));
        }
        assert_eq!(scores(&list), vec![300, 250, 200, 175, 150]);
    }

    #[test]
    fn test_tie_goes_to_new_score() {
        let mut list = HighScoreList::new();
        for score in [100, 200, 150, 50, 300, 250, 175] {
            list.add(hs("OLD", score));
        }

        assert_eq!(list.add(hs("NEW", 150)), Some(4));
        assert_eq!(list.len(), 5);
        assert_eq!(list.scores()[4].name, "NEW");
        assert_eq!(list.scores()[4].score, 150);

        assert_eq!(list.add(hs("TOP", 300)), Some(0));
        assert_eq!(list.top().unwrap().name, "TOP");
        assert_eq!(list.scores()[1].name, "OLD");
    }

    #[test]
    fn test_reported_ranks() {
        let mut list = HighScoreList::with_capacity(3);
        assert_eq!(list.add(hs("A", 10)), Some(0));
        assert_eq!(list.add(hs("B", 30)), Some(0));
        assert_eq!(list.add(hs("C", 20)), Some(1));
        assert_eq!(list.add(hs("D", 5)), None);
        assert_eq!(list.add(hs("E", 10)), Some(2));
        assert_eq!(scores(&list), vec![30, 20, 10]);
        assert_eq!(list.scores()[2].name, "E");
    }

    #[test]
    fn test_not_full_accepts_lowest() {
        let mut list = HighScoreList::with_capacity(3);
        list.add(hs("A", 10));
        assert_eq!(list.add(hs("B", 1)), Some(1));
    }

    #[test]
    fn test_set_capacity_never_drops_scores() {
        let mut list = HighScoreList::new();
        for score in [1, 2, 3, 4] {
            list.add(hs("P1", score));
        }
        list.set_capacity(2);
        assert_eq!(list.capacity(), 4);
        assert_eq!(scores(&list), vec![4, 3, 2, 1]);
        assert_eq!(list.add(hs("P1", 0)), None);

        list.set_capacity(6);
        assert_eq!(list.add(hs("P1", 0)), Some(4));
    }

    #[test]
    fn test_deserialize_checks_ranking() {
        let mut list = HighScoreList::with_capacity(3);
        list.add(hs("A", 10));
        list.add(hs("B", 20));
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(serde_json::from_str::<HighScoreList>(&json).unwrap(), list);

        let too_long = r#"{"scores":[
            {"name":"A","grade":"B","score":3,"percent_dp":0.5},
            {"name":"B","grade":"B","score":2,"percent_dp":0.5}
        ],"capacity":1,"num_times_played":0}"#;
        assert!(serde_json::from_str::<HighScoreList>(too_long).is_err());

        let unsorted = r#"{"scores":[
            {"name":"A","grade":"B","score":1,"percent_dp":0.5},
            {"name":"B","grade":"B","score":2,"percent_dp":0.5}
        ],"capacity":5,"num_times_played":0}"#;
        assert!(serde_json::from_str::<HighScoreList>(unsorted).is_err());
    }

    #[test]
    fn test_record_play() {
        let mut list = HighScoreList::new();
        list.record_play();
        list.record_play();
        assert_eq!(list.num_times_played(), 2);
    }
}
