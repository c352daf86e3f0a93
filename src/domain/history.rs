use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::{Outcome, Player};

/// Maximum number of records kept in the history log
pub const HISTORY_CAPACITY: usize = 100;

/// Result of a finished game as stored in the history log
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum GameResult {
    #[serde(rename = "X")]
    XWins,
    #[serde(rename = "O")]
    OWins,
    #[serde(rename = "draw")]
    Draw,
}

impl GameResult {
    /// Map a terminal outcome; `None` while the game is still running
    pub fn from_outcome(outcome: Outcome) -> Option<Self> {
        match outcome {
            Outcome::InProgress => None,
            Outcome::Won(Player::X) => Some(GameResult::XWins),
            Outcome::Won(Player::O) => Some(GameResult::OWins),
            Outcome::Draw => Some(GameResult::Draw),
        }
    }

    /// One-character label for compact display
    pub const fn short(self) -> &'static str {
        match self {
            GameResult::XWins => "X",
            GameResult::OWins => "O",
            GameResult::Draw => "D",
        }
    }
}

/// One entry of the history log
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "winner")]
    pub result: GameResult,
    /// Milliseconds since the Unix epoch
    pub at: u64,
}

/// MatchHistory keeps the most recent finished games, oldest first.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(from = "Vec<MatchRecord>", into = "Vec<MatchRecord>")]
pub struct MatchHistory {
    records: VecDeque<MatchRecord>,
}

impl MatchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, dropping the oldest beyond capacity
    pub fn push(&mut self, record: MatchRecord) {
        self.records.push_back(record);
        while self.records.len() > HISTORY_CAPACITY {
            self.records.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Iterate oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &MatchRecord> {
        self.records.iter()
    }

    /// The newest `count` records, newest first
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &MatchRecord> {
        self.records.iter().rev().take(count)
    }
}

impl From<Vec<MatchRecord>> for MatchHistory {
    fn from(records: Vec<MatchRecord>) -> Self {
        let skip = records.len().saturating_sub(HISTORY_CAPACITY);
        Self {
            records: records.into_iter().skip(skip).collect(),
        }
    }
}

impl From<MatchHistory> for Vec<MatchRecord> {
    fn from(history: MatchHistory) -> Self {
        history.records.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(at: u64) -> MatchRecord {
        MatchRecord { result: GameResult::Draw, at }
    }

    #[test]
    fn test_push_caps_at_capacity() {
        let mut history = MatchHistory::new();
        for at in 0..HISTORY_CAPACITY as u64 {
            history.push(record(at));
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.iter().next().map(|r| r.at), Some(0));

        history.push(record(100));
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.iter().next().map(|r| r.at), Some(1));
        assert_eq!(history.iter().last().map(|r| r.at), Some(100));
    }

    #[test]
    fn test_recent_is_newest_first() {
        let mut history = MatchHistory::new();
        (0..5).for_each(|at| history.push(record(at)));
        let recent: Vec<u64> = history.recent(3).map(|r| r.at).collect();
        assert_eq!(recent, vec![4, 3, 2]);
    }

    #[test]
    fn test_json_shape() {
        let mut history = MatchHistory::new();
        history.push(MatchRecord { result: GameResult::XWins, at: 42 });
        history.push(MatchRecord { result: GameResult::Draw, at: 43 });
        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(json, r#"[{"winner":"X","at":42},{"winner":"draw","at":43}]"#);
    }

    #[test]
    fn test_oversized_input_keeps_newest() {
        let records: Vec<MatchRecord> = (0..150).map(record).collect();
        let history = MatchHistory::from(records);
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.iter().next().map(|r| r.at), Some(50));
    }

    #[test]
    fn test_from_outcome() {
        assert_eq!(GameResult::from_outcome(Outcome::InProgress), None);
        assert_eq!(GameResult::from_outcome(Outcome::Won(Player::O)), Some(GameResult::OWins));
    }
}
