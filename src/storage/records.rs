//! Mapping between game records and store keys.

use crate::domain::{MatchHistory, ScoreTally};
use super::{Store, StoreResult};

pub const X_WINS_KEY: &str = "ttt_x_wins";
pub const O_WINS_KEY: &str = "ttt_o_wins";
pub const DRAWS_KEY: &str = "ttt_draws";
pub const GAMES_KEY: &str = "ttt_games";
pub const HISTORY_KEY: &str = "ttt_leaderboard";

/// Every key this game writes
pub const ALL_KEYS: [&str; 5] = [X_WINS_KEY, O_WINS_KEY, DRAWS_KEY, GAMES_KEY, HISTORY_KEY];

/// Absent or unparsable counters read as zero
fn load_counter(store: &dyn Store, key: &str) -> StoreResult<u32> {
    let value = store.get(key)?;
    Ok(value
        .and_then(|text| text.trim().parse().ok())
        .unwrap_or(0))
}

pub fn load_tally(store: &dyn Store) -> StoreResult<ScoreTally> {
    Ok(ScoreTally {
        x_wins: load_counter(store, X_WINS_KEY)?,
        o_wins: load_counter(store, O_WINS_KEY)?,
        draws: load_counter(store, DRAWS_KEY)?,
        games_played: load_counter(store, GAMES_KEY)?,
    })
}

pub fn save_tally(store: &mut dyn Store, tally: &ScoreTally) -> StoreResult<()> {
    let counters = [
        (X_WINS_KEY, tally.x_wins),
        (O_WINS_KEY, tally.o_wins),
        (DRAWS_KEY, tally.draws),
        (GAMES_KEY, tally.games_played),
    ];
    counters
        .iter()
        .try_for_each(|(key, value)| store.set(key, &value.to_string()))
}

/// Absent history is empty; malformed history is logged and treated as empty
pub fn load_history(store: &dyn Store) -> StoreResult<MatchHistory> {
    let Some(text) = store.get(HISTORY_KEY)? else {
        return Ok(MatchHistory::new());
    };
    match serde_json::from_str(&text) {
        Ok(history) => Ok(history),
        Err(err) => {
            log::warn!("Ignoring unreadable match history: {}", err);
            Ok(MatchHistory::new())
        }
    }
}

pub fn save_history(store: &mut dyn Store, history: &MatchHistory) -> StoreResult<()> {
    let json = serde_json::to_string(history)?;
    store.set(HISTORY_KEY, &json)
}

/// Remove all tallies and the history log
pub fn clear(store: &mut dyn Store) -> StoreResult<()> {
    ALL_KEYS.iter().try_for_each(|key| store.remove(key))
}
