use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::{Game, GameResult, MatchHistory, MatchRecord, Outcome, ScoreTally};
use crate::storage::{records, Store, StoreResult};

/// Clock used to stamp history records (milliseconds since the epoch)
pub type Clock = fn() -> u64;

/// Wall-clock time in milliseconds; 0 if the system clock is before 1970
pub fn system_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

/// GameSession orchestrates one player-facing session.
/// This is the application layer that ties the game rules to persistence.
///
/// Persistence is best-effort: store failures are logged and swallowed so
/// play never stalls on a bad disk.
pub struct GameSession<S: Store> {
    game: Game,
    tally: ScoreTally,
    history: MatchHistory,
    store: S,
    clock: Clock,
}

impl<S: Store> GameSession<S> {
    /// Open a session, loading tallies and history from `store`
    pub fn open(store: S) -> Self {
        Self::with_clock(store, system_clock)
    }

    /// Open a session with an explicit clock
    pub fn with_clock(store: S, clock: Clock) -> Self {
        let tally = records::load_tally(&store).unwrap_or_else(|err| {
            log::warn!("Could not load scores: {}", err);
            ScoreTally::default()
        });
        let history = records::load_history(&store).unwrap_or_else(|err| {
            log::warn!("Could not load match history: {}", err);
            MatchHistory::new()
        });
        log::info!(
            "Loaded scores: X {} / O {} / draws {} / games {} ({} history entries)",
            tally.x_wins,
            tally.o_wins,
            tally.draws,
            tally.games_played,
            history.len()
        );

        Self {
            game: Game::new(),
            tally,
            history,
            store,
            clock,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    pub fn history(&self) -> &MatchHistory {
        &self.history
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Place the current player's mark at `index`.
    /// Returns whether the move was accepted.
    pub fn apply_move(&mut self, index: usize) -> bool {
        let player = self.game.turn();
        let was_terminal = self.game.outcome().is_terminal();
        if !self.game.apply_move(index) {
            return false;
        }
        log::debug!("{} played cell {}", player.symbol(), index);

        if !was_terminal && self.game.outcome().is_terminal() {
            self.on_game_end();
        }
        true
    }

    /// Count the finished game and log it. Runs once per completed game.
    fn on_game_end(&mut self) {
        let outcome = self.game.outcome();
        let Some(result) = GameResult::from_outcome(outcome) else {
            return;
        };

        self.tally.record(outcome);
        self.history.push(MatchRecord {
            result,
            at: (self.clock)(),
        });

        match outcome {
            Outcome::Won(player) => log::info!("{} wins", player.symbol()),
            _ => log::info!("Game drawn"),
        }

        if let Err(err) = self.persist() {
            log::warn!("Could not save scores: {}", err);
        }
    }

    fn persist(&mut self) -> StoreResult<()> {
        records::save_tally(&mut self.store, &self.tally)?;
        records::save_history(&mut self.store, &self.history)
    }

    /// Clear the board for a fresh game. Scores are untouched.
    pub fn new_game(&mut self) {
        self.game.reset();
        log::debug!("New game");
    }

    /// Zero every tally and forget the history. The current game continues.
    pub fn reset_scores(&mut self) {
        self.tally.reset();
        self.history.clear();
        log::info!("Scores reset");

        if let Err(err) = records::clear(&mut self.store) {
            log::warn!("Could not clear saved scores: {}", err);
        }
    }
}
