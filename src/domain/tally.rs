use super::{Outcome, Player};

/// Running win/draw counters across sessions.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ScoreTally {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
    pub games_played: u32,
}

impl ScoreTally {
    /// Count a finished game. In-progress outcomes are not counted.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::InProgress => return,
            Outcome::Won(Player::X) => self.x_wins += 1,
            Outcome::Won(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
        self.games_played += 1;
    }

    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
