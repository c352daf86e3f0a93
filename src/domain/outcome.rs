use super::{Board, Player};

/// Outcome of the current game.
/// Only `InProgress` is non-terminal.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    Won(Player),
    Draw,
}

impl Outcome {
    /// Evaluate a board. A win is checked before a draw, so a full board
    /// with three in a row reports the win.
    pub fn evaluate(board: &Board) -> Self {
        if let Some((winner, _)) = board.winning_line() {
            Outcome::Won(winner)
        } else if board.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub const fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            _ => None,
        }
    }
}
