use super::{Board, Outcome, Player};

/// Game is the tic-tac-toe state machine: board, turn and outcome.
///
/// The outcome moves from `InProgress` to a terminal value exactly once
/// and stays there until `reset`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Player,
    outcome: Outcome,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            outcome: Outcome::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose move is next (frozen once the game ends)
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Place the current player's mark at `index`.
    ///
    /// Ignored when the game is over, the index is off the board, or the
    /// cell is taken. Returns whether the move was accepted.
    pub fn apply_move(&mut self, index: usize) -> bool {
        if self.outcome.is_terminal() {
            return false;
        }
        match self.board.get(index) {
            Some(cell) if cell.is_empty() => {}
            _ => return false,
        }

        self.board.set(index, self.turn.mark());
        self.outcome = Outcome::evaluate(&self.board);
        if !self.outcome.is_terminal() {
            self.turn = self.turn.other();
        }
        true
    }

    /// Start a new game: empty board, X to move
    pub fn reset(&mut self) {
        self.board.clear();
        self.turn = Player::X;
        self.outcome = Outcome::InProgress;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
