mod cell;
mod board;
mod outcome;
mod game;
mod tally;
mod history;

pub use cell::{Cell, Player};
pub use board::{Board, CELL_COUNT, SIDE, WIN_LINES};
pub use outcome::Outcome;
pub use game::Game;
pub use tally::ScoreTally;
pub use history::{GameResult, MatchHistory, MatchRecord, HISTORY_CAPACITY};
